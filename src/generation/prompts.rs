//! Canned instructions sent to the chat-completion service.

use crate::domain::Platform;

const SHORT_FORM_SYSTEM: &str = "You are a social media expert specializing in Twitter content. Create engaging, concise tweets that maximize impact within character limits. Use appropriate hashtags and maintain a conversational tone.";

const PROFESSIONAL_SYSTEM: &str = "You are a professional content creator for LinkedIn. Create insightful, professional posts that add value to business conversations. Maintain a formal yet engaging tone.";

const NEWSLETTER_SYSTEM: &str = "You are an email newsletter specialist. Create compelling newsletter content with clear structure, engaging subject lines, and valuable insights for readers.";

const GENERIC_SYSTEM: &str = "Create engaging content for the specified platform.";

pub(crate) fn system_prompt(platform: Platform) -> &'static str {
    match platform {
        Platform::ShortForm => SHORT_FORM_SYSTEM,
        Platform::Professional => PROFESSIONAL_SYSTEM,
        Platform::Newsletter => NEWSLETTER_SYSTEM,
        Platform::Generic => GENERIC_SYSTEM,
    }
}

pub(crate) fn user_prompt(platform: Platform, content: &str, instructions: &str) -> String {
    format!(
        "Create optimized content for {} based on the following:\n\n\
         ORIGINAL CONTENT:\n{content}\n\n\
         ADDITIONAL INSTRUCTIONS:\n{instructions}\n\n\
         Return only the final optimized content without any explanations.",
        platform.prompt_name().to_uppercase()
    )
}
