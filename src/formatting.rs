//! Platform templating applied to generated text before display.

pub mod newsletter;
pub mod professional;
pub mod thread;

pub use newsletter::NewsletterFormatter;
pub use professional::LinkedInFormatter;
pub use thread::ThreadSplitter;
