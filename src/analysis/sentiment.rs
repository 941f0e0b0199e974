//! Polarity / subjectivity scoring and label classification.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::lexicon;
use crate::util::text::round_to;

/// Polarity strictly above this is positive, strictly below its negation is negative.
pub const POLARITY_THRESHOLD: f64 = 0.1;

static WORD_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("compile sentiment token regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classifies a polarity score. Both thresholds are exclusive.
    #[must_use]
    pub fn classify(polarity: f64) -> Self {
        if polarity > POLARITY_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

/// Raw scoring capability behind [`SentimentAnalyzer`].
///
/// Implementations must return polarity in `[-1, 1]` and subjectivity in `[0, 1]`.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> (f64, f64);
}

/// Averages lexicon hits with intensifier and negation handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    #[allow(clippy::cast_precision_loss)]
    fn score(&self, text: &str) -> (f64, f64) {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = WORD_TOKENS
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0_usize;

        for (index, token) in tokens.iter().enumerate() {
            let Some((mut polarity, mut subjectivity)) = lexicon::opinion(token) else {
                continue;
            };

            if let Some(factor) = index
                .checked_sub(1)
                .and_then(|prev| lexicon::intensity(tokens[prev]))
            {
                polarity *= factor;
                subjectivity *= factor;
            }

            let window_start = index.saturating_sub(lexicon::NEGATION_WINDOW);
            if tokens[window_start..index]
                .iter()
                .any(|word| lexicon::is_negation(word))
            {
                polarity *= lexicon::NEGATION_FACTOR;
            }

            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity.clamp(0.0, 1.0);
            hits += 1;
        }

        if hits == 0 {
            return (0.0, 0.0);
        }

        let count = hits as f64;
        (
            (polarity_sum / count).clamp(-1.0, 1.0),
            (subjectivity_sum / count).clamp(0.0, 1.0),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer<S = LexiconScorer> {
    scorer: S,
}

impl<S: SentimentScorer> SentimentAnalyzer<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Scores the text and rounds both values to three decimals.
    ///
    /// The label is classified from the unrounded polarity.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let (polarity, subjectivity) = self.scorer.score(text);
        AnalysisResult {
            polarity: round_to(polarity, 3),
            subjectivity: round_to(subjectivity, 3),
            label: SentimentLabel::classify(polarity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FixedScorer(f64, f64);

    impl SentimentScorer for FixedScorer {
        fn score(&self, _text: &str) -> (f64, f64) {
            (self.0, self.1)
        }
    }

    #[rstest]
    #[case(0.11, SentimentLabel::Positive)]
    #[case(0.1, SentimentLabel::Neutral)]
    #[case(0.0, SentimentLabel::Neutral)]
    #[case(-0.1, SentimentLabel::Neutral)]
    #[case(-0.1001, SentimentLabel::Negative)]
    #[case(1.0, SentimentLabel::Positive)]
    #[case(-1.0, SentimentLabel::Negative)]
    fn classification_boundaries_are_exclusive(
        #[case] polarity: f64,
        #[case] expected: SentimentLabel,
    ) {
        assert_eq!(SentimentLabel::classify(polarity), expected);
    }

    #[test]
    fn analyzer_rounds_to_three_decimals() {
        let analyzer = SentimentAnalyzer::new(FixedScorer(0.123_456, 0.987_654));
        let result = analyzer.analyze("anything");
        assert!((result.polarity - 0.123).abs() < 1e-12);
        assert!((result.subjectivity - 0.988).abs() < 1e-12);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn empty_text_is_neutral() {
        let result = SentimentAnalyzer::<LexiconScorer>::default().analyze("");
        assert!(result.polarity.abs() < f64::EPSILON);
        assert!(result.subjectivity.abs() < f64::EPSILON);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn praise_is_positive() {
        let result =
            SentimentAnalyzer::<LexiconScorer>::default().analyze("Great product! Highly recommend.");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.polarity > 0.1);
    }

    #[test]
    fn complaints_are_negative() {
        let result = SentimentAnalyzer::<LexiconScorer>::default()
            .analyze("This was a terrible, frustrating experience.");
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn negation_flips_polarity() {
        let scorer = LexiconScorer;
        let (plain, _) = scorer.score("The update is good.");
        let (negated, _) = scorer.score("The update is not good.");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn intensifier_strengthens_polarity() {
        let scorer = LexiconScorer;
        let (plain, _) = scorer.score("good");
        let (intense, _) = scorer.score("very good");
        assert!(intense > plain);
    }

    #[test]
    fn factual_text_is_neutral() {
        let result = SentimentAnalyzer::<LexiconScorer>::default()
            .analyze("The meeting starts at noon in room four.");
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn scores_stay_in_range() {
        let (polarity, subjectivity) =
            LexiconScorer.score("absolutely perfect awesome excellent best superb");
        assert!((-1.0..=1.0).contains(&polarity));
        assert!((0.0..=1.0).contains(&subjectivity));
    }
}
