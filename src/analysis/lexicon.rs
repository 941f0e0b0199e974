//! English opinion lexicon used by the default sentiment scorer.
//!
//! Each entry maps a lowercase word to `(polarity, subjectivity)`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const OPINION_WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("clear", 0.1, 0.38),
    ("delighted", 0.7, 0.7),
    ("easy", 0.43, 0.83),
    ("effective", 0.6, 0.8),
    ("efficient", 0.5, 0.6),
    ("enjoy", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.38, 0.75),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("improve", 0.3, 0.4),
    ("improved", 0.3, 0.4),
    ("innovative", 0.5, 0.75),
    ("interesting", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("nice", 0.6, 1.0),
    ("outstanding", 0.5, 0.67),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 1.0),
    ("powerful", 0.3, 1.0),
    ("recommend", 0.4, 0.5),
    ("recommended", 0.4, 0.5),
    ("reliable", 0.5, 0.5),
    ("simple", 0.1, 0.36),
    ("smart", 0.21, 0.64),
    ("solid", 0.3, 0.4),
    ("strong", 0.43, 0.73),
    ("success", 0.5, 0.6),
    ("successful", 0.75, 0.95),
    ("superb", 1.0, 1.0),
    ("thrilled", 0.6, 0.9),
    ("useful", 0.3, 0.0),
    ("valuable", 0.5, 0.6),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    // negative
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("confusing", -0.3, 0.6),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3),
    ("frustrating", -0.4, 0.7),
    ("hard", -0.29, 0.54),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("problem", -0.2, 0.3),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.39),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("useless", -0.5, 0.0),
    ("waste", -0.2, 0.0),
    ("weak", -0.38, 0.63),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.3),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "cannot", "hardly", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
];

/// Polarity multiplier applied to an opinion word inside a negation window.
pub(crate) const NEGATION_FACTOR: f64 = -0.5;

/// How many preceding tokens a negation reaches.
pub(crate) const NEGATION_WINDOW: usize = 3;

static OPINIONS: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    OPINION_WORDS
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

static INTENSITY: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

pub(crate) fn opinion(word: &str) -> Option<(f64, f64)> {
    OPINIONS.get(word).copied()
}

pub(crate) fn intensity(word: &str) -> Option<f64> {
    INTENSITY.get(word).copied()
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_values_stay_in_range() {
        for &(word, polarity, subjectivity) in OPINION_WORDS {
            assert!((-1.0..=1.0).contains(&polarity), "{word} polarity");
            assert!((0.0..=1.0).contains(&subjectivity), "{word} subjectivity");
        }
        assert_eq!(OPINIONS.len(), OPINION_WORDS.len(), "duplicate lexicon entry");
    }

    #[test]
    fn recognises_contracted_negations() {
        assert!(is_negation("don't"));
        assert!(is_negation("never"));
        assert!(!is_negation("great"));
    }
}
