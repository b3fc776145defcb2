use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::{ClassifierError, Prediction, SentimentClassifier};

pub const POSITIVE: &str = "POSITIVE";
pub const NEGATIVE: &str = "NEGATIVE";

/// How many tokens a negator reaches forward.
const NEGATION_WINDOW: usize = 3;

// ---------------------------------------------------------------------------
// Built-in word lists (English + Indonesian)
// ---------------------------------------------------------------------------

const DEFAULT_POSITIVE: &[(&str, f32)] = &[
    ("good", 1.0),
    ("great", 1.5),
    ("excellent", 2.0),
    ("amazing", 2.0),
    ("awesome", 2.0),
    ("love", 2.0),
    ("like", 0.8),
    ("best", 1.5),
    ("happy", 1.2),
    ("nice", 1.0),
    ("recommend", 1.2),
    ("fantastic", 2.0),
    ("sustainable", 1.0),
    ("transparent", 1.0),
    ("responsible", 1.0),
    ("improve", 0.8),
    ("improved", 0.8),
    ("growth", 0.8),
    ("baik", 1.0),
    ("bagus", 1.2),
    ("hebat", 1.5),
    ("suka", 1.0),
    ("senang", 1.2),
    ("puas", 1.2),
    ("mantap", 1.5),
    ("berkelanjutan", 1.0),
    ("untung", 1.0),
];

const DEFAULT_NEGATIVE: &[(&str, f32)] = &[
    ("bad", 1.0),
    ("terrible", 2.0),
    ("awful", 2.0),
    ("horrible", 2.0),
    ("hate", 2.0),
    ("worst", 2.0),
    ("poor", 1.2),
    ("disappointed", 1.5),
    ("disappointing", 1.5),
    ("waste", 1.5),
    ("rude", 1.2),
    ("broken", 1.2),
    ("pollution", 1.2),
    ("scandal", 1.5),
    ("corruption", 2.0),
    ("fraud", 2.0),
    ("loss", 1.0),
    ("buruk", 1.2),
    ("jelek", 1.2),
    ("kecewa", 1.5),
    ("benci", 2.0),
    ("parah", 1.5),
    ("rugi", 1.0),
    ("polusi", 1.2),
    ("korupsi", 2.0),
];

const DEFAULT_NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "isn't", "wasn't", "didn't", "tidak", "bukan",
    "jangan", "belum", "tak",
];

// ---------------------------------------------------------------------------
// On-disk lexicon format
// ---------------------------------------------------------------------------

/// JSON layout accepted by [`LexiconClassifier::from_path`]:
///
/// ```json
/// {
///   "positive":  { "good": 1.0, "bagus": 1.2 },
///   "negative":  { "bad": 1.0, "buruk": 1.2 },
///   "negators":  ["not", "tidak"]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    positive: HashMap<String, f32>,
    #[serde(default)]
    negative: HashMap<String, f32>,
    #[serde(default)]
    negators: Vec<String>,
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Weighted word-list classifier producing `POSITIVE` / `NEGATIVE`.
///
/// Positive words add their weight, negative words subtract it, and a
/// negator flips the sign of the next polarity word within
/// [`NEGATION_WINDOW`] tokens. The net polarity goes through a logistic
/// function to give `P(POSITIVE)`; ties land on `POSITIVE` at 0.5.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    /// word → signed weight (positive > 0, negative < 0).
    weights: HashMap<String, f32>,
    negators: HashSet<String>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        let weights = DEFAULT_POSITIVE
            .iter()
            .map(|&(w, s)| (w.to_string(), s))
            .chain(DEFAULT_NEGATIVE.iter().map(|&(w, s)| (w.to_string(), -s)))
            .collect();
        let negators = DEFAULT_NEGATORS.iter().map(|w| w.to_string()).collect();
        Self { weights, negators }
    }
}

impl LexiconClassifier {
    /// Load a lexicon from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading lexicon {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing lexicon {}", path.display()))
    }

    fn from_json(text: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(text).context("parsing JSON")?;
        if file.positive.is_empty() && file.negative.is_empty() {
            bail!("lexicon has no positive or negative words");
        }

        let mut weights = HashMap::with_capacity(file.positive.len() + file.negative.len());
        for (word, weight) in file.positive {
            weights.insert(word.to_lowercase(), weight.abs());
        }
        for (word, weight) in file.negative {
            weights.insert(word.to_lowercase(), -weight.abs());
        }
        let negators = file.negators.iter().map(|w| w.to_lowercase()).collect();
        Ok(Self { weights, negators })
    }

    /// Number of polarity words known to the classifier.
    pub fn vocabulary_size(&self) -> usize {
        self.weights.len()
    }

    /// Net polarity of `text`: sum of signed word weights after negation.
    pub fn polarity(&self, text: &str) -> f32 {
        let mut net = 0.0;
        let mut negate_within = 0usize;

        for token in tokenize(text) {
            if self.negators.contains(&token) {
                negate_within = NEGATION_WINDOW;
                continue;
            }
            match self.weights.get(&token) {
                Some(&w) if negate_within > 0 => {
                    net -= w;
                    negate_within = 0;
                }
                Some(&w) => net += w,
                None => negate_within = negate_within.saturating_sub(1),
            }
        }
        net
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Vec<Prediction>, ClassifierError> {
        let net = self.polarity(text);
        if net.is_nan() {
            return Err(ClassifierError::Backend(
                "lexicon weights produced an undefined polarity".into(),
            ));
        }
        let p_positive = logistic(net);
        let positive = Prediction::new(POSITIVE, p_positive);
        let negative = Prediction::new(NEGATIVE, 1.0 - p_positive);

        Ok(if p_positive >= 0.5 {
            vec![positive, negative]
        } else {
            vec![negative, positive]
        })
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

fn logistic(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Lowercased word tokens; apostrophes stay inside words ("don't").
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_ranks_positive_first() {
        let clf = LexiconClassifier::default();
        let ranked = clf.classify("I love this, great product!").unwrap();
        assert_eq!(ranked[0].label, POSITIVE);
        assert!(ranked[0].score > 0.9);
        assert!((ranked[0].score + ranked[1].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negative_text_ranks_negative_first() {
        let clf = LexiconClassifier::default();
        assert_eq!(clf.top("Terrible, the worst service").unwrap().label, NEGATIVE);
        assert_eq!(clf.top("pelayanan sangat buruk, saya kecewa").unwrap().label, NEGATIVE);
    }

    #[test]
    fn negator_flips_following_word() {
        let clf = LexiconClassifier::default();
        assert!(clf.polarity("this is not good") < 0.0);
        assert!(clf.polarity("produk ini tidak jelek") > 0.0);
        // Negation expires after the window.
        assert!(clf.polarity("not that it matters much but good") > 0.0);
    }

    #[test]
    fn neutral_text_is_a_tie() {
        let clf = LexiconClassifier::default();
        let top = clf.top("the meeting is on tuesday").unwrap();
        assert_eq!(top.label, POSITIVE);
        assert!((top.score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn undefined_polarity_is_a_backend_error() {
        let clf = LexiconClassifier {
            weights: HashMap::from([
                ("up".to_string(), f32::INFINITY),
                ("down".to_string(), f32::NEG_INFINITY),
            ]),
            negators: HashSet::new(),
        };
        assert!(matches!(
            clf.classify("up and down"),
            Err(ClassifierError::Backend(_))
        ));
        assert_eq!(clf.top("up").unwrap().label, POSITIVE);
    }

    #[test]
    fn loads_custom_lexicon() {
        let clf = LexiconClassifier::from_json(
            r#"{ "positive": { "Hijau": 2.0 }, "negative": { "kotor": 1.0 }, "negators": ["tidak"] }"#,
        )
        .unwrap();
        assert_eq!(clf.vocabulary_size(), 2);
        assert_eq!(clf.top("kota hijau").unwrap().label, POSITIVE);
        assert_eq!(clf.top("sungai tidak hijau").unwrap().label, NEGATIVE);
    }

    #[test]
    fn empty_lexicon_is_rejected() {
        assert!(LexiconClassifier::from_json(r#"{ "negators": ["not"] }"#).is_err());
        assert!(LexiconClassifier::from_json("not json").is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, r#"{ "positive": { "ok": 1.0 } }"#).unwrap();
        let clf = LexiconClassifier::from_path(&path).unwrap();
        assert_eq!(clf.top("ok").unwrap().label, POSITIVE);

        let err = LexiconClassifier::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}
