//! Smoothed bag-of-words spam/ham classifier.

use std::collections::{HashMap, HashSet};

use crate::ModelError;

/// Lowercases `text` and extracts maximal runs of ASCII alphanumerics and
/// apostrophes as tokens, deduplicated.
pub fn tokenize(text: &str) -> HashSet<String> {
    let mut tokens = HashSet::new();
    let mut current = String::new();

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '\'' {
            current.push(c);
        } else if !current.is_empty() {
            tokens.insert(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.insert(current);
    }

    tokens
}

/// A training document with its spam/ham label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub is_spam: bool,
}

impl Message {
    pub fn new(text: impl Into<String>, is_spam: bool) -> Self {
        Self {
            text: text.into(),
            is_spam,
        }
    }
}

/// Naive Bayes text classifier with additive (Laplace) smoothing.
///
/// Training accumulates: repeated `train` calls add to the existing counts,
/// they never reset them. Per-token likelihoods are computed lazily at
/// prediction time; tokens never seen in training contribute count 0 without
/// being inserted anywhere.
#[derive(Clone, Debug)]
pub struct NaiveBayesClassifier {
    k: f64,
    tokens: HashSet<String>,
    token_spam_counts: HashMap<String, u32>,
    token_ham_counts: HashMap<String, u32>,
    spam_messages: u32,
    ham_messages: u32,
}

impl NaiveBayesClassifier {
    /// Smoothing constant k = 0.5.
    pub fn new() -> Self {
        Self::with_smoothing(0.5)
    }

    pub fn with_smoothing(k: f64) -> Self {
        if k <= 0.0 {
            panic!("smoothing constant must be > 0, got {}", k);
        }

        Self {
            k,
            tokens: HashSet::new(),
            token_spam_counts: HashMap::new(),
            token_ham_counts: HashMap::new(),
            spam_messages: 0,
            ham_messages: 0,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.tokens.len()
    }

    pub fn spam_count(&self, token: &str) -> u32 {
        self.token_spam_counts.get(token).copied().unwrap_or(0)
    }

    pub fn ham_count(&self, token: &str) -> u32 {
        self.token_ham_counts.get(token).copied().unwrap_or(0)
    }

    pub fn train(&mut self, messages: &[Message]) {
        for message in messages {
            if message.is_spam {
                self.spam_messages += 1;
            } else {
                self.ham_messages += 1;
            }

            for token in tokenize(&message.text) {
                if message.is_spam {
                    *self.token_spam_counts.entry(token.clone()).or_insert(0) += 1;
                } else {
                    *self.token_ham_counts.entry(token.clone()).or_insert(0) += 1;
                }
                self.tokens.insert(token);
            }
        }
    }

    /// P(token | spam) and P(token | ham) under additive smoothing.
    fn probabilities(&self, token: &str) -> (f64, f64) {
        let spam = self.spam_count(token) as f64;
        let ham = self.ham_count(token) as f64;

        let p_token_spam = (spam + self.k) / (self.spam_messages as f64 + 2.0 * self.k);
        let p_token_ham = (ham + self.k) / (self.ham_messages as f64 + 2.0 * self.k);

        (p_token_spam, p_token_ham)
    }

    /// P(spam | text). Iterates the entire trained vocabulary: a vocabulary
    /// token absent from `text` contributes log(1 - P(token | class)), since
    /// the absence of a word is itself evidence. O(vocabulary size) per call.
    pub fn predict(&self, text: &str) -> Result<f64, ModelError> {
        if self.tokens.is_empty() {
            return Err(ModelError::NotFitted);
        }

        let text_tokens = tokenize(text);
        let mut log_prob_if_spam = 0.0;
        let mut log_prob_if_ham = 0.0;

        for token in &self.tokens {
            let (prob_if_spam, prob_if_ham) = self.probabilities(token);

            if text_tokens.contains(token) {
                log_prob_if_spam += prob_if_spam.ln();
                log_prob_if_ham += prob_if_ham.ln();
            } else {
                log_prob_if_spam += (1.0 - prob_if_spam).ln();
                log_prob_if_ham += (1.0 - prob_if_ham).ln();
            }
        }

        // exp(ls) / (exp(ls) + exp(lh)) rearranged so large vocabularies do
        // not underflow both exponentials to 0.
        Ok(1.0 / (1.0 + (log_prob_if_ham - log_prob_if_spam).exp()))
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}
