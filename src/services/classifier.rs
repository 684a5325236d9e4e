// src/services/classifier.rs
//! Short-text intent classification.
//!
//! [`TextClassifier`] is the seam between training and response lookup: anything that
//! can be fitted on `(text, label)` pairs and predict a single label fits here.
//! [`NaiveBayesClassifier`] is the default implementation, a TF-IDF vectorizer feeding
//! a multinomial Naive Bayes model.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use regex::Regex;

use crate::error::{ChatError, Result};

/// Words of two or more word characters; single letters are dropped.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

pub trait TextClassifier {
    fn fit(texts: &[String], labels: &[String]) -> Result<Self>
    where
        Self: Sized;

    /// Best-guess label for `text`. Never "unknown": unseen words fall back to the prior.
    fn predict(&self, text: &str) -> Result<String>;
}

/// TF-IDF vectorizer for text feature extraction.
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency for each word.
    idf: Vec<f64>,
    n_documents: usize,
    token_pattern: Regex,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .finish()
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            token_pattern: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Lowercase `text` and split it into word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Fit the vocabulary and IDF weights on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = self.tokenize(doc).into_iter().collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(ChatError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        // BTreeMap iteration keeps indices in alphabetical order.
        for (idx, (token, df)) in document_frequency.into_iter().enumerate() {
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(token, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();
        Ok(())
    }

    /// L2-normalised TF-IDF vector. Unknown words are ignored; an all-unknown
    /// document maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.vocabulary.len()];
        for token in self.tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm = features.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }
        features
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }
}

/// Multinomial Naive Bayes over non-negative feature vectors.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    alpha: f64,
    /// Sorted class labels.
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    /// ln P(feature | class), one row per class.
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub const DEFAULT_ALPHA: f64 = 1.0;

    pub fn fit(features: &[Vec<f64>], labels: &[String], alpha: f64) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(ChatError::LengthMismatch {
                texts: features.len(),
                labels: labels.len(),
            });
        }
        let Some(n_features) = features.first().map(Vec::len) else {
            return Err(ChatError::EmptyTrainingSet);
        };

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let class_index: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let mut class_counts = vec![0usize; classes.len()];
        let mut feature_counts = vec![vec![0.0; n_features]; classes.len()];
        for (row, label) in features.iter().zip(labels) {
            let c = class_index[label.as_str()];
            class_counts[c] += 1;
            for (acc, value) in feature_counts[c].iter_mut().zip(row) {
                *acc += value;
            }
        }

        let n_samples = labels.len() as f64;
        let class_log_prior = class_counts
            .iter()
            .map(|&count| (count as f64 / n_samples).ln())
            .collect();

        let feature_log_prob = feature_counts
            .iter()
            .map(|counts| {
                let denom = counts.iter().sum::<f64>() + alpha * n_features as f64;
                counts.iter().map(|count| ((count + alpha) / denom).ln()).collect()
            })
            .collect();

        Ok(Self {
            alpha,
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    pub fn joint_log_likelihood(&self, x: &[f64]) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior + x.iter().zip(log_probs).map(|(xi, lp)| xi * lp).sum::<f64>()
            })
            .collect()
    }

    /// Highest scoring class; ties go to the first label in sorted order.
    pub fn predict(&self, x: &[f64]) -> Option<&str> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, score) in self.joint_log_likelihood(x).into_iter().enumerate() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| self.classes[idx].as_str())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// TF-IDF features followed by multinomial Naive Bayes.
#[derive(Debug)]
pub struct NaiveBayesClassifier {
    vectorizer: TfIdfVectorizer,
    model: MultinomialNb,
}

impl NaiveBayesClassifier {
    pub fn classes(&self) -> &[String] {
        self.model.classes()
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}

impl TextClassifier for NaiveBayesClassifier {
    fn fit(texts: &[String], labels: &[String]) -> Result<Self> {
        if texts.len() != labels.len() {
            return Err(ChatError::LengthMismatch {
                texts: texts.len(),
                labels: labels.len(),
            });
        }
        if texts.is_empty() {
            return Err(ChatError::EmptyTrainingSet);
        }

        let mut vectorizer = TfIdfVectorizer::new()?;
        vectorizer.fit(texts)?;

        let features: Vec<Vec<f64>> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let model = MultinomialNb::fit(&features, labels, MultinomialNb::DEFAULT_ALPHA)?;

        Ok(Self { vectorizer, model })
    }

    fn predict(&self, text: &str) -> Result<String> {
        let features = self.vectorizer.transform(text);
        self.model
            .predict(&features)
            .map(str::to_string)
            .ok_or_else(|| ChatError::classifier("model has no classes"))
    }
}
