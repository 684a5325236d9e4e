// src/services/trainer.rs
use std::collections::HashSet;

use crate::error::Result;
use crate::services::catalog::IntentCatalog;
use crate::services::classifier::{NaiveBayesClassifier, TextClassifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPair {
    pub pattern: String,
    pub label: String,
}

/// Flatten every record's patterns against its own label, in catalog order.
/// Responses take no part in training.
pub fn training_pairs(catalog: &IntentCatalog) -> Vec<TrainingPair> {
    catalog
        .iter()
        .flat_map(|record| {
            record.patterns.iter().map(|pattern| TrainingPair {
                pattern: pattern.clone(),
                label: record.label.clone(),
            })
        })
        .collect()
}

/// Fit the default TF-IDF + Naive Bayes classifier on the catalog.
pub fn train(catalog: &IntentCatalog) -> Result<NaiveBayesClassifier> {
    train_with(catalog)
}

pub fn train_with<C: TextClassifier>(catalog: &IntentCatalog) -> Result<C> {
    let (patterns, labels): (Vec<String>, Vec<String>) = training_pairs(catalog)
        .into_iter()
        .map(|pair| (pair.pattern, pair.label))
        .unzip();

    let distinct: HashSet<&str> = labels.iter().map(String::as_str).collect();
    tracing::debug!(
        pairs = patterns.len(),
        labels = distinct.len(),
        "training intent classifier"
    );

    C::fit(&patterns, &labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::IntentRecord;

    #[test]
    fn pairs_follow_catalog_order() {
        let catalog = IntentCatalog::new(vec![
            IntentRecord::new("greeting", ["hello", "hi"], ["Hello!"]),
            IntentRecord::new("thanks", ["thanks"], ["No problem!"]),
        ])
        .unwrap();

        let pairs = training_pairs(&catalog);
        let flat: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| (p.pattern.as_str(), p.label.as_str()))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("hello", "greeting"),
                ("hi", "greeting"),
                ("thanks", "thanks")
            ]
        );
    }

    #[test]
    fn builtin_catalog_has_one_pair_per_pattern() {
        let catalog = IntentCatalog::builtin().unwrap();
        let expected: usize = catalog.iter().map(|r| r.patterns.len()).sum();
        assert_eq!(training_pairs(&catalog).len(), expected);
    }
}
