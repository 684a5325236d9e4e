// src/services/catalog.rs
//! The fixed set of intents the bot recognises.
//!
//! A catalog is validated once when it is built and is read-only afterwards.
//! The built-in data lives in `data/intents.json` and is embedded in the binary.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};

const BUILTIN_INTENTS: &str = include_str!("../../data/intents.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    #[serde(rename = "intent")]
    pub label: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

impl IntentRecord {
    pub fn new<L, P, R>(label: L, patterns: P, responses: R) -> Self
    where
        L: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            label: label.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Pick one response uniformly at random.
    pub fn pick_response<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        self.responses
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| ChatError::MissingResponses(self.label.clone()))
    }

    fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(ChatError::invalid_record("label cannot be blank"));
        }
        if self.patterns.is_empty() {
            return Err(ChatError::MissingPatterns(self.label.clone()));
        }
        if self.responses.is_empty() {
            return Err(ChatError::MissingResponses(self.label.clone()));
        }
        if self.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(ChatError::invalid_record(format!(
                "intent '{}' has a blank pattern",
                self.label
            )));
        }
        if self.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(ChatError::invalid_record(format!(
                "intent '{}' has a blank response",
                self.label
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct IntentCatalog {
    records: Vec<IntentRecord>,
}

impl IntentCatalog {
    /// Build a catalog, rejecting empty input, duplicate labels and incomplete records.
    pub fn new(records: Vec<IntentRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChatError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.label.as_str()) {
                return Err(ChatError::DuplicateLabel(record.label.clone()));
            }
        }

        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<IntentRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The social media marketing intents shipped with the bot.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_INTENTS)
    }

    pub fn records(&self) -> &[IntentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&IntentRecord> {
        self.records.iter().find(|r| r.label == label)
    }
}
