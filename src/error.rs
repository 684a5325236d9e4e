// src/error.rs
//! Error types shared by the catalog, trainer, classifier and session loop.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("intent catalog is empty")]
    EmptyCatalog,

    #[error("invalid intent record: {0}")]
    InvalidRecord(String),

    #[error("duplicate intent label '{0}'")]
    DuplicateLabel(String),

    #[error("intent '{0}' has no patterns")]
    MissingPatterns(String),

    #[error("intent '{0}' has no responses")]
    MissingResponses(String),

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("training data mismatch: {texts} texts but {labels} labels")]
    LengthMismatch { texts: usize, labels: usize },

    #[error("empty vocabulary: training texts contain no usable tokens")]
    EmptyVocabulary,

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;

impl ChatError {
    pub fn invalid_record<S: Into<String>>(msg: S) -> Self {
        ChatError::InvalidRecord(msg.into())
    }

    pub fn classifier<S: Into<String>>(msg: S) -> Self {
        ChatError::Classifier(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        ChatError::Config(msg.into())
    }
}
