// src/lib.rs
//! Command-line intent-classification chatbot for social media marketing questions.
//!
//! The intent catalog is trained into a TF-IDF + Naive Bayes classifier at startup;
//! each user line is classified and answered with a random response of the
//! predicted intent.

pub mod config;
pub mod error;
pub mod message;
pub mod services;
pub mod state;

pub use config::ChatConfig;
pub use error::{ChatError, Result};
pub use state::ChatBot;
