// src/services/mod.rs
pub mod catalog;
pub mod chatbot;
pub mod classifier;
pub mod metrics_manager;
pub mod session_manager;
pub mod trainer;
