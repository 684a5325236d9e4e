// src/state.rs
use rand::Rng;

use crate::config::ChatConfig;
use crate::error::Result;
use crate::message::Reply;
use crate::services::catalog::IntentCatalog;
use crate::services::chatbot::generate_reply;
use crate::services::classifier::TextClassifier;
use crate::services::trainer;

/// Everything a session needs, built once at startup and immutable afterwards.
pub struct ChatBot {
    config: ChatConfig,
    catalog: IntentCatalog,
    model: Box<dyn TextClassifier>,
}

impl std::fmt::Debug for ChatBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatBot")
            .field("config", &self.config)
            .field("intents", &self.catalog.len())
            .finish()
    }
}

impl ChatBot {
    /// Train the default classifier on `catalog`.
    pub fn new(config: ChatConfig, catalog: IntentCatalog) -> Result<Self> {
        let model = trainer::train(&catalog)?;
        Self::with_model(config, catalog, Box::new(model))
    }

    /// Use an already trained model. The model's labels are expected to come from `catalog`.
    pub fn with_model(
        config: ChatConfig,
        catalog: IntentCatalog,
        model: Box<dyn TextClassifier>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            model,
        })
    }

    /// Default strings and the built-in intent catalog.
    pub fn builtin() -> Result<Self> {
        let catalog = IntentCatalog::builtin()?;
        tracing::info!(intents = catalog.len(), "loaded intent catalog");
        Self::new(ChatConfig::default(), catalog)
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn model(&self) -> &dyn TextClassifier {
        self.model.as_ref()
    }

    pub fn reply(&self, user_text: &str) -> Reply {
        self.reply_with_rng(user_text, &mut rand::rng())
    }

    pub fn reply_with_rng<R: Rng + ?Sized>(&self, user_text: &str, rng: &mut R) -> Reply {
        generate_reply(
            self.model.as_ref(),
            &self.catalog,
            user_text,
            &self.config.fallback_reply,
            rng,
        )
    }
}
