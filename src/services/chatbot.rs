// src/services/chatbot.rs
//! Turns a user utterance into a reply: predict a label, then look the label up.

use rand::Rng;

use crate::config::DEFAULT_FALLBACK_REPLY;
use crate::message::Reply;
use crate::services::catalog::IntentCatalog;
use crate::services::classifier::TextClassifier;

/// Classify `user_text` and pick one of the matched intent's responses.
///
/// Classifier failures, labels missing from the catalog and records without
/// responses all yield `fallback`. Never returns an empty reply as long as
/// `fallback` is non-empty.
pub fn generate_reply<R: Rng + ?Sized>(
    model: &dyn TextClassifier,
    catalog: &IntentCatalog,
    user_text: &str,
    fallback: &str,
    rng: &mut R,
) -> Reply {
    let label = match model.predict(user_text) {
        Ok(label) => label,
        Err(e) => {
            tracing::warn!(error = %e, "intent prediction failed");
            return Reply::fallback(fallback);
        }
    };

    let Some(record) = catalog.get(&label) else {
        tracing::warn!(intent = %label, "predicted intent not in catalog");
        return Reply::fallback(fallback);
    };

    match record.pick_response(rng) {
        Ok(text) => {
            tracing::debug!(intent = %label, "intent matched");
            Reply::matched(label, text)
        }
        Err(e) => {
            tracing::warn!(error = %e, "no response available");
            Reply::fallback(fallback)
        }
    }
}

/// Reply text for `user_text`, using the thread RNG and the default fallback.
pub fn respond(model: &dyn TextClassifier, catalog: &IntentCatalog, user_text: &str) -> String {
    generate_reply(
        model,
        catalog,
        user_text,
        DEFAULT_FALLBACK_REPLY,
        &mut rand::rng(),
    )
    .text
}
