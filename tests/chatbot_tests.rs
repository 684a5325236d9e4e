use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use smm_chatbot::config::DEFAULT_FALLBACK_REPLY;
use smm_chatbot::error::{ChatError, Result};
use smm_chatbot::services::catalog::{IntentCatalog, IntentRecord};
use smm_chatbot::services::chatbot::{generate_reply, respond};
use smm_chatbot::services::classifier::TextClassifier;
use smm_chatbot::services::trainer::{train, training_pairs};
use smm_chatbot::{ChatBot, ChatConfig};

const GREETINGS: [&str; 3] = [
    "Hello!",
    "Hi there!",
    "Hey! How can I help you with social media marketing?",
];

/// Always predicts the same label, or fails when no label is set.
struct FixedClassifier(Option<String>);

impl TextClassifier for FixedClassifier {
    fn fit(_texts: &[String], labels: &[String]) -> Result<Self> {
        Ok(Self(labels.first().cloned()))
    }

    fn predict(&self, _text: &str) -> Result<String> {
        self.0
            .clone()
            .ok_or_else(|| ChatError::classifier("model unavailable"))
    }
}

#[test]
fn test_training_patterns_map_back_to_their_intent() {
    let catalog = IntentCatalog::builtin().unwrap();
    let model = train(&catalog).unwrap();

    let pairs = training_pairs(&catalog);
    let correct = pairs
        .iter()
        .filter(|p| model.predict(&p.pattern).unwrap() == p.label)
        .count();
    assert!(
        correct * 10 >= pairs.len() * 9,
        "only {correct}/{} patterns classified correctly",
        pairs.len()
    );

    assert_eq!(model.predict("hello").unwrap(), "greeting");
    assert_eq!(model.predict("thank you").unwrap(), "thanks");
    assert_eq!(model.predict("how old are you").unwrap(), "age");
}

#[test]
fn test_greeting_scenario() {
    let catalog = IntentCatalog::builtin().unwrap();
    let model = train(&catalog).unwrap();

    assert_eq!(model.predict("hi").unwrap(), "greeting");
    let reply = respond(&model, &catalog, "hi");
    assert!(GREETINGS.contains(&reply.as_str()), "unexpected reply: {reply}");
}

#[test]
fn test_hashtag_scenario() {
    let bot = ChatBot::builtin().unwrap();
    let reply = bot.reply("how to use hashtags");

    assert_eq!(reply.intent.as_deref(), Some("hashtag_strategy"));
    let record = bot.catalog().get("hashtag_strategy").unwrap();
    assert_eq!(record.responses.len(), 3);
    assert!(record.responses.contains(&reply.text));
}

#[test]
fn test_reply_is_never_empty() {
    let bot = ChatBot::builtin().unwrap();
    for input in ["", "   ", "xyzzy qwerty", "!!!", "a", "HOW OFTEN SHOULD I POST?", "日本語"] {
        let reply = bot.reply(input);
        assert!(!reply.text.trim().is_empty(), "empty reply for {input:?}");
    }
}

#[test]
fn test_out_of_vocabulary_input_still_gets_an_intent() {
    let bot = ChatBot::builtin().unwrap();
    let reply = bot.reply("xyzzy qwerty");
    assert!(!reply.is_fallback());
}

#[test]
fn test_replies_vary_across_calls() {
    let bot = ChatBot::builtin().unwrap();
    let distinct: HashSet<String> = (0..200).map(|_| bot.reply("hi").text).collect();
    assert!(distinct.len() > 1);
    assert!(distinct.iter().all(|r| GREETINGS.contains(&r.as_str())));
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let bot = ChatBot::builtin().unwrap();
    let first = bot.reply_with_rng("hashtag strategy", &mut StdRng::seed_from_u64(42));
    let second = bot.reply_with_rng("hashtag strategy", &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[test]
fn test_fallback_when_predicted_intent_was_removed() {
    let full = IntentCatalog::builtin().unwrap();
    let model = train(&full).unwrap();

    let records: Vec<IntentRecord> = full
        .iter()
        .filter(|r| r.label != "greeting")
        .cloned()
        .collect();
    let reduced = IntentCatalog::new(records).unwrap();

    assert_eq!(respond(&model, &reduced, "hi"), "Sorry, I don't understand that.");

    let mut rng = StdRng::seed_from_u64(1);
    let reply = generate_reply(&model, &reduced, "hi", DEFAULT_FALLBACK_REPLY, &mut rng);
    assert!(reply.is_fallback());
}

#[test]
fn test_classifier_failure_maps_to_fallback() {
    let catalog = IntentCatalog::builtin().unwrap();
    let bot = ChatBot::with_model(
        ChatConfig::default(),
        catalog,
        Box::new(FixedClassifier(None)),
    )
    .unwrap();

    let reply = bot.reply("hello");
    assert!(reply.is_fallback());
    assert_eq!(reply.text, DEFAULT_FALLBACK_REPLY);
}

#[test]
fn test_custom_classifier_is_substitutable() {
    let catalog = IntentCatalog::builtin().unwrap();
    let bot = ChatBot::with_model(
        ChatConfig::default(),
        catalog,
        Box::new(FixedClassifier(Some("thanks".to_string()))),
    )
    .unwrap();

    assert_eq!(bot.model().predict("hello").unwrap(), "thanks");
    let reply = bot.reply("anything at all");
    assert_eq!(reply.intent.as_deref(), Some("thanks"));
}

#[test]
fn test_alternate_catalog() {
    let catalog = IntentCatalog::new(vec![
        IntentRecord::new("weather", ["is it raining", "weather forecast"], ["Bring an umbrella."]),
        IntentRecord::new("food", ["where can I eat", "recommend a restaurant"], ["Try the noodle bar."]),
    ])
    .unwrap();
    let bot = ChatBot::new(ChatConfig::default(), catalog).unwrap();

    assert_eq!(bot.reply("what's the weather forecast").text, "Bring an umbrella.");
    assert_eq!(bot.reply("recommend a good restaurant").text, "Try the noodle bar.");
}
