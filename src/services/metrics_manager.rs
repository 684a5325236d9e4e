// src/services/metrics_manager.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::message::Reply;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsData {
    pub turns: u64,
    pub intent_usage: BTreeMap<String, u64>,
    pub fallbacks: u64,
}

/// Per-session reply counters. Nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct MetricsManager {
    inner: MetricsData,
}

impl MetricsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reply: &Reply) {
        self.inner.turns += 1;
        match &reply.intent {
            Some(intent) => *self.inner.intent_usage.entry(intent.clone()).or_insert(0) += 1,
            None => self.inner.fallbacks += 1,
        }
    }

    pub fn get_metrics(&self) -> MetricsData {
        self.inner.clone()
    }
}
