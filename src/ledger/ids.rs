//! Visit id generation

use base64::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::VisitId;

/// Source of fresh visit ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> VisitId;
}

/// Random 96-bit ids, URL-safe base64 encoded (16 characters)
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> VisitId {
        let bytes: [u8; 12] = rand::random();
        VisitId::new(BASE64_URL_SAFE_NO_PAD.encode(bytes))
    }
}

/// Deterministic ids (`<prefix><n>`), for tests and reproducible imports
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> VisitId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        VisitId::new(format!("{}{}", self.prefix, n))
    }
}
