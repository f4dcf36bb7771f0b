// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fresh activity id generation.

use uuid::Uuid;

use crate::models::ActivityId;

/// Source of fresh, unique activity ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> ActivityId;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ActivityId {
        ActivityId::new(Uuid::new_v4().to_string())
    }
}

/// Predictable ids (`{prefix}-1`, `{prefix}-2`, ...) for replays and tests.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ActivityId {
        let id = ActivityId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
