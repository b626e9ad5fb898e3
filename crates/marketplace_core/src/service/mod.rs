//! List synchronization and view-facing orchestration.
//!
//! # Responsibility
//! - Keep one ordered in-memory mirror of each collection.
//! - Drive the validate -> mutate -> re-fetch -> notify cycle.
//!
//! # Invariants
//! - A refresh replaces a mirror atomically; no partial list is observable.
//! - Each mutating operation triggers exactly one refresh notification for
//!   the affected entity type, after the store acknowledged the write.

pub mod marketplace_service;
pub mod observer;
