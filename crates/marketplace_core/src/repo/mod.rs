//! Store gateway abstractions and persistence implementation.
//!
//! # Responsibility
//! - Define the single data-access contract over both collections.
//! - Isolate SQLite query details from list-synchronization orchestration.
//!
//! # Invariants
//! - The gateway never validates caller-supplied drafts; that happens at the
//!   input boundary before a draft reaches it.
//! - Read paths reject corrupt persisted state instead of masking it.

pub mod marketplace_repo;
