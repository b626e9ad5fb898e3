//! Connection bootstrap for the marketplace store.
//!
//! # Responsibility
//! - Open file or in-memory connections per [`StoreConfig`].
//! - Configure connection pragmas required by gateway behavior.
//! - Trigger schema migrations before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::{DbResult, StoreConfig};
use log::{error, info};
use rusqlite::Connection;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the store described by `config` and applies pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with mode, duration and status.
pub fn open_store(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = match config {
        StoreConfig::File(_) => "file",
        StoreConfig::InMemory => "memory",
    };
    info!("event=store_open module=db status=start mode={mode}");

    let result = connect(config).and_then(|mut conn| {
        bootstrap_connection(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=store_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    result
}

fn connect(config: &StoreConfig) -> DbResult<Connection> {
    let conn = match config {
        StoreConfig::File(path) => Connection::open(path)?,
        StoreConfig::InMemory => Connection::open_in_memory()?,
    };
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}
