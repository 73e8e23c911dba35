//! SQLite-backed claim history.
//!
//! One table, keyed by `(source, article, claim_hash)`. Claims are
//! immutable: re-recording an identical claim is a no-op via
//! `INSERT OR IGNORE`, which also gives the write-before-read guarantee
//! the temporal check relies on (a committed insert is fully visible to
//! the next query on the same connection).

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection};
use tracing::{debug, info};

use veracity_core::errors::{StorageError, VeracityResult};
use veracity_core::models::{Claim, Polarity};
use veracity_core::traits::IClaimStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS claims (
    id          INTEGER PRIMARY KEY,
    source      TEXT NOT NULL,
    article     TEXT NOT NULL,
    text        TEXT NOT NULL,
    subject_key TEXT NOT NULL,
    polarity    TEXT NOT NULL,
    asserted_at TEXT NOT NULL,
    claim_hash  TEXT NOT NULL,
    UNIQUE (source, article, claim_hash)
);
CREATE INDEX IF NOT EXISTS idx_claims_source_time ON claims (source, asserted_at);
";

/// Claim store on a single SQLite connection.
///
/// The connection is serialized behind a mutex; claim volumes are per-source
/// histories, not bulk ingest, so one writer is enough.
pub struct SqliteClaimStore {
    conn: Mutex<Connection>,
}

impl SqliteClaimStore {
    /// Open (or create) the store at `path` and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> VeracityResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| StorageError::Unreachable {
            reason: format!("cannot open {}: {e}", path.display()),
        })?;
        Self::init(conn, &path.display().to_string())
    }

    /// In-memory store, used by tests and offline runs.
    pub fn open_in_memory() -> VeracityResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::Unreachable {
            reason: format!("cannot open in-memory database: {e}"),
        })?;
        Self::init(conn, ":memory:")
    }

    fn init(conn: Connection, location: &str) -> VeracityResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| StorageError::QueryFailed {
                message: format!("schema setup failed: {e}"),
            })?;
        info!(location, "claim store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::Unreachable {
            reason: "claim store mutex poisoned".to_string(),
        })
    }
}

#[async_trait]
impl IClaimStore for SqliteClaimStore {
    async fn record(&self, claim: &Claim) -> VeracityResult<()> {
        let conn = self.lock()?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO claims
                 (source, article, text, subject_key, polarity, asserted_at, claim_hash)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    claim.source,
                    claim.article,
                    claim.text,
                    claim.subject_key,
                    polarity_str(claim.polarity),
                    claim.asserted_at.to_rfc3339(),
                    claim.claim_hash,
                ],
            )
            .map_err(|e| StorageError::WriteFailed {
                claim_hash: claim.claim_hash.clone(),
                reason: e.to_string(),
            })?;
        debug!(
            source = %claim.source,
            claim_hash = %claim.claim_hash,
            inserted = inserted > 0,
            "claim recorded"
        );
        Ok(())
    }

    async fn claims_since(&self, source: &str, window: Duration) -> VeracityResult<Vec<Claim>> {
        let cutoff = (Utc::now() - window).to_rfc3339();
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT source, article, text, subject_key, polarity, asserted_at, claim_hash
                 FROM claims
                 WHERE source = ?1 AND asserted_at >= ?2
                 ORDER BY asserted_at ASC",
            )
            .map_err(|e| StorageError::QueryFailed {
                message: e.to_string(),
            })?;

        let rows = stmt
            .query_map(params![source, cutoff], |row| {
                Ok(ClaimRow {
                    source: row.get(0)?,
                    article: row.get(1)?,
                    text: row.get(2)?,
                    subject_key: row.get(3)?,
                    polarity: row.get(4)?,
                    asserted_at: row.get(5)?,
                    claim_hash: row.get(6)?,
                })
            })
            .map_err(|e| StorageError::QueryFailed {
                message: e.to_string(),
            })?;

        let mut claims = Vec::new();
        for row in rows {
            let row = row.map_err(|e| StorageError::QueryFailed {
                message: e.to_string(),
            })?;
            claims.push(row.into_claim()?);
        }
        Ok(claims)
    }
}

/// Raw row image, decoded into a `Claim` after the statement is drained.
struct ClaimRow {
    source: String,
    article: String,
    text: String,
    subject_key: String,
    polarity: String,
    asserted_at: String,
    claim_hash: String,
}

impl ClaimRow {
    fn into_claim(self) -> Result<Claim, StorageError> {
        let polarity = parse_polarity(&self.polarity)?;
        let asserted_at = parse_timestamp(&self.asserted_at)?;
        Ok(Claim {
            source: self.source,
            article: self.article,
            text: self.text,
            subject_key: self.subject_key,
            polarity,
            asserted_at,
            claim_hash: self.claim_hash,
        })
    }
}

fn polarity_str(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Affirms => "affirms",
        Polarity::Denies => "denies",
        Polarity::Neutral => "neutral",
    }
}

fn parse_polarity(raw: &str) -> Result<Polarity, StorageError> {
    match raw {
        "affirms" => Ok(Polarity::Affirms),
        "denies" => Ok(Polarity::Denies),
        "neutral" => Ok(Polarity::Neutral),
        other => Err(StorageError::QueryFailed {
            message: format!("unknown polarity tag in store: {other}"),
        }),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StorageError::QueryFailed {
            message: format!("bad timestamp in store: {e}"),
        })
}
