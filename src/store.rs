// 💾 Package Store - Pluggable persistence for the plan catalog
//
// One narrow contract: load the full ordered sequence, save it whole.
// Reconciliation and export stay storage-agnostic behind it.
//
// Both backends are last-writer-wins. Concurrent writers race and the
// later save replaces the earlier one; there is no merge and no version
// token. Callers that need coordination serialize access themselves.

use crate::record::{Carrier, Period, PlanRecord};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// STORE CONTRACT
// ============================================================================

/// Narrow storage contract for the plan catalog.
///
/// `load` returns an empty sequence when the backing file or database does
/// not exist yet; absence is a normal first-boot state, not an error.
/// `save` replaces the whole sequence and is atomic from the caller's
/// perspective: it lands in full or not at all.
pub trait PackageStore: Send {
    fn load(&self) -> Result<Vec<PlanRecord>>;
    fn save(&mut self, records: &[PlanRecord]) -> Result<()>;

    /// Where this store keeps its data, for console reports
    fn describe(&self) -> String;
}

// ============================================================================
// FILE STORE
// ============================================================================

/// JSON array at a well-known path. The persisted file stays readable by
/// anything that understands the default catalog format.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PackageStore for FileStore {
    fn load(&self) -> Result<Vec<PlanRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<PlanRecord> = serde_json::from_str(&raw).with_context(|| {
            format!("{} is not a valid package array", self.path.display())
        })?;
        Ok(records)
    }

    fn save(&mut self, records: &[PlanRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }

        // Write to a sibling temp file, then rename over the target. A
        // crash mid-write never leaves a half-written catalog behind.
        let json = serde_json::to_string_pretty(records)
            .context("failed to serialize packages")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} (file)", self.path.display())
    }
}

// ============================================================================
// SQLITE STORE
// ============================================================================

/// Audit event recorded on every save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEvent {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub record_count: usize,
}

impl SaveEvent {
    fn new(event_type: &str, record_count: usize) -> Self {
        SaveEvent {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type: event_type.to_string(),
            record_count,
        }
    }
}

/// SQLite-backed store. The `packages` table mirrors the record shape with
/// a `position` column preserving display order; `events` is an append-only
/// audit trail of every save.
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Open (or create) the database and ensure the schema exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let conn = Connection::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        // Enable WAL mode for crash recovery
        conn.pragma_update(None, "journal_mode", "WAL")?;
        setup_schema(&conn)?;

        Ok(SqliteStore { conn, path })
    }

    /// In-memory database, for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory db")?;
        setup_schema(&conn)?;
        Ok(SqliteStore {
            conn,
            path: PathBuf::from(":memory:"),
        })
    }

    /// Most recent audit events, newest first
    pub fn recent_events(&self, limit: usize) -> Result<Vec<SaveEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT event_id, timestamp, event_type, record_count
             FROM events ORDER BY id DESC LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut events = Vec::new();
        for row in rows {
            let (event_id, timestamp, event_type, record_count) = row?;
            let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                .with_context(|| format!("bad event timestamp '{}'", timestamp))?
                .with_timezone(&Utc);
            events.push(SaveEvent {
                event_id,
                timestamp,
                event_type,
                record_count: record_count as usize,
            });
        }
        Ok(events)
    }
}

impl PackageStore for SqliteStore {
    fn load(&self) -> Result<Vec<PlanRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, carrier, name, price, period, data, speed, hotspot, features, badge
             FROM packages ORDER BY position",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                carrier: row.get(1)?,
                name: row.get(2)?,
                price: row.get(3)?,
                period: row.get(4)?,
                data: row.get(5)?,
                speed: row.get(6)?,
                hotspot: row.get(7)?,
                features: row.get(8)?,
                badge: row.get(9)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.into_record()?);
        }
        Ok(records)
    }

    fn save(&mut self, records: &[PlanRecord]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM packages", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO packages (
                    id, position, carrier, name, price, period,
                    data, speed, hotspot, features, badge
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for (position, record) in records.iter().enumerate() {
                let features_json = serde_json::to_string(&record.features)
                    .context("failed to serialize features")?;
                stmt.execute(params![
                    record.id,
                    position as i64,
                    record.carrier.tag(),
                    record.name,
                    record.price,
                    record.period.tag(),
                    record.data,
                    record.speed,
                    record.hotspot,
                    features_json,
                    record.badge,
                ])?;
            }
        }

        let event = SaveEvent::new("catalog_saved", records.len());
        tx.execute(
            "INSERT INTO events (event_id, timestamp, event_type, record_count)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                event.event_id,
                event.timestamp.to_rfc3339(),
                event.event_type,
                event.record_count as i64,
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} (sqlite)", self.path.display())
    }
}

/// One row of the packages table, before tag parsing
struct StoredRow {
    id: String,
    carrier: String,
    name: String,
    price: f64,
    period: String,
    data: String,
    speed: String,
    hotspot: String,
    features: String,
    badge: Option<String>,
}

impl StoredRow {
    fn into_record(self) -> Result<PlanRecord> {
        let carrier = Carrier::from_tag(&self.carrier)
            .ok_or_else(|| anyhow!("unknown carrier tag '{}' in store", self.carrier))?;
        let period = Period::from_tag(&self.period)
            .ok_or_else(|| anyhow!("unknown period tag '{}' in store", self.period))?;
        let features: Vec<String> = serde_json::from_str(&self.features)
            .with_context(|| format!("bad features payload for '{}'", self.id))?;

        Ok(PlanRecord {
            id: self.id,
            carrier,
            name: self.name,
            price: self.price,
            period,
            data: self.data,
            speed: self.speed,
            hotspot: self.hotspot,
            features,
            badge: self.badge,
        })
    }
}

fn setup_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS packages (
            id TEXT PRIMARY KEY,
            position INTEGER NOT NULL,
            carrier TEXT NOT NULL,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            period TEXT NOT NULL,
            data TEXT NOT NULL,
            speed TEXT NOT NULL,
            hotspot TEXT NOT NULL,
            features TEXT NOT NULL,
            badge TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id TEXT UNIQUE NOT NULL,
            timestamp TEXT NOT NULL,
            event_type TEXT NOT NULL,
            record_count INTEGER NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_packages_position ON packages(position)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_packages_carrier ON packages(carrier)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_events_timestamp ON events(timestamp)",
        [],
    )?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
