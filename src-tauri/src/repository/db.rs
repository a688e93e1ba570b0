//! Database Connection and Setup
//!
//! Manages the SQLite database connection and migrations.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::info;

/// Database state wrapper
///
/// Starts empty so the app window can open before the database is ready;
/// the connection is filled in by a background task.
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the database at the given path and run migrations
pub fn init_db(db_path: &Path) -> Result<Connection, String> {
    let conn = Connection::open(db_path).map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;
    info!(path = %db_path.display(), "database initialized");

    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(mut rows) = stmt.query([]) else {
        return false;
    };
    while let Ok(Some(row)) = rows.next() {
        if let Ok(name) = row.get::<_, String>(1) {
            if name == column {
                return true;
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    // Goals table - create if not exists
    conn.execute(
        "CREATE TABLE IF NOT EXISTS goals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            color TEXT NOT NULL DEFAULT '#81c784',
            period_type TEXT NOT NULL DEFAULT 'free',
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    // Status column arrived after the initial schema
    if !column_exists(conn, "goals", "status") {
        conn.execute(
            "ALTER TABLE goals ADD COLUMN status TEXT NOT NULL DEFAULT 'active'",
            [],
        )
        .map_err(|e| format!("Failed to add status: {}", e))?;
    }

    // Tasks table - goal_id is intentionally not a foreign key; the
    // reference is weak and survives goal deletion
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            goal_id INTEGER,
            completed INTEGER NOT NULL DEFAULT 0,
            date TEXT NOT NULL,
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    // Evaluations table - one row per calendar day
    conn.execute(
        "CREATE TABLE IF NOT EXISTS evaluations (
            date TEXT PRIMARY KEY,
            evaluation_text TEXT NOT NULL,
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        )",
        [],
    )
    .map_err(|e| e.to_string())?;

    // Indexes for day-scoped queries
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_tasks_date ON tasks(date)",
        [],
    )
    .map_err(|e| e.to_string())?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_tasks_goal ON tasks(goal_id)",
        [],
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
