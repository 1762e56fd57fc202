//! Topic repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Read all `topics` rows as strictly typed records.
//! - Provide the insert path used by seeding and import tooling.
//! - Keep SQL details and ordering behavior inside the repository boundary.
//!
//! # Invariants
//! - `fetch_all` delivers rows ordered `name COLLATE NOCASE, id`, which
//!   fixes the sibling presentation order of the materialized forest.
//! - Reads never mutate the source.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::topic::{TopicId, TopicRecord};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TOPIC_SELECT_SQL: &str = "SELECT
    id,
    parent_id,
    name,
    description
FROM topics";

/// Result type used by topic repository operations.
pub type TopicRepoResult<T> = Result<T, TopicRepoError>;

/// Errors from topic repository operations.
#[derive(Debug)]
pub enum TopicRepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for TopicRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "topic repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "topic repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "topic repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for TopicRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for TopicRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for TopicRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read contract the forest loader consumes.
///
/// Kept as a trait so loader and service tests can run against in-memory
/// fakes without a database.
pub trait TopicRepository {
    /// Reads every topic row. Delivery order fixes sibling order downstream.
    fn fetch_all(&self) -> TopicRepoResult<Vec<TopicRecord>>;
}

/// SQLite-backed topic repository.
#[derive(Debug)]
pub struct SqliteTopicRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTopicRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> TopicRepoResult<Self> {
        ensure_topic_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Inserts one topic and returns its generated id.
    ///
    /// Used by the seeding path; the viewer itself never writes topics.
    pub fn insert_topic(
        &self,
        parent_id: Option<TopicId>,
        name: &str,
        description: &str,
    ) -> TopicRepoResult<TopicId> {
        self.conn.execute(
            "INSERT INTO topics (parent_id, name, description) VALUES (?1, ?2, ?3);",
            params![parent_id, name, description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Counts all topic rows.
    pub fn count_topics(&self) -> TopicRepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM topics;", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl TopicRepository for SqliteTopicRepository<'_> {
    fn fetch_all(&self) -> TopicRepoResult<Vec<TopicRecord>> {
        let sql = format!("{TOPIC_SELECT_SQL} ORDER BY name COLLATE NOCASE ASC, id ASC;");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_topic_row(row)?);
        }
        Ok(records)
    }
}

fn parse_topic_row(row: &Row<'_>) -> TopicRepoResult<TopicRecord> {
    Ok(TopicRecord {
        id: row.get("id")?,
        parent_id: row.get("parent_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}

fn ensure_topic_connection_ready(conn: &Connection) -> TopicRepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(TopicRepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "topics")? {
        return Err(TopicRepoError::MissingRequiredTable("topics"));
    }

    for column in ["id", "parent_id", "name", "description"] {
        if !table_has_column(conn, "topics", column)? {
            return Err(TopicRepoError::MissingRequiredColumn {
                table: "topics",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> TopicRepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> TopicRepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
