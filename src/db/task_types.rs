use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

const SCHEMA_TASK_TYPES: &str = "CREATE TABLE IF NOT EXISTS custom_task_types (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    color TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TYPE: &str = "INSERT INTO custom_task_types (name, color) VALUES (?1, ?2)";
const DELETE_TYPE: &str = "DELETE FROM custom_task_types WHERE id = ?1";
const SELECT_ALL_TYPES: &str = "SELECT * FROM custom_task_types ORDER BY name";
const SELECT_TYPE_BY_NAME: &str = "SELECT * FROM custom_task_types WHERE name = ?1";

/// User-defined task kind with its badge color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTaskType {
    pub id: Option<i64>,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Option<String>,
}

impl CustomTaskType {
    pub fn new(name: String, color: Option<String>) -> Self {
        Self {
            id: None,
            name,
            color,
            created_at: None,
        }
    }
}

pub struct TaskTypes {
    conn: Connection,
}

impl TaskTypes {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASK_TYPES, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new custom task type
    pub fn create(&mut self, task_type: &CustomTaskType) -> Result<i64> {
        self.conn.execute(INSERT_TYPE, params![task_type.name, task_type.color])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Delete a custom task type
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TYPE, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TypeNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Get all custom task types
    pub fn list(&mut self) -> Result<Vec<CustomTaskType>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TYPES)?;
        let type_iter = stmt.query_map([], |row| {
            Ok(CustomTaskType {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;

        let mut types = Vec::new();
        for task_type in type_iter {
            types.push(task_type?);
        }
        Ok(types)
    }

    /// Get a custom task type by name
    pub fn get_by_name(&mut self, name: &str) -> Result<Option<CustomTaskType>> {
        self.conn
            .query_row(SELECT_TYPE_BY_NAME, params![name], |row| {
                Ok(CustomTaskType {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }
}
