use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::task_type::TaskType;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    course TEXT NOT NULL,
    task_type TEXT NOT NULL,
    custom_type TEXT,
    due_date DATE NOT NULL,
    due_time TEXT NOT NULL DEFAULT '09:00',
    notes TEXT,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, course, task_type, custom_type, due_date, due_time, notes, completed)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, course = ?3, task_type = ?4, custom_type = ?5,
    due_date = ?6, due_time = ?7, notes = ?8, completed = ?9 WHERE id = ?1";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, course, task_type, custom_type, due_date, due_time, notes, completed, created_at FROM tasks";
const ORDER_UPCOMING: &str = "ORDER BY due_date ASC, due_time ASC";
const ORDER_COMPLETED: &str = "ORDER BY due_date DESC, due_time DESC";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Create a new task, returning its assigned ID
    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.course,
                task.task_type.name(),
                task.custom_type,
                task.due_date,
                task.due_time,
                task.notes,
                task.completed,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing task
    pub fn update(&mut self, task: &Task) -> Result<()> {
        let id = task.id.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(0)))?;
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                id,
                task.title,
                task.course,
                task.task_type.name(),
                task.custom_type,
                task.due_date,
                task.due_time,
                task.notes,
                task.completed,
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    /// Set only the completion flag
    pub fn set_completed(&mut self, id: i64, completed: bool) -> Result<()> {
        let affected = self.conn.execute(UPDATE_COMPLETED, params![id, completed])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFoundWithId(id)));
        }
        Ok(())
    }

    /// Delete a task, returning the number of affected rows
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }

    /// Fetch tasks matching a filter
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (query, bind) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_UPCOMING), Vec::new()),
            TaskFilter::Upcoming => (format!("{} WHERE completed = 0 {}", SELECT_TASKS, ORDER_UPCOMING), Vec::new()),
            TaskFilter::Completed => (format!("{} WHERE completed = 1 {}", SELECT_TASKS, ORDER_COMPLETED), Vec::new()),
            TaskFilter::ById(id) => (format!("{} WHERE id = ?1", SELECT_TASKS), vec![id]),
        };

        let mut stmt = self.conn.prepare(&query)?;
        let task_iter = stmt.query_map(rusqlite::params_from_iter(bind), Self::map_task)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Get a single task by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        Ok(self.fetch(TaskFilter::ById(id))?.into_iter().next())
    }

    fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
        let type_name: String = row.get(3)?;
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            course: row.get(2)?,
            task_type: TaskType::from_name(&type_name),
            custom_type: row.get(4)?,
            due_date: row.get(5)?,
            due_time: row.get(6)?,
            notes: row.get(7)?,
            completed: row.get(8)?,
            created_at: row.get(9)?,
        })
    }
}
