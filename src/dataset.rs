use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::db;
use crate::logger::debug;

/// Fixed relative path of the store, matching what the assignment hands out.
pub const DB_FILE: &str = "sql_assignment.db";

/// Drop-and-recreate DDL. Drops go children first, creates go
/// dependency order: employees references departments, projects both.
const SCHEMA: &str = r#"
DROP TABLE IF EXISTS projects;
DROP TABLE IF EXISTS employees;
DROP TABLE IF EXISTS departments;

CREATE TABLE departments (
    department_id INTEGER PRIMARY KEY,
    department_name TEXT NOT NULL
);

CREATE TABLE employees (
    employee_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    manager_id INTEGER,
    department_id INTEGER,
    FOREIGN KEY (manager_id) REFERENCES employees(employee_id),
    FOREIGN KEY (department_id) REFERENCES departments(department_id)
);

CREATE TABLE projects (
    project_id INTEGER PRIMARY KEY,
    project_name TEXT NOT NULL,
    employee_id INTEGER,
    department_id INTEGER,
    FOREIGN KEY (employee_id) REFERENCES employees(employee_id),
    FOREIGN KEY (department_id) REFERENCES departments(department_id)
);
"#;

const DEPARTMENTS: [(i64, &str); 4] = [
    (1, "Technology"),
    (2, "Marketing"),
    (3, "Finance"),
    (4, "Human Resources"),
];

// (id, name, manager_id, department_id); managers have no manager
const EMPLOYEES: [(i64, &str, Option<i64>, i64); 10] = [
    (1, "Alice Johnson", None, 1),
    (2, "Bob Smith", Some(1), 1),
    (3, "Carol Davis", Some(1), 1),
    (4, "David Wilson", None, 2),
    (5, "Emma Brown", Some(4), 2),
    (6, "Frank Miller", None, 3),
    (7, "Grace Lee", Some(6), 3),
    (8, "Henry Taylor", Some(1), 1),
    (9, "Ivy Chen", None, 4),
    (10, "Jack Robinson", Some(9), 4),
];

// (id, name, employee_id, department_id); Bob Smith carries two projects so
// the assignment needs a double join to resolve assignees correctly
const PROJECTS: [(i64, &str, i64, i64); 8] = [
    (1, "AI Development", 2, 1),
    (2, "Web Platform", 3, 1),
    (3, "Mobile App", 8, 1),
    (4, "Brand Campaign", 5, 2),
    (5, "Budget Analysis", 7, 3),
    (6, "Cloud Migration", 2, 1),
    (7, "Social Media", 5, 2),
    (8, "Recruitment Tool", 10, 4),
];

/// Create (or fully replace) the assignment database at the fixed relative
/// path and print a summary. Returns the absolute path of the store.
pub fn create_assignment_database() -> Result<PathBuf> {
    create_at(Path::new(DB_FILE))
}

/// Same as [`create_assignment_database`] but at an explicit path.
///
/// The whole schema reset runs in one transaction so a failure mid-sequence
/// cannot leave a half-rebuilt store.
pub fn create_at(db_path: &Path) -> Result<PathBuf> {
    let mut conn = db::open(db_path)?;

    let tx = conn.transaction()?;
    debug("dataset: resetting schema");
    tx.execute_batch(SCHEMA)?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO departments (department_id, department_name) VALUES (?1, ?2)",
        )?;
        for (id, name) in DEPARTMENTS {
            stmt.execute(rusqlite::params![id, name])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO employees (employee_id, name, manager_id, department_id) \
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (id, name, manager_id, department_id) in EMPLOYEES {
            stmt.execute(rusqlite::params![id, name, manager_id, department_id])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO projects (project_id, project_name, employee_id, department_id) \
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (id, name, employee_id, department_id) in PROJECTS {
            stmt.execute(rusqlite::params![id, name, employee_id, department_id])?;
        }
    }
    tx.commit()?;
    debug("dataset: commit done");

    let abs = db_path
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", db_path.display()))?;

    println!("Database created successfully at: {}", abs.display());
    println!("\nTables created:");
    for table in ["departments", "employees", "projects"] {
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
        println!("- {}: {} records", table, count);
    }

    Ok(abs)
}
