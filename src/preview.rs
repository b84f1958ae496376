use std::path::Path;

use anyhow::{bail, Result};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::db::{self, Records};

/// Print aligned previews of the departments and employees tables.
pub fn preview_tables(db_path: &Path) -> Result<()> {
    // rusqlite's default open would create a missing file; a preview of a
    // store that does not exist is an error instead
    if !db_path.exists() {
        bail!("no store at {}", db_path.display());
    }
    let conn = db::open(db_path)?;

    println!("\n{}", "=".repeat(50));
    println!("TABLE PREVIEWS");
    println!("{}", "=".repeat(50));

    println!("\nDEPARTMENTS:");
    println!("{}", render(&db::fetch_records(&conn, "departments")?));

    println!("\nEMPLOYEES:");
    println!("{}", render(&db::fetch_records(&conn, "employees")?));

    // println!("\nPROJECTS:");
    // println!("{}", render(&db::fetch_records(&conn, "projects")?));

    Ok(())
}

/// Render records as a plain aligned table: header row, no index column,
/// no border decoration.
fn render(records: &Records) -> String {
    let mut builder = Builder::default();
    builder.push_record(records.columns.clone());
    for row in &records.rows {
        builder.push_record(row.clone());
    }
    let mut table = builder.build();
    table.with(Style::blank());
    table.to_string()
}
