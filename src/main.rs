mod dataset;
mod db;
mod logger;
mod preview;

use std::path::PathBuf;

use anyhow::Result;

use crate::logger::error;

const APP_NAME: &str = "assignmentdb";

/// Log file location under the OS config directory.
fn app_log_path() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs_next::home_dir().map(|h| h.join(".config"))
    } else {
        dirs_next::config_dir()
    }?;
    Some(base.join(APP_NAME).join("assignmentdb.log"))
}

fn main() -> Result<()> {
    if let Some(log_path) = app_log_path() {
        let _ = logger::init(log_path);
    }

    let result = run();
    if let Err(err) = &result {
        error(&format!("fatal error: {:?}", err));
    }
    result
}

fn run() -> Result<()> {
    let db_path = dataset::create_assignment_database()?;
    preview::preview_tables(&db_path)?;
    Ok(())
}
