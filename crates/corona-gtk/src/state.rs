//! The selected index, kept across application restarts as a single integer.

use crate::config::project_dirs;
use corona::NO_SELECTION;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to determine data directory")]
    DataDirNotFound,
    #[error("State file error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_state_path() -> Result<PathBuf, StateError> {
    let proj_dirs = project_dirs().ok_or(StateError::DataDirNotFound)?;
    Ok(proj_dirs.data_dir().join("selection"))
}

/// Anything unreadable counts as no selection; the selector clamps the rest.
pub fn parse_selection(contents: &str) -> i32 {
    contents.trim().parse().unwrap_or(NO_SELECTION)
}

pub fn load_selection() -> i32 {
    get_state_path()
        .ok()
        .and_then(|path| fs_err::read_to_string(path).ok())
        .map_or(NO_SELECTION, |contents| parse_selection(&contents))
}

pub fn save_selection(index: i32) -> Result<(), StateError> {
    let path = get_state_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(&path, format!("{}\n", index))?;
    log::debug!("Saved selection {} to {}", index, path.display());
    Ok(())
}
