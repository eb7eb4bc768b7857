use crate::core::models::Employee;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk roster: already-parsed employee records.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

pub fn load_roster(path: &Path) -> Result<Vec<Employee>> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::parse(format!("Failed to read roster {}: {}", path.display(), e)))?;
    parse_roster(&text)
}

pub fn parse_roster(text: &str) -> Result<Vec<Employee>> {
    let file: RosterFile = serde_json::from_str(text)?;
    file.employees
        .into_iter()
        .map(|e| {
            let name = e.name.trim();
            if name.is_empty() {
                return Err(Error::parse("Roster entry with an empty name"));
            }
            let mut normalized = Employee::new(name, Some(e.area.as_str()), e.entitled_days);
            normalized.forced_start = e.forced_start;
            Ok(normalized)
        })
        .collect()
}
