use crate::core::models::{Assignment, Placement, StartOrigin};
use crate::errors::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Flat result row; absent dates mean the employee is unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub name: String,
    pub area: String,
    pub entitled_days: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<StartOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unassigned_reason: Option<String>,
}

impl From<&Assignment> for AssignmentRecord {
    fn from(a: &Assignment) -> Self {
        let unassigned_reason = match &a.placement {
            Placement::Unassigned { reason, .. } => Some(reason.to_string()),
            Placement::Committed { .. } => None,
        };
        Self {
            name: a.name.clone(),
            area: a.area.clone(),
            entitled_days: a.entitled_days,
            start_date: a.start(),
            end_date: a.end(),
            origin: a.origin(),
            unassigned_reason,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultFile {
    pub search_base: NaiveDate,
    pub assignments: Vec<AssignmentRecord>,
}

pub fn save_assignments(
    search_base: NaiveDate,
    assignments: &[Assignment],
    path: &Path,
) -> Result<PathBuf> {
    let file = ResultFile {
        search_base,
        assignments: assignments.iter().map(AssignmentRecord::from).collect(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(&file)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

pub fn load_assignments(path: &Path) -> Result<ResultFile> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
