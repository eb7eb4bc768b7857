use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_vacaplan"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "vacaplan-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Config with the built-in holiday calendar off and a fixed Monday start.
pub fn write_plain_config(dir: &Path) {
    let cfg = r#"{
      "start_date": { "value": "2025-03-03", "description": "start" },
      "blocked_dates": { "value": "", "description": "blocked" },
      "weekend_policy": { "value": "saturday-sunday", "description": "weekend" },
      "holiday_calendar": { "value": "none", "description": "holidays" },
      "extra_holidays": { "value": "", "description": "extra" },
      "file_logging_enabled": { "value": "True", "description": "file logging" }
    }"#;
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_roster(dir: &Path, employees: &[(&str, &str, u32)]) -> PathBuf {
    let entries = employees
        .iter()
        .map(|(name, area, days)| {
            format!(r#"{{"name": "{name}", "area": "{area}", "entitled_days": {days}}}"#)
        })
        .collect::<Vec<_>>()
        .join(",\n");
    let path = dir.join("roster.json");
    fs::write(&path, format!("{{\"employees\": [\n{entries}\n]}}")).unwrap();
    path
}

pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// The row printed for `name`, split into trimmed cells.
pub fn row_for(stdout: &[u8], name: &str) -> Option<Vec<String>> {
    normalized_lines(stdout)
        .into_iter()
        .map(|l| l.split('|').map(|c| c.trim().to_string()).collect::<Vec<_>>())
        .find(|cells| cells.first().map(String::as_str) == Some(name))
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
