use super::{History, HistorySnapshot};
use crate::Result;
use crate::consolidate::Aggregates;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "   history";

const HISTORY_DIR: &str = "js";
const LATEST_FILE: &str = "latest.json";
const RECORD_PREFIX: &str = "history-";
const RECORD_SUFFIX: &str = ".json";

/// On-disk shape of a record
///
/// Records from older versions carry no `sequence` and may nest related aggregates,
/// as in `"violations": {"total": 3, "error": 1}`.
#[derive(Debug, Deserialize)]
struct StoredSnapshot {
    #[serde(default)]
    sequence: Option<u64>,
    avg: Map<String, Value>,
    sum: Map<String, Value>,
}

/// Reads and appends the snapshot series of one report destination.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: Utf8PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(destination: &Utf8Path) -> Self {
        Self {
            dir: destination.join(HISTORY_DIR),
        }
    }

    /// Directory holding the history records.
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    #[must_use]
    pub fn record_path(&self, sequence: u64) -> Utf8PathBuf {
        self.dir.join(format!("{RECORD_PREFIX}{sequence}{RECORD_SUFFIX}"))
    }

    #[must_use]
    pub fn latest_path(&self) -> Utf8PathBuf {
        self.dir.join(LATEST_FILE)
    }

    /// Load every snapshot, ordered by sequence number
    ///
    /// A destination without a history directory has an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be read or parsed, if a record's sequence
    /// disagrees with its filename, or if the series has a gap or a duplicate
    pub fn load(&self) -> Result<History> {
        let records = self.scan()?;
        let mut snapshots = Vec::with_capacity(records.len());

        for (file_sequence, path) in records {
            let text = fs::read_to_string(&path).into_app_err_with(|| format!("reading history record '{path}'"))?;
            let stored: StoredSnapshot =
                serde_json::from_str(&text).into_app_err_with(|| format!("parsing history record '{path}'"))?;

            let sequence = stored.sequence.unwrap_or(file_sequence);
            if sequence != file_sequence {
                bail!("history record '{path}' holds sequence {sequence}, expected {file_sequence}");
            }

            let avg = flatten_aggregates(stored.avg, &path)?;
            let sum = flatten_aggregates(stored.sum, &path)?;
            snapshots.push(HistorySnapshot::new(sequence, avg, sum));
        }

        let history = History::new(snapshots);
        for (expected, snapshot) in (1_u64..).zip(history.snapshots()) {
            if snapshot.sequence != expected {
                bail!(
                    "history in '{}' is not contiguous: expected record {expected}, found record {}",
                    self.dir,
                    snapshot.sequence
                );
            }
        }

        log::debug!(target: LOG_TARGET, "Loaded {} history record(s) from '{}'", history.len(), self.dir);
        Ok(history)
    }

    /// Append a snapshot numbered one past the existing records and refresh `latest.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the history directory cannot be created, if the record
    /// already exists, or if either file cannot be written
    pub fn append(&self, avg: &Aggregates, sum: &Aggregates) -> Result<HistorySnapshot> {
        fs::create_dir_all(&self.dir).into_app_err_with(|| format!("creating history directory '{}'", self.dir))?;

        let existing = u64::try_from(self.scan()?.len()).into_app_err("counting history records")?;
        let snapshot = HistorySnapshot::new(existing + 1, avg.clone(), sum.clone());
        let bytes = serde_json::to_vec_pretty(&snapshot).into_app_err("serializing history snapshot")?;

        let path = self.record_path(snapshot.sequence);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .into_app_err_with(|| format!("creating history record '{path}'"))?;
        file.write_all(&bytes).into_app_err_with(|| format!("writing history record '{path}'"))?;

        let latest = self.latest_path();
        fs::write(&latest, &bytes).into_app_err_with(|| format!("writing '{latest}'"))?;

        log::info!(target: LOG_TARGET, "Recorded history snapshot {} in '{path}'", snapshot.sequence);
        Ok(snapshot)
    }

    /// Numbered records present on disk, in no particular order.
    fn scan(&self) -> Result<Vec<(u64, Utf8PathBuf)>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir).into_app_err_with(|| format!("listing history directory '{}'", self.dir))? {
            let entry = entry.into_app_err_with(|| format!("listing history directory '{}'", self.dir))?;
            let Some(name) = entry.file_name().to_str().map(ToString::to_string) else {
                continue;
            };

            if let Some(sequence) = record_sequence(&name) {
                records.push((sequence, self.dir.join(name)));
            }
        }

        Ok(records)
    }
}

/// Flatten nested aggregates: `total` keeps the outer key, other entries append
/// their capitalized name (`violations.error` becomes `violationsError`).
fn flatten_aggregates(raw: Map<String, Value>, path: &Utf8Path) -> Result<Aggregates> {
    let mut aggregates = Aggregates::default();

    for (key, value) in raw {
        if let Value::Object(nested) = value {
            for (part, value) in nested {
                let flat = if part == "total" { key.clone() } else { format!("{key}{}", capitalize(&part)) };
                aggregates.set(&flat, aggregate_value(&value, &flat, path)?);
            }
        } else {
            aggregates.set(&key, aggregate_value(&value, &key, path)?);
        }
    }

    Ok(aggregates)
}

fn aggregate_value(value: &Value, key: &str, path: &Utf8Path) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| app_err!("history record '{path}' holds a non-numeric value for '{key}'"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Extract `N` from a `history-N.json` filename.
fn record_sequence(file_name: &str) -> Option<u64> {
    let digits = file_name.strip_prefix(RECORD_PREFIX)?.strip_suffix(RECORD_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}
