//! JSON file record gateway and snapshot backups.
//!
//! # Responsibility
//! - Load and save the `{tasks, goals}` document at one file path.
//! - Write timestamped backup copies on request.
//!
//! # Invariants
//! - A missing data file loads as empty collections, not as an error.
//! - Saves go through a sibling temp file and a rename, so a failed write
//!   never leaves a truncated data file behind.
//! - An undecodable data file is copied to `<name>.corrupt` before the
//!   decode error is returned, so a later save cannot destroy its bytes.
//!
//! # See also
//! - `service::record_store` for rollback on save failure.

use crate::calendar::backup_stamp;
use crate::model::goal::Goal;
use crate::model::task::Task;
use crate::repo::gateway::{encode_records, GatewayError, GatewayResult, RecordGateway, RecordSet};
use chrono::NaiveDateTime;
use log::{error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

const TEMP_SUFFIX: &str = "tmp";
const CORRUPT_SUFFIX: &str = "corrupt";

/// File-backed gateway for the persisted record document.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an undecodable data file is preserved.
    pub fn corrupt_copy_path(&self) -> PathBuf {
        self.sibling_path(CORRUPT_SUFFIX)
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Copies the unreadable data file aside; `None` when the copy fails.
    fn preserve_corrupt_file(&self) -> Option<PathBuf> {
        let target = self.corrupt_copy_path();
        match fs::copy(&self.path, &target) {
            Ok(_) => {
                warn!("event=records_preserve module=repo status=ok target=corrupt_copy");
                Some(target)
            }
            Err(err) => {
                error!(
                    "event=records_preserve module=repo status=error error_code=copy_failed error={}",
                    err
                );
                None
            }
        }
    }
}

impl RecordGateway for JsonFileGateway {
    fn load(&self) -> GatewayResult<RecordSet> {
        let started_at = Instant::now();
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=records_load module=repo status=ok source=missing_file tasks=0 goals=0");
                return Ok(RecordSet::default());
            }
            Err(source) => {
                error!(
                    "event=records_load module=repo status=error error_code=read_failed error={}",
                    source
                );
                return Err(GatewayError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records: RecordSet = serde_json::from_slice(&bytes).map_err(|source| {
            error!(
                "event=records_load module=repo status=error error_code=decode_failed error={}",
                source
            );
            GatewayError::Decode {
                path: self.path.clone(),
                source,
                preserved: self.preserve_corrupt_file(),
            }
        })?;

        info!(
            "event=records_load module=repo status=ok tasks={} goals={} duration_ms={}",
            records.tasks.len(),
            records.goals.len(),
            started_at.elapsed().as_millis()
        );
        Ok(records)
    }

    fn save(&mut self, tasks: &[Task], goals: &[Goal]) -> GatewayResult<()> {
        let started_at = Instant::now();
        let bytes = encode_records(tasks, goals)?;
        let temp_path = self.sibling_path(TEMP_SUFFIX);

        write_file(&temp_path, &bytes)?;
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            error!(
                "event=records_save module=repo status=error error_code=rename_failed error={}",
                source
            );
            return Err(GatewayError::Io {
                path: self.path.clone(),
                source,
            });
        }

        info!(
            "event=records_save module=repo status=ok tasks={} goals={} duration_ms={}",
            tasks.len(),
            goals.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

/// Writes `backup_YYYYMMDD_HHMMSS.json` into `dir` and returns its path.
///
/// The backup uses the same layout as the data file, so it can be loaded
/// with a `JsonFileGateway`.
pub fn write_backup(
    dir: &Path,
    tasks: &[Task],
    goals: &[Goal],
    now: NaiveDateTime,
) -> GatewayResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| GatewayError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(format!("backup_{}.json", backup_stamp(now)));
    let bytes = encode_records(tasks, goals)?;
    write_file(&path, &bytes)?;
    info!(
        "event=records_backup module=repo status=ok tasks={} goals={}",
        tasks.len(),
        goals.len()
    );
    Ok(path)
}

fn write_file(path: &Path, bytes: &[u8]) -> GatewayResult<()> {
    fs::write(path, bytes).map_err(|source| {
        error!(
            "event=records_write module=repo status=error error_code=write_failed error={}",
            source
        );
        GatewayError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}
