//! File-backed day store: one JSON file per date.
//!
//! # Responsibility
//! - Map each date to `<data_dir>/<YYYY-MM-DD>.json`.
//! - Apply the configured corruption policy and write mode.
//!
//! # Invariants
//! - A missing file is `Ok(None)`; any other read error is propagated.
//! - Quarantined files are renamed, never deleted.
//! - Log lines carry metadata only, never task text.

use super::{date_key, decode_record, encode_record, DayStore, StoreError, StoreResult};
use crate::config::{ConfigError, CorruptRecordPolicy, StoreConfig, WriteMode};
use crate::model::day::DayRecord;
use chrono::{Local, NaiveDate};
use log::{debug, error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

const RECORD_EXTENSION: &str = "json";

/// Day store persisting records under `StoreConfig::data_dir`.
#[derive(Debug, Clone)]
pub struct FileDayStore {
    config: StoreConfig,
}

impl FileDayStore {
    /// Creates a store after validating `config`.
    ///
    /// The data directory is created lazily on first save.
    pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the file path holding the record for `date`.
    pub fn record_path(&self, date: NaiveDate) -> PathBuf {
        self.config
            .data_dir
            .join(format!("{}.{RECORD_EXTENSION}", date_key(date)))
    }

    fn quarantine(&self, date: NaiveDate, path: &Path) -> StoreResult<PathBuf> {
        let target = quarantine_path(path);
        fs::rename(path, &target).map_err(|source| {
            error!(
                "event=day_quarantine module=store status=error date={} error={}",
                date_key(date),
                source
            );
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        warn!(
            "event=day_quarantine module=store status=ok date={} moved_to={}",
            date_key(date),
            target.display()
        );
        Ok(target)
    }
}

impl DayStore for FileDayStore {
    fn load(&self, date: NaiveDate) -> StoreResult<Option<DayRecord>> {
        let path = self.record_path(date);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=day_load module=store status=absent date={}",
                    date_key(date)
                );
                return Ok(None);
            }
            Err(source) => {
                error!(
                    "event=day_load module=store status=error date={} error_code=read_failed error={}",
                    date_key(date),
                    source
                );
                return Err(StoreError::Io { path, source });
            }
        };

        match decode_record(date, &bytes) {
            Ok(record) => {
                debug!(
                    "event=day_load module=store status=ok date={} task_count={}",
                    date_key(date),
                    record.len()
                );
                Ok(Some(record))
            }
            Err(err) => match self.config.corrupt_policy {
                CorruptRecordPolicy::FailFast => {
                    error!(
                        "event=day_load module=store status=error date={} error_code=malformed error={}",
                        date_key(date),
                        err
                    );
                    Err(err)
                }
                CorruptRecordPolicy::Quarantine => {
                    self.quarantine(date, &path)?;
                    Ok(None)
                }
            },
        }
    }

    fn save(&self, date: NaiveDate, record: &DayRecord) -> StoreResult<()> {
        let started_at = Instant::now();
        let path = self.record_path(date);
        let bytes = encode_record(record)?;

        let result = fs::create_dir_all(&self.config.data_dir)
            .map_err(|source| StoreError::Io {
                path: self.config.data_dir.clone(),
                source,
            })
            .and_then(|()| write_record(&path, &bytes, self.config.write_mode));

        match &result {
            Ok(()) => info!(
                "event=day_save module=store status=ok date={} task_count={} duration_ms={}",
                date_key(date),
                record.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=day_save module=store status=error date={} duration_ms={} error_code=write_failed error={}",
                date_key(date),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn default_task_count(&self) -> usize {
        self.config.default_task_count
    }
}

fn write_record(path: &Path, bytes: &[u8], mode: WriteMode) -> StoreResult<()> {
    match mode {
        WriteMode::Direct => fs::write(path, bytes).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
        WriteMode::TempThenRename => {
            let tmp_path = path.with_extension(format!("{RECORD_EXTENSION}.tmp"));
            fs::write(&tmp_path, bytes).map_err(|source| StoreError::Io {
                path: tmp_path.clone(),
                source,
            })?;
            fs::rename(&tmp_path, path).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn quarantine_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = Local::now().format("%Y%m%dT%H%M%S");
    let base = format!("{file_name}.corrupt-{stamp}");

    let mut candidate = path.with_file_name(&base);
    let mut suffix = 1;
    while candidate.exists() {
        candidate = path.with_file_name(format!("{base}-{suffix}"));
        suffix += 1;
    }
    candidate
}
