// ── Calculation journal ──
//
// Append-only JSON-lines log of sizing runs. A side channel: callers decide
// whether a write failure matters.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::SizingRequest;
use crate::result::SizingResult;

/// One logged sizing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub timestamp: DateTime<Utc>,
    pub catalog_version: String,
    pub request: SizingRequest,
    pub scenario_used: String,
    pub ap_model: String,
    pub ap_count: u32,
    pub users_per_ap: u32,
    pub bandwidth_per_ap_mbps: u32,
    pub switch_model: Option<String>,
    pub switches_needed: Option<u32>,
    pub advisories: usize,
}

impl CalculationRecord {
    pub fn from_result(result: &SizingResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            catalog_version: result.catalog_version.clone(),
            request: result.request.clone(),
            scenario_used: result.scenario.key.clone(),
            ap_model: result.selected_ap().model_id().to_owned(),
            ap_count: result.recommended_ap_count(),
            users_per_ap: result.users_per_ap(),
            bandwidth_per_ap_mbps: result.bandwidth_per_ap_mbps(),
            switch_model: result.selected_switch().map(|s| s.model_id.clone()),
            switches_needed: result.switches_needed(),
            advisories: result.advisories.len(),
        }
    }
}

/// JSON-lines file of [`CalculationRecord`]s.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CoreError {
        CoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Append one record, creating the file and its directory on first use.
    pub fn append(&self, record: &CalculationRecord) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), "calculation recorded");
        Ok(())
    }

    /// Read every record back. Lines that do not parse are skipped.
    pub fn read_all(&self) -> Result<Vec<CalculationRecord>, CoreError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(line = index + 1, error = %e, "skipping malformed journal entry"),
            }
        }
        Ok(records)
    }
}
