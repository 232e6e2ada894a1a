use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::{Signal, SignalKind, SignalOutcome, SignalProvider, SignalUnavailable, UnavailableReason};
use crate::core::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum SignalEntry {
    Unavailable { unavailable: UnavailableReason },
    Available(Signal),
}

/// Signals captured ahead of time by an external provider and stored as JSON.
///
/// ```json
/// {
///   "backlinks": { "referring_domains": 4, "total_backlinks": 31 },
///   "core_web_vitals": { "unavailable": "timeout" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalFile {
    entries: BTreeMap<SignalKind, SignalEntry>,
}

impl SignalFile {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileSystem {
            message: "Failed to read signals file".to_string(),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;
        Self::from_json(&contents)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SignalProvider for SignalFile {
    fn fetch_signal(&self, kind: SignalKind, _url: &str) -> SignalOutcome {
        match self.entries.get(&kind) {
            Some(SignalEntry::Available(signal)) => Ok(signal.clone()),
            Some(SignalEntry::Unavailable { unavailable }) => {
                Err(SignalUnavailable::new(kind, unavailable.clone()))
            }
            None => Err(SignalUnavailable::new(
                kind,
                UnavailableReason::Provider("not present in signals file".to_string()),
            )),
        }
    }
}
