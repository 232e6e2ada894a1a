//! Normalized observations: one typed fact per stable key.
//!
//! Rules never look at `PageFacts` directly. They read observations through
//! the typed accessors on [`ObservationSet`], which fail with [`Missing`]
//! when a value is absent so a rule can bail out with `?` and be skipped.

pub mod keys;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::NormalizationError;
use crate::signals::SignalKind;

/// Why an observation carries no value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AbsentReason {
    /// The fetcher or parser did not measure it
    NotCollected,
    /// An audit option it depends on is not set
    NotConfigured { option: String },
    /// The external signal feeding it could not be obtained
    SignalUnavailable { kind: SignalKind, detail: String },
    /// A precondition does not hold (e.g. no title, so no title length)
    NotApplicable { requires: String },
}

impl fmt::Display for AbsentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsentReason::NotCollected => f.write_str("not measured"),
            AbsentReason::NotConfigured { option } => write!(f, "{option} not configured"),
            AbsentReason::SignalUnavailable { kind, detail } => {
                write!(f, "{kind} signal unavailable ({detail})")
            }
            AbsentReason::NotApplicable { requires } => write!(f, "requires {requires}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    Absent(AbsentReason),
}

impl ObservationValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, ObservationValue::Absent(_))
    }

    fn type_name(&self) -> &'static str {
        match self {
            ObservationValue::Bool(_) => "bool",
            ObservationValue::Int(_) => "int",
            ObservationValue::Float(_) => "float",
            ObservationValue::Text(_) => "text",
            ObservationValue::List(_) => "list",
            ObservationValue::Absent(_) => "absent",
        }
    }
}

impl From<bool> for ObservationValue {
    fn from(value: bool) -> Self {
        ObservationValue::Bool(value)
    }
}

impl From<i64> for ObservationValue {
    fn from(value: i64) -> Self {
        ObservationValue::Int(value)
    }
}

impl From<usize> for ObservationValue {
    fn from(value: usize) -> Self {
        ObservationValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u64> for ObservationValue {
    fn from(value: u64) -> Self {
        ObservationValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ObservationValue {
    fn from(value: f64) -> Self {
        ObservationValue::Float(value)
    }
}

impl From<String> for ObservationValue {
    fn from(value: String) -> Self {
        ObservationValue::Text(value)
    }
}

impl From<Vec<String>> for ObservationValue {
    fn from(value: Vec<String>) -> Self {
        ObservationValue::List(value)
    }
}

impl From<AbsentReason> for ObservationValue {
    fn from(reason: AbsentReason) -> Self {
        ObservationValue::Absent(reason)
    }
}

/// A required observation had no usable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Missing {
    pub key: String,
    pub reason: AbsentReason,
}

/// Immutable-after-construction set of observations with unique keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationSet {
    values: BTreeMap<String, ObservationValue>,
}

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation. Keys are unique within a set.
    pub fn insert(
        &mut self,
        key: &str,
        value: impl Into<ObservationValue>,
    ) -> Result<(), NormalizationError> {
        if self.values.contains_key(key) {
            return Err(NormalizationError::DuplicateObservation(key.to_string()));
        }
        self.values.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&ObservationValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObservationValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn bool(&self, key: &str) -> Result<bool, Missing> {
        match self.lookup(key)? {
            ObservationValue::Bool(value) => Ok(*value),
            other => Err(mismatch(key, "bool", other)),
        }
    }

    pub fn int(&self, key: &str) -> Result<i64, Missing> {
        match self.lookup(key)? {
            ObservationValue::Int(value) => Ok(*value),
            other => Err(mismatch(key, "int", other)),
        }
    }

    /// Floats accept integer observations as well.
    pub fn float(&self, key: &str) -> Result<f64, Missing> {
        match self.lookup(key)? {
            ObservationValue::Float(value) => Ok(*value),
            ObservationValue::Int(value) => Ok(*value as f64),
            other => Err(mismatch(key, "float", other)),
        }
    }

    pub fn text(&self, key: &str) -> Result<&str, Missing> {
        match self.lookup(key)? {
            ObservationValue::Text(value) => Ok(value),
            other => Err(mismatch(key, "text", other)),
        }
    }

    pub fn list(&self, key: &str) -> Result<&[String], Missing> {
        match self.lookup(key)? {
            ObservationValue::List(values) => Ok(values),
            other => Err(mismatch(key, "list", other)),
        }
    }

    fn lookup(&self, key: &str) -> Result<&ObservationValue, Missing> {
        match self.values.get(key) {
            Some(ObservationValue::Absent(reason)) => Err(Missing {
                key: key.to_string(),
                reason: reason.clone(),
            }),
            Some(value) => Ok(value),
            None => {
                tracing::warn!(key, "rule read an observation that was never produced");
                Err(Missing {
                    key: key.to_string(),
                    reason: AbsentReason::NotCollected,
                })
            }
        }
    }
}

fn mismatch(key: &str, expected: &str, found: &ObservationValue) -> Missing {
    tracing::warn!(
        key,
        expected,
        found = found.type_name(),
        "observation has unexpected type"
    );
    Missing {
        key: key.to_string(),
        reason: AbsentReason::NotCollected,
    }
}
