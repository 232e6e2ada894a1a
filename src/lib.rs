//! SEO rule evaluation and prioritization.
//!
//! Parsed page facts and external signals are normalized into a flat
//! observation set, checked against a versioned rule catalog, scored,
//! categorized and ranked into an action plan.

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod facts;
pub mod formatting;
pub mod io;
pub mod normalize;
pub mod observability;
pub mod observation;
pub mod output;
pub mod priority;
pub mod rules;
pub mod scoring;
pub mod signals;

// Re-export commonly used types
pub use crate::core::{
    Category, Effort, Error, Finding, Impact, NormalizationError, Result, Severity, SkippedRule,
};

pub use crate::audit::{
    assemble, audit_page, compare, AuditResult, AuditSummary, Auditor, Comparison,
};

pub use crate::config::{AuditOptions, AuditSettings, PresetLevel, ScoringWeights, Thresholds};

pub use crate::facts::{Document, Heading, Image, Link, PageFacts, Script};

pub use crate::normalize::normalize;

pub use crate::observation::{AbsentReason, ObservationSet, ObservationValue};

pub use crate::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::priority::{categorize, prioritize, Buckets, PrioritizedAction};

pub use crate::rules::{evaluate, Evaluation, Rule, RuleCatalog, RuleContext};

pub use crate::scoring::score;

pub use crate::signals::{
    collect_signals, NoCredentials, Signal, SignalFile, SignalKind, SignalProvider,
    SignalUnavailable, Signals, UnavailableReason,
};
