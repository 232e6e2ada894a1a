//! Optional external signals (backlinks, competitor keywords, Core Web Vitals).
//!
//! Signals come from third-party providers keyed by an API credential. The
//! engine never fetches them itself: a [`SignalProvider`] resolves them up
//! front and the audit receives a [`Signals`] map in which every entry is
//! either a [`Signal`] or an explicit [`SignalUnavailable`].

pub mod file;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::config::AuditOptions;

pub use file::SignalFile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Backlinks,
    CompetitorKeywords,
    CoreWebVitals,
}

impl SignalKind {
    pub const ALL: [SignalKind; 3] = [
        SignalKind::Backlinks,
        SignalKind::CompetitorKeywords,
        SignalKind::CoreWebVitals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Backlinks => "backlinks",
            SignalKind::CompetitorKeywords => "competitor keywords",
            SignalKind::CoreWebVitals => "Core Web Vitals",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload returned by a signal provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Signal {
    Backlinks {
        referring_domains: u64,
        total_backlinks: u64,
    },
    CompetitorKeywords {
        competitor_url: String,
        /// Keywords the competitor ranks for
        keywords: Vec<String>,
    },
    CoreWebVitals {
        /// Largest Contentful Paint
        lcp_ms: u64,
        /// Cumulative Layout Shift
        cls: f64,
        /// Interaction to Next Paint
        inp_ms: u64,
    },
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Backlinks { .. } => SignalKind::Backlinks,
            Signal::CompetitorKeywords { .. } => SignalKind::CompetitorKeywords,
            Signal::CoreWebVitals { .. } => SignalKind::CoreWebVitals,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// No API credential configured for the provider
    NoCredential,
    /// The audit options did not ask for this signal
    NotRequested,
    Timeout,
    Provider(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NoCredential => f.write_str("no API credential"),
            UnavailableReason::NotRequested => f.write_str("not requested"),
            UnavailableReason::Timeout => f.write_str("provider timed out"),
            UnavailableReason::Provider(message) => write!(f, "provider error: {message}"),
        }
    }
}

/// An optional external signal could not be obtained. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} signal unavailable ({reason})")]
pub struct SignalUnavailable {
    pub kind: SignalKind,
    pub reason: UnavailableReason,
}

impl SignalUnavailable {
    pub fn new(kind: SignalKind, reason: UnavailableReason) -> Self {
        Self { kind, reason }
    }
}

pub type SignalOutcome = Result<Signal, SignalUnavailable>;

/// Resolved signals for one audit. A kind missing from the map is treated
/// the same as an explicit `NotRequested` outcome.
pub type Signals = BTreeMap<SignalKind, SignalOutcome>;

/// Source of external signals, implemented outside the engine.
pub trait SignalProvider: Sync {
    fn fetch_signal(&self, kind: SignalKind, url: &str) -> SignalOutcome;
}

/// Provider used when no API credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl SignalProvider for NoCredentials {
    fn fetch_signal(&self, kind: SignalKind, _url: &str) -> SignalOutcome {
        Err(SignalUnavailable::new(kind, UnavailableReason::NoCredential))
    }
}

/// Which signal kinds an audit with these options wants.
///
/// Core Web Vitals are slow to collect and only requested in deep mode;
/// competitor keywords need a comparison URL.
pub fn requested_kinds(options: &AuditOptions) -> Vec<SignalKind> {
    SignalKind::ALL
        .into_iter()
        .filter(|kind| match kind {
            SignalKind::Backlinks => true,
            SignalKind::CompetitorKeywords => options.compare_url.is_some(),
            SignalKind::CoreWebVitals => options.deep,
        })
        .collect()
}

/// Resolve every requested signal through `provider`.
pub fn collect_signals(provider: &dyn SignalProvider, options: &AuditOptions, url: &str) -> Signals {
    requested_kinds(options)
        .into_iter()
        .map(|kind| {
            let outcome = provider.fetch_signal(kind, url);
            if let Err(ref unavailable) = outcome {
                tracing::debug!(%kind, reason = %unavailable.reason, "signal unavailable");
            }
            (kind, outcome)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_kinds_follow_options() {
        let options = AuditOptions::default();
        assert_eq!(requested_kinds(&options), vec![SignalKind::Backlinks]);

        let options = AuditOptions {
            deep: true,
            compare_url: Some("https://rival.example".into()),
            ..AuditOptions::default()
        };
        assert_eq!(requested_kinds(&options), SignalKind::ALL.to_vec());
    }

    #[test]
    fn test_no_credentials_reports_every_kind_unavailable() {
        let options = AuditOptions {
            deep: true,
            ..AuditOptions::default()
        };
        let signals = collect_signals(&NoCredentials, &options, "https://example.com");
        assert_eq!(signals.len(), 2);
        for (kind, outcome) in &signals {
            let err = outcome.as_ref().unwrap_err();
            assert_eq!(err.kind, *kind);
            assert_eq!(err.reason, UnavailableReason::NoCredential);
        }
    }

    #[test]
    fn test_signal_unavailable_message() {
        let err = SignalUnavailable::new(SignalKind::Backlinks, UnavailableReason::NoCredential);
        assert_eq!(err.to_string(), "backlinks signal unavailable (no API credential)");
    }
}
