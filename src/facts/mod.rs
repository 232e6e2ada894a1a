//! Page facts produced by the page parser.
//!
//! These are the raw, structured inputs of an audit. Everything optional
//! here is optional because the fetcher or parser may not have measured it;
//! the normalizer turns every `None` into an absent observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageFacts {
    /// Final URL after redirects
    pub url: String,
    /// When the page was fetched; the reference time for content age
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub transport: TransportFacts,
    #[serde(default)]
    pub site: SiteFacts,
    /// Parsed document; `None` means the parser produced nothing usable
    pub document: Option<Document>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportFacts {
    pub load_time_ms: Option<u64>,
    pub html_bytes: Option<u64>,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteFacts {
    /// `None` when the sitemap was not checked
    pub sitemap_present: Option<bool>,
    /// `None` when robots.txt was not checked
    pub robots: Option<RobotsFacts>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsFacts {
    pub present: bool,
    pub valid: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    /// Content attribute of `<meta name="viewport">`
    pub viewport: Option<String>,
    pub canonical: Option<String>,
    /// Headings in document order
    pub headings: Vec<Heading>,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    pub scripts: Vec<Script>,
    /// Elements carrying a `style` attribute
    pub inline_style_count: usize,
    pub json_ld_blocks: usize,
    pub open_graph_tags: usize,
    pub twitter_tags: usize,
    pub word_count: u64,
    pub first_paragraph: Option<String>,
    /// Precomputed readability metric (Flesch reading ease scale)
    pub readability_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: Option<String>,
    /// `None` when the alt attribute is missing entirely
    pub alt: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub src: Option<String>,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub defer: bool,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

impl Script {
    /// External script loaded without `async` or `defer`
    pub fn is_render_blocking(&self) -> bool {
        self.src.is_some() && !self.is_async && !self.defer
    }
}

impl PageFacts {
    pub fn new(url: impl Into<String>, fetched_at: DateTime<Utc>, document: Document) -> Self {
        Self {
            url: url.into(),
            fetched_at,
            transport: TransportFacts::default(),
            site: SiteFacts::default(),
            document: Some(document),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileSystem {
            message: "Failed to read page facts".to_string(),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;
        Self::from_json(&contents)
    }
}
