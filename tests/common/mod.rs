// Shared fixtures for seoaudit integration tests
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use seoaudit::facts::{Document, Heading, Image, Link, PageFacts, RobotsFacts, Script};
use std::path::{Path, PathBuf};

pub const PAGE_URL: &str = "https://example.com/coffee/espresso-beans";

/// A page that passes every rule the default options make applicable.
pub fn healthy_document() -> Document {
    Document {
        title: Some("Fresh Espresso Beans Roasted Weekly | Example Roastery".into()),
        meta_description: Some(
            "Small-batch espresso beans roasted every Monday and shipped the same day. \
             Single origins, house blends and brewing guides for home baristas."
                .into(),
        ),
        viewport: Some("width=device-width, initial-scale=1".into()),
        canonical: Some(PAGE_URL.into()),
        headings: vec![
            Heading::new(1, "Espresso beans"),
            Heading::new(2, "Single origins"),
            Heading::new(3, "Ethiopia"),
            Heading::new(2, "Brewing guides"),
        ],
        images: vec![Image {
            src: Some("/img/beans.jpg".into()),
            alt: Some("Freshly roasted espresso beans".into()),
        }],
        links: vec![
            Link::new("/coffee"),
            Link::new("/coffee/filter"),
            Link::new("https://example.com/about"),
            Link::new("https://www.sca.coffee/research"),
            Link::new("#reviews"),
        ],
        scripts: vec![Script {
            src: Some("/js/app.js".into()),
            is_async: false,
            defer: true,
        }],
        inline_style_count: 2,
        json_ld_blocks: 1,
        open_graph_tags: 4,
        twitter_tags: 2,
        word_count: 820,
        first_paragraph: Some("Our espresso beans are roasted weekly in small batches.".into()),
        readability_score: Some(68.5),
    }
}

pub fn page(document: Document) -> PageFacts {
    let mut facts = PageFacts::new(
        PAGE_URL,
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        document,
    );
    facts.transport.load_time_ms = Some(1200);
    facts.transport.html_bytes = Some(48 * 1024);
    facts.transport.last_modified = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    facts.site.sitemap_present = Some(true);
    facts.site.robots = Some(RobotsFacts {
        present: true,
        valid: true,
    });
    facts
}

pub fn healthy_page() -> PageFacts {
    page(healthy_document())
}

/// No title, no meta description, no H1, 7 images without alt, 234 words.
pub fn neglected_page() -> PageFacts {
    page(Document {
        title: None,
        meta_description: None,
        headings: vec![Heading::new(2, "Our products")],
        images: (0..7)
            .map(|i| Image {
                src: Some(format!("/img/{i}.jpg")),
                alt: None,
            })
            .collect(),
        word_count: 234,
        ..healthy_document()
    })
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
