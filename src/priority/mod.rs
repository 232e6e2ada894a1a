//! Bucket findings and rank the ones that triggered.
//!
//! Both stages are pure: they take findings in catalog declaration order and
//! return new collections without touching the input.

pub mod buckets;
pub mod ranking;

pub use buckets::{categorize, Buckets};
pub use ranking::{prioritize, priority_key, PrioritizedAction};
