use crate::facts::Link;

use super::url::{href_host, PageUrl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
    /// Neither a navigable URL nor an ignorable scheme (e.g. `page.html`, `ftp:`)
    Unusual,
    /// Fragments, `javascript:`, `mailto:` and `tel:` links
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
    pub unusual: usize,
}

pub fn classify_link(href: &str, page: &PageUrl<'_>) -> LinkKind {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();

    if href.is_empty()
        || href.starts_with('#')
        || lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
    {
        return LinkKind::Ignored;
    }

    if href.starts_with("//") || lower.starts_with("http://") || lower.starts_with("https://") {
        return match href_host(href) {
            Some(host) if page.same_host(host) => LinkKind::Internal,
            Some(_) => LinkKind::External,
            None => LinkKind::Unusual,
        };
    }

    if href.starts_with('/') {
        return LinkKind::Internal;
    }

    LinkKind::Unusual
}

pub fn count_links(links: &[Link], page: &PageUrl<'_>) -> LinkCounts {
    links
        .iter()
        .fold(LinkCounts::default(), |mut counts, link| {
            match classify_link(&link.href, page) {
                LinkKind::Internal => counts.internal += 1,
                LinkKind::External => counts.external += 1,
                LinkKind::Unusual => counts.unusual += 1,
                LinkKind::Ignored => {}
            }
            counts
        })
}
