use crate::core::NormalizationError;

/// The parts of a page URL the normalizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageUrl<'a> {
    pub scheme: &'a str,
    /// Host without port
    pub host: &'a str,
    /// Everything after the host: path, query and fragment
    pub rest: &'a str,
}

impl<'a> PageUrl<'a> {
    pub fn parse(url: &'a str) -> Result<Self, NormalizationError> {
        let invalid = |reason: &str| NormalizationError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        if url.trim().is_empty() {
            return Err(invalid("url is empty"));
        }
        let (scheme, after_scheme) = url
            .split_once("://")
            .ok_or_else(|| invalid("missing scheme"))?;
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid("scheme must be http or https"));
        }

        let authority_end = after_scheme
            .find(['/', '?', '#'])
            .unwrap_or(after_scheme.len());
        let (authority, rest) = after_scheme.split_at(authority_end);
        let authority = authority.rsplit('@').next().unwrap_or(authority);
        let host = authority.split(':').next().unwrap_or(authority);
        if host.is_empty() {
            return Err(invalid("missing host"));
        }

        Ok(Self { scheme, host, rest })
    }

    pub fn is_https(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("https")
    }

    pub fn has_query(&self) -> bool {
        let without_fragment = self.rest.split('#').next().unwrap_or(self.rest);
        without_fragment.contains('?')
    }

    /// Hosts match ignoring case and a leading `www.`
    pub fn same_host(&self, other: &str) -> bool {
        strip_www(self.host).eq_ignore_ascii_case(strip_www(other))
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.")
        .or_else(|| host.strip_prefix("WWW."))
        .unwrap_or(host)
}

/// Host of an absolute or protocol-relative href, if it has one.
pub fn href_host(href: &str) -> Option<&str> {
    let after_scheme = match href.split_once("://") {
        Some((_, rest)) => rest,
        None => href.strip_prefix("//")?,
    };
    let end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    let authority = &after_scheme[..end];
    let authority = authority.rsplit('@').next().unwrap_or(authority);
    authority.split(':').next().filter(|host| !host.is_empty())
}
