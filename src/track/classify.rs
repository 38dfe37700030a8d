//! Source classification: decide which track variant a raw locator gets.
//!
//! The classifier is a pure function of the locator string and the configured
//! provider namespaces. It is total: anything that does not match a provider
//! domain is a local source, including locators we cannot parse at all.

/// Where a track's audio comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackSource {
    /// A local audio source: a file path or any other locator the audio
    /// output can open directly.
    Local { locator: String },
    /// A streaming-provider identifier; metadata and the stream locator
    /// arrive later through the resolver.
    Remote { identifier: String },
}

impl TrackSource {
    /// The raw locator string, regardless of variant.
    pub fn locator(&self) -> &str {
        match self {
            TrackSource::Local { locator } => locator,
            TrackSource::Remote { identifier } => identifier,
        }
    }
}

/// Classify `locator` against the configured provider domain namespaces.
///
/// A locator whose host is a provider domain (or a subdomain of one) becomes
/// `Remote`; everything else becomes `Local`.
pub fn classify(locator: &str, providers: &[String]) -> TrackSource {
    let trimmed = locator.trim();

    if let Some(host) = host_of(trimmed) {
        let host = host.to_ascii_lowercase();
        for provider in providers {
            let provider = provider.trim().trim_start_matches('.').to_ascii_lowercase();
            if provider.is_empty() {
                continue;
            }
            if host == provider || host.ends_with(&format!(".{provider}")) {
                return TrackSource::Remote {
                    identifier: trimmed.to_string(),
                };
            }
        }
    }

    TrackSource::Local {
        locator: locator.to_string(),
    }
}

/// Extract the host component of a URL-ish locator, if there is one.
///
/// Accepts both `scheme://host/rest` and bare `host/rest` forms, so
/// `soundcloud.com/artist/song` classifies the same as the full URL.
fn host_of(locator: &str) -> Option<&str> {
    let rest = match locator.split_once("://") {
        Some((scheme, rest)) => {
            if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric()) {
                return None;
            }
            rest
        }
        None => locator,
    };

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    // Hosts have at least one dot and no whitespace. A bare filename like
    // "song.mp3" does pass this test, but it never matches a provider
    // domain, so it falls through to the local default anyway.
    if host.is_empty() || host.contains(char::is_whitespace) || !host.contains('.') {
        None
    } else {
        Some(host)
    }
}
