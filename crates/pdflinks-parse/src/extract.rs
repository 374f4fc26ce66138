//! Hyperlink candidate extraction from raw PDF bytes.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Link-action pattern: `URI(` + a non-empty run without `)` + `)`.
static URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"URI\(([^)]+)\)").expect("URI pattern is a valid regex"));

/// Turns the bytes of one file into the link targets it contains.
///
/// Implementations must be deterministic: the same bytes always produce the
/// same URLs in the same order, each URL at most once.
pub trait LinkExtractor {
    fn extract(&self, bytes: &[u8]) -> Vec<String>;
}

/// Textual `URI(...)` matcher over Latin-1 decoded bytes.
///
/// Catches the literal-string form of PDF URI actions (`/URI(https://...)`).
/// Hex-string targets, compressed object streams and escaped parentheses
/// inside the URL are not recognized.
#[derive(Debug, Default, Clone, Copy)]
pub struct UriPatternExtractor;

impl UriPatternExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl LinkExtractor for UriPatternExtractor {
    fn extract(&self, bytes: &[u8]) -> Vec<String> {
        let text = decode_latin1(bytes);
        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for caps in URI_PATTERN.captures_iter(&text) {
            let Some(m) = caps.get(1) else { continue };
            let url = m.as_str();
            if seen.insert(url) {
                urls.push(url.to_string());
            }
        }

        urls
    }
}

/// Decode bytes as ISO-8859-1: each byte becomes exactly one `char`.
///
/// Never fails, whatever the input; pure-ASCII input is borrowed.
pub fn decode_latin1(bytes: &[u8]) -> Cow<'_, str> {
    encoding_rs::mem::decode_latin1(bytes)
}
