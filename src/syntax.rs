//! Marker syntax shared by region extraction and rendering.
//!
//! Tag keywords match case-insensitively and region bodies may span multiple
//! lines. Captured names are passed through to the data source verbatim.
use crate::span::Span;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern matching a field marker, `<field name="NAME"/>`.
pub const FIELD_PATTERN: &str = r#"(?i)<field name="(.*?)"/>"#;

/// Pattern matching an item marker, `<item name="NAME"/>`.
pub const ITEM_PATTERN: &str = r#"(?i)<item name="(.*?)"/>"#;

/// Pattern matching a region block, `<region name="NAME">BODY</region>`.
pub const REGION_PATTERN: &str = r#"(?is)<region name="(.*?)">(.*?)</region>"#;

static FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(FIELD_PATTERN).expect("field pattern should compile"));

static ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(ITEM_PATTERN).expect("item pattern should compile"));

static REGION: Lazy<Regex> =
    Lazy::new(|| Regex::new(REGION_PATTERN).expect("region pattern should compile"));

/// A matched field or item marker within source text.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Marker<'source> {
    /// The full matched marker text.
    pub text: &'source str,
    /// The captured name, verbatim.
    pub name: &'source str,
    /// Location of the marker within the source.
    pub span: Span,
}

/// A matched region block within source text.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RegionBlock<'source> {
    /// The full matched block, open and close tags included.
    pub text: &'source str,
    /// The captured name, verbatim.
    pub name: &'source str,
    /// The captured body, open and close tags excluded.
    pub body: &'source str,
    /// Location of the block within the source.
    pub span: Span,
}

/// Return every field marker in the given source, in order of appearance.
pub fn field_markers(source: &str) -> Vec<Marker<'_>> {
    scan(&FIELD, source)
}

/// Return every item marker in the given source, in order of appearance.
pub fn item_markers(source: &str) -> Vec<Marker<'_>> {
    scan(&ITEM, source)
}

/// Return every region block in the given source, in order of appearance.
pub fn region_blocks(source: &str) -> Vec<RegionBlock<'_>> {
    REGION
        .captures_iter(source)
        .map(|capture| {
            let all = capture.get(0).expect("whole match should always be present");
            let span = Span::from(all.range());
            RegionBlock {
                text: span.literal(source),
                name: capture.get(1).map_or("", |m| m.as_str()),
                body: capture.get(2).map_or("", |m| m.as_str()),
                span,
            }
        })
        .collect()
}

fn scan<'source>(regex: &Regex, source: &'source str) -> Vec<Marker<'source>> {
    regex
        .captures_iter(source)
        .map(|capture| {
            let all = capture.get(0).expect("whole match should always be present");
            let span = Span::from(all.range());
            Marker {
                text: span.literal(source),
                name: capture.get(1).map_or("", |m| m.as_str()),
                span,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_markers() {
        let markers = field_markers(r#"a <field name="One"/> b <field name="Two"/>"#);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].name, "One");
        assert_eq!(markers[0].text, r#"<field name="One"/>"#);
        assert_eq!(markers[1].name, "Two");
    }

    #[test]
    fn test_lazy_name_capture() {
        // A greedy capture would swallow both names into one match.
        let markers = item_markers(r#"<item name="A"/><item name="B"/>"#);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].name, "A");
        assert_eq!(markers[1].name, "B");
    }

    #[test]
    fn test_case_insensitive_tag() {
        let markers = field_markers(r#"<FIELD NAME="MixedCase"/>"#);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "MixedCase");
    }

    #[test]
    fn test_malformed_marker_no_match() {
        assert!(field_markers(r#"<field name="X">"#).is_empty());
        assert!(item_markers(r#"<item name="X" />"#).is_empty());
    }

    #[test]
    fn test_region_blocks_multiline() {
        let source = "<region name=\"Row\">\n<td><field name=\"V\"/></td>\n</region>";
        let blocks = region_blocks(source);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "Row");
        assert_eq!(blocks[0].body, "\n<td><field name=\"V\"/></td>\n");
        assert_eq!(blocks[0].span, Span::new(0..source.len()));
    }

    #[test]
    fn test_marker_span() {
        let source = r#"ab<item name="R"/>"#;
        let markers = item_markers(source);

        assert_eq!(markers[0].span, Span::new(2..source.len()));
        assert_eq!(markers[0].span.literal(source), markers[0].text);
    }
}
