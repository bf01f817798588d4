//! Boundary adapter for factor strings.
//!
//! The classification service tags each factor by prefixing it with an emoji
//! or symbol. This module is the only place that knows about those glyphs;
//! everything past it works with `Factor { tag, text }`.

use crate::app::domain::verdict::{Factor, FactorTag};

const FLAG_MARKERS: &[char] = &['\u{1f6a9}', '\u{26a0}', '\u{274c}', '\u{2717}'];
const CHECK_MARKERS: &[char] = &['\u{2705}', '\u{2713}', '\u{2714}'];
const INFO_MARKERS: &[char] = &['\u{2139}'];

const VARIATION_SELECTOR: char = '\u{fe0f}';

fn tag_for_marker(c: char) -> Option<FactorTag> {
    if FLAG_MARKERS.contains(&c) {
        Some(FactorTag::Flag)
    } else if CHECK_MARKERS.contains(&c) {
        Some(FactorTag::Check)
    } else if INFO_MARKERS.contains(&c) {
        Some(FactorTag::Info)
    } else {
        None
    }
}

/// Split a marker-prefixed line into its tag and display text.
pub fn decode_marked(raw: &str) -> Factor {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();

    let tag = match chars.next().and_then(tag_for_marker) {
        Some(tag) => tag,
        None => {
            return Factor {
                tag: None,
                text: trimmed.to_string(),
            };
        }
    };

    let text = chars
        .as_str()
        .trim_start_matches(VARIATION_SELECTOR)
        .trim_start()
        .to_string();

    Factor {
        tag: Some(tag),
        text,
    }
}
