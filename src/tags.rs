//! Static tag tables.
//!
//! Membership tests only: the native table lists markup tags common enough to
//! skip component lookup, the reserved table lists the template-control
//! pseudo-tags. Both match case-insensitively.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMON_TAG_RE: Regex = Regex::new(
        r"(?i)^(div|p|span|img|a|b|i|br|ul|ol|li|h1|h2|h3|h4|h5|h6|code|pre|table|th|td|tr|form|label|input|select|option|nav|article|section|header|footer)$"
    )
    .unwrap();

    static ref RESERVED_TAG_RE: Regex = Regex::new(r"(?i)^(slot|partial|component)$").unwrap();
}

/// Where a tag falls before any registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Native,
    Reserved,
    Custom,
}

pub fn is_common_tag(tag: &str) -> bool {
    COMMON_TAG_RE.is_match(tag)
}

pub fn is_reserved_tag(tag: &str) -> bool {
    RESERVED_TAG_RE.is_match(tag)
}

pub fn classify_tag(tag: &str) -> TagCategory {
    if is_common_tag(tag) {
        TagCategory::Native
    } else if is_reserved_tag(tag) {
        TagCategory::Reserved
    } else {
        TagCategory::Custom
    }
}
