use super::regions::{ALIAS_REGION_MAP, LANGUAGE_REGION_MAP};
use unidecode::unidecode;

/// Bucket for comments whose region could not be determined.
pub const ALL_INDIA: &str = "All India";

/// Resolve one comment row to a canonical state name, trying the declared
/// region field first and the comment body second. Total over its inputs:
/// anything unresolvable lands in the "All India" bucket.
///
/// The language column rides along with each row, but the language hints
/// match against the comment body rather than the column itself.
pub fn resolve_region(declared_region: &str, comment_text: &str, _declared_language: &str) -> String {
    if let Some(region) = normalize_declared(declared_region) {
        return region;
    }

    if let Some(region) = region_from_comment(comment_text) {
        return region;
    }

    ALL_INDIA.to_string()
}

fn normalize_declared(declared: &str) -> Option<String> {
    if declared.is_empty() {
        return None;
    }

    let lowered = declared.to_lowercase();
    if lowered == "all india" || lowered == "unknown region" {
        return None;
    }

    let trimmed = lowered.trim();
    for &(alias, region) in ALIAS_REGION_MAP.iter() {
        if alias == trimmed {
            return Some(region.to_string());
        }
    }

    for &(alias, region) in ALIAS_REGION_MAP.iter() {
        if trimmed.contains(alias) || alias.contains(trimmed) {
            return Some(region.to_string());
        }
    }

    for &(_, region) in ALIAS_REGION_MAP.iter() {
        if trimmed.contains(&region.to_lowercase()) {
            return Some(region.to_string());
        }
    }

    // Capitalized but unrecognized input is trusted as a region name, even
    // when it is not an Indian state.
    if declared.chars().next().map_or(false, |c| c.is_uppercase()) {
        return Some(declared.to_string());
    }

    None
}

fn region_from_comment(comment_text: &str) -> Option<String> {
    if comment_text.is_empty() {
        return None;
    }

    let comment = unidecode(comment_text).to_lowercase();
    for &(alias, region) in ALIAS_REGION_MAP.iter() {
        if comment.contains(alias) || comment.contains(&region.to_lowercase()) {
            return Some(region.to_string());
        }
    }

    for &(keyword, region) in LANGUAGE_REGION_MAP.iter() {
        if comment.contains(keyword) {
            return Some(region.to_string());
        }
    }

    None
}
