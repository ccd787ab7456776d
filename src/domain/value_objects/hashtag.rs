//! Hashtag names and the alphabetical hashtag index.

use std::collections::BTreeMap;

use serde::Serialize;

/// Maximum length of a normalized tag name.
pub const MAX_HASHTAG_LEN: usize = 64;

/// Usage count of a single tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagCount {
    pub name: String,
    pub count: i64,
}

/// Tags sharing the same index key (their initial character).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagGroup {
    pub key: String,
    pub tags: Vec<HashtagCount>,
}

/// Normalize a tag name: trim, drop leading `#`, lower-case.
///
/// Returns `None` for names that are empty after normalization, longer
/// than [`MAX_HASHTAG_LEN`], or contain whitespace.
pub fn normalize_hashtag(raw: &str) -> Option<String> {
    let name = raw.trim().trim_start_matches('#').to_lowercase();
    if name.is_empty()
        || name.chars().count() > MAX_HASHTAG_LEN
        || name.chars().any(char::is_whitespace)
    {
        return None;
    }
    Some(name)
}

/// Index key of a normalized tag name.
pub fn index_key(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Group tag counts by index key. Groups are ordered by key, tags by name.
pub fn group_hashtags(counts: Vec<HashtagCount>) -> Vec<HashtagGroup> {
    let mut groups: BTreeMap<String, Vec<HashtagCount>> = BTreeMap::new();
    for count in counts {
        groups.entry(index_key(&count.name)).or_default().push(count);
    }

    groups
        .into_iter()
        .map(|(key, mut tags)| {
            tags.sort_by(|a, b| a.name.cmp(&b.name));
            HashtagGroup { key, tags }
        })
        .collect()
}
