//! Small pure helpers shared across the workspace

/// Derive a slug-like identifier from a display name
///
/// Lowercases the input and collapses runs of whitespace into single
/// hyphens. This is only the suggested default for a new listing's id; the
/// operator may edit it before submitting, after which it is immutable.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            pending_hyphen = !slug.is_empty();
        } else {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        }
    }

    slug
}

/// Case-insensitive substring containment check
///
/// Search helper used by the admin list filters. Both sides are lowercased
/// with full Unicode rules so `Café` matches `café`.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}
