//! Display labels for venue slugs.
//!
//! Slugs look like `"los_angeles-usa"`: lowercase, `-` between city and
//! country, `_` inside multi-word names.

/// Label shown in search hits and on the artist page.
///
/// Splits on `-` only, uppercases the first character of each token and joins
/// with `", "`. The rest of each token, underscores included, is kept as is,
/// so `"san_francisco-usa"` becomes `"San_francisco, Usa"`. Empty tokens from
/// doubled separators survive as empty segments.
pub fn format_venue(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Free-text label suitable for a geocoding lookup: `-` and `_` become
/// spaces and every word is capitalized (`"new_york-usa"` → `"New York Usa"`).
pub fn format_map_label(slug: &str) -> String {
    slug.replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
