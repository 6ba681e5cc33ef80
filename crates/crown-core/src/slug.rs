use std::sync::LazyLock;

use regex::Regex;

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthesized regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid disallowed-char regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

/// Turn a dish display name into a catalog token.
///
/// `"Biryani (Chicken)"` becomes `"biryani"`, `"Fish & Chips"` becomes
/// `"fish-chips"`. Each step applies to the whole string:
///
/// 1. drop every parenthesized group,
/// 2. lowercase and trim,
/// 3. drop anything that is not a word char, whitespace or `-`,
/// 4. whitespace runs become one `-`,
/// 5. hyphen runs collapse to one,
/// 6. trim `-` from both ends.
///
/// Normalizing a token again returns it unchanged. Empty or all-punctuation
/// input yields an empty token, which matches nothing in the catalog.
pub fn normalize(display_name: &str) -> String {
    let text = PARENTHESIZED.replace_all(display_name, "");
    let text = text.to_lowercase();
    let text = DISALLOWED.replace_all(text.trim(), "");
    let text = WHITESPACE.replace_all(&text, "-");
    let text = HYPHENS.replace_all(&text, "-");

    text.trim_matches('-').to_string()
}

/// Hyphen-separated words of a token, empty pieces dropped
pub fn words(token: &str) -> impl Iterator<Item = &str> {
    token.split('-').filter(|w| !w.is_empty())
}
