use std::collections::HashSet;
use std::fmt;

use crate::catalog::Catalog;
use crate::slug::words;

/// Words of this many chars or fewer never count as a shared word
const MIN_SIGNIFICANT_WORD_LEN: usize = 3;

/// Which rule produced an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchKind {
    Exact,
    Substring,
    SharedWord,
    Category,
    Default,
}

impl MatchKind {
    pub const ALL: [MatchKind; 5] = [
        MatchKind::Exact,
        MatchKind::Substring,
        MatchKind::SharedWord,
        MatchKind::Category,
        MatchKind::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Substring => "substring",
            MatchKind::SharedWord => "shared-word",
            MatchKind::Category => "category",
            MatchKind::Default => "default",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the resolution cascade
pub trait Matcher: Send + Sync {
    fn kind(&self) -> MatchKind;

    /// Image for a normalized token, or `None` to pass to the next step
    fn find<'c>(&self, token: &str, catalog: &'c Catalog) -> Option<&'c str>;
}

/// Token is a catalog slug
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Exact
    }

    fn find<'c>(&self, token: &str, catalog: &'c Catalog) -> Option<&'c str> {
        if token.is_empty() {
            return None;
        }
        catalog.get(token)
    }
}

/// First slug contained in the token, or containing it
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Substring
    }

    fn find<'c>(&self, token: &str, catalog: &'c Catalog) -> Option<&'c str> {
        if token.is_empty() {
            return None;
        }
        catalog
            .entries()
            .iter()
            .find(|e| token.contains(e.slug.as_str()) || e.slug.contains(token))
            .map(|e| e.image.as_str())
    }
}

/// First slug sharing a word longer than three chars with the token
pub struct SharedWordMatcher;

impl Matcher for SharedWordMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::SharedWord
    }

    fn find<'c>(&self, token: &str, catalog: &'c Catalog) -> Option<&'c str> {
        let significant: HashSet<&str> = words(token)
            .filter(|w| w.chars().count() > MIN_SIGNIFICANT_WORD_LEN)
            .collect();
        if significant.is_empty() {
            return None;
        }

        catalog
            .entries()
            .iter()
            .find(|e| words(&e.slug).any(|w| significant.contains(w)))
            .map(|e| e.image.as_str())
    }
}

/// First keyword group with a keyword inside the token
pub struct CategoryMatcher;

impl Matcher for CategoryMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Category
    }

    fn find<'c>(&self, token: &str, catalog: &'c Catalog) -> Option<&'c str> {
        catalog
            .categories()
            .iter()
            .find(|group| group.matches(token))
            .map(|group| group.image.as_str())
    }
}
