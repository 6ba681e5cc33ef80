use crate::catalog::Catalog;
use crate::matcher::{
    CategoryMatcher, ExactMatcher, MatchKind, Matcher, SharedWordMatcher, SubstringMatcher,
};
use crate::slug::normalize;

static STANDARD_CASCADE: [&dyn Matcher; 4] = [
    &ExactMatcher,
    &SubstringMatcher,
    &SharedWordMatcher,
    &CategoryMatcher,
];

/// Outcome of resolving one display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'c> {
    pub token: String,
    pub image: &'c str,
    pub kind: MatchKind,
}

/// Picks exactly one catalog image for any dish name.
///
/// Matchers run in order and the first hit wins; when all of them pass,
/// the catalog's default image is used, so resolution never fails.
pub struct Resolver {
    catalog: Catalog,
    matchers: Vec<Box<dyn Matcher>>,
}

impl Resolver {
    /// Standard cascade: exact, substring, shared word, category
    pub fn new(catalog: Catalog) -> Self {
        Self::with_matchers(
            catalog,
            vec![
                Box::new(ExactMatcher),
                Box::new(SubstringMatcher),
                Box::new(SharedWordMatcher),
                Box::new(CategoryMatcher),
            ],
        )
    }

    pub fn with_matchers(catalog: Catalog, matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { catalog, matchers }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolve(&self, display_name: &str) -> Resolution<'_> {
        run_cascade(
            display_name,
            &self.catalog,
            self.matchers.iter().map(|m| m.as_ref()),
        )
    }
}

/// Image for `display_name` using the standard cascade
pub fn resolve<'c>(display_name: &str, catalog: &'c Catalog) -> &'c str {
    run_cascade(display_name, catalog, STANDARD_CASCADE.iter().copied()).image
}

fn run_cascade<'c, 'm>(
    display_name: &str,
    catalog: &'c Catalog,
    matchers: impl IntoIterator<Item = &'m dyn Matcher>,
) -> Resolution<'c> {
    let token = normalize(display_name);

    for matcher in matchers {
        if let Some(image) = matcher.find(&token, catalog) {
            tracing::trace!("{display_name:?} -> {token:?} matched by {}", matcher.kind());
            return Resolution {
                token,
                image,
                kind: matcher.kind(),
            };
        }
    }

    tracing::trace!("{display_name:?} -> {token:?} fell back to default");
    Resolution {
        token,
        image: catalog.default_image(),
        kind: MatchKind::Default,
    }
}

#[cfg(test)]
mod tests {
    use crown_config::catalog::CatalogConfig;

    use super::*;

    fn resolver() -> Resolver {
        Resolver::new(Catalog::from_config(&CatalogConfig::default()).unwrap())
    }

    fn check(name: &str, image: &str, kind: MatchKind) {
        let r = resolver();
        let resolution = r.resolve(name);
        assert_eq!(resolution.image, image, "image for {name:?}");
        assert_eq!(resolution.kind, kind, "kind for {name:?}");
    }

    #[test]
    fn nepalese_momo_matches_by_substring() {
        check("Nepalese Momo", "/dishes/momo.jpg", MatchKind::Substring);
    }

    #[test]
    fn chicken_tikka_masala_matches_exactly() {
        check(
            "Chicken Tikka Masala",
            "/dishes/chicken-tikka-masala.jpg",
            MatchKind::Exact,
        );
    }

    #[test]
    fn parenthetical_is_ignored_before_matching() {
        let r = resolver();
        let resolution = r.resolve("Salmon Tikka (Grilled)");
        assert_eq!(resolution.token, "salmon-tikka");
        assert_eq!(resolution.image, "/dishes/salmon.jpg");
        assert_eq!(resolution.kind, MatchKind::Substring);
    }

    #[test]
    fn unknown_dish_gets_default() {
        check("Veggie Burger Deluxe", "/dishes/curry-selection.jpg", MatchKind::Default);
    }

    #[test]
    fn mutton_falls_back_to_lamb_category() {
        check("Mutton Rogan Josh", "/dishes/lamb-curry.jpg", MatchKind::Category);
    }

    #[test]
    fn shared_word_after_substring() {
        check("Mixed Platter", "/dishes/tandoori-platter.jpg", MatchKind::SharedWord);
        check("Bhat Special", "/dishes/dal-bhat.jpg", MatchKind::SharedWord);
        check("Butter Chicken", "/dishes/chicken-tikka.jpg", MatchKind::SharedWord);
        check("Paneer Masala", "/dishes/chicken-tikka-masala.jpg", MatchKind::SharedWord);
    }

    #[test]
    fn category_keywords_cover_unlisted_dishes() {
        check("Chicken65", "/dishes/chicken-tikka.jpg", MatchKind::Category);
        check("Pilau Rice", "/dishes/biryani.jpg", MatchKind::Category);
        check("Tarka Dhal", "/dishes/dal-bhat.jpg", MatchKind::Category);
        check("Currywurst", "/dishes/curry-selection.jpg", MatchKind::Category);
    }

    #[test]
    fn exact_match_beats_earlier_substring_entries() {
        // "chicken-tikka" comes first and is a substring, but the exact slug wins.
        check(
            "chicken tikka masala",
            "/dishes/chicken-tikka-masala.jpg",
            MatchKind::Exact,
        );
    }

    #[test]
    fn catalog_order_decides_ambiguous_substrings() {
        // Both "chicken-tikka" and "chicken-tikka-masala" are substrings; the
        // earlier entry wins.
        check(
            "Chicken Tikka Masala Wrap",
            "/dishes/chicken-tikka.jpg",
            MatchKind::Substring,
        );
        check("Momo & Salmon Duo", "/dishes/momo.jpg", MatchKind::Substring);
    }

    #[test]
    fn blank_names_resolve_to_default() {
        for name in ["", "   ", "(seasonal)", "!!!"] {
            check(name, "/dishes/curry-selection.jpg", MatchKind::Default);
        }
    }

    #[test]
    fn resolution_is_total_and_deterministic() {
        let r = resolver();
        let names = [
            "Nepalese Momo",
            "Fish & Chips",
            "Sticky Toffee Pudding",
            "Onion Bhaji (4 pcs)",
            "",
            "ＴＨＡＬＩ",
            "Lamb Shank",
        ];

        for name in names {
            let first = r.resolve(name);
            assert!(!first.image.is_empty());
            assert_eq!(r.resolve(name), first);
            assert_eq!(resolve(name, r.catalog()), first.image);
        }
    }

    #[test]
    fn custom_cascade_can_drop_strategies() {
        let catalog = Catalog::from_config(&CatalogConfig::default()).unwrap();
        let r = Resolver::with_matchers(catalog, vec![Box::new(ExactMatcher)]);

        let resolution = r.resolve("Nepalese Momo");
        assert_eq!(resolution.kind, MatchKind::Default);
        assert_eq!(resolution.image, "/dishes/curry-selection.jpg");
    }
}
