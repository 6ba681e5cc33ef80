use crown_config::catalog::CatalogConfig;
use crown_core::{normalize, resolve, Catalog, MatchKind, Resolver};
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::from_config(&CatalogConfig::default()).unwrap()
}

/// Rewrite a slug the way a menu author might type it
fn respell(slug: &str, upper: &[bool], separator: &str, lead: &str, trail: &str) -> String {
    let body: String = slug
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if upper[i % upper.len()] {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect();
    format!("{lead}{}{trail}", body.replace('-', separator))
}

#[test]
fn accent_after_removed_punctuation_stays_put() {
    let once = normalize("Cafe!\u{0301}");
    assert_eq!(once, "cafe\u{0301}");
    assert_eq!(normalize(&once), once);
}

proptest! {
    #[test]
    fn normalize_is_idempotent_for_any_string(name in any::<String>()) {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_for_accented_punctuated_names(
        name in "[a-zA-Z0-9 _()!?&'.\u{0301}\u{0308}\u{0327}\u{00C0}-\u{00FF}-]{0,40}"
    ) {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_tokens_have_no_edge_or_double_hyphens(name in any::<String>()) {
        let token = normalize(&name);
        prop_assert!(!token.starts_with('-'));
        prop_assert!(!token.ends_with('-'));
        prop_assert!(!token.contains("--"));
        prop_assert!(!token.chars().any(char::is_whitespace));
    }

    #[test]
    fn resolution_is_total_and_deterministic(name in any::<String>()) {
        let resolver = Resolver::new(catalog());

        let first = resolver.resolve(&name);
        prop_assert!(!first.image.is_empty());
        prop_assert_eq!(resolver.resolve(&name), first.clone());
        prop_assert_eq!(resolve(&name, resolver.catalog()), first.image);
    }

    #[test]
    fn respelled_slug_resolves_exactly(
        index in 0usize..13,
        upper in prop::collection::vec(any::<bool>(), 1..32),
        separator in prop_oneof![Just(" "), Just("  "), Just(" - "), Just("\t"), Just("-")],
        lead in " {0,3}",
        trail in " {0,3}",
    ) {
        let catalog = catalog();
        let entry = &catalog.entries()[index];
        let name = respell(&entry.slug, &upper, separator, &lead, &trail);

        let resolver = Resolver::new(catalog.clone());
        let resolution = resolver.resolve(&name);
        prop_assert_eq!(resolution.kind, MatchKind::Exact);
        prop_assert_eq!(resolution.image, entry.image.as_str());
    }

    #[test]
    fn unrelated_names_fall_back_to_default(name in "[qwxzQWXZ .!&]{0,24}") {
        let catalog = catalog();
        let resolver = Resolver::new(catalog.clone());

        let resolution = resolver.resolve(&name);
        prop_assert_eq!(resolution.kind, MatchKind::Default);
        prop_assert_eq!(resolution.image, catalog.default_image());
    }
}
