use std::collections::HashMap;

use crown_config::catalog::CatalogConfig;

use crate::error::CatalogError;
use crate::slug::normalize;

/// One available dish image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub slug: String,
    pub image: String,
}

/// Synonym keywords that all point at one fallback image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub keywords: Vec<String>,
    pub image: String,
}

impl CategoryGroup {
    /// True when any keyword occurs anywhere in the token
    pub fn matches(&self, token: &str) -> bool {
        self.keywords.iter().any(|k| token.contains(k.as_str()))
    }
}

/// Immutable table of dish images plus the category fallbacks.
///
/// Entry order is significant: partial-match strategies walk the entries
/// front to back and take the first hit, so more specific slugs must be
/// listed before shorter slugs that would shadow them.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
    categories: Vec<CategoryGroup>,
    default_image: String,
}

impl Catalog {
    pub fn new(
        entries: Vec<CatalogEntry>,
        categories: Vec<CategoryGroup>,
        default_image: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let default_image = default_image.into();
        if default_image.trim().is_empty() {
            return Err(CatalogError::EmptyDefault);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let expected = normalize(&entry.slug);
            if expected.is_empty() || expected != entry.slug {
                return Err(CatalogError::InvalidSlug {
                    slug: entry.slug.clone(),
                    expected,
                });
            }
            if index.insert(entry.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSlug(entry.slug.clone()));
            }
        }

        for group in &categories {
            if group.keywords.is_empty() || group.keywords.iter().any(|k| k.is_empty()) {
                return Err(CatalogError::EmptyCategory(group.image.clone()));
            }
        }

        Ok(Self {
            entries,
            index,
            categories,
            default_image,
        })
    }

    /// Build the catalog from configured slugs, keeping their order
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        if config.default_slug.trim().is_empty() {
            return Err(CatalogError::EmptyDefault);
        }

        let entries: Vec<CatalogEntry> = config
            .slugs
            .iter()
            .map(|slug| CatalogEntry {
                slug: slug.clone(),
                image: config.image_ref(slug),
            })
            .collect();

        let categories = config
            .categories
            .iter()
            .map(|group| {
                if !config.slugs.contains(&group.slug) {
                    tracing::warn!(
                        "Category {:?} points at {:?}, which is not in the catalog",
                        group.keywords,
                        group.slug
                    );
                }
                CategoryGroup {
                    keywords: group.keywords.clone(),
                    image: config.image_ref(&group.slug),
                }
            })
            .collect();

        let catalog = Self::new(entries, categories, config.image_ref(&config.default_slug))?;
        tracing::debug!(
            "Catalog ready: {} images, {} category groups",
            catalog.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Image for an exact slug
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.index
            .get(slug)
            .map(|&i| self.entries[i].image.as_str())
    }

    /// Entries in priority order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
