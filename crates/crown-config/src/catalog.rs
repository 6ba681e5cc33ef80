use serde::{Deserialize, Serialize};

fn default_image_dir() -> String {
    "/dishes".to_string()
}

fn default_extension() -> String {
    "jpg".to_string()
}

// Order is a priority list: earlier slugs win partial matches.
fn default_slugs() -> Vec<String> {
    [
        "momo",
        "chicken-tikka",
        "lamb-curry",
        "fish-chips",
        "biryani",
        "salmon",
        "dal-bhat",
        "thali",
        "onion-bhaji",
        "veg-samosas",
        "chicken-tikka-masala",
        "curry-selection",
        "tandoori-platter",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_categories() -> Vec<CategoryConfig> {
    let groups: [(&[&str], &str); 9] = [
        (&["chicken", "tikka"], "chicken-tikka"),
        (&["lamb", "mutton"], "lamb-curry"),
        (&["fish", "salmon"], "salmon"),
        (&["curry", "masala"], "curry-selection"),
        (&["biryani", "rice"], "biryani"),
        (&["dal", "dhal"], "dal-bhat"),
        (&["tandoori"], "tandoori-platter"),
        (&["samosa"], "veg-samosas"),
        (&["onion", "bhaji"], "onion-bhaji"),
    ];

    groups
        .into_iter()
        .map(|(keywords, slug)| CategoryConfig {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            slug: slug.to_string(),
        })
        .collect()
}

fn default_default_slug() -> String {
    "curry-selection".to_string()
}

/// Keyword group used when no catalog slug matches a dish directly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub keywords: Vec<String>,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Site-relative directory holding dish images
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_slugs")]
    pub slugs: Vec<String>,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
    /// Image used when nothing else matches
    #[serde(default = "default_default_slug")]
    pub default_slug: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            extension: default_extension(),
            slugs: default_slugs(),
            categories: default_categories(),
            default_slug: default_default_slug(),
        }
    }
}

impl CatalogConfig {
    /// Site-relative image path for a slug, e.g. `/dishes/momo.jpg`
    pub fn image_ref(&self, slug: &str) -> String {
        format!(
            "{}/{}.{}",
            self.image_dir.trim_end_matches('/'),
            slug,
            self.extension
        )
    }
}
