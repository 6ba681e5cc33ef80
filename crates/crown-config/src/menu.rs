use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "menu-new.json".to_string()
}

fn default_sections() -> Vec<String> {
    [
        "starters",
        "mixed_grills",
        "old_crown_speciality_dishes",
        "home_made_authentic_dishes",
        "dum_biryani",
        "sides",
        "pub_classics",
        "burgers",
        "desserts",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Menu document that is read and rewritten in place
    #[serde(default = "default_path")]
    pub path: String,
    /// Sections whose items get an image attached, in processing order
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            sections: default_sections(),
        }
    }
}
