use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::MenuError;
use crate::matcher::MatchKind;
use crate::resolver::Resolver;

const MENU_KEY: &str = "menu";
const NAME_KEY: &str = "name";
const IMAGE_KEY: &str = "image";

/// One item that received an image during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAssignment {
    pub section: String,
    pub name: String,
    pub image: String,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, Default)]
pub struct PassReport {
    pub assignments: Vec<ImageAssignment>,
    /// Entries in processed sections that are not objects with a string name
    pub skipped: usize,
    /// Allow-listed sections the document does not have
    pub missing_sections: Vec<String>,
}

impl PassReport {
    /// Number of items resolved by a given rule
    pub fn count(&self, kind: MatchKind) -> usize {
        self.assignments.iter().filter(|a| a.kind == kind).count()
    }
}

/// A menu JSON document held fully in memory.
///
/// The whole file is parsed before anything changes and written back in one
/// go, so a failed run leaves the file on disk untouched. Key order and every
/// field other than `image` survive the round trip.
#[derive(Debug, Clone)]
pub struct MenuDocument {
    root: Value,
}

impl MenuDocument {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let root: Value = serde_json::from_str(json)?;

        match root.get(MENU_KEY) {
            None => return Err(MenuError::MissingMenu),
            Some(Value::Object(_)) => {}
            Some(other) => return Err(MenuError::MenuNotObject(json_type(other))),
        }

        Ok(Self { root })
    }

    pub fn load(path: &Path) -> Result<Self, MenuError> {
        tracing::info!("Loading menu from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| MenuError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, MenuError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), MenuError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| MenuError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Wrote menu to {}", path.display());
        Ok(())
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Set `image` on every named item of the listed sections.
    ///
    /// `on_assign` sees each assignment as soon as it is made. Entries that
    /// are not objects with a string `name` are left exactly as they were.
    pub fn attach_images<S: AsRef<str>>(
        &mut self,
        sections: &[S],
        resolver: &Resolver,
        mut on_assign: impl FnMut(&ImageAssignment),
    ) -> PassReport {
        let mut report = PassReport::default();

        let Some(menu) = self.root.get_mut(MENU_KEY).and_then(Value::as_object_mut) else {
            return report;
        };

        for section in sections.iter().map(|s| s.as_ref()) {
            let Some(items) = menu.get_mut(section) else {
                tracing::debug!("Section {section} not in menu");
                report.missing_sections.push(section.to_string());
                continue;
            };

            let items = match items {
                Value::Array(items) => items,
                other => {
                    tracing::warn!("Section {section} is {}, not a list", json_type(other));
                    report.skipped += 1;
                    continue;
                }
            };

            for item in items.iter_mut() {
                let Some(fields) = item.as_object_mut() else {
                    tracing::debug!("Skipping non-object entry in {section}");
                    report.skipped += 1;
                    continue;
                };

                let Some(name) = fields.get(NAME_KEY).and_then(Value::as_str) else {
                    tracing::debug!("Skipping entry without a name in {section}");
                    report.skipped += 1;
                    continue;
                };

                let resolution = resolver.resolve(name);
                let assignment = ImageAssignment {
                    section: section.to_string(),
                    name: name.to_string(),
                    image: resolution.image.to_string(),
                    kind: resolution.kind,
                };

                fields.insert(IMAGE_KEY.to_string(), Value::String(assignment.image.clone()));
                on_assign(&assignment);
                report.assignments.push(assignment);
            }
        }

        report
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
