pub mod catalog;
pub mod error;
pub mod matcher;
pub mod menu;
pub mod resolver;
pub mod slug;

pub use catalog::{Catalog, CatalogEntry, CategoryGroup};
pub use error::{CatalogError, MenuError};
pub use matcher::{MatchKind, Matcher};
pub use menu::{ImageAssignment, MenuDocument, PassReport};
pub use resolver::{resolve, Resolution, Resolver};
pub use slug::normalize;
