pub mod extract;
pub mod format;
pub mod loader;
pub mod model;

pub use extract::{extract, Catalog};
pub use loader::{parse, validate};
pub use model::Document;
