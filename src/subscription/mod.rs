pub mod viewport;
pub mod watcher;

pub use viewport::{SectionRegion, TriggerBand};
pub use watcher::{watch_catalog, CatalogWatcher};
