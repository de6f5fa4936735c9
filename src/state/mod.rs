pub mod catalog;
pub mod contact;
pub mod preferences;
pub mod router;
pub mod tracker;

pub use catalog::{ProjectCatalog, ProjectFilter, TagFilter, TECH_TAGS};
pub use contact::{ContactForm, ContactState, ContactStatus};
pub use preferences::Preferences;
pub use router::{Route, RouteKind, Router};
pub use tracker::{NavAction, NavigationTracker, ScrollTiming};
