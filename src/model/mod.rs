mod project;
mod section;

pub use project::Project;
pub use section::{SectionDescriptor, SectionList};
