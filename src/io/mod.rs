pub mod outbox;
pub mod store;
pub mod worker;

pub use store::{PreferenceStore, TomlFileStore};
pub use worker::{send_command, spawn_worker, IoCommand, IoResult};
