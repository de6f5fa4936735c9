// Contact outbox - one TOML file per submitted message
use crate::error::Result;
use crate::state::ContactForm;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct OutboxEntry<'a> {
    submitted_at: String,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

pub fn write_submission(dir: &Path, form: &ContactForm, at: DateTime<Local>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stem = format!("contact-{}", at.format("%Y%m%d-%H%M%S%.3f"));
    let mut path = dir.join(format!("{}.toml", stem));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{}-{}.toml", stem, n));
        n += 1;
    }

    let entry = OutboxEntry {
        submitted_at: at.to_rfc3339(),
        name: form.name.trim(),
        email: form.email.trim(),
        message: &form.message,
    };
    fs::write(&path, toml::to_string_pretty(&entry)?)?;
    Ok(path)
}
