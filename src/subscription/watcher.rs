use crate::error::Result;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use tracing::debug;

/// Keeps the watcher alive; dropping it stops the notifications.
pub struct CatalogWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<PathBuf>,
}

impl CatalogWatcher {
    /// Changed paths seen since the last call, deduplicated.
    pub fn drain(&self) -> Vec<PathBuf> {
        let mut changed: Vec<PathBuf> = Vec::new();
        for path in self.changes.try_iter() {
            if !changed.contains(&path) {
                changed.push(path);
            }
        }
        changed
    }
}

fn is_relevant(event: &Event, file_name: Option<&std::ffi::OsStr>) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event.paths.iter().any(|p| p.file_name() == file_name)
}

/// Watch the directory of `path` and report writes to that file.
pub fn watch_catalog(path: &Path, ctx: eframe::egui::Context) -> Result<CatalogWatcher> {
    let (tx, rx) = channel();
    let target = path.to_path_buf();
    let file_name = target.file_name().map(|n| n.to_os_string());

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            if is_relevant(&event, file_name.as_deref()) && tx.send(target.clone()).is_ok() {
                ctx.request_repaint();
            }
        }
    })?;

    // Editors replace files on save, so watch the parent directory
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    debug!(path = %path.display(), "Watching projects file");

    Ok(CatalogWatcher {
        _watcher: watcher,
        changes: rx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};
    use std::ffi::OsStr;

    #[test]
    fn test_relevant_events() {
        let name = Some(OsStr::new("projects.toml"));

        let modify = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/data/projects.toml"));
        assert!(is_relevant(&modify, name));

        let create = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/data/projects.toml"));
        assert!(is_relevant(&create, name));

        let other_file = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/data/notes.txt"));
        assert!(!is_relevant(&other_file, name));

        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("/data/projects.toml"));
        assert!(!is_relevant(&access, name));
    }
}
