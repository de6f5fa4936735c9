use crate::state::{ContactForm, ProjectCatalog};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::{debug, info, warn};

use super::outbox::write_submission;

pub enum IoCommand {
    SubmitContact(ContactForm),
    LoadCatalog(PathBuf),
}

impl IoCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::SubmitContact(_) => "contact submission",
            Self::LoadCatalog(_) => "projects reload",
        }
    }
}

pub enum IoResult {
    ContactSubmitted(Result<PathBuf, String>),
    CatalogLoaded(Result<ProjectCatalog, String>),
}

pub fn run_command(cmd: IoCommand, outbox_dir: &Path) -> IoResult {
    match cmd {
        IoCommand::SubmitContact(form) => {
            match write_submission(outbox_dir, &form, Local::now()) {
                Ok(path) => {
                    info!(path = %path.display(), "Contact message stored");
                    IoResult::ContactSubmitted(Ok(path))
                }
                Err(e) => IoResult::ContactSubmitted(Err(e.to_string())),
            }
        }
        IoCommand::LoadCatalog(path) => {
            debug!(path = %path.display(), "Reloading projects");
            IoResult::CatalogLoaded(
                ProjectCatalog::from_file(&path).map_err(|e| format!("{}: {}", path.display(), e)),
            )
        }
    }
}

/// Queue a command for the worker. Returns false, and logs, when the worker
/// has stopped.
pub fn send_command(tx: &Sender<IoCommand>, cmd: IoCommand) -> bool {
    let name = cmd.name();
    match tx.send(cmd) {
        Ok(()) => true,
        Err(_) => {
            warn!("IO worker stopped, dropped {}", name);
            false
        }
    }
}

pub fn spawn_worker(
    ctx: eframe::egui::Context,
    outbox_dir: PathBuf,
) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            if res_tx.send(run_command(cmd, &outbox_dir)).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_submit_writes_outbox() {
        let dir = tempfile::tempdir().unwrap();
        let outbox = dir.path().join("outbox");
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hola".to_string(),
        };

        match run_command(IoCommand::SubmitContact(form), &outbox) {
            IoResult::ContactSubmitted(Ok(path)) => assert!(path.starts_with(&outbox)),
            _ => panic!("expected a stored submission"),
        }
    }

    #[test]
    fn test_send_command_reports_stopped_worker() {
        let (tx, rx) = channel();
        assert!(send_command(&tx, IoCommand::LoadCatalog(PathBuf::from("projects.toml"))));
        assert!(matches!(rx.try_recv(), Ok(IoCommand::LoadCatalog(_))));

        drop(rx);
        assert!(!send_command(&tx, IoCommand::LoadCatalog(PathBuf::from("projects.toml"))));
        assert!(!send_command(&tx, IoCommand::SubmitContact(ContactForm::default())));
    }

    #[test]
    fn test_reload_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.toml");
        fs::write(&path, "projects = 5").unwrap();

        match run_command(IoCommand::LoadCatalog(path), dir.path()) {
            IoResult::CatalogLoaded(Err(msg)) => assert!(msg.contains("projects.toml")),
            _ => panic!("expected a parse error"),
        }
    }
}
