use crate::config::Config;
use crate::error::FolioError;
use crate::i18n::platform_locale;
use crate::io::store::MemoryStore;
use crate::io::{send_command, spawn_worker, IoCommand, IoResult, PreferenceStore, TomlFileStore};
use crate::message::Message;
use crate::model::SectionList;
use crate::state::tracker::PROJECTS_SENTINEL;
use crate::state::{
    ContactState, ContactStatus, NavAction, NavigationTracker, Preferences, ProjectCatalog,
    ProjectFilter, Route, RouteKind, Router,
};
use crate::style::{self, AppTheme};
use crate::subscription::{watch_catalog, CatalogWatcher};
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct Folio {
    // Preferences
    pub prefs: Preferences,
    store: Box<dyn PreferenceStore>,
    applied_theme: Option<AppTheme>,

    // Navigation
    pub router: Router,
    pub tracker: NavigationTracker,
    pub laid_out: HashMap<String, egui::Rect>,
    pub scroll_target: Option<String>,
    pub reset_scroll: bool,

    // Projects
    pub catalog: ProjectCatalog,
    pub filter: ProjectFilter,
    pub carousel_offset: f32,
    pub carousel_jump: Option<f32>,
    projects_path: Option<PathBuf>,
    watcher: Option<CatalogWatcher>,

    // Contact
    pub contact: ContactState,

    // Messages
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,

    // IO
    command_tx: Sender<IoCommand>,
    result_rx: Receiver<IoResult>,
}

fn open_store() -> Box<dyn PreferenceStore> {
    let opened = Config::preferences_path()
        .ok_or(FolioError::NoProjectDir("config"))
        .and_then(|path| TomlFileStore::open(path));
    match opened {
        Ok(store) => {
            debug!(path = %store.path().display(), "Preferences store opened");
            Box::new(store)
        }
        Err(e) => {
            warn!("Preferences will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

impl Folio {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, start: Route) -> Self {
        let ctx = cc.egui_ctx.clone();
        egui_extras::install_image_loaders(&ctx);

        let mut store = open_store();
        let prefs = Preferences::load(store.as_mut(), &platform_locale());
        info!(lang = prefs.lang.code(), dark_mode = prefs.dark_mode, "Preferences loaded");

        let projects_path = config.data.projects_path();
        let catalog = ProjectCatalog::load(projects_path.as_deref());

        let watcher = match (&projects_path, config.data.watch_projects) {
            (Some(path), true) => match watch_catalog(path, ctx.clone()) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    warn!("Not watching projects file: {}", e);
                    None
                }
            },
            _ => None,
        };

        let outbox_dir = Config::outbox_dir()
            .unwrap_or_else(|| std::env::temp_dir().join("folio-outbox"));
        let (command_tx, result_rx) = spawn_worker(ctx, outbox_dir);

        let tracker = NavigationTracker::new(
            SectionList::default(),
            config.navigation.trigger_band(),
            config.navigation.scroll_timing(),
        );

        let mut app = Self {
            prefs,
            store,
            applied_theme: None,
            router: Router::new(Route::Home),
            tracker,
            laid_out: HashMap::new(),
            scroll_target: None,
            reset_scroll: false,
            catalog,
            filter: ProjectFilter::default(),
            carousel_offset: 0.0,
            carousel_jump: None,
            projects_path,
            watcher,
            contact: ContactState::new(Duration::from_secs(style::CONTACT_RESET_SECS)),
            error_message: None,
            info_message: None,
            command_tx,
            result_rx,
        };
        if start != Route::Home {
            app.go(start);
        }
        app
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::NavigateTo(id) => self.navigate_to(&id),
            Message::NextSection => self.step_section(true),
            Message::PrevSection => self.step_section(false),
            Message::OpenProject(id) => self.go(Route::ProjectDetail(id)),
            Message::BackToProjects => {
                let action = self.tracker.return_home_to(PROJECTS_SENTINEL, Instant::now());
                self.apply(Some(action));
            }
            Message::HistoryBack => {
                if self.router.go_back().is_some() {
                    self.route_changed();
                }
            }
            Message::HistoryForward => {
                if self.router.go_forward().is_some() {
                    self.route_changed();
                }
            }
            Message::SelectTag(tag) => {
                self.filter.tag = tag;
                self.carousel_jump = Some(0.0);
            }
            Message::SearchChanged(query) => {
                self.filter.query = query;
                self.carousel_jump = Some(0.0);
            }
            Message::ClearFilter => {
                self.filter = ProjectFilter::default();
                self.carousel_jump = Some(0.0);
            }
            Message::SubmitContact => self.submit_contact(),
            Message::ToggleTheme => {
                if let Err(e) = self.prefs.toggle_dark_mode(self.store.as_mut()) {
                    warn!("Failed to persist dark mode: {}", e);
                }
            }
            Message::ToggleLang => {
                if let Err(e) = self.prefs.toggle_lang(self.store.as_mut()) {
                    warn!("Failed to persist language: {}", e);
                }
            }
            Message::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    self.set_error(format!("Could not open {}: {}", url, e));
                }
            }
        }
    }

    fn navigate_to(&mut self, section_id: &str) {
        let action = self
            .tracker
            .navigate_to(section_id, &self.laid_out, Instant::now());
        self.apply(action);
    }

    fn step_section(&mut self, forward: bool) {
        if self.tracker.route() != RouteKind::Home {
            return;
        }
        let target = if forward {
            self.tracker.next_section()
        } else {
            self.tracker.previous_section()
        };
        if let Some(id) = target.map(str::to_string) {
            self.navigate_to(&id);
        }
    }

    fn apply(&mut self, action: Option<NavAction>) {
        match action {
            Some(NavAction::ScrollTo(id)) => self.scroll_target = Some(id),
            Some(NavAction::ChangeRoute(route)) => self.go(route),
            None => {}
        }
    }

    fn go(&mut self, route: Route) {
        if self.router.push(route) {
            self.route_changed();
        }
    }

    fn route_changed(&mut self) {
        if let Route::ProjectDetail(id) = self.router.current() {
            if !self.catalog.contains(id) {
                warn!(project = %id, "Unknown project, redirecting home");
                self.router.replace(Route::Home);
            }
        }

        let kind = self.router.current().kind();
        info!(path = %self.router.current().path(), "Route changed");
        self.tracker.set_route(kind);
        self.scroll_target = None;
        if kind != RouteKind::Home {
            // Sub-routes open at the top; home is laid out again from scratch
            self.reset_scroll = true;
            self.laid_out.clear();
        }
    }

    fn submit_contact(&mut self) {
        match self.contact.begin_submit() {
            Ok(form) => {
                if !send_command(&self.command_tx, IoCommand::SubmitContact(form)) {
                    self.contact
                        .finish_submit(Err("worker stopped".to_string()), Instant::now());
                }
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn process_io_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                IoResult::ContactSubmitted(result) => {
                    if let Err(e) = &result {
                        warn!("Contact submission failed: {}", e);
                    }
                    self.contact.finish_submit(result.map(|_| ()), Instant::now());
                }
                IoResult::CatalogLoaded(Ok(catalog)) => {
                    info!(count = catalog.len(), "Projects reloaded");
                    self.catalog = catalog;
                    self.set_info(format!("Reloaded {} projects", self.catalog.len()));
                    if self.router.current().kind() == RouteKind::ProjectDetail {
                        self.route_changed();
                    }
                }
                IoResult::CatalogLoaded(Err(e)) => {
                    warn!("Keeping previous projects: {}", e);
                    self.set_error(e);
                }
            }
        }
    }

    fn process_watch_events(&mut self) {
        let changed = match &self.watcher {
            Some(watcher) => watcher.drain(),
            None => return,
        };
        for path in changed {
            if Some(&path) == self.projects_path.as_ref() {
                if !send_command(&self.command_tx, IoCommand::LoadCatalog(path)) {
                    self.set_error("Projects file changed but could not be reloaded".to_string());
                }
            }
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    fn clear_expired_messages(&mut self, timeout: Duration) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed() >= timeout {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed() >= timeout {
                self.info_message = None;
            }
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.prefs.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(theme.visuals());
            self.applied_theme = Some(theme);
        }
    }

    pub fn theme(&self) -> AppTheme {
        self.prefs.theme()
    }
}

impl eframe::App for Folio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_io_results();
        self.process_watch_events();
        self.contact.expire_status(now);
        self.clear_expired_messages(Duration::from_secs(style::CONTACT_RESET_SECS));
        self.apply_theme(ctx);

        let mut messages = self.handle_input(ctx);

        let pending = self.tracker.poll_pending_scroll(now, &self.laid_out);
        self.apply(pending);

        self.render_header(ctx, &mut messages);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.router.current().clone() {
            Route::Home => self.render_home(ui, &mut messages),
            Route::ProjectList => self.render_project_list(ui, &mut messages),
            Route::ProjectDetail(id) => self.render_detail(ui, &id, &mut messages),
        });

        for message in messages {
            self.handle_message(message);
        }

        // Time-based transitions are checked on each frame
        if self.tracker.has_pending_scroll()
            || matches!(self.contact.status, ContactStatus::Sent { .. })
            || self.error_message.is_some()
            || self.info_message.is_some()
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
