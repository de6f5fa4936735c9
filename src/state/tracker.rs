// Navigation tracker - active section and section/route navigation
use crate::model::SectionList;
use crate::state::router::{Route, RouteKind};
use crate::subscription::viewport::{SectionRegion, Subscription, TriggerBand, ViewportObserver};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Active section value while a dedicated projects route is shown.
pub const PROJECTS_SENTINEL: &str = "projects";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    ScrollTo(String),
    ChangeRoute(Route),
}

/// When a scroll requested from another route is attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTiming {
    FixedDelay(Duration),
    AfterMount,
}

/// Answers whether a section region currently exists in the laid-out view.
pub trait SectionLookup {
    fn is_present(&self, section_id: &str) -> bool;
}

impl SectionLookup for HashSet<String> {
    fn is_present(&self, section_id: &str) -> bool {
        self.contains(section_id)
    }
}

impl<V> SectionLookup for HashMap<String, V> {
    fn is_present(&self, section_id: &str) -> bool {
        self.contains_key(section_id)
    }
}

struct PendingScroll {
    target: String,
    requested_at: Instant,
}

pub struct NavigationTracker {
    sections: SectionList,
    active: String,
    route: RouteKind,
    observer: ViewportObserver,
    entered: Rc<RefCell<Vec<String>>>,
    subscriptions: Vec<Subscription>,
    timing: ScrollTiming,
    pending_scroll: Option<PendingScroll>,
    home_mounted: bool,
}

impl NavigationTracker {
    pub fn new(sections: SectionList, band: TriggerBand, timing: ScrollTiming) -> Self {
        let active = sections.first_id().to_string();
        let mut tracker = Self {
            sections,
            active,
            route: RouteKind::Home,
            observer: ViewportObserver::new(band),
            entered: Rc::new(RefCell::new(Vec::new())),
            subscriptions: Vec::new(),
            timing,
            pending_scroll: None,
            home_mounted: false,
        };
        tracker.subscribe_sections();
        tracker
    }

    pub fn active_section(&self) -> &str {
        &self.active
    }

    pub fn route(&self) -> RouteKind {
        self.route
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    fn subscribe_sections(&mut self) {
        for section in self.sections.iter() {
            let entered = Rc::clone(&self.entered);
            let sub = self
                .observer
                .subscribe(&section.id, move |id| entered.borrow_mut().push(id.to_string()));
            self.subscriptions.push(sub);
        }
    }

    fn unsubscribe_sections(&mut self) {
        for sub in self.subscriptions.drain(..) {
            self.observer.unsubscribe(sub);
        }
        self.entered.borrow_mut().clear();
    }

    /// Follow the external router.
    pub fn set_route(&mut self, route: RouteKind) {
        if route == self.route {
            return;
        }
        let was_home = self.route == RouteKind::Home;
        self.route = route;

        if route == RouteKind::Home {
            // Fresh view: nothing restored from before the route change
            self.subscribe_sections();
            self.active = self.sections.first_id().to_string();
            self.home_mounted = false;
            debug!("Observation resumed on home");
        } else {
            if was_home {
                self.unsubscribe_sections();
            }
            self.active = PROJECTS_SENTINEL.to_string();
            self.home_mounted = false;
            if self.timing == ScrollTiming::AfterMount && self.pending_scroll.take().is_some() {
                debug!("Dropped pending scroll, home left before mount");
            }
        }
    }

    /// Feed one frame of laid-out section regions through the observer.
    pub fn observe(&mut self, regions: &[SectionRegion], viewport_height: f32) {
        if self.route != RouteKind::Home {
            return;
        }
        self.observer.observe(regions, viewport_height);
        let batch: Vec<String> = self.entered.borrow_mut().drain(..).collect();
        self.apply_band_batch(batch);
    }

    /// Apply one batch of band entries; the last known id wins.
    pub fn apply_band_batch<I, S>(&mut self, batch: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.route != RouteKind::Home {
            return;
        }
        for id in batch {
            let id = id.as_ref();
            if self.sections.contains(id) && self.active != id {
                debug!(section = id, "Active section changed");
                self.active = id.to_string();
            }
        }
    }

    pub fn mark_home_mounted(&mut self) {
        if self.route == RouteKind::Home {
            self.home_mounted = true;
        }
    }

    pub fn navigate_to(
        &mut self,
        section_id: &str,
        lookup: &dyn SectionLookup,
        now: Instant,
    ) -> Option<NavAction> {
        match self.route {
            RouteKind::Home => {
                if lookup.is_present(section_id) {
                    Some(NavAction::ScrollTo(section_id.to_string()))
                } else {
                    debug!(section = section_id, "No region for section, ignoring");
                    None
                }
            }
            _ if section_id == PROJECTS_SENTINEL => Some(NavAction::ChangeRoute(Route::ProjectList)),
            _ => Some(self.return_home_to(section_id, now)),
        }
    }

    /// Go home, then scroll to `section_id` once the pending scroll is due.
    pub fn return_home_to(&mut self, section_id: &str, now: Instant) -> NavAction {
        self.pending_scroll = Some(PendingScroll {
            target: section_id.to_string(),
            requested_at: now,
        });
        NavAction::ChangeRoute(Route::Home)
    }

    /// Attempt the pending scroll once it is due. Attempted exactly once.
    pub fn poll_pending_scroll(
        &mut self,
        now: Instant,
        lookup: &dyn SectionLookup,
    ) -> Option<NavAction> {
        let due = match (&self.pending_scroll, self.timing) {
            (None, _) => false,
            (Some(pending), ScrollTiming::FixedDelay(delay)) => {
                now.saturating_duration_since(pending.requested_at) >= delay
            }
            (Some(_), ScrollTiming::AfterMount) => self.home_mounted,
        };
        if !due {
            return None;
        }

        let pending = self.pending_scroll.take()?;
        if self.route == RouteKind::Home && lookup.is_present(&pending.target) {
            Some(NavAction::ScrollTo(pending.target))
        } else {
            debug!(section = %pending.target, "Pending scroll target not laid out, dropped");
            None
        }
    }

    pub fn next_section(&self) -> Option<&str> {
        let index = self.sections.position(&self.active)?;
        self.sections.get(index + 1).map(|s| s.id.as_str())
    }

    pub fn previous_section(&self) -> Option<&str> {
        let index = self.sections.position(&self.active)?;
        let prev = index.checked_sub(1)?;
        self.sections.get(prev).map(|s| s.id.as_str())
    }
}
