//! Recording page adapter for testing.
//!
//! Captures every mutation the client core applies to the host page,
//! in order, so tests can assert both final region contents and the
//! sequence that produced them.

use std::sync::Mutex;

use crate::ports::{AuthForm, HostPage, NavbarView, PageKind, Region, RegionView};

/// One recorded page mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum PageMutation {
    Navbar(NavbarView),
    FormEnabled(AuthForm, bool),
    Render(Region, RegionView),
}

/// Host page that records mutations instead of drawing them.
#[derive(Debug)]
pub struct RecordingPage {
    kind: PageKind,
    log: Mutex<Vec<PageMutation>>,
}

impl RecordingPage {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Recording page posing as the home page.
    pub fn home() -> Self {
        Self::new(PageKind::Home)
    }

    /// Recording page posing as the profile page.
    pub fn profile() -> Self {
        Self::new(PageKind::Profile)
    }

    /// All recorded mutations, oldest first.
    pub fn mutations(&self) -> Vec<PageMutation> {
        self.log.lock().unwrap().clone()
    }

    /// The navbar as last set, if it was ever set.
    pub fn navbar(&self) -> Option<NavbarView> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|m| match m {
                PageMutation::Navbar(view) => Some(view.clone()),
                _ => None,
            })
    }

    /// Last enabled state applied to a form, if any.
    pub fn form_enabled(&self, form: AuthForm) -> Option<bool> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|m| match m {
                PageMutation::FormEnabled(f, enabled) if *f == form => Some(*enabled),
                _ => None,
            })
    }

    /// Current contents of a region, if it was ever rendered.
    pub fn region(&self, region: Region) -> Option<RegionView> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|m| match m {
                PageMutation::Render(r, view) if *r == region => Some(view.clone()),
                _ => None,
            })
    }

    /// Every view rendered into a region, oldest first.
    pub fn region_history(&self, region: Region) -> Vec<RegionView> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| match m {
                PageMutation::Render(r, view) if *r == region => Some(view.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clears the recorded history.
    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }
}

impl HostPage for RecordingPage {
    fn kind(&self) -> PageKind {
        self.kind
    }

    fn set_navbar(&self, navbar: NavbarView) {
        self.log.lock().unwrap().push(PageMutation::Navbar(navbar));
    }

    fn set_form_enabled(&self, form: AuthForm, enabled: bool) {
        self.log
            .lock()
            .unwrap()
            .push(PageMutation::FormEnabled(form, enabled));
    }

    fn render(&self, region: Region, view: RegionView) {
        self.log
            .lock()
            .unwrap()
            .push(PageMutation::Render(region, view));
    }
}
