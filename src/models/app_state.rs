use leptos::prelude::*;

use crate::models::notification::{mark_all_read, mark_read, sample_alerts, unread_count, Alert};
use crate::models::View;

/// Shell-level reactive state shared by every page via `use_context()`.
///
/// Pages keep their own records; only navigation and the chrome live here.
/// Alerts belong to the chrome: the bell, the slide-over and the
/// Notifications page all read the same list.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Page currently rendered by the router
    pub active_view: RwSignal<View>,
    /// Sidebar shows icons only
    pub sidebar_collapsed: RwSignal<bool>,
    /// Slide-over notification panel visibility
    pub notification_center_open: RwSignal<bool>,
    /// Alerts behind the bell badge and the Notifications page
    pub alerts: RwSignal<Vec<Alert>>,
    /// Success banner text (auto-dismissed by `SuccessBanner`)
    pub banner: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(View::Dashboard),
            sidebar_collapsed: RwSignal::new(false),
            notification_center_open: RwSignal::new(false),
            alerts: RwSignal::new(sample_alerts()),
            banner: RwSignal::new(None),
        }
    }

    pub fn navigate(&self, view: View) {
        self.active_view.set(view);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }

    pub fn open_notification_center(&self) {
        self.notification_center_open.set(true);
    }

    pub fn close_notification_center(&self) {
        self.notification_center_open.set(false);
    }

    /// Unread alert count; tracked, so the badge follows every mark-read.
    pub fn unread_alerts(&self) -> usize {
        self.alerts.with(|alerts| unread_count(alerts))
    }

    pub fn mark_alert_read(&self, id: &str) {
        self.alerts.update(|alerts| {
            mark_read(alerts, id);
        });
    }

    pub fn mark_all_alerts_read(&self) {
        self.alerts.update(|alerts| mark_all_read(alerts));
    }

    /// Show a success banner (auto-dismiss is handled by the component)
    pub fn show_banner(&self, message: impl Into<String>) {
        self.banner.set(Some(message.into()));
    }

    pub fn clear_banner(&self) {
        self.banner.set(None);
    }

    /// Margin class for the main content column
    pub fn content_class(&self) -> &'static str {
        if self.sidebar_collapsed.get() {
            "page page--sidebar-collapsed"
        } else {
            "page"
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let owner = Owner::new();
        owner.with(|| {
            let state = AppState::new();
            assert_eq!(state.active_view.get_untracked(), View::Dashboard);
            assert!(!state.sidebar_collapsed.get_untracked());
            assert_eq!(state.alerts.with_untracked(|a| unread_count(a)), 5);
            assert!(state.banner.get_untracked().is_none());
        });
    }

    #[test]
    fn test_toggle_sidebar_flips() {
        let owner = Owner::new();
        owner.with(|| {
            let state = AppState::new();
            state.toggle_sidebar();
            assert!(state.sidebar_collapsed.get_untracked());
            state.toggle_sidebar();
            assert!(!state.sidebar_collapsed.get_untracked());
        });
    }

    #[test]
    fn test_navigate_and_banner() {
        let owner = Owner::new();
        owner.with(|| {
            let state = AppState::new();
            state.navigate(View::Profile);
            assert_eq!(state.active_view.get_untracked(), View::Profile);

            state.show_banner("Saved");
            assert_eq!(state.banner.get_untracked().as_deref(), Some("Saved"));
            state.clear_banner();
            assert!(state.banner.get_untracked().is_none());
        });
    }

    #[test]
    fn test_alerts_are_shared_between_views() {
        let owner = Owner::new();
        owner.with(|| {
            let state = AppState::new();
            // Both the slide-over and the page read through copies of the same state
            let center = state;
            let page = state;

            center.mark_alert_read("n1");
            assert_eq!(page.alerts.with_untracked(|a| unread_count(a)), 4);
            assert!(!page.alerts.with_untracked(|a| a[0].unread));

            page.mark_all_alerts_read();
            assert_eq!(center.alerts.with_untracked(|a| unread_count(a)), 0);
        });
    }

    #[test]
    fn test_unknown_alert_id_changes_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let state = AppState::new();
            state.mark_alert_read("missing");
            assert_eq!(state.alerts.with_untracked(|a| unread_count(a)), 5);
        });
    }
}
