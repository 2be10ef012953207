//! # Overlay lifecycle
//!
//! [`ModalController`] tracks every overlay of a page by key. Each overlay is
//! independently [`ModalState::Closed`] or [`ModalState::Open`]; the open state
//! is also reflected as a class marker so the renderer can apply it directly.
//!
//! Escape handling is subscription based: opening an overlay takes a
//! [`Subscription`] on the Escape key, closing it releases that subscription.
//! The UI forwards every key press to [`ModalController::handle_key`], which
//! closes exactly the overlays that currently hold a subscription.
//!
//! Backdrop and close-button clicks are dismissal triggers wired once per
//! overlay by [`ModalController::set_close_modal_window_event_listeners`] and
//! dispatched through [`ModalController::handle_click`].
//!
//! Keeping only one overlay open at a time is the caller's job.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::classes::ClassList;
use crate::config::ModalConfig;

pub const ESCAPE: &str = "Escape";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Where a click on an overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay itself, outside the content panel.
    Backdrop,
    /// The explicit close button.
    CloseButton,
    /// Anywhere inside the content panel.
    Content,
}

/// Handle to a key listener. Not `Clone`: exactly one owner releases it.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

#[derive(Debug, Default)]
struct Overlay {
    state: ModalState,
    classes: ClassList,
    escape: Option<Subscription>,
    dismissal_wired: bool,
}

/// Open/close state and dismissal triggers for a set of overlays.
#[derive(Debug)]
pub struct ModalController<K> {
    config: ModalConfig,
    overlays: Vec<(K, Overlay)>,
    key_listeners: BTreeMap<u64, (String, K)>,
    next_subscription: u64,
}

impl<K> Default for ModalController<K> {
    fn default() -> Self {
        Self::new(ModalConfig::default())
    }
}

impl<K> ModalController<K> {
    pub fn new(config: ModalConfig) -> Self {
        Self {
            config,
            overlays: Vec::new(),
            key_listeners: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Number of live key subscriptions.
    pub fn listener_count(&self) -> usize {
        self.key_listeners.len()
    }
}

impl<K: Copy + Eq + Debug> ModalController<K> {
    fn overlay(&self, key: K) -> Option<&Overlay> {
        self.overlays.iter().find(|(k, _)| *k == key).map(|(_, o)| o)
    }

    fn overlay_mut(&mut self, key: K) -> &mut Overlay {
        let index = match self.overlays.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.overlays.push((key, Overlay::default()));
                self.overlays.len() - 1
            }
        };
        &mut self.overlays[index].1
    }

    fn subscribe(&mut self, key_name: &str, target: K) -> Subscription {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.key_listeners.insert(id, (key_name.to_string(), target));
        Subscription { id }
    }

    fn release(&mut self, subscription: Subscription) {
        self.key_listeners.remove(&subscription.id);
    }

    /// Wire backdrop and close-button dismissal for an overlay. Safe to call
    /// more than once.
    pub fn set_close_modal_window_event_listeners(&mut self, key: K) {
        self.overlay_mut(key).dismissal_wired = true;
    }

    /// Show an overlay and subscribe it to the Escape key.
    pub fn open_modal_window(&mut self, key: K) {
        let opened_class = self.config.opened_class.clone();
        if self.overlay_mut(key).state == ModalState::Open {
            return;
        }

        let subscription = self.subscribe(ESCAPE, key);
        let overlay = self.overlay_mut(key);
        overlay.state = ModalState::Open;
        overlay.classes.add(&opened_class);
        overlay.escape = Some(subscription);
        tracing::debug!(overlay = ?key, "overlay opened");
    }

    /// Hide an overlay and release its Escape subscription. Unknown keys are
    /// ignored.
    pub fn close_modal_window(&mut self, key: K) {
        if self.overlay(key).is_none() {
            return;
        }
        let opened_class = self.config.opened_class.clone();
        let overlay = self.overlay_mut(key);
        overlay.state = ModalState::Closed;
        overlay.classes.remove(&opened_class);
        if let Some(subscription) = overlay.escape.take() {
            self.release(subscription);
            tracing::debug!(overlay = ?key, "overlay closed");
        }
    }

    /// Dispatch a key press. Returns the overlays it closed.
    pub fn handle_key(&mut self, key_name: &str) -> Vec<K> {
        let targets: Vec<K> = self
            .key_listeners
            .values()
            .filter(|(name, _)| name == key_name)
            .map(|(_, target)| *target)
            .collect();

        for target in &targets {
            self.close_modal_window(*target);
        }
        targets
    }

    /// Dispatch a click on an overlay. Returns whether it closed the overlay.
    pub fn handle_click(&mut self, key: K, target: ClickTarget) -> bool {
        let Some(overlay) = self.overlay(key) else {
            return false;
        };
        if !overlay.dismissal_wired || overlay.state == ModalState::Closed {
            return false;
        }
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => {
                self.close_modal_window(key);
                true
            }
            ClickTarget::Content => false,
        }
    }

    pub fn state(&self, key: K) -> ModalState {
        self.overlay(key).map(|o| o.state).unwrap_or_default()
    }

    pub fn is_open(&self, key: K) -> bool {
        self.state(key) == ModalState::Open
    }

    /// Class markers of an overlay (the opened marker while open).
    pub fn classes(&self, key: K) -> ClassList {
        self.overlay(key).map(|o| o.classes.clone()).unwrap_or_default()
    }

    /// Overlays currently open, in registration order.
    pub fn open_overlays(&self) -> Vec<K> {
        self.overlays
            .iter()
            .filter(|(_, o)| o.state == ModalState::Open)
            .map(|(k, _)| *k)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ModalController<&'static str> {
        let mut modals = ModalController::default();
        for key in ["edit", "image", "info"] {
            modals.set_close_modal_window_event_listeners(key);
        }
        modals
    }

    #[test]
    fn test_initial_state_is_closed() {
        let modals = controller();
        assert_eq!(modals.state("edit"), ModalState::Closed);
        assert_eq!(modals.state("never-registered"), ModalState::Closed);
        assert!(modals.classes("edit").is_empty());
    }

    #[test]
    fn test_open_adds_marker_and_escape_subscription() {
        let mut modals = controller();
        modals.open_modal_window("edit");
        assert!(modals.is_open("edit"));
        assert!(modals.classes("edit").contains("popup_is-opened"));
        assert_eq!(modals.listener_count(), 1);

        // Reopening does not stack listeners.
        modals.open_modal_window("edit");
        assert_eq!(modals.listener_count(), 1);
    }

    #[test]
    fn test_escape_closes_and_releases_listener() {
        let mut modals = controller();
        modals.open_modal_window("image");

        assert_eq!(modals.handle_key("Escape"), vec!["image"]);
        assert!(!modals.is_open("image"));
        assert!(!modals.classes("image").contains("popup_is-opened"));
        assert_eq!(modals.listener_count(), 0);

        // A second Escape has nothing left to act on.
        assert!(modals.handle_key("Escape").is_empty());
        assert!(!modals.is_open("image"));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut modals = controller();
        modals.open_modal_window("edit");
        assert!(modals.handle_key("Enter").is_empty());
        assert!(modals.is_open("edit"));
    }

    #[test]
    fn test_programmatic_close_releases_listener() {
        let mut modals = controller();
        for _ in 0..3 {
            modals.open_modal_window("info");
            modals.close_modal_window("info");
        }
        assert_eq!(modals.listener_count(), 0);
    }

    #[test]
    fn test_backdrop_and_close_button_dismiss() {
        let mut modals = controller();
        modals.open_modal_window("edit");
        assert!(!modals.handle_click("edit", ClickTarget::Content));
        assert!(modals.is_open("edit"));
        assert!(modals.handle_click("edit", ClickTarget::Backdrop));
        assert!(!modals.is_open("edit"));

        modals.open_modal_window("edit");
        assert!(modals.handle_click("edit", ClickTarget::CloseButton));
        assert!(!modals.is_open("edit"));
        assert_eq!(modals.listener_count(), 0);
    }

    #[test]
    fn test_wiring_twice_changes_nothing() {
        let mut modals = controller();
        modals.set_close_modal_window_event_listeners("edit");
        modals.set_close_modal_window_event_listeners("edit");
        assert_eq!(modals.overlays.len(), 3);
        assert_eq!(modals.listener_count(), 0);
        assert!(!modals.is_open("edit"));

        // Dismissal still fires exactly once per opening.
        modals.open_modal_window("edit");
        assert!(modals.handle_click("edit", ClickTarget::Backdrop));
        assert!(!modals.handle_click("edit", ClickTarget::Backdrop));
        assert_eq!(modals.listener_count(), 0);
    }

    #[test]
    fn test_click_on_closed_overlay_does_nothing() {
        let mut modals = controller();
        assert!(!modals.handle_click("image", ClickTarget::Backdrop));
        assert!(!modals.handle_click("image", ClickTarget::CloseButton));
        assert!(!modals.is_open("image"));
        assert!(modals.classes("image").is_empty());
        assert_eq!(modals.listener_count(), 0);
    }

    #[test]
    fn test_closing_unknown_overlay_registers_nothing() {
        let mut modals = controller();
        modals.close_modal_window("never-registered");
        assert_eq!(modals.overlays.len(), 3);
        assert!(modals.open_overlays().is_empty());
    }

    #[test]
    fn test_clicks_need_wired_dismissal() {
        let mut modals: ModalController<&str> = ModalController::default();
        modals.open_modal_window("bare");
        assert!(!modals.handle_click("bare", ClickTarget::Backdrop));
        assert!(modals.is_open("bare"));
        assert_eq!(modals.handle_key("Escape"), vec!["bare"]);
    }

    #[test]
    fn test_two_open_overlays_are_not_guarded() {
        let mut modals = controller();
        modals.open_modal_window("edit");
        modals.open_modal_window("image");
        assert_eq!(modals.open_overlays(), vec!["edit", "image"]);

        let mut closed = modals.handle_key("Escape");
        closed.sort();
        assert_eq!(closed, vec!["edit", "image"]);
        assert!(modals.open_overlays().is_empty());
    }

    #[test]
    fn test_custom_opened_class() {
        let mut modals = ModalController::new(ModalConfig {
            opened_class: "is-open".to_string(),
        });
        modals.open_modal_window(1u8);
        assert_eq!(modals.classes(1).to_string(), "is-open");
    }
}
