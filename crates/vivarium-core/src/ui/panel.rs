//! The dosing panel: two option lists, a tab bar, and the inject action.
//!
//! This is the state machine behind the page's tabbed UI. All mutation
//! happens synchronously inside input handlers; the only time-driven piece
//! is the status-message auto-hide, advanced from `tick`.

use serde::Deserialize;

use crate::core::time::Countdown;
use crate::ui::options::OptionList;
use crate::ui::tabs::{TabBar, TabId};

/// Seconds the injection message stays visible before auto-hiding.
pub const DEFAULT_HIDE_DELAY: f32 = 4.0;

/// The fixed component and dose label lists, loaded from embedded JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub components: Vec<String>,
    pub doses: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A catalog with an empty list cannot drive the panel.
    /// Startup precondition — callers treat a failure here as fatal.
    pub fn is_usable(&self) -> bool {
        !self.components.is_empty() && !self.doses.is_empty()
    }
}

/// Panel state changes worth reporting to the paint layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelChange {
    TabChanged(TabId),
    ComponentSelected(usize),
    DoseSelected(usize),
    EnablementChanged(bool),
    MessageShown,
    MessageHidden,
}

/// Owns the selection slots, tab state, and the inject action.
pub struct InjectPanel {
    components: OptionList,
    doses: OptionList,
    tabs: TabBar,
    message: String,
    message_visible: bool,
    hide_timer: Countdown,
    hide_delay: f32,
}

impl InjectPanel {
    /// Build the panel from a catalog. Returns None if either list is
    /// empty — a configuration error the caller should treat as fatal.
    pub fn new(catalog: &Catalog) -> Option<Self> {
        if !catalog.is_usable() {
            log::error!("catalog has an empty option list; panel cannot start");
            return None;
        }
        Some(Self {
            components: OptionList::new(catalog.components.clone()),
            doses: OptionList::new(catalog.doses.clone()),
            tabs: TabBar::new(),
            message: String::new(),
            message_visible: false,
            hide_timer: Countdown::new(),
            hide_delay: DEFAULT_HIDE_DELAY,
        })
    }

    /// Override the auto-hide delay (seconds).
    pub fn with_hide_delay(mut self, secs: f32) -> Self {
        self.hide_delay = secs;
        self
    }

    // -- Selection --

    /// Record a component selection. Returns the changes to report.
    pub fn select_component(&mut self, index: usize) -> Vec<PanelChange> {
        let was_enabled = self.inject_enabled();
        let mut changes = Vec::new();
        if self.components.select(index) {
            changes.push(PanelChange::ComponentSelected(index));
        }
        if self.inject_enabled() != was_enabled {
            changes.push(PanelChange::EnablementChanged(self.inject_enabled()));
        }
        changes
    }

    /// Record a dose selection. Returns the changes to report.
    pub fn select_dose(&mut self, index: usize) -> Vec<PanelChange> {
        let was_enabled = self.inject_enabled();
        let mut changes = Vec::new();
        if self.doses.select(index) {
            changes.push(PanelChange::DoseSelected(index));
        }
        if self.inject_enabled() != was_enabled {
            changes.push(PanelChange::EnablementChanged(self.inject_enabled()));
        }
        changes
    }

    pub fn components(&self) -> &OptionList {
        &self.components
    }

    pub fn doses(&self) -> &OptionList {
        &self.doses
    }

    // -- Tabs --

    /// Activate a tab; idempotent for the current tab.
    pub fn set_active_tab(&mut self, tab: TabId) -> Vec<PanelChange> {
        if self.tabs.set_active(tab) {
            vec![PanelChange::TabChanged(tab)]
        } else {
            Vec::new()
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.tabs.active()
    }

    // -- Inject action --

    /// The action is permitted iff both slots are non-empty.
    pub fn inject_enabled(&self) -> bool {
        self.components.selected().is_some() && self.doses.selected().is_some()
    }

    /// Trigger the inject action. The paint layer keeps the button
    /// disabled until both slots are set, but a spurious invocation is
    /// tolerated here by re-checking the slots.
    ///
    /// Shows the message and (re)starts the auto-hide countdown. A second
    /// trigger while a message is pending replaces the text and restarts
    /// the delay, so the newest message always gets its full display time.
    pub fn trigger_inject(&mut self) -> Vec<PanelChange> {
        let (Some(component), Some(dose)) =
            (self.components.selected_label(), self.doses.selected_label())
        else {
            log::warn!("inject triggered without both selections; ignoring");
            return Vec::new();
        };
        self.message = format!("Simulating injection of {} of {}.", dose, component);
        self.message_visible = true;
        self.hide_timer.start(self.hide_delay);
        vec![PanelChange::MessageShown]
    }

    /// Advance the auto-hide countdown by dt seconds.
    pub fn tick(&mut self, dt: f32) -> Vec<PanelChange> {
        if self.hide_timer.tick(dt) {
            self.message_visible = false;
            vec![PanelChange::MessageHidden]
        } else {
            Vec::new()
        }
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }

    /// The current message text (valid while visible; stale otherwise).
    pub fn message_text(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            components: vec![
                "Paracetamol".to_string(),
                "Cyanide".to_string(),
                "Ibuprofen".to_string(),
                "Caffeine".to_string(),
                "Insulin".to_string(),
            ],
            doses: vec![
                "10mg".to_string(),
                "50mg".to_string(),
                "100mg".to_string(),
                "250mg".to_string(),
            ],
        }
    }

    fn panel() -> InjectPanel {
        InjectPanel::new(&catalog()).expect("catalog is usable")
    }

    #[test]
    fn initial_state() {
        let p = panel();
        assert_eq!(p.active_tab(), TabId::Components);
        assert!(!p.inject_enabled());
        assert!(!p.message_visible());
    }

    #[test]
    fn empty_catalog_is_fatal() {
        let bad = Catalog {
            components: Vec::new(),
            doses: vec!["10mg".to_string()],
        };
        assert!(InjectPanel::new(&bad).is_none());
    }

    #[test]
    fn catalog_from_json() {
        let json = r#"{ "components": ["Insulin"], "doses": ["10mg", "50mg"] }"#;
        let c = Catalog::from_json(json).unwrap();
        assert_eq!(c.components.len(), 1);
        assert_eq!(c.doses.len(), 2);
        assert!(c.is_usable());
    }

    #[test]
    fn enablement_requires_both_slots() {
        let mut p = panel();
        p.select_component(0);
        assert!(!p.inject_enabled());
        let changes = p.select_dose(2);
        assert!(p.inject_enabled());
        assert!(changes.contains(&PanelChange::EnablementChanged(true)));
    }

    #[test]
    fn dose_clicks_do_not_touch_component_selection() {
        let mut p = panel();
        p.select_component(1);
        p.select_dose(0);
        p.select_dose(3);
        assert_eq!(p.components().selected(), Some(1));
        assert_eq!(p.doses().selected(), Some(3));
    }

    #[test]
    fn inject_composes_exact_message() {
        let mut p = panel();
        p.select_component(0); // Paracetamol
        p.select_dose(2); // 100mg
        let changes = p.trigger_inject();
        assert_eq!(changes, vec![PanelChange::MessageShown]);
        assert!(p.message_visible());
        assert_eq!(
            p.message_text(),
            "Simulating injection of 100mg of Paracetamol."
        );
    }

    #[test]
    fn spurious_inject_is_a_noop() {
        let mut p = panel();
        p.select_component(0); // no dose selected
        let changes = p.trigger_inject();
        assert!(changes.is_empty());
        assert!(!p.message_visible());
        assert_eq!(p.message_text(), "");
    }

    #[test]
    fn message_hides_after_delay() {
        let mut p = panel();
        p.select_component(0);
        p.select_dose(2);
        p.trigger_inject();

        // 3.9 seconds in 60fps steps: still visible
        for _ in 0..234 {
            assert!(p.tick(1.0 / 60.0).is_empty());
        }
        assert!(p.message_visible());

        // Crossing the 4s mark hides it exactly once
        let mut hidden = 0;
        for _ in 0..12 {
            if p.tick(1.0 / 60.0).contains(&PanelChange::MessageHidden) {
                hidden += 1;
            }
        }
        assert_eq!(hidden, 1);
        assert!(!p.message_visible());
    }

    #[test]
    fn retrigger_replaces_message_and_restarts_delay() {
        let mut p = panel().with_hide_delay(1.0);
        p.select_component(0);
        p.select_dose(0);
        p.trigger_inject();
        p.tick(0.8);

        // Second trigger with a new dose just before the first would hide
        p.select_dose(3);
        p.trigger_inject();
        assert_eq!(
            p.message_text(),
            "Simulating injection of 250mg of Paracetamol."
        );

        // The old deadline (0.2s away) must not hide the new message
        assert!(p.tick(0.5).is_empty());
        assert!(p.message_visible());
        assert!(p.tick(0.6).contains(&PanelChange::MessageHidden));
    }

    #[test]
    fn tab_switches_are_exclusive() {
        let mut p = panel();
        let changes = p.set_active_tab(TabId::Doses);
        assert_eq!(changes, vec![PanelChange::TabChanged(TabId::Doses)]);
        assert_eq!(p.active_tab(), TabId::Doses);
        // Repeat is a no-op
        assert!(p.set_active_tab(TabId::Doses).is_empty());
    }
}
