/// The three panels of the dosing UI. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Components,
    Doses,
    Inject,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Components, TabId::Doses, TabId::Inject];

    /// Stable numeric index for the wire protocol and JS button mapping.
    pub fn index(self) -> u32 {
        match self {
            TabId::Components => 0,
            TabId::Doses => 1,
            TabId::Inject => 2,
        }
    }

    pub fn from_index(index: u32) -> Option<TabId> {
        match index {
            0 => Some(TabId::Components),
            1 => Some(TabId::Doses),
            2 => Some(TabId::Inject),
            _ => None,
        }
    }
}

/// Tab header state: one active tab at all times, starting on Components.
pub struct TabBar {
    active: TabId,
}

impl TabBar {
    pub fn new() -> Self {
        Self {
            active: TabId::Components,
        }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    /// Activate a tab. Repeated calls with the current tab are a no-op
    /// (no flicker). Returns true if the active tab changed.
    pub fn set_active(&mut self, tab: TabId) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    /// Whether the given tab's panel is the visible one.
    pub fn is_visible(&self, tab: TabId) -> bool {
        self.active == tab
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}
