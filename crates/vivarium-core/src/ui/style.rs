//! Pure mapping from UI state to paint tokens.
//!
//! "What is selected" is data owned by the panel; "how it is painted" is a
//! token the TypeScript layer translates into class lists. Keeping the
//! mapping pure lets the selection invariants be tested without a DOM.

/// Paint token for an option button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Idle,
    Selected,
}

impl ButtonStyle {
    /// Wire representation for the frame buffer.
    pub fn token(self) -> f32 {
        match self {
            ButtonStyle::Idle => 0.0,
            ButtonStyle::Selected => 1.0,
        }
    }
}

/// Paint token for a tab header / panel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStyle {
    Inactive,
    Active,
}

impl TabStyle {
    pub fn token(self) -> f32 {
        match self {
            TabStyle::Inactive => 0.0,
            TabStyle::Active => 1.0,
        }
    }
}

/// Map an option button's selection state to its paint token.
pub fn button_style(selected: bool) -> ButtonStyle {
    if selected {
        ButtonStyle::Selected
    } else {
        ButtonStyle::Idle
    }
}

/// Map a tab's active state to its paint token.
pub fn tab_style(active: bool) -> TabStyle {
    if active {
        TabStyle::Active
    } else {
        TabStyle::Inactive
    }
}
