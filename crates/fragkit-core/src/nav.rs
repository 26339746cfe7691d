//! Mobile navigation panel state machine.
//!
//! Kept pure so every transition is table-testable; the web crate holds the
//! current state in a cell and applies DOM classes after each transition.

/// Panel state. Initial state is `Closed`; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    /// True when the panel is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Events that can move the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The hamburger control was activated.
    ToggleActivated,
    /// A dedicated close control was activated.
    CloseActivated,
    /// The overlay backdrop was activated.
    OverlayActivated,
    /// An in-panel navigation link was activated.
    LinkActivated,
    /// The viewport was resized to the given width.
    Resized { width_px: u32 },
}

/// Apply one event. `breakpoint_px` is the width above which the panel
/// force-closes on resize; below it, a resize leaves the state unchanged.
pub fn transition(state: PanelState, event: PanelEvent, breakpoint_px: u32) -> PanelState {
    match event {
        PanelEvent::ToggleActivated => match state {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        },
        PanelEvent::CloseActivated | PanelEvent::OverlayActivated | PanelEvent::LinkActivated => {
            PanelState::Closed
        }
        PanelEvent::Resized { width_px } => {
            if width_px > breakpoint_px {
                PanelState::Closed
            } else {
                state
            }
        }
    }
}
