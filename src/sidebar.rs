//! Visibility of the knowledge-file sidebar.
//!
//! Closing is two-step: the sidebar stays mounted while its exit animation
//! runs, and only the animation's end event makes it [`SidebarVisibility::Closed`].

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarVisibility {
    #[default]
    Open,
    /// Exit animation in progress.
    Closing,
    Closed,
}

impl SidebarVisibility {
    /// `Open -> Closing`. Returns whether the state changed.
    pub fn request_close(&mut self) -> bool {
        match self {
            SidebarVisibility::Open => {
                *self = SidebarVisibility::Closing;
                true
            }
            SidebarVisibility::Closing | SidebarVisibility::Closed => false,
        }
    }

    /// `Closing -> Closed`, fired by the exit animation's end event.
    pub fn finish_exit(&mut self) -> bool {
        match self {
            SidebarVisibility::Closing => {
                *self = SidebarVisibility::Closed;
                true
            }
            SidebarVisibility::Open | SidebarVisibility::Closed => false,
        }
    }

    /// Reopens immediately, without passing through `Closing`.
    pub fn request_open(&mut self) -> bool {
        match self {
            SidebarVisibility::Closing | SidebarVisibility::Closed => {
                *self = SidebarVisibility::Open;
                true
            }
            SidebarVisibility::Open => false,
        }
    }

    /// Whether the sidebar element is in the tree.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, SidebarVisibility::Closed)
    }

    /// Whether the reopen button is shown.
    pub fn is_fully_closed(&self) -> bool {
        matches!(self, SidebarVisibility::Closed)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self, SidebarVisibility::Closing)
    }
}
