//! Upload region state machine.

use crate::message::StatusMessage;

/// Mutable UI state owned by one upload region instance.
///
/// Created on mount and mutated only by the region's event handlers:
/// drag transitions toggle the highlight, validation outcomes install
/// a status message, and the dismiss timer clears it again. Discarded
/// on unmount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionState {
    dragging: bool,
    message: StatusMessage,
}

impl RegionState {
    /// Fresh idle state: not dragging, no message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently hovering over the region.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The currently shown message ([`StatusMessage::hidden`] when none).
    #[must_use]
    pub const fn message(&self) -> &StatusMessage {
        &self.message
    }

    /// A drag entered the region: show the drop highlight and clear
    /// any message left over from a previous action.
    pub fn drag_enter(&mut self) {
        self.dragging = true;
        self.message = StatusMessage::hidden();
    }

    /// The drag left the region without dropping.
    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// A drop ended the drag; the selection verdict is applied
    /// separately via [`RegionState::show_message`].
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Show a status message, superseding whatever was shown before.
    pub fn show_message(&mut self, message: StatusMessage) {
        self.message = message;
    }

    /// Hide the current message.
    pub fn dismiss_message(&mut self) {
        self.message = StatusMessage::hidden();
    }
}
