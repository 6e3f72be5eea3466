pub mod drag;
pub mod editor;
pub mod list_ops;
pub mod session_ops;

use std::fmt;

use serde::Serialize;

/// Why an intent left the editor unchanged.
///
/// These are not failures: every rejected intent is a silent no-op, the
/// reason only exists so front ends can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    /// Content was empty after trimming
    EmptyContent,
    /// No item with the requested id
    UnknownItem,
    /// A session-only intent arrived while no session is open
    SessionClosed,
    /// Delete requested but the configuration has no delete action
    DeleteDisabled,
    /// Drag finished outside a drop target
    DragCancelled,
    /// Drag finished where it started
    SamePosition,
    /// Drag indices outside the list
    OutOfRange,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ignored::EmptyContent => "empty content",
            Ignored::UnknownItem => "unknown item",
            Ignored::SessionClosed => "no edit session open",
            Ignored::DeleteDisabled => "delete is disabled",
            Ignored::DragCancelled => "drag cancelled",
            Ignored::SamePosition => "dropped at the same position",
            Ignored::OutOfRange => "index out of range",
        };
        f.write_str(s)
    }
}
