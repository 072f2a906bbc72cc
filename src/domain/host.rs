//! Interfaces to the host editor this plugin core is embedded in.
//!
//! The host owns settings persistence, command registration and the editor
//! UI; this crate only consumes the two capabilities it needs. Resolving
//! which document is currently active stays with the host — callers hand the
//! active surface in per invocation.

/// Displays a transient message to the user. Used to surface fetch failures.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// The currently active editable document.
pub trait EditorSurface: Send + Sync {
    /// Replaces the document's full content with `text`.
    fn replace_contents(&self, text: &str);
}
