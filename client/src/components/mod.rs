//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and mutate the sketch session through the
//! [`SessionHandle`](crate::state::session::SessionHandle) context provided by
//! the root app.

pub mod session_controls;
pub mod sketch_host;
