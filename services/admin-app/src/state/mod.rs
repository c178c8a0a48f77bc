//! View-local state machines
//!
//! Framework-independent and synchronous; components drive them from UI
//! events and network completions.

pub mod cache;
pub mod list;
pub mod overview;
pub mod toast;
