//! Transient notification model
//!
//! A notification walks a fixed phase sequence (Entering, Visible, Leaving,
//! Removed) on timers owned by the host environment. This module holds the
//! pure model: phases, per-transition delays and the stack collection. The
//! `frontend` crate drives the transitions with its own scheduler and renders
//! the stack as toasts.

pub mod notification;
pub mod stack;

pub use notification::{
    phase_at, Notification, NotificationId, Phase, Severity, DISPLAY_DURATION_MS, ENTRY_DELAY_MS,
    EXIT_DELAY_MS,
};
pub use stack::NotificationStack;
