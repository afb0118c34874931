//! Notification data structures and lifecycle timing.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// Delay from creation until the entry animation settles (ms).
pub const ENTRY_DELAY_MS: u32 = 100;
/// Delay from creation until the notification starts leaving (ms).
pub const DISPLAY_DURATION_MS: u32 = 4000;
/// Duration of the exit animation before the notification is discarded (ms).
pub const EXIT_DELAY_MS: u32 = 300;

/// Unique identifier for a notification, allocated in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Severity of a notification, controlling its presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Fixed severity colour mapping: Success green, Error red, Info blue.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Severity::Success => "#4caf50",
            Severity::Error => "#f44336",
            Severity::Info => "#2196f3",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
            Severity::Info => "toast--info",
        }
    }
}

/// Lifecycle phase of a notification.
///
/// The sequence is fixed and always runs to completion; there is no early
/// dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
    Removed,
}

impl Phase {
    /// The successor phase, or `None` once removed.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Entering => Some(Phase::Visible),
            Phase::Visible => Some(Phase::Leaving),
            Phase::Leaving => Some(Phase::Removed),
            Phase::Removed => None,
        }
    }

    /// How long the scheduler waits in this phase before moving on (ms).
    pub fn delay_to_next_ms(self) -> Option<u32> {
        match self {
            Phase::Entering => Some(ENTRY_DELAY_MS),
            Phase::Visible => Some(DISPLAY_DURATION_MS - ENTRY_DELAY_MS),
            Phase::Leaving => Some(EXIT_DELAY_MS),
            Phase::Removed => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Phase::Entering => "toast--entering",
            Phase::Visible => "toast--visible",
            Phase::Leaving => "toast--leaving",
            Phase::Removed => "toast--removed",
        }
    }
}

/// The phase a notification is in `elapsed_ms` after creation.
///
/// Pure counterpart of the timer-driven transitions; tests assert the
/// timeline through this without scheduling anything.
pub fn phase_at(elapsed_ms: u32) -> Phase {
    if elapsed_ms < ENTRY_DELAY_MS {
        Phase::Entering
    } else if elapsed_ms < DISPLAY_DURATION_MS {
        Phase::Visible
    } else if elapsed_ms < DISPLAY_DURATION_MS + EXIT_DELAY_MS {
        Phase::Leaving
    } else {
        Phase::Removed
    }
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
    phase: Phase,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification in the `Entering` phase with a fresh id.
    ///
    /// An empty message is accepted and displayed as-is; this constructor
    /// cannot fail.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: NotificationId::next(),
            message: message.into(),
            severity,
            phase: Phase::Entering,
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Move to the next lifecycle phase. Returns the new phase, or `None`
    /// when the notification was already removed.
    pub fn advance(&mut self) -> Option<Phase> {
        let next = self.phase.next()?;
        self.phase = next;
        Some(next)
    }

    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let first = Notification::success("one");
        let second = Notification::success("two");
        assert_ne!(first.id(), second.id());
        assert!(first.id().value() < second.id().value());
    }

    #[test]
    fn test_new_notification_is_entering() {
        let notification = Notification::new("saved", Severity::Success);
        assert_eq!(notification.phase(), Phase::Entering);
        assert_eq!(notification.message(), "saved");
        assert_eq!(notification.severity(), Severity::Success);
    }

    #[test]
    fn test_empty_message_is_accepted() {
        let notification = Notification::info("");
        assert_eq!(notification.message(), "");
    }

    #[test]
    fn test_advance_walks_the_full_sequence_once() {
        let mut notification = Notification::info("hello");
        assert_eq!(notification.advance(), Some(Phase::Visible));
        assert_eq!(notification.advance(), Some(Phase::Leaving));
        assert_eq!(notification.advance(), Some(Phase::Removed));
        assert!(notification.is_removed());
        assert_eq!(notification.advance(), None);
    }

    #[test]
    fn test_phase_timeline() {
        assert_eq!(phase_at(0), Phase::Entering);
        assert_eq!(phase_at(ENTRY_DELAY_MS - 1), Phase::Entering);
        assert_eq!(phase_at(ENTRY_DELAY_MS), Phase::Visible);
        assert_eq!(phase_at(DISPLAY_DURATION_MS - 1), Phase::Visible);
        assert_eq!(phase_at(DISPLAY_DURATION_MS), Phase::Leaving);
        assert_eq!(phase_at(DISPLAY_DURATION_MS + EXIT_DELAY_MS - 1), Phase::Leaving);
        assert_eq!(phase_at(DISPLAY_DURATION_MS + EXIT_DELAY_MS), Phase::Removed);
    }

    #[test]
    fn test_transition_delays_cover_the_display_duration() {
        let mut elapsed = 0;
        let mut phase = Phase::Entering;
        while let Some(delay) = phase.delay_to_next_ms() {
            elapsed += delay;
            phase = phase.next().unwrap();
        }
        assert_eq!(phase, Phase::Removed);
        assert_eq!(elapsed, DISPLAY_DURATION_MS + EXIT_DELAY_MS);
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color_hex(), Severity::Success.color_hex());
        assert_ne!(Severity::Info.color_hex(), Severity::Error.color_hex());
        assert_ne!(Severity::Success.color_hex(), Severity::Error.color_hex());
    }

    #[test]
    fn test_default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
