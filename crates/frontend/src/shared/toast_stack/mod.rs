//! Toast notifications.
//!
//! `ToastStackService` owns the live notification stack and drives each
//! entry through its lifecycle (Entering -> Visible -> Leaving -> Removed)
//! with one detached timer task per toast. Timers are independent: toasts
//! never share a timer and are never dismissed early. `ToastHost` renders
//! the stack and must be mounted exactly once, at the application root.

use contracts::shared::notifications::{Notification, NotificationId, NotificationStack, Phase, Severity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// A handle returned by `ToastStackService::notify`.
///
/// Identifies the notification; callers are not required to hold it, removal
/// is fully automatic.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    id: NotificationId,
    svc: ToastStackService,
}

impl ToastHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Current lifecycle phase, or `None` once the toast has been removed.
    pub fn phase(&self) -> Option<Phase> {
        self.svc.phase_of(self.id)
    }
}

/// Centralized stack of transient notifications.
#[derive(Clone, Copy)]
pub struct ToastStackService {
    stack: RwSignal<NotificationStack>,
}

impl ToastStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(NotificationStack::new()),
        }
    }

    /// Show a notification and schedule its whole lifecycle.
    ///
    /// Returns immediately; the phase transitions run as deferred timer
    /// callbacks on the event loop. There is no cap on concurrent toasts.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> ToastHandle {
        let notification = Notification::new(message, severity);
        let id = notification.id();
        log::debug!("toast #{}: {:?}", id.value(), severity);

        self.stack.update(|stack| stack.push(notification));

        let svc = *self;
        spawn_local(async move {
            let mut phase = Phase::Entering;
            while let Some(delay_ms) = phase.delay_to_next_ms() {
                TimeoutFuture::new(delay_ms).await;
                match svc.advance(id) {
                    Some(next) => phase = next,
                    None => break,
                }
            }
        });

        ToastHandle { id, svc: *self }
    }

    pub fn info(&self, message: impl Into<String>) -> ToastHandle {
        self.notify(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastHandle {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastHandle {
        self.notify(message, Severity::Error)
    }

    /// Move one toast to its next phase and drop it once removed.
    fn advance(&self, id: NotificationId) -> Option<Phase> {
        let mut next = None;
        self.stack.update(|stack| {
            next = stack.advance(id);
            stack.sweep();
        });
        next
    }

    fn phase_of(&self, id: NotificationId) -> Option<Phase> {
        self.stack.with_untracked(|stack| stack.get(id).map(|n| n.phase()))
    }
}

impl Default for ToastStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastStackService>()
        .expect("ToastStackService not provided in context (provide it in app root)");

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || {
                    svc.stack
                        .get()
                        .iter()
                        .cloned()
                        .collect::<Vec<Notification>>()
                }
                key=|notification| notification.id()
                children=move |notification: Notification| {
                    view! { <Toast notification=notification /> }
                }
            />
        </div>
    }
}

/// One rendered toast. The phase class drives the enter/leave animation.
#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let svc = use_context::<ToastStackService>()
        .expect("ToastStackService not provided in context (provide it in app root)");
    let id = notification.id();
    let severity = notification.severity();
    let message = notification.message().to_string();

    // `<For>` children are keyed by id and never re-created, so the phase is
    // looked up reactively from the stack signal instead.
    let phase = Memo::new(move |_| {
        svc.stack
            .with(|stack| stack.get(id).map(|n| n.phase()))
            .unwrap_or(Phase::Removed)
    });

    view! {
        <div
            class=move || format!("toast {} {}", severity.css_class(), phase.get().css_class())
            style=format!("background: {};", severity.color_hex())
            role="status"
        >
            {message}
        </div>
    }
}
