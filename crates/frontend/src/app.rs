use crate::routes::routes::AppRoutes;
use crate::shared::toast_stack::ToastStackService;
use contracts::shared::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Site configuration is built once at startup and shared via context.
    // Only the enquiry submission layer and the footer read it.
    provide_context(SiteConfig::default());

    // Provide ToastStackService for transient notifications
    provide_context(ToastStackService::new());

    view! {
        <AppRoutes />
    }
}
