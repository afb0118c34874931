pub mod footer;
pub mod header;

use crate::shared::toast_stack::ToastHost;
use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page shell: header with navigation, routed content, footer.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
///
/// The toast host is mounted here exactly once so notifications overlay
/// every page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <Header />
        <main class="main-content">
            {children()}
        </main>
        <Footer />
        <ToastHost />
    }
}
