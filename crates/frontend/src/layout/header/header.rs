use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One top-navigation link. Gets the `active` class while its route is the
/// current one, so the visitor always sees where they are.
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let is_active = move || {
        let path = location.pathname.get();
        if href == "/" {
            path == "/"
        } else {
            path == href || path.starts_with(&format!("{}/", href))
        }
    };

    view! {
        <a
            href=href
            class=move || {
                if is_active() {
                    "nav__link active"
                } else {
                    "nav__link"
                }
            }
        >
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href="/" class="header__title">"Empowering the Nation"</a>
                <nav class="header__nav" aria-label="Main navigation">
                    <NavLink href="/" label="Home" />
                    <NavLink href="/courses" label="Courses" />
                    <NavLink href="/quote" label="Request a Quote" />
                    <NavLink href="/contact" label="Contact" />
                </nav>
            </div>
        </header>
    }
}
