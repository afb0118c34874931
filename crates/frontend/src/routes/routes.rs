use crate::domain::a001_course::ui::list::CoursesPage;
use crate::layout::Shell;
use crate::system::pages::contact::ContactPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u101_course_quote::view::QuotePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/courses") view=CoursesPage />
                    <Route path=path!("/quote") view=QuotePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
