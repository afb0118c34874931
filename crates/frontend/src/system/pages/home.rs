use crate::shared::components::CardAnimated;
use crate::shared::format::format_currency;
use crate::shared::lazy_image::LazyImage;
use crate::shared::scroll::smooth_scroll_to;
use contracts::domain::a001_course::catalog;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Empowering the Nation"</h1>
            <p class="hero__lead">
                "Since 2018 we have trained domestic workers and gardeners in \
                 Johannesburg, giving them marketable skills and better-paid work."
            </p>
            <a
                href="#programmes"
                class="hero__cta primary-btn"
                on:click=move |ev| {
                    ev.prevent_default();
                    smooth_scroll_to("programmes");
                }
            >
                "Explore our programmes"
            </a>
        </section>

        <section id="programmes" class="programmes">
            <h2 class="section__title">"Popular programmes"</h2>
            <div class="course-grid">
                {catalog()
                    .iter()
                    .take(3)
                    .enumerate()
                    .map(|(index, course)| {
                        let delay = (index as u32) * 80;
                        let image = format!("/static/images/{}.jpg", course.code);
                        view! {
                            <CardAnimated delay_ms=delay>
                                <LazyImage src=image alt=course.name class="course__image" />
                                <h3 class="course__name">{course.name}</h3>
                                <p class="course__summary">{course.summary}</p>
                                <span class="course__fee">{format_currency(course.fee)}</span>
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </div>
            <a href="/courses" class="programmes__all">"View all courses"</a>
        </section>

        <section class="mission">
            <h2 class="section__title">"Why train with us"</h2>
            <p>
                "Our six-month learnerships and six-week short courses are built \
                 around the work our students already do, so every lesson lands \
                 directly in their day-to-day."
            </p>
            <a href="/quote" class="mission__cta">"Request a quote for your staff"</a>
        </section>
    }
}
