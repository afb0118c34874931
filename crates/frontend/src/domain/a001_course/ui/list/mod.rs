use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::format::format_currency;
use crate::shared::lazy_image::LazyImage;
use contracts::domain::a001_course::{catalog, Course};
use leptos::prelude::*;

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <PageHeader
            title="Our Courses"
            subtitle="Six-month learnerships and six-week short courses"
        />
        <div class="course-grid">
            {catalog()
                .iter()
                .enumerate()
                .map(|(index, course)| view! { <CourseCard course=course index=index /> })
                .collect_view()}
        </div>
    }
}

/// One course card with the hover lift from the original site.
#[component]
fn CourseCard(course: &'static Course, index: usize) -> impl IntoView {
    let lifted = RwSignal::new(false);
    let delay = (index as u32) * 80;
    let image = format!("/static/images/{}.jpg", course.code);

    view! {
        <div
            class="course"
            style=move || {
                if lifted.get() {
                    "transform: translateY(-8px);"
                } else {
                    "transform: translateY(0);"
                }
            }
            on:mouseenter=move |_| lifted.set(true)
            on:mouseleave=move |_| lifted.set(false)
        >
            <CardAnimated delay_ms=delay>
                <LazyImage src=image alt=course.name class="course__image" />
                <h3 class="course__name">{course.name}</h3>
                <p class="course__summary">{course.summary}</p>
                <div class="course__meta">
                    <span class="course__duration">{course.duration.display_name()}</span>
                    <span class="course__fee">{format_currency(course.fee)}</span>
                </div>
            </CardAnimated>
        </div>
    }
}
