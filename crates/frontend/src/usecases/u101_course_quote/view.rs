use super::view_model::QuoteViewModel;
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::components::PageHeader;
use crate::shared::format::format_currency;
use crate::shared::toast_stack::ToastStackService;
use contracts::domain::a001_course::catalog;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_course_quote::CourseQuote;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn QuotePage() -> impl IntoView {
    let toasts = use_context::<ToastStackService>()
        .expect("ToastStackService not provided in context (provide it in app root)");
    let vm = QuoteViewModel::new();

    let on_calculate = move |_ev: leptos::ev::MouseEvent| {
        if vm.selected_count() == 0 {
            toasts.error("Please select at least one course");
            return;
        }

        vm.is_loading.set(true);
        let quote = vm.calculate();
        leptos::logging::log!(
            "quote: {} course(s), total {}",
            quote.lines.len(),
            format_currency(quote.total)
        );
        vm.result.set(Some(quote));

        // Re-trigger the result reveal animation on every recalculation
        vm.revealed.set(false);
        spawn_local(async move {
            TimeoutFuture::new(100).await;
            vm.revealed.set(true);
        });

        // Keep the loading state visible long enough to register
        spawn_local(async move {
            TimeoutFuture::new(500).await;
            vm.is_loading.set(false);
        });
    };

    let on_clear = move |_ev: leptos::ev::MouseEvent| {
        vm.clear();
        toasts.info("Selection cleared");
    };

    view! {
        <PageHeader
            title=CourseQuote::display_name()
            subtitle=CourseQuote::description()
        />
        <div class="quote">
            <div class="quote__selection">
                {catalog()
                    .iter()
                    .map(|course| {
                        let id = course.id;
                        let label = format!(
                            "{} ({}, {})",
                            course.name,
                            format_currency(course.fee),
                            course.duration.display_name(),
                        );
                        view! {
                            <Checkbox
                                id=course.code
                                label=label
                                checked=Signal::derive(move || vm.is_selected(id))
                                on_change=Callback::new(move |checked: bool| vm.toggle(id, checked))
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="quote__actions">
                <Button
                    loading=vm.is_loading
                    on_click=Callback::new(on_calculate)
                >
                    "Calculate Quote"
                </Button>
                <Button variant="ghost" on_click=Callback::new(on_clear)>
                    "Clear"
                </Button>
            </div>

            <Show when=move || vm.result.get().is_some()>
                <div
                    class="quote__result"
                    class=("quote__result--revealed", move || vm.revealed.get())
                >
                    {move || {
                        vm.result
                            .get()
                            .map(|quote| {
                                let discount_line = (quote.discount > 0.0)
                                    .then(|| {
                                        let rate = (quote.discount_rate * 100.0).round() as u32;
                                        view! {
                                            <p class="quote__line">
                                                {format!(
                                                    "Discount ({}%): -{}",
                                                    rate,
                                                    format_currency(quote.discount),
                                                )}
                                            </p>
                                        }
                                    });
                                view! {
                                    <table class="quote__table">
                                        <tbody>
                                            {quote
                                                .lines
                                                .iter()
                                                .map(|line| view! {
                                                    <tr>
                                                        <td>{line.name.clone()}</td>
                                                        <td class="num">{format_currency(line.fee)}</td>
                                                    </tr>
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                    <div class="quote__totals">
                                        <p class="quote__line">
                                            {format!("Subtotal: {}", format_currency(quote.subtotal))}
                                        </p>
                                        {discount_line}
                                        <p class="quote__line">
                                            {format!("VAT (15%): {}", format_currency(quote.vat))}
                                        </p>
                                        <p class="quote__total">
                                            {format!("Total: {}", format_currency(quote.total))}
                                        </p>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>
        </div>
    }
}
