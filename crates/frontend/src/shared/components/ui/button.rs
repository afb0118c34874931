use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// How long a ripple stays in the DOM (matches the CSS animation).
const RIPPLE_LIFETIME_MS: u32 = 600;

/// Button component with variants (primary, secondary, ghost), a click
/// ripple and a loading state.
///
/// Every press spawns an independent ripple sized to the button and centred
/// on the click point; each ripple removes itself when its animation ends.
/// While `loading` is set the button is disabled and shows the spinner class.
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Loading state: disables the button and shows the spinner
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional, into)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let ripples = RwSignal::new(Vec::<(u64, f64, f64, f64)>::new());
    let next_ripple_id = RwSignal::new(1u64);

    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let is_disabled = move || disabled.get().unwrap_or(false) || loading.get().unwrap_or(false);
    let loading_class = move || {
        if loading.get().unwrap_or(false) {
            "button--loading"
        } else {
            ""
        }
    };

    let spawn_ripple = move |ev: &leptos::ev::MouseEvent| {
        let Some(target) = ev.current_target() else {
            return;
        };
        let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };

        let rect = element.get_bounding_client_rect();
        let size = rect.width().max(rect.height());
        let x = f64::from(ev.client_x()) - rect.left() - size / 2.0;
        let y = f64::from(ev.client_y()) - rect.top() - size / 2.0;

        let id = next_ripple_id.get_untracked();
        next_ripple_id.set(id + 1);
        ripples.update(|list| list.push((id, x, y, size)));

        spawn_local(async move {
            TimeoutFuture::new(RIPPLE_LIFETIME_MS).await;
            ripples.update(|list| list.retain(|(ripple_id, ..)| *ripple_id != id));
        });
    };

    view! {
        <button
            type=btn_type
            class=move || {
                format!(
                    "button {} {} {}",
                    variant_class(),
                    loading_class(),
                    additional_class(),
                )
            }
            disabled=is_disabled
            on:click=move |ev| {
                spawn_ripple(&ev);
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
            {move || {
                ripples
                    .get()
                    .into_iter()
                    .map(|(_id, x, y, size)| {
                        let style = format!(
                            "width: {size}px; height: {size}px; left: {x}px; top: {y}px;"
                        );
                        view! { <span class="ripple" style=style></span> }
                    })
                    .collect_view()
            }}
        </button>
    }
}
