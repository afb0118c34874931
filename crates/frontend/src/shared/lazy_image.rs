//! Lazily loaded images.
//!
//! The real source URL sits in `data-src` until the image first scrolls into
//! view; an `IntersectionObserver` then promotes it to `src` and unobserves.
//! The `loaded` class is added once the browser finishes decoding, driving
//! the fade-in.

use leptos::html::Img;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn LazyImage(
    /// Image source, loaded only when the image approaches the viewport.
    #[prop(into)]
    src: String,
    /// Alternative text.
    #[prop(into)]
    alt: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let node_ref = NodeRef::<Img>::new();
    let loaded = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(img) = node_ref.get() else {
            return;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        if let Some(data_src) = target.get_attribute("data-src") {
                            let _ = target.set_attribute("src", &data_src);
                            let _ = target.remove_attribute("data-src");
                        }
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&img);
                // The observer unobserves after the first intersection; keep
                // the closure alive for the element's lifetime.
                callback.forget();
            }
            Err(_) => {
                // No IntersectionObserver support: load eagerly.
                if let Some(data_src) = img.get_attribute("data-src") {
                    let _ = img.set_attribute("src", &data_src);
                    let _ = img.remove_attribute("data-src");
                }
            }
        }
    });

    let image_class = move || {
        let extra = class.get().unwrap_or_default();
        let state = if loaded.get() { "lazy loaded" } else { "lazy" };
        if extra.is_empty() {
            state.to_string()
        } else {
            format!("{} {}", state, extra)
        }
    };

    view! {
        <img
            node_ref=node_ref
            data-src=src
            alt=alt
            class=image_class
            on:load=move |_| loaded.set(true)
        />
    }
}
