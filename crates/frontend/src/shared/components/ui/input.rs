use leptos::prelude::*;

/// Input component with label, live validation error and focus styling
///
/// The wrapper div mirrors the field state with `focused` / `filled`
/// classes; a present error message adds `error-field` to the input and
/// renders the message below it.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Current validation error, `None` while the value is acceptable
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let focused = RwSignal::new(false);

    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        if error.get().is_some() {
            "form__input error-field"
        } else {
            "form__input"
        }
    };

    view! {
        <div
            class="form__group"
            class:focused=move || focused.get()
            class:filled=move || !value.get().trim().is_empty()
        >
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=input_class
                type=input_t
                value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                required=required
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <Show when=move || error.get().is_some()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
