use leptos::prelude::*;

/// Textarea component with label, live validation error and focus styling
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
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
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let focused = RwSignal::new(false);

    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let textarea_class = move || {
        if error.get().is_some() {
            "form__textarea error-field"
        } else {
            "form__textarea"
        }
    };

    view! {
        <div
            class="form__group"
            class:focused=move || focused.get()
            class:filled=move || !value.get().trim().is_empty()
        >
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=textarea_class
                placeholder=textarea_placeholder
                disabled=disabled
                required=required
                rows=textarea_rows
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || value.get()}
            </textarea>
            <Show when=move || error.get().is_some()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
