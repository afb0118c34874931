use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::toast_stack::ToastStackService;
use contracts::shared::forms::{resolve_label, validate, FieldKind, FieldRole, FieldSpec};
use contracts::shared::SiteConfig;
use contracts::system::Enquiry;
use leptos::prelude::*;

const NAME_LABEL: &str = "Full Name *";
const EMAIL_LABEL: &str = "Email Address *";
const PHONE_LABEL: &str = "Phone Number";
const MESSAGE_LABEL: &str = "Message *";

fn name_spec(value: &str) -> FieldSpec {
    FieldSpec::new(resolve_label(Some(NAME_LABEL), "Your full name"), FieldKind::Text)
        .required()
        .with_role(FieldRole::PersonName)
        .with_value(value)
}

fn email_spec(value: &str) -> FieldSpec {
    FieldSpec::new(resolve_label(Some(EMAIL_LABEL), "Your email"), FieldKind::Email)
        .required()
        .with_value(value)
}

fn phone_spec(value: &str) -> FieldSpec {
    // Optional: an empty phone is fine, a typed one must look like a number.
    FieldSpec::new(resolve_label(Some(PHONE_LABEL), "Your phone"), FieldKind::Tel)
        .with_value(value)
}

fn message_spec(value: &str) -> FieldSpec {
    FieldSpec::new(resolve_label(Some(MESSAGE_LABEL), "Your message"), FieldKind::Other)
        .required()
        .with_value(value)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = use_context::<ToastStackService>()
        .expect("ToastStackService not provided in context (provide it in app root)");
    let config = use_context::<SiteConfig>().expect("SiteConfig not provided in context");

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let phone_error = RwSignal::new(None::<String>);
    let message_error = RwSignal::new(None::<String>);

    // Re-validate on every keystroke; the rule set is O(1) regex matching,
    // so there is no debounce.
    let on_name = Callback::new(move |value: String| {
        name_error.set(validate(&name_spec(&value)).into_message());
        name.set(value);
    });
    let on_email = Callback::new(move |value: String| {
        email_error.set(validate(&email_spec(&value)).into_message());
        email.set(value);
    });
    let on_phone = Callback::new(move |value: String| {
        phone_error.set(validate(&phone_spec(&value)).into_message());
        phone.set(value);
    });
    let on_message = Callback::new(move |value: String| {
        message_error.set(validate(&message_spec(&value)).into_message());
        message.set(value);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let checks = [
            (name_error, validate(&name_spec(&name.get_untracked()))),
            (email_error, validate(&email_spec(&email.get_untracked()))),
            (phone_error, validate(&phone_spec(&phone.get_untracked()))),
            (message_error, validate(&message_spec(&message.get_untracked()))),
        ];

        let mut all_valid = true;
        for (slot, result) in checks {
            if !result.is_valid() {
                all_valid = false;
            }
            slot.set(result.into_message());
        }

        if !all_valid {
            toasts.error("Please correct the errors in the form");
            return;
        }

        let enquiry = Enquiry::new(
            name.get_untracked().trim(),
            email.get_untracked().trim(),
            phone.get_untracked().trim(),
            message.get_untracked().trim(),
        );
        match serde_json::to_string(&enquiry) {
            Ok(json) => log::info!("enquiry for {}: {}", config.company.email, json),
            Err(e) => log::warn!("enquiry could not be serialized: {}", e),
        }

        toasts.success("Thank you for your message! We will get back to you soon.");

        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        message.set(String::new());
    };

    view! {
        <PageHeader
            title="Contact Us"
            subtitle="Questions about a course or a quote? Send us a message."
        />
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <Input
                id="contact-name"
                label=NAME_LABEL
                placeholder="Your full name"
                value=name
                on_input=on_name
                error=name_error
                required=true
            />
            <Input
                id="contact-email"
                label=EMAIL_LABEL
                placeholder="Your email"
                input_type="email"
                value=email
                on_input=on_email
                error=email_error
                required=true
            />
            <Input
                id="contact-phone"
                label=PHONE_LABEL
                placeholder="Your phone"
                input_type="tel"
                value=phone
                on_input=on_phone
                error=phone_error
            />
            <Textarea
                id="contact-message"
                label=MESSAGE_LABEL
                placeholder="Your message"
                value=message
                on_input=on_message
                error=message_error
                required=true
                rows=6
            />
            <Button button_type="submit">"Send Message"</Button>
        </form>
    }
}
