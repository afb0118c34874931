use contracts::shared::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not provided in context");
    let company = config.company;

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__company">
                <span class="footer__name">{company.name.clone()}</span>
                <span class="footer__detail">
                    <a href=format!("mailto:{}", company.email)>{company.email.clone()}</a>
                </span>
                <span class="footer__detail">
                    <a href=format!("tel:{}", company.phone.replace(' ', ""))>{company.phone.clone()}</a>
                </span>
            </div>
            <p class="footer__tagline">
                "Skills training for domestic workers and gardeners in Johannesburg."
            </p>
        </footer>
    }
}
