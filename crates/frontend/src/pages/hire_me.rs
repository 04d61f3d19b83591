//! Hire-me page: opportunity selector, contact form with preview, and
//! delivery through EmailJS with a clipboard fallback.

use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::{Badge, CardAnimated};
use crate::shared::email::{send_email, SendError};
use crate::shared::icons::{quick_fact_icon, ui_icon, UiIcon};
use crate::shared::modal::Modal;
use crate::shared::notify::NoticeKind;
use crate::shared::storage;
use contracts::domain::hire_me::{
    ContactField, ContactForm, ContactFormErrors, BOOK_CALL_HEADING, BOOK_CALL_LABEL,
    BOOK_CALL_TEXT, BOOK_CALL_URL, CONTACT_FORM_STORAGE_KEY, OPPORTUNITY_STORAGE_KEY,
    QUICK_FACTS,
};
use contracts::enums::OpportunityType;
use contracts::shared::config::SiteConfig;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance, ButtonType, Input, InputType, Label, Textarea};
use wasm_bindgen_futures::spawn_local;

const COPIED_RESET_MS: u32 = 2_000;
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ashwinpulipati/";
const GITHUB_URL: &str = "https://github.com/Ashwin-Pulipati";

fn load_opportunity() -> OpportunityType {
    storage::get_string(OPPORTUNITY_STORAGE_KEY)
        .map(|code| OpportunityType::from_code(&code))
        .unwrap_or_default()
}

/// Copy the plain-text draft and report through a notice.
fn copy_draft(ctx: AppGlobalContext, body: &str, ok_title: &'static str, kind: NoticeKind) {
    copy_to_clipboard_with_callback(body, move |copied| {
        if copied {
            ctx.notify(kind, ok_title, "");
        } else {
            ctx.notify(
                NoticeKind::Error,
                "Couldn’t copy the message",
                "Please copy it manually from the preview.",
            );
        }
    });
}

#[component]
fn OpportunitySelector(value: RwSignal<OpportunityType>) -> impl IntoView {
    view! {
        <fieldset class="opportunity-selector">
            <legend>"Opportunity type " <span class="required" aria-hidden="true">"*"</span></legend>
            <div class="opportunity-selector__options" role="radiogroup" aria-label="Select opportunity type">
                {OpportunityType::all().into_iter().map(|option| {
                    let is_active = move || value.get() == option;
                    let input_id = format!("opportunity-{}", option.code());
                    view! {
                        <label
                            for=input_id.clone()
                            class="opportunity-selector__option"
                            class:opportunity-selector__option--active=is_active
                        >
                            <input
                                type="radio"
                                id=input_id.clone()
                                name="opportunity"
                                value=option.code()
                                prop:checked=is_active
                                on:change=move |_| value.set(option)
                            />
                            <span>{option.label()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </fieldset>
    }
}

#[component]
fn ContactInput(
    field: ContactField,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    errors: RwSignal<ContactFormErrors>,
    #[prop(optional)] required: bool,
    #[prop(optional)] email: bool,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field));
    let input_type = if email { InputType::Email } else { InputType::Text };

    view! {
        <div class="form__group" class:form__group--invalid=move || error().is_some()>
            <Label>
                {label}
                {required.then(|| view! { <span class="required" aria-hidden="true">" *"</span> })}
            </Label>
            <Input value=value input_type=input_type placeholder=placeholder />
            {move || error().map(|message| view! {
                <p class="form__error" role="alert">{message}</p>
            })}
        </div>
    }
}

#[component]
fn ContactSection(opportunity: RwSignal<OpportunityType>) -> impl IntoView {
    let ctx = use_global_context();
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let owner_email = config.site.contact_email.clone();
    let owner_first_name = config.site.owner_first_name.clone();
    let first_name = StoredValue::new(config.site.owner_first_name);
    let emailjs = StoredValue::new(config.emailjs);

    let form = RwSignal::new(
        storage::get_json::<ContactForm>(CONTACT_FORM_STORAGE_KEY).unwrap_or_default(),
    );
    let errors = RwSignal::new(ContactFormErrors::default());
    let submitting = RwSignal::new(false);
    let preview_open = RwSignal::new(false);
    let just_copied = RwSignal::new(false);

    // One signal per input, written back into the draft on change.
    let field_signal = move |field: ContactField| {
        let signal = RwSignal::new(form.with_untracked(|f| f.field(field).to_string()));
        Effect::new(move |prev: Option<String>| {
            let current = signal.get();
            if prev.is_some() && prev.as_ref() != Some(&current) {
                form.update(|f| f.set_field(field, current.clone()));
                errors.update(|e| e.clear(field));
            }
            current
        });
        signal
    };
    let name = field_signal(ContactField::Name);
    let email = field_signal(ContactField::Email);
    let company = field_signal(ContactField::Company);
    let role_title = field_signal(ContactField::RoleTitle);
    let contact_link = field_signal(ContactField::ContactLink);
    let message = field_signal(ContactField::Message);

    Effect::new(move |_| {
        form.with(|draft| storage::set_json(CONTACT_FORM_STORAGE_KEY, draft));
    });

    let email_body = Memo::new(move |_| {
        form.with(|draft| draft.email_body(opportunity.get(), &owner_email, &owner_first_name))
    });

    let check_form = move || -> bool {
        match form.with_untracked(ContactForm::validate) {
            Ok(()) => {
                errors.set(ContactFormErrors::default());
                true
            }
            Err(found) => {
                log::debug!("contact form invalid: {}", found);
                errors.set(found);
                false
            }
        }
    };

    let on_copy = move |_: leptos::ev::MouseEvent| {
        if !check_form() {
            ctx.notify(NoticeKind::Error, "Please fill in the required fields first.", "");
            return;
        }
        copy_draft(
            ctx,
            &email_body.get_untracked(),
            "Message copied to clipboard",
            NoticeKind::Success,
        );
        just_copied.set(true);
        Timeout::new(COPIED_RESET_MS, move || just_copied.set(false)).forget();
    };

    let on_preview = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !check_form() {
            ctx.notify(NoticeKind::Error, "Please fill in the required fields.", "");
            return;
        }
        preview_open.set(true);
    };

    let on_confirm_send = move |_: leptos::ev::MouseEvent| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let params = first_name.with_value(|first_name| {
            form.with_untracked(|f| f.template_params(opportunity.get_untracked(), first_name))
        });
        let body = email_body.get_untracked();
        let emailjs = emailjs.get_value();

        spawn_local(async move {
            match send_email(&emailjs, &params).await {
                Ok(()) => {
                    ctx.notify(NoticeKind::Success, "Message sent successfully!", "");
                }
                Err(SendError::NotConfigured) => {
                    log::warn!("email delivery not configured, falling back to clipboard");
                    copy_draft(
                        ctx,
                        &body,
                        "Email service not configured. Message copied to clipboard.",
                        NoticeKind::Info,
                    );
                }
                Err(e) => {
                    log::error!("contact message not delivered: {}", e);
                    copy_draft(
                        ctx,
                        &body,
                        "Failed to send. Message copied to clipboard instead.",
                        NoticeKind::Error,
                    );
                }
            }
            preview_open.set(false);
            submitting.set(false);
        });
    };

    let close_preview = Callback::new(move |_| {
        if !submitting.get_untracked() {
            preview_open.set(false);
        }
    });

    let preview_footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| close_preview.run(())
                disabled=Signal::derive(move || submitting.get())
            >
                "Keep editing"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=on_confirm_send
                disabled=Signal::derive(move || submitting.get())
            >
                {move || if submitting.get() { "Sending…" } else { "Send email" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <section class="surface-soft contact-section" aria-labelledby="contact-form-heading">
            <header>
                <h2 id="contact-form-heading">"Contact form"</h2>
                <p>"Fill this in to generate a ready-to-send email."</p>
            </header>

            <OpportunitySelector value=opportunity />

            <form class="contact-form" novalidate=true on:submit=on_preview>
                <ContactInput field=ContactField::Name label="Your name" placeholder="Your name" value=name errors=errors required=true />
                <ContactInput field=ContactField::Email label="Work email" placeholder="you@company.com" value=email errors=errors required=true email=true />
                <ContactInput field=ContactField::Company label="Company / team" placeholder="Company or team name" value=company errors=errors />
                <ContactInput field=ContactField::RoleTitle label="Role title" placeholder="e.g. Full-Stack Engineer" value=role_title errors=errors />
                <ContactInput field=ContactField::ContactLink label="Link to role or project" placeholder="https://…" value=contact_link errors=errors />

                <div class="form__group" class:form__group--invalid=move || errors.with(|e| e.message.is_some())>
                    <Label>"Message" <span class="required" aria-hidden="true">" *"</span></Label>
                    <Textarea value=message placeholder="A few lines about the role, team, and timeline" attr:rows=6 />
                    {move || errors.with(|e| e.message).map(|text| view! {
                        <p class="form__error" role="alert">{text}</p>
                    })}
                </div>

                <div class="contact-form__actions">
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        {ui_icon(UiIcon::Mail)}
                        "Preview & send"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_copy>
                        {move || if just_copied.get() { ui_icon(UiIcon::Check) } else { ui_icon(UiIcon::Copy) }}
                        {move || if just_copied.get() { "Copied" } else { "Copy message" }}
                    </Button>
                </div>
            </form>
        </section>

        <Show when=move || preview_open.get()>
            <Modal title="Email preview" on_close=close_preview footer=preview_footer.clone()>
                <pre class="email-preview">{move || email_body.get()}</pre>
            </Modal>
        </Show>
    }
}

#[component]
pub fn HireMePage() -> impl IntoView {
    let ctx = use_global_context();
    let opportunity = RwSignal::new(load_opportunity());
    let contact_email = use_context::<SiteConfig>()
        .map(|c| c.site.contact_email)
        .unwrap_or_default();

    Effect::new(move |_| {
        storage::set_string(OPPORTUNITY_STORAGE_KEY, opportunity.get().code());
    });

    view! {
        <div class="page page--hire-me">
            <section class="hire-me__intro" aria-labelledby="opportunities-heading">
                <Badge>"Working Together"</Badge>
                <h1 id="opportunities-heading">
                    "I'm looking for teams where "
                    <span class="text-gradient">"shipping, quality, and learning"</span>
                    " actually matter."
                </h1>
                <p class="lead">
                    "I enjoy working on products that feel great to use, respect real-world \
                     constraints, and are built with solid engineering foundations. This page is for \
                     the people who might want me on their team."
                </p>
                <Show when=move || ctx.reduce_motion.get()>
                    <p class="page__note">"Animations are reduced based on your system preference."</p>
                </Show>
            </section>

            <CardAnimated class="quick-facts">
                <dl>
                    {QUICK_FACTS.iter().map(|fact| view! {
                        <div class="quick-facts__item">
                            {quick_fact_icon(fact.icon)}
                            <dt>{fact.label}</dt>
                            <dd>{fact.value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </CardAnimated>

            <ContactSection opportunity=opportunity />

            <section class="surface-soft direct-contacts" aria-labelledby="direct-contacts-heading">
                <div>
                    <h2 id="direct-contacts-heading">"Find me elsewhere"</h2>
                    <p>"Prefer not to use the form? Use any of these and include a link to the role or project."</p>
                </div>
                <div class="direct-contacts__links">
                    <a href=format!("mailto:{}", contact_email) class="button button--ghost">
                        {ui_icon(UiIcon::Mail)}
                        "Email"
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noreferrer noopener" class="button button--ghost">
                        {ui_icon(UiIcon::ExternalLink)}
                        "LinkedIn"
                    </a>
                    <a href=GITHUB_URL target="_blank" rel="noreferrer noopener" class="button button--ghost">
                        {ui_icon(UiIcon::Github)}
                        "GitHub"
                    </a>
                </div>
            </section>

            <section class="surface-soft book-call" aria-labelledby="book-call-heading">
                <div>
                    <h2 id="book-call-heading">{BOOK_CALL_HEADING}</h2>
                    <p>{BOOK_CALL_TEXT}</p>
                </div>
                <a href=BOOK_CALL_URL target="_blank" rel="noreferrer noopener" class="button button--primary">
                    {ui_icon(UiIcon::ArrowRight)}
                    {BOOK_CALL_LABEL}
                </a>
            </section>
        </div>
    }
}
