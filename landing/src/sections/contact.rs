use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use web_sys::Event;

use crate::config::SiteConfig;
use crate::content::{BUSINESS_HOURS, CONTACT_DETAILS};
use crate::form::{ContactFormState, FormField, LocalAcknowledgement, ServiceOption};
use crate::viewport;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title underlined">"Get in Touch"</h2>
                <div class="contact-layout">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-panel contact-info">
            <h5 class="panel-title">"Contact Information"</h5>
            <ul class="contact-details">
                {CONTACT_DETAILS
                    .into_iter()
                    .map(|d| {
                        view! {
                            <li>
                                <span class="icon-badge">
                                    <i class=d.icon></i>
                                </span>
                                <div>
                                    <strong>{d.title}</strong>
                                    {match d.href {
                                        Some(href) => view! { <a href=href>{d.content}</a> }.into_any(),
                                        None => view! { <p>{d.content}</p> }.into_any(),
                                    }}
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="business-hours">
                <h6 class="panel-title">"Business Hours"</h6>
                {BUSINESS_HOURS.into_iter().map(|line| view! { <p class="hours-line">{line}</p> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let form = RwSignal::new(ContactFormState::default());
    let sink = StoredValue::new(LocalAcknowledgement::default());
    let status = RwSignal::new(None::<String>);

    let acknowledgement = config.contact.acknowledgement;
    let use_alert = config.contact.use_alert;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let ack = form
            .try_update(|f| sink.try_update_value(|s| f.submit(s, &acknowledgement)))
            .flatten();
        if let Some(ack) = ack {
            if use_alert {
                viewport::alert(&ack.message);
            }
            status.set(Some(ack.message));
        }
    };

    view! {
        <div class="contact-panel">
            <h5 class="panel-title">"Send us a message"</h5>
            <form class="contact-form" on:submit=on_submit>
                <FormInput form=form field=FormField::Name label="Your Name" required=true />
                <div class="form-row">
                    <FormInput form=form field=FormField::Email label="Email Address" input_type="email" required=true />
                    <FormInput form=form field=FormField::Phone label="Phone Number" input_type="tel" />
                </div>
                <label class="field">
                    <span class="field-label">"Service Interested In"</span>
                    <select
                        name=FormField::Service.as_str()
                        prop:value=move || form.with(|f| f.service.clone())
                        on:change=move |ev| apply_input(form, &ev)
                    >
                        <option value=""></option>
                        {ServiceOption::ALL
                            .into_iter()
                            .map(|o| view! { <option value=o.value()>{o.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field-label">"Your Message *"</span>
                    <textarea
                        name=FormField::Message.as_str()
                        rows="4"
                        required=true
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| apply_input(form, &ev)
                    ></textarea>
                </label>
                <button type="submit" class="btn btn-secondary btn-lg btn-block">
                    "Submit Message"
                </button>
                <p class="form-status" role="status">
                    {move || status.get().unwrap_or_default()}
                </p>
            </form>
        </div>
    }
}

/// Copy the target's value into the field named by its `name` attribute.
/// Inputs with an unrecognised name are logged and ignored.
fn apply_input(form: RwSignal<ContactFormState>, ev: &Event) {
    let name = viewport::event_target_name(ev).unwrap_or_default();
    let value = event_target_value(ev);
    let mut outcome = Ok(());
    form.maybe_update(|f| {
        outcome = f.update_named(&name, value);
        outcome.is_ok()
    });
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "ignoring input from unknown form field");
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactFormState>,
    field: FormField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let caption = if required { format!("{label} *") } else { label.to_string() };
    view! {
        <label class="field">
            <span class="field-label">{caption}</span>
            <input
                type=input_type
                name=field.as_str()
                required=required
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| apply_input(form, &ev)
            />
        </label>
    }
}
