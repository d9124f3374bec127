//! Contact form state.
//!
//! Fields are plain strings and are never validated here; `required` and
//! `type="email"` live on the markup only. Submitting hands a snapshot to a
//! [`SubmissionSink`] and clears the form.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("contact form has no field named '{0}'")]
    UnknownField(String),
}

/// Form field names, matching the `name` attribute of each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
    Service,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
            FormField::Service => "service",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "phone" => Ok(FormField::Phone),
            "message" => Ok(FormField::Message),
            "service" => Ok(FormField::Service),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Entries of the "Service Interested In" select. The empty default option
/// is rendered separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOption {
    WebDesign,
    FrontendBackend,
    CustomTools,
    Maintenance,
    Ecommerce,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 5] = [
        ServiceOption::WebDesign,
        ServiceOption::FrontendBackend,
        ServiceOption::CustomTools,
        ServiceOption::Maintenance,
        ServiceOption::Ecommerce,
    ];

    /// Value submitted in the `service` field.
    pub fn value(self) -> &'static str {
        match self {
            ServiceOption::WebDesign => "web-design",
            ServiceOption::FrontendBackend => "frontend-backend",
            ServiceOption::CustomTools => "custom-tools",
            ServiceOption::Maintenance => "maintenance",
            ServiceOption::Ecommerce => "ecommerce",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceOption::WebDesign => "Website Design",
            ServiceOption::FrontendBackend => "Frontend & Backend Development",
            ServiceOption::CustomTools => "Custom Tools",
            ServiceOption::Maintenance => "Website Maintenance",
            ServiceOption::Ecommerce => "E-commerce Solutions",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service: String,
}

/// What the visitor sees after submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

/// Receiver of submitted forms. The real endpoint belongs to whoever hosts
/// the page; [`LocalAcknowledgement`] only records the event.
pub trait SubmissionSink {
    fn deliver(&mut self, submission: ContactFormState);
}

impl ContactFormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
            FormField::Service => &self.service,
        }
    }

    /// Overwrite one field. Any string is accepted, empty included.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
            FormField::Service => &mut self.service,
        };
        *slot = value.into();
    }

    /// Same as [`update_field`](Self::update_field), keyed by the input's
    /// `name` attribute.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<FormField>()?;
        self.update_field(field, value);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Hand the current values to `sink`, reset every field to `""` and
    /// return the acknowledgement to show. Cannot fail.
    pub fn submit(
        &mut self,
        sink: &mut impl SubmissionSink,
        acknowledgement: &str,
    ) -> Acknowledgement {
        let submission = std::mem::take(self);
        sink.deliver(submission);
        Acknowledgement {
            message: acknowledgement.to_string(),
        }
    }
}

/// Sink used by the shipped page: logs the submission and keeps a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalAcknowledgement {
    pub delivered: usize,
}

impl SubmissionSink for LocalAcknowledgement {
    fn deliver(&mut self, submission: ContactFormState) {
        self.delivered += 1;
        let service = ServiceOption::from_value(&submission.service)
            .map(ServiceOption::label)
            .unwrap_or("unspecified");
        tracing::info!(
            service,
            has_phone = !submission.phone.is_empty(),
            "contact form submitted (no backend configured)"
        );
        match serde_json::to_string(&submission) {
            Ok(payload) => tracing::debug!(%payload, "contact form payload"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize contact form"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingSink(Vec<ContactFormState>);

    impl SubmissionSink for RecordingSink {
        fn deliver(&mut self, submission: ContactFormState) {
            self.0.push(submission);
        }
    }

    fn filled() -> ContactFormState {
        ContactFormState {
            name: "Priya Mehra".into(),
            email: "priya@example.com".into(),
            phone: "+91 98100 00000".into(),
            message: "Need a shop for my bakery".into(),
            service: ServiceOption::Ecommerce.value().into(),
        }
    }

    #[test]
    fn update_field_touches_only_that_field() {
        let mut form = ContactFormState::default();
        form.update_field(FormField::Email, "a@b.com");

        assert_eq!(form.email, "a@b.com");
        assert_eq!(
            form,
            ContactFormState {
                email: "a@b.com".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn update_field_accepts_anything() {
        let mut form = filled();
        form.update_field(FormField::Email, "not an email");
        form.update_field(FormField::Name, "");
        assert_eq!(form.get(FormField::Email), "not an email");
        assert_eq!(form.get(FormField::Name), "");
        assert_eq!(form.get(FormField::Phone), "+91 98100 00000");
    }

    #[test]
    fn update_named_maps_input_names() {
        let mut form = ContactFormState::default();
        form.update_named("service", "maintenance").unwrap();
        assert_eq!(form.service, "maintenance");

        let err = form.update_named("company", "ACME").unwrap_err();
        assert_eq!(err, FormError::UnknownField("company".into()));
        assert!(form.name.is_empty());
    }

    #[test]
    fn unknown_input_name_leaves_form_untouched() {
        let mut form = filled();
        assert_eq!(
            form.update_named("company", "ACME"),
            Err(FormError::UnknownField("company".into()))
        );
        assert_eq!(form, filled());
    }

    #[test]
    fn submit_resets_and_delivers_snapshot() {
        let mut form = filled();
        let mut sink = RecordingSink::default();

        let ack = form.submit(&mut sink, "Thanks!");

        assert!(form.is_empty());
        assert_eq!(ack.message, "Thanks!");
        assert_eq!(sink.0, vec![filled()]);
    }

    #[test]
    fn submit_accepts_empty_required_fields() {
        let mut form = ContactFormState {
            message: "hello".into(),
            ..Default::default()
        };
        let mut sink = LocalAcknowledgement::default();

        form.submit(&mut sink, "ok");

        assert!(form.is_empty());
        assert_eq!(sink.delivered, 1);
    }

    #[test]
    fn service_options_resolve_by_value() {
        assert_eq!(
            ServiceOption::from_value("frontend-backend"),
            Some(ServiceOption::FrontendBackend)
        );
        assert_eq!(ServiceOption::from_value(""), None);
        assert_eq!(ServiceOption::WebDesign.label(), "Website Design");
    }
}
