//! Contact form state and the submission seam.
//!
//! The form keeps one [`FormFields`] record in a signal. Each keystroke
//! replaces exactly one field; submission hands the whole record to an
//! [`InquirySink`]. The form looks one up in context as a [`SharedSink`] and
//! falls back to [`TracingSink`], which logs the inquiry: the site has no
//! backend to post to.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Property,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Property,
        FormField::Message,
    ];

    /// The input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Property => "property",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name *",
            FormField::Email => "Email *",
            FormField::Phone => "Phone *",
            FormField::Property => "Property Address",
            FormField::Message => "Message",
        }
    }

    /// Marked `required` for the browser's native check. No format
    /// validation happens here.
    pub fn required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Phone)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = SiteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

/// Current value of every contact form input. Always holds all five keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Property => &self.property,
            FormField::Message => &self.message,
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Property => &mut self.property,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Merge form of [`FormFields::set`].
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Receiver of submitted inquiries.
///
/// A deployment with a real backend would implement this and post the record;
/// none is wired up here.
pub trait InquirySink {
    fn deliver(&self, inquiry: &FormFields);
}

/// Logs the inquiry through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl InquirySink for TracingSink {
    fn deliver(&self, inquiry: &FormFields) {
        match inquiry.to_json() {
            Ok(json) => tracing::info!(inquiry = %json, "Contact form submitted"),
            Err(e) => tracing::warn!("Contact form submitted, but could not encode it: {}", e),
        }
    }
}

/// Sink handle as provided through Leptos context.
pub type SharedSink = Arc<dyn InquirySink + Send + Sync>;

/// The provided sink, or [`TracingSink`] when none was provided.
pub fn sink_or_default(provided: Option<SharedSink>) -> SharedSink {
    provided.unwrap_or_else(|| Arc::new(TracingSink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        delivered: RefCell<Vec<FormFields>>,
    }

    impl InquirySink for RecordingSink {
        fn deliver(&self, inquiry: &FormFields) {
            self.delivered.borrow_mut().push(inquiry.clone());
        }
    }

    #[test]
    fn default_fields_are_empty() {
        let fields = FormFields::default();
        for field in FormField::ALL {
            assert_eq!(fields.get(field), "");
        }
    }

    #[test]
    fn updating_phone_leaves_other_fields_alone() {
        let initial = FormFields::default();
        let updated = initial.clone().with(FormField::Phone, "555-1212");

        assert_eq!(
            updated,
            FormFields {
                phone: "555-1212".into(),
                ..initial
            }
        );
    }

    #[test]
    fn set_replaces_rather_than_appends() {
        let mut fields = FormFields::default();
        fields.set(FormField::Message, "first draft");
        fields.set(FormField::Message, "Need a refi appraisal");
        assert_eq!(fields.get(FormField::Message), "Need a refi appraisal");
    }

    #[test]
    fn every_field_is_independently_addressable() {
        let mut fields = FormFields::default();
        for field in FormField::ALL {
            fields.set(field, field.name().to_uppercase());
        }
        for field in FormField::ALL {
            assert_eq!(fields.get(field), field.name().to_uppercase());
        }
    }

    #[test]
    fn parses_input_names() {
        assert_eq!("property".parse::<FormField>(), Ok(FormField::Property));
        assert_eq!(
            "zip".parse::<FormField>(),
            Err(SiteError::UnknownField("zip".into()))
        );
    }

    #[test]
    fn only_name_phone_email_are_required() {
        let required: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|f| f.required())
            .collect();
        assert_eq!(
            required,
            vec![FormField::Name, FormField::Email, FormField::Phone]
        );
    }

    #[test]
    fn json_carries_all_five_keys() {
        let fields = FormFields::default().with(FormField::Name, "Jane Doe");
        let json = fields.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["name"], "Jane Doe");
        assert_eq!(object["message"], "");
    }

    #[test]
    fn sink_receives_the_whole_record() {
        let sink = RecordingSink::default();
        let fields = FormFields::default()
            .with(FormField::Name, "Jane Doe")
            .with(FormField::Email, "done@x.com");

        sink.deliver(&fields);

        assert_eq!(*sink.delivered.borrow(), vec![fields]);
    }

    #[test]
    fn tracing_sink_accepts_any_record() {
        TracingSink.deliver(&FormFields::default());
        TracingSink.deliver(&FormFields::default().with(FormField::Message, "\"quoted\"\n"));
    }

    #[test]
    fn provided_sink_wins_over_the_fallback() {
        #[derive(Default)]
        struct Shared(std::sync::Mutex<Vec<FormFields>>);

        impl InquirySink for Shared {
            fn deliver(&self, inquiry: &FormFields) {
                self.0.lock().unwrap().push(inquiry.clone());
            }
        }

        let recorder = Arc::new(Shared::default());
        let sink = sink_or_default(Some(recorder.clone()));
        let fields = FormFields::default().with(FormField::Phone, "678-555-0123");

        sink.deliver(&fields);

        assert_eq!(*recorder.0.lock().unwrap(), vec![fields]);
    }

    #[test]
    fn missing_sink_falls_back_to_tracing() {
        sink_or_default(None).deliver(&FormFields::default());
    }
}
