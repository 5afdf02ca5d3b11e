#![allow(missing_docs)]

pub mod data;
pub mod dates;
pub mod form;
pub mod notify;
pub mod render;
pub mod schema;
pub mod template;
pub mod validate;

pub use data::{EmploymentType, Field, FieldError, OfferDraft, OfferLetterData};
pub use dates::{long_date, today};
pub use form::OfferForm;
pub use notify::{Notification, NotificationSink, NullSink};
pub use render::{
    CANDIDATE_ADDRESS_PLACEHOLDER, LetterDocument, RESPONSE_DEADLINE_PLACEHOLDER, build_letter,
    render_json, render_text,
};
pub use schema::generate as draft_schema;
pub use template::{TemplateEngine, TemplateError};
pub use validate::validate;
