//! Quotation form: product auto-fill and submission through an email relay.

pub mod autofill;
pub mod form;
pub mod relay;
pub mod submit;

pub use autofill::{AutofillController, AutofillFields, AutofillState};
pub use form::{NOT_PROVIDED, QuotationForm, SubmissionRecord};
pub use relay::{EMAILJS_SEND_URL, EmailJsPayload, EmailRelay, RelayConfig, RelayError};
pub use submit::{FAILURE_ALERT, QuotationView, SubmissionController};
