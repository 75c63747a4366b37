use crate::form::{QuotationForm, SubmissionRecord};
use crate::relay::{EmailRelay, RelayConfig, RelayError};

pub const FAILURE_ALERT: &str = "Failed to send quotation. Please try again or email us directly.";

/// The page side of a submission.
pub trait QuotationView {
    fn read_form(&self) -> QuotationForm;
    fn reset_form(&self);
    fn show_confirmation(&self);
    /// Record a failed send; runs before the user is alerted.
    fn report_failure(&self, error: &RelayError);
    fn alert(&self, message: &str);
}

pub struct SubmissionController {
    config: RelayConfig,
}

impl SubmissionController {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Send the current form once. On failure the form is left untouched.
    pub async fn submit<R, V>(&self, relay: &R, view: &V) -> Result<SubmissionRecord, RelayError>
    where
        R: EmailRelay + ?Sized,
        V: QuotationView + ?Sized,
    {
        let record = SubmissionRecord::from(&view.read_form());
        match relay
            .send(&self.config.service_id, &self.config.template_id, &record)
            .await
        {
            Ok(()) => {
                view.reset_form();
                view.show_confirmation();
                Ok(record)
            }
            Err(err) => {
                view.report_failure(&err);
                view.alert(FAILURE_ALERT);
                Err(err)
            }
        }
    }
}
