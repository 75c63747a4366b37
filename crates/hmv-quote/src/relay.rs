use crate::form::SubmissionRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// EmailJS account public key, sent as `user_id`.
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_SEND_URL.to_owned(),
            service_id: "HMVWORLD_service".to_owned(),
            template_id: "Contactus".to_owned(),
            public_key: String::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("email relay unreachable: {0}")]
    Transport(String),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        record: &SubmissionRecord,
    ) -> Result<(), RelayError>;
}

/// JSON body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
pub struct EmailJsPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a SubmissionRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::QuotationForm;

    #[test]
    fn default_config_targets_site_service() {
        let cfg = RelayConfig::default();
        assert_eq!(cfg.service_id, "HMVWORLD_service");
        assert_eq!(cfg.template_id, "Contactus");
        assert_eq!(cfg.endpoint, EMAILJS_SEND_URL);
    }

    #[test]
    fn payload_nests_record_under_template_params() {
        let record = SubmissionRecord::from(&QuotationForm {
            email: "buyer@example.com".into(),
            ..QuotationForm::default()
        });
        let payload = EmailJsPayload {
            service_id: "svc",
            template_id: "tpl",
            user_id: "pk",
            template_params: &record,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["service_id"], "svc");
        assert_eq!(value["user_id"], "pk");
        assert_eq!(value["template_params"]["reply_to"], "buyer@example.com");
        assert_eq!(value["template_params"]["company_name"], "N/A");
    }
}
