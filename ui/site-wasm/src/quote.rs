//! Quotation form handlers: product auto-fill and EmailJS submission.

use crate::api;
use crate::dom::{self, QuoteElements};
use crate::state::App;
use async_trait::async_trait;
use gloo_console as console;
use hmv_quote::{
    AutofillFields, EmailJsPayload, EmailRelay, QuotationForm, QuotationView, RelayConfig,
    RelayError, SubmissionRecord,
};

// ── Auto-fill ──

pub fn write_autofill(els: &QuoteElements, fields: &AutofillFields) {
    els.hs_code.set_value(&fields.hs_code);
    els.hs_name.set_value(&fields.hs_name);
    els.description.set_value(&fields.description);
}

/// `change` on `#productName`.
pub fn on_product_change(app: &App, els: &QuoteElements) {
    let selected = els.product_name.value();
    let fields = app.autofill.on_select(&selected);
    write_autofill(els, &fields);
}

// ── Page view ──

pub struct PageView<'a> {
    els: &'a QuoteElements,
}

impl<'a> PageView<'a> {
    pub fn new(els: &'a QuoteElements) -> Self {
        Self { els }
    }
}

impl QuotationView for PageView<'_> {
    fn read_form(&self) -> QuotationForm {
        let els = self.els;
        QuotationForm {
            first_name: els.first_name.value(),
            last_name: els.last_name.value(),
            company: els.company.value(),
            website: els.website.value(),
            country_code: els.country_code.value(),
            contact_number: els.contact_num.value(),
            email: els.email.value(),
            product_name: els.product_name.value(),
            hs_code: els.hs_code.value(),
            hs_name: els.hs_name.value(),
            description: els.description.value(),
            requirement: els.requirement.value(),
        }
    }

    fn reset_form(&self) {
        self.els.form.reset();
    }

    fn show_confirmation(&self) {
        dom::set_display(&self.els.success_modal, "block");
    }

    fn report_failure(&self, error: &RelayError) {
        console::error!(format!("FAILED... {error}"));
    }

    fn alert(&self, message: &str) {
        let _ = dom::window().alert_with_message(message);
    }
}

// ── EmailJS relay ──

pub struct EmailJsRelay {
    endpoint: String,
    public_key: String,
}

impl EmailJsRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            public_key: config.public_key.clone(),
        }
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        record: &SubmissionRecord,
    ) -> Result<(), RelayError> {
        let payload = EmailJsPayload {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: record,
        };
        let body =
            serde_json::to_string(&payload).map_err(|e| RelayError::Transport(e.to_string()))?;

        let resp = api::post_json(&self.endpoint, &body)
            .await
            .map_err(RelayError::Transport)?;
        if !resp.ok {
            return Err(RelayError::Rejected {
                status: resp.status,
                body: resp.body,
            });
        }
        console::log!(format!("SUCCESS! {} {}", resp.status, resp.body));
        Ok(())
    }
}

/// `submit` on `#quotation-form`, after the default navigation is prevented.
pub async fn on_submit(app: &App, els: &QuoteElements) {
    let view = PageView::new(els);
    // Failures are logged and alerted by the view.
    if let Ok(record) = app.submitter.submit(&app.relay, &view).await {
        console::log!(format!("quotation sent for {}", record.product_name));
    }
}
