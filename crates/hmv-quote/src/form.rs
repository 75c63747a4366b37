use serde::Serialize;

/// Stand-in for optional company and website fields left blank.
pub const NOT_PROVIDED: &str = "N/A";

/// Raw values of the quotation form as the user left them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotationForm {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub website: String,
    pub country_code: String,
    pub contact_number: String,
    pub email: String,
    pub product_name: String,
    pub hs_code: String,
    pub hs_name: String,
    pub description: String,
    pub requirement: String,
}

/// Template parameters handed to the email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub from_first_name: String,
    pub from_last_name: String,
    pub company_name: String,
    pub website_url: String,
    pub contact_number: String,
    pub from_email: String,
    pub product_name: String,
    pub hs_code: String,
    pub hs_name: String,
    pub product_description: String,
    pub exact_requirement: String,
    pub reply_to: String,
}

fn or_not_provided(value: &str) -> String {
    if value.is_empty() {
        NOT_PROVIDED.to_owned()
    } else {
        value.to_owned()
    }
}

impl From<&QuotationForm> for SubmissionRecord {
    fn from(form: &QuotationForm) -> Self {
        Self {
            from_first_name: form.first_name.clone(),
            from_last_name: form.last_name.clone(),
            company_name: or_not_provided(&form.company),
            website_url: or_not_provided(&form.website),
            contact_number: format!("{} {}", form.country_code, form.contact_number),
            from_email: form.email.clone(),
            product_name: form.product_name.clone(),
            hs_code: form.hs_code.clone(),
            hs_name: form.hs_name.clone(),
            product_description: form.description.clone(),
            exact_requirement: form.requirement.clone(),
            reply_to: form.email.clone(),
        }
    }
}
