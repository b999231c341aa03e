use crate::application::{
    ApplicationResult, commands::profile::UpdateContactInfoCommand, error::ApplicationError,
};
use crate::domain::user::{ADDRESS_MAX_CHARS, PHONE_NUMBER_MAX_CHARS};
use crate::presentation::http::extractors::Validate;
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `PUT /api/me/contact-info`. Omitted, null and blank fields clear
/// the stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactInfoRequest {
    #[serde(default)]
    #[schema(max_length = 512)]
    pub address: Option<String>,
    #[serde(default)]
    #[schema(max_length = 64)]
    pub phone_number: Option<String>,
}

fn check_max_chars(value: Option<&str>, max: usize, field: &str) -> ApplicationResult<()> {
    match value {
        Some(value) if value.chars().count() > max => Err(ApplicationError::validation(
            format!("{field} must be at most {max} characters"),
        )),
        _ => Ok(()),
    }
}

impl Validate for UpdateContactInfoRequest {
    fn validate(&self) -> ApplicationResult<()> {
        check_max_chars(self.address.as_deref(), ADDRESS_MAX_CHARS, "address")?;
        check_max_chars(
            self.phone_number.as_deref(),
            PHONE_NUMBER_MAX_CHARS,
            "phoneNumber",
        )
    }
}

impl From<UpdateContactInfoRequest> for UpdateContactInfoCommand {
    fn from(request: UpdateContactInfoRequest) -> Self {
        Self {
            address: request.address,
            phone_number: request.phone_number,
        }
    }
}
