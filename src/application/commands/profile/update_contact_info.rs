use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
        queries::profile::assemble_profile,
    },
    domain::{
        errors::DomainError,
        user::{Address, ContactInfoUpdate, PhoneNumber},
    },
};

/// Raw contact fields as received. `None`, empty and whitespace-only values
/// all clear the stored field.
#[derive(Debug, Clone, Default)]
pub struct UpdateContactInfoCommand {
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl ProfileCommandService {
    /// Replace both contact fields of the caller and return the fresh profile.
    ///
    /// # Errors
    ///
    /// Returns a validation error for over-long fields (nothing is written),
    /// `ApplicationError::NotFound` when the caller has no stored record, or
    /// the underlying storage error.
    pub async fn update_contact_info(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateContactInfoCommand,
    ) -> ApplicationResult<ProfileDto> {
        let UpdateContactInfoCommand {
            address,
            phone_number,
        } = command;
        let address = Address::parse(address.as_deref())?;
        let phone_number = PhoneNumber::parse(phone_number.as_deref())?;

        let update = ContactInfoUpdate::new(actor.id, self.clock.now())
            .with_address(address)
            .with_phone_number(phone_number);

        let user = match self.user_repo.update_contact_info(update).await {
            Ok(user) => user,
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(user_id = %actor.id, "contact update for missing user");
                return Err(ApplicationError::not_found("user not found"));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            user_id = %user.id,
            has_address = user.address.is_some(),
            has_phone_number = user.phone_number.is_some(),
            "contact info updated"
        );

        assemble_profile(self.user_repo.as_ref(), user).await
    }
}
