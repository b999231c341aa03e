use crate::domain::errors::DomainError;

const CNT_USER_ADDRESS_LENGTH: &str = "users_address_length_chk";
const CNT_USER_PHONE_LENGTH: &str = "users_phone_number_length_chk";
const CNT_USER_CONTACT_NOT_BLANK: &str = "users_contact_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_ADDRESS_LENGTH => {
                        DomainError::Validation("address exceeds maximum length".into())
                    }
                    CNT_USER_PHONE_LENGTH => {
                        DomainError::Validation("phoneNumber exceeds maximum length".into())
                    }
                    CNT_USER_CONTACT_NOT_BLANK => {
                        DomainError::Validation("contact fields must not be blank".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        other => DomainError::Persistence(other.to_string()),
    }
}
