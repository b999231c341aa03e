// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Term};

/// Extract the caller from the facts of an authorized biscuit.
///
/// The authorizer policy already requires `user($id, $email)` and
/// `expires_at($exp)`; only the subject id is carried forward.
///
/// # Errors
///
/// Returns `ApplicationError::Unauthorized` when no well-formed `user` fact is
/// present.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let user_id = facts
        .into_iter()
        .find_map(|fact| subject_id(fact.predicate.name.as_str(), &fact.predicate.terms))
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;

    let id = UserId::parse(&user_id)
        .map_err(|_| ApplicationError::unauthorized("malformed user id"))?;

    Ok(AuthenticatedUser { id })
}

fn subject_id(name: &str, terms: &[Term]) -> Option<String> {
    match (name, terms) {
        ("user", [Term::Str(id), Term::Str(_email)]) => Some(id.clone()),
        _ => None,
    }
}
