// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::CurrentUserResolver,
};
use async_trait::async_trait;
use biscuit_auth::{Biscuit, PublicKey, builder::Algorithm, builder::AuthorizerBuilder};

/// Verifies access tokens minted by the platform's auth service.
///
/// Only the root public key is held here; this service never issues tokens.
/// A token must carry `user($id, $email)` and `expires_at($date)` facts, and
/// its own time checks are enforced by the authorizer.
#[derive(Clone)]
pub struct BiscuitCurrentUserResolver {
    public: PublicKey,
}

impl BiscuitCurrentUserResolver {
    /// # Errors
    ///
    /// Returns `ApplicationError::Infrastructure` when the key is not a valid
    /// hex-encoded Ed25519 public key.
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { public })
    }

    #[must_use]
    pub const fn from_public_key(public: PublicKey) -> Self {
        Self { public }
    }
}

const AUTHORIZER_POLICY: &str = r"
    allow if user($id, $email), expires_at($exp);
";

#[async_trait]
impl CurrentUserResolver for BiscuitCurrentUserResolver {
    async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code(AUTHORIZER_POLICY)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();

        crate::infrastructure::security::claims::parse_claims(facts)
    }
}
