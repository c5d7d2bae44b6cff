//! Authentication service
//!
//! Handles registration, sign-in, and sign-out through the identity provider.

use club_common::messages;
use club_core::{DomainError, Identity, User};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{RegisterRequest, SignInRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account and write its user record
    ///
    /// The new account is signed in on success.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        request.validate()?;
        request.check_lengths(&self.ctx.config().identity.length_rules())?;
        if !request.passwords_match() {
            return Err(ServiceError::validation(messages::auth::PASSWORDS_MISMATCH));
        }

        let full_name = request.full_name.trim().to_string();
        let identity = self
            .ctx
            .identity()
            .create_account(&request.email, &request.password, &full_name)
            .await?;

        let user = User::new(
            identity.id,
            full_name,
            request.email.trim().to_string(),
            request.role,
        );
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Sign in. Every credential failure reads the same to the user.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<Identity> {
        if request.validate().is_err() {
            return Err(ServiceError::validation(messages::auth::SIGN_IN_FAILED));
        }

        match self
            .ctx
            .identity()
            .sign_in(&request.email, &request.password)
            .await
        {
            Ok(identity) => {
                info!(user_id = %identity.id, "User signed in");
                Ok(identity)
            }
            Err(DomainError::Auth(err)) => {
                warn!(error = %err, "Sign-in rejected");
                Err(ServiceError::validation(messages::auth::SIGN_IN_FAILED))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Sign the current identity out
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> ServiceResult<()> {
        self.ctx.identity().sign_out().await?;
        Ok(())
    }
}
