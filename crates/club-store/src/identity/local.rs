//! Local identity provider
//!
//! Keeps accounts in memory, keyed by lowercased email, with Argon2 password
//! hashes. The signed-in identity is published on a watch channel so that
//! observers see every sign-in and sign-out.

use async_trait::async_trait;
use club_common::{AppError, CredentialHasher, IdentityConfig};
use club_core::{validate_email, AuthError, DomainError, Identity, IdentityProvider, RecordId};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
struct Account {
    id: RecordId,
    password_hash: String,
    display_name: Option<String>,
}

impl Account {
    fn identity(&self) -> Identity {
        Identity::new(self.id.clone(), self.display_name.clone())
    }
}

pub struct LocalIdentityProvider {
    accounts: DashMap<String, Account>,
    hasher: CredentialHasher,
    current: watch::Sender<Option<Identity>>,
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::with_hasher(CredentialHasher::default())
    }
}

impl LocalIdentityProvider {
    #[must_use]
    pub fn new(config: &IdentityConfig) -> Self {
        Self::with_hasher(CredentialHasher::new(config.min_password_length))
    }

    fn with_hasher(hasher: CredentialHasher) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            accounts: DashMap::new(),
            hasher,
            current,
        }
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn set_current(&self, identity: Option<Identity>) {
        self.current.send_replace(identity);
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

fn into_domain(err: AppError) -> DomainError {
    match err {
        AppError::Domain(e) => e,
        other => DomainError::persistence(other.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    fn current_user(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    #[instrument(skip(self, password, display_name))]
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Identity, DomainError> {
        let key = normalize(email);
        if !validate_email(&key) {
            return Err(AuthError::InvalidEmail.into());
        }
        let password_hash = self.hasher.hash(password).map_err(into_domain)?;

        let account = match self.accounts.entry(key) {
            Entry::Occupied(_) => {
                warn!("Account creation rejected: email in use");
                return Err(AuthError::EmailInUse.into());
            }
            Entry::Vacant(slot) => {
                let display_name = Some(display_name.trim())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
                slot.insert(Account {
                    id: RecordId::generate(),
                    password_hash,
                    display_name,
                })
                .clone()
            }
        };

        let identity = account.identity();
        self.set_current(Some(identity.clone()));
        info!(user_id = %identity.id, "Account created");
        Ok(identity)
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, DomainError> {
        let key = normalize(email);
        if !validate_email(&key) {
            return Err(AuthError::InvalidEmail.into());
        }

        let account = self
            .accounts
            .get(&key)
            .map(|entry| entry.clone())
            .ok_or(AuthError::UnknownAccount)?;

        self.hasher
            .verify_or_error(password, &account.password_hash)
            .map_err(into_domain)?;

        let identity = account.identity();
        self.set_current(Some(identity.clone()));
        info!(user_id = %identity.id, "Signed in");
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), DomainError> {
        if let Some(identity) = self.current.send_replace(None) {
            info!(user_id = %identity.id, "Signed out");
        }
        Ok(())
    }

    fn identity_changes(&self) -> watch::Receiver<Option<Identity>> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_account_signs_in() {
        let provider = LocalIdentityProvider::default();
        let identity = provider
            .create_account("Alice@Example.com", "secret1", "Alice")
            .await
            .unwrap();

        assert_eq!(identity.display_name.as_deref(), Some("Alice"));
        assert_eq!(provider.current_user(), Some(identity));
    }

    #[tokio::test]
    async fn test_duplicate_email_case_insensitive() {
        let provider = LocalIdentityProvider::default();
        provider
            .create_account("alice@example.com", "secret1", "Alice")
            .await
            .unwrap();

        let err = provider
            .create_account("ALICE@example.com", "secret2", "Other")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::EmailInUse)));
        assert_eq!(provider.account_count(), 1);
    }

    #[tokio::test]
    async fn test_create_account_rejections() {
        let provider = LocalIdentityProvider::default();

        let err = provider
            .create_account("not-an-email", "secret1", "A")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidEmail)));

        let err = provider
            .create_account("a@b.com", "123", "A")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::WeakPassword { min: 6 })
        ));
        assert!(provider.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_failures() {
        let provider = LocalIdentityProvider::default();
        provider
            .create_account("a@b.com", "secret1", "A")
            .await
            .unwrap();
        provider.sign_out().await.unwrap();

        let err = provider.sign_in("a@b.com", "wrong-pw").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::WrongPassword)));

        let err = provider.sign_in("x@b.com", "secret1").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UnknownAccount)));

        assert!(provider.current_user().is_none());
        let identity = provider.sign_in(" A@B.com ", "secret1").await.unwrap();
        assert_eq!(provider.current_user(), Some(identity));
    }

    #[tokio::test]
    async fn test_identity_changes() {
        let provider = LocalIdentityProvider::default();
        let mut changes = provider.identity_changes();
        assert!(changes.borrow().is_none());

        provider
            .create_account("a@b.com", "secret1", "A")
            .await
            .unwrap();
        changes.changed().await.unwrap();
        assert!(changes.borrow_and_update().is_some());

        provider.sign_out().await.unwrap();
        changes.changed().await.unwrap();
        assert!(changes.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn test_blank_display_name_is_absent() {
        let provider = LocalIdentityProvider::default();
        let identity = provider
            .create_account("a@b.com", "secret1", "   ")
            .await
            .unwrap();
        assert!(identity.display_name.is_none());
    }

    #[tokio::test]
    async fn test_configured_minimum() {
        let config = IdentityConfig {
            min_password_length: 10,
            min_name_length: 2,
        };
        let provider = LocalIdentityProvider::new(&config);
        let err = provider
            .create_account("a@b.com", "secret1", "A")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::WeakPassword { min: 10 })
        ));
    }
}
