//! Login and role-gated authorization over the credential store, password
//! verifier and token issuer ports.

use std::sync::Arc;

use crate::domain::{Role, User};
use crate::ports::{AuthError, PasswordService, TokenService, UserRepository};

/// Argon2 hash of a throwaway password. Login verifies against it when the
/// email is unknown, so an absent account costs roughly the same as a wrong
/// password.
const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Credentials presented at login. The plaintext password lives only for the
/// duration of the request and is never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Orchestrates credential verification, token issuance and the role gate.
///
/// Holds no mutable state; every dependency sits behind a narrow port so the
/// flow is independent of the storage and hashing choices.
pub struct AuthenticationService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthenticationService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Verify credentials and mint a bearer token bound to the account email.
    ///
    /// An unknown email and a wrong password both fail with
    /// [`AuthError::InvalidCredentials`]; callers cannot tell which it was.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        if credentials.email.is_empty() || !credentials.email.contains('@') {
            return Err(AuthError::InvalidInput(
                "malformed email address".to_string(),
            ));
        }
        if credentials.password.is_empty() {
            return Err(AuthError::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }

        let Some(user) = self.users.find_by_email(&credentials.email).await? else {
            // Equalize cost with the wrong-password path.
            let _ = self.passwords.verify(&credentials.password, DECOY_HASH);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.enabled {
            return Err(AuthError::AccountDisabled);
        }

        if !self
            .passwords
            .verify(&credentials.password, &user.password_hash)?
        {
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens.issue(&user.email, user.role)
    }

    /// Validate a bearer token and check its subject against a required role.
    ///
    /// The subject is re-loaded from the credential store, so a token whose
    /// account has since been removed fails with [`AuthError::NotFound`] even
    /// though it is still cryptographically valid.
    pub async fn authorize(&self, token: &str, required: Role) -> Result<User, AuthError> {
        let claims = self.tokens.validate(token).map_err(|err| {
            tracing::debug!(%err, "rejecting bearer token");
            AuthError::Unauthenticated
        })?;

        let user = self
            .users
            .find_by_email(&claims.subject)
            .await?
            .ok_or(AuthError::NotFound)?;

        if user.role != required {
            return Err(AuthError::Forbidden);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use crate::ports::{BaseRepository, TokenClaims, TokenError};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct StaticUsers(Vec<User>);

    #[async_trait]
    impl BaseRepository<User, Uuid> for StaticUsers {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
            Ok(self.0.iter().find(|u| u.id == id).cloned())
        }

        async fn save(&self, user: User) -> Result<User, RepoError> {
            Ok(user)
        }

        async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for StaticUsers {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            Ok(self.0.iter().find(|u| u.email == email).cloned())
        }
    }

    /// Treats the stored hash as `plain:<password>`.
    struct PlainPasswords;

    impl PasswordService for PlainPasswords {
        fn hash(&self, password: &str) -> Result<String, AuthError> {
            Ok(format!("plain:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
            Ok(hash == format!("plain:{password}"))
        }
    }

    /// Encodes claims as `<subject>:<role>`; "expired" is always stale.
    struct StubTokens;

    impl TokenService for StubTokens {
        fn issue(&self, subject: &str, role: Role) -> Result<String, AuthError> {
            Ok(format!("{subject}:{}", role.as_str()))
        }

        fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
            if token == "expired" {
                return Err(TokenError::Expired);
            }
            let (subject, role) = token.split_once(':').ok_or(TokenError::Malformed)?;
            Ok(TokenClaims {
                subject: subject.to_string(),
                role: Role::parse(role),
                issued_at: 0,
                expires_at: 0,
            })
        }
    }

    fn account(email: &str, role: Role, enabled: bool) -> User {
        let mut user = User::new(email.to_string(), "plain:pw".to_string(), None, role);
        user.enabled = enabled;
        user
    }

    fn service(users: Vec<User>) -> AuthenticationService {
        AuthenticationService::new(
            Arc::new(StaticUsers(users)),
            Arc::new(PlainPasswords),
            Arc::new(StubTokens),
        )
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_issues_token_bound_to_email_and_role() {
        let auth = service(vec![account("a@b.com", Role::User, true)]);

        let token = auth.login(&credentials("a@b.com", "pw")).await.unwrap();

        assert_eq!(token, "a@b.com:USER");
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let auth = service(vec![account("a@b.com", Role::User, true)]);

        let absent = auth
            .login(&credentials("nobody@b.com", "pw"))
            .await
            .unwrap_err();
        let wrong = auth
            .login(&credentials("a@b.com", "not-the-password"))
            .await
            .unwrap_err();

        assert!(matches!(absent, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn disabled_account_is_rejected_despite_correct_password() {
        let auth = service(vec![account("a@b.com", Role::User, false)]);

        let err = auth.login(&credentials("a@b.com", "pw")).await.unwrap_err();

        assert!(matches!(err, AuthError::AccountDisabled));
    }

    #[tokio::test]
    async fn malformed_input_short_circuits_before_lookup() {
        let auth = service(vec![]);

        let no_at = auth.login(&credentials("not-an-email", "pw")).await;
        let empty_email = auth.login(&credentials("", "pw")).await;
        let empty_password = auth.login(&credentials("a@b.com", "")).await;

        assert!(matches!(no_at, Err(AuthError::InvalidInput(_))));
        assert!(matches!(empty_email, Err(AuthError::InvalidInput(_))));
        assert!(matches!(empty_password, Err(AuthError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn authorize_accepts_matching_role() {
        let auth = service(vec![account("root@b.com", Role::Admin, true)]);

        let user = auth.authorize("root@b.com:ADMIN", Role::Admin).await.unwrap();

        assert_eq!(user.email, "root@b.com");
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn authorize_rejects_insufficient_role() {
        let auth = service(vec![account("a@b.com", Role::User, true)]);

        let err = auth.authorize("a@b.com:USER", Role::Admin).await.unwrap_err();

        assert!(matches!(err, AuthError::Forbidden));
    }

    #[tokio::test]
    async fn authorize_collapses_token_failures_to_unauthenticated() {
        let auth = service(vec![account("a@b.com", Role::User, true)]);

        let malformed = auth.authorize("garbage", Role::Admin).await.unwrap_err();
        let expired = auth.authorize("expired", Role::Admin).await.unwrap_err();

        assert!(matches!(malformed, AuthError::Unauthenticated));
        assert!(matches!(expired, AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn authorize_reports_deleted_subject() {
        let auth = service(vec![]);

        let err = auth.authorize("gone@b.com:ADMIN", Role::Admin).await.unwrap_err();

        assert!(matches!(err, AuthError::NotFound));
    }
}
