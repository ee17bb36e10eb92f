//! PostgreSQL credential store.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use stagepass_core::domain::User;
use stagepass_core::error::RepoError;
use stagepass_core::ports::UserRepository;

use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// Whole local part redacted; the domain alone is enough to trace a lookup
/// without recording who it was for.
fn log_safe_email(email: &str) -> String {
    match email.split_once('@') {
        Some((_, domain)) => format!("***@{domain}"),
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(
            user_email = %log_safe_email(email),
            found = result.is_some(),
            "Looked up user by email"
        );

        Ok(result.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::log_safe_email;

    #[test]
    fn local_part_never_reaches_logs() {
        assert_eq!(log_safe_email("ana@stagepass.example"), "***@stagepass.example");
        assert_eq!(log_safe_email("not-an-email"), "***");
    }
}
