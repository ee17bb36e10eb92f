use crate::database::entity::user;
use crate::database::postgres_repo::PostgresUserRepository;
use stagepass_core::domain::{Role, User};
use stagepass_core::ports::{BaseRepository, UserRepository};
use sea_orm::{DatabaseBackend, MockDatabase};

fn user_model(email: &str, role: &str) -> user::Model {
    let now = chrono::Utc::now();
    user::Model {
        id: uuid::Uuid::new_v4(),
        email: email.to_owned(),
        password_hash: "$argon2id$stub".to_owned(),
        name: Some("Test User".to_owned()),
        role: role.to_owned(),
        enabled: true,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_user_by_id() {
    let model = user_model("a@b.com", "USER");
    let user_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result: Option<User> = repo.find_by_id(user_id).await.unwrap();

    let user = result.unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn find_user_by_email_maps_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model("root@b.com", "ADMIN")]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let user = repo.find_by_email("root@b.com").await.unwrap().unwrap();

    assert_eq!(user.role, Role::Admin);
    assert!(user.enabled);
}

#[tokio::test]
async fn absent_email_yields_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result = repo.find_by_email("nobody@b.com").await.unwrap();

    assert!(result.is_none());
}
