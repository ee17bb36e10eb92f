//! User registration, login and admin lookup handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use stagepass_core::domain::{Role, User};
use stagepass_core::ports::{BaseRepository, UserRepository};
use stagepass_core::services::Credentials;
use stagepass_shared::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use crate::middleware::auth::BearerToken;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /users/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    tracing::info!(role = %req.role, "Creating user");

    // Validate input
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Check if user already exists
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    // The plaintext goes no further than the hasher.
    let password_hash = state.passwords.hash(&req.password)?;

    let user = User::new(req.email, password_hash, req.name, req.role);
    let saved = state.users.save(user).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(saved)))
}

/// POST /users/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let token = state
        .auth
        .login(&Credentials {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse { token }))
}

/// GET /users/{id} - admin only
pub async fn get_user_by_id(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.auth.authorize(token.as_str(), Role::Admin).await?;

    let id = path.into_inner();
    tracing::info!(%id, "Fetching user");

    match state.users.find_by_id(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        None => {
            tracing::error!(%id, "User not found");
            Err(AppError::NotFound(format!("user with id {id} not found")))
        }
    }
}
