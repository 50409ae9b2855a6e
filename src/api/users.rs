//! Registration, login and profile endpoints (`/api/users`, aliased at `/api/auth`)

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AdminUser, AuthenticatedUser, MessageResponse};
use crate::{
    error::{AppError, AppResult},
    models::user::{LoginUser, RegisterUser, UpdateProfile, UserInfo},
    AppState,
};

/// Token issued on register and login
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MeResponse {
    pub user: UserInfo,
}

/// Profile update result; `user` is absent when nothing changed
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// Create a customer account
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<RegisterUser>, AppError>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let (token, user) = state.services.users.register(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            user: UserInfo::from(&user),
        }),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "users",
    request_body = LoginUser,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid email or password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<LoginUser>, AppError>,
) -> AppResult<Json<AuthResponse>> {
    let (token, user) = state.services.users.login(data).await?;
    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserInfo::from(&user),
    }))
}

/// Log out. Tokens are stateless; clients discard theirs.
#[utoipa::path(
    post,
    path = "/api/users/logout",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
pub async fn logout(AuthenticatedUser(claims): AuthenticatedUser) -> Json<MessageResponse> {
    tracing::debug!(user_id = %claims.user_id(), "User logged out");
    Json(MessageResponse::new("Logged out successfully"))
}

/// Current user profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = MeResponse),
        (status = 404, description = "User no longer exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<MeResponse>> {
    let user = state.services.users.get_by_id(claims.user_id()).await?;
    Ok(Json(MeResponse {
        user: UserInfo::from(&user),
    }))
}

/// Update own profile and optionally the password
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Profile updated, or no changes", body = ProfileResponse),
        (status = 400, description = "Invalid password change", body = crate::error::ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_me(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(data), _): WithRejection<Json<UpdateProfile>, AppError>,
) -> AppResult<Json<ProfileResponse>> {
    let response = match state.services.users.update_profile(claims.user_id(), data).await? {
        Some(user) => ProfileResponse {
            message: "Profile updated successfully.".to_string(),
            user: Some(UserInfo::from(&user)),
        },
        None => ProfileResponse {
            message: "No changes detected.".to_string(),
            user: None,
        },
    };
    Ok(Json(response))
}

/// Admin token check used by the dashboard
#[utoipa::path(
    get,
    path = "/api/users/admin",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller is an admin", body = MessageResponse),
        (status = 403, description = "Admin access only", body = crate::error::ErrorResponse)
    )
)]
pub async fn admin_check(AdminUser(_admin): AdminUser) -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome admin"))
}
