use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use sqlx::{Pool, Postgres};
use std::collections::HashMap;

use shared_types::{AppError, AuthResponse, LoginRequest, RegisterRequest, Role, SessionUser};

use crate::auth::extractors::{AdminRequired, AuthRequired, RoleRequired};
use crate::auth::{cookies, jwt, password};
use crate::error_convert::ValidateRequest;

/// POST /api/auth/register
///
/// Creates a STUDENT or COMPANY account with its profile, then logs the
/// new account in: the response carries the token and sets the session
/// cookie. Admin accounts are provisioned by the seed binary and cannot
/// be registered here.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 409, description = "Email already registered", body = AppError),
        (status = 422, description = "Invalid registration data", body = AppError)
    ),
    tag = "auth"
)]
pub async fn register(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), AppError> {
    body.validate_request()?;

    let hash = password::hash_password(&body.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    let account = match body.role {
        Role::Student => {
            let full_name = body
                .full_name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| field_error("fullName", "Full name is required"))?;
            crate::repo::account::create_student(&pool, &body.email, &hash, full_name).await?
        }
        Role::Company => {
            let company_name = body
                .company_name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| field_error("companyName", "Company name is required"))?;
            crate::repo::account::create_company(&pool, &body.email, &hash, company_name).await?
        }
        Role::Admin => {
            return Err(field_error("role", "Role must be STUDENT or COMPANY"));
        }
    };

    let token = jwt::create_token(account.id, &account.email, body.role)
        .map_err(|e| AppError::internal(format!("Failed to create token: {e}")))?;

    let mut headers = HeaderMap::new();
    cookies::set_session_cookie(&mut headers, &token);

    Ok((
        StatusCode::CREATED,
        headers,
        Json(AuthResponse {
            token,
            user_id: account.id.to_string(),
            role: body.role,
        }),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password fail identically so the response
/// never reveals whether an email is registered.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = AppError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), AppError> {
    let account = crate::repo::account::find_by_email(&pool, &body.email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    let password_ok = password::verify_password(&body.password, &account.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_ok {
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let role = Role::parse(&account.role)
        .ok_or_else(|| AppError::internal("Account has malformed role"))?;

    let token = jwt::create_token(account.id, &account.email, role)
        .map_err(|e| AppError::internal(format!("Failed to create token: {e}")))?;

    let mut headers = HeaderMap::new();
    cookies::set_session_cookie(&mut headers, &token);

    Ok((
        headers,
        Json(AuthResponse {
            token,
            user_id: account.id.to_string(),
            role,
        }),
    ))
}

/// GET /api/auth/verify
///
/// Confirms the caller's token against the database: a valid token for
/// a deleted account clears the cookie and reads as unauthenticated.
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Session is valid", body = SessionUser),
        (status = 401, description = "No valid session", body = AppError)
    ),
    tag = "auth"
)]
pub async fn verify(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
) -> Result<(HeaderMap, Json<SessionUser>), AppError> {
    let mut headers = HeaderMap::new();

    if crate::repo::account::find_by_id(&pool, claims.sub).await?.is_none() {
        cookies::clear_session_cookie(&mut headers);
        return Err(AppError::unauthorized("Account no longer exists"));
    }

    Ok((
        headers,
        Json(SessionUser {
            user_id: claims.sub.to_string(),
            email: claims.email,
            role: claims.role,
        }),
    ))
}

/// GET /api/auth/admin-verify
#[utoipa::path(
    get,
    path = "/api/auth/admin-verify",
    responses(
        (status = 200, description = "Caller is an admin", body = SessionUser),
        (status = 401, description = "No valid session", body = AppError),
        (status = 403, description = "Not an admin", body = AppError)
    ),
    tag = "auth"
)]
pub async fn admin_verify(
    RoleRequired(claims): AdminRequired,
) -> Result<Json<SessionUser>, AppError> {
    Ok(Json(SessionUser {
        user_id: claims.sub.to_string(),
        email: claims.email,
        role: claims.role,
    }))
}

fn field_error(field: &str, message: &str) -> AppError {
    let mut field_errors = HashMap::new();
    field_errors.insert(field.to_string(), message.to_string());
    AppError::validation("Validation failed", field_errors)
}
