use dioxus::prelude::*;
use shared_types::{RegisterRequest, SessionUser};

/// Login with email and password. Sets the HTTP-only session cookie on
/// success and returns the identity the client stores in its session
/// context.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use shared_types::{AppError, Role};

    let pool = get_db().await;

    // Unknown email and wrong password fail identically.
    let account = crate::repo::account::find_by_email(pool, &email)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let valid = pw::verify_password(&password, &account.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let role = Role::parse(&account.role)
        .ok_or_else(|| AppError::internal("Account has malformed role").into_server_fn_error())?;

    let token = jwt::create_token(account.id, &account.email, role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    cookies::schedule_session_cookie(&token);

    Ok(SessionUser {
        user_id: account.id.to_string(),
        email: account.email,
        role,
    })
}

/// Register a STUDENT or COMPANY account and log it in immediately.
#[cfg_attr(feature = "server", tracing::instrument(skip(body)))]
#[server]
pub async fn register(body: RegisterRequest) -> Result<SessionUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use crate::db::get_db;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use shared_types::{AppError, Role};
    use std::collections::HashMap;

    body.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let field_error = |field: &str, message: &str| {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.to_string());
        AppError::validation("Validation failed", field_errors).into_server_fn_error()
    };

    let hash = pw::hash_password(&body.password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let pool = get_db().await;
    let account = match body.role {
        Role::Student => {
            let full_name = body
                .full_name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| field_error("fullName", "Full name is required"))?;
            crate::repo::account::create_student(pool, &body.email, &hash, full_name)
                .await
                .map_err(AppErrorExt::into_server_fn_error)?
        }
        Role::Company => {
            let company_name = body
                .company_name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| field_error("companyName", "Company name is required"))?;
            crate::repo::account::create_company(pool, &body.email, &hash, company_name)
                .await
                .map_err(AppErrorExt::into_server_fn_error)?
        }
        Role::Admin => {
            return Err(field_error("role", "Role must be STUDENT or COMPANY"));
        }
    };

    let token = jwt::create_token(account.id, &account.email, body.role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    cookies::schedule_session_cookie(&token);

    Ok(SessionUser {
        user_id: account.id.to_string(),
        email: account.email,
        role: body.role,
    })
}

/// Get the current authenticated identity, or None when not logged in.
/// A valid token for an account that no longer exists clears the cookie
/// so the client cannot get stuck half-authenticated.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;

    let Some(claims) = super::session::maybe_session() else {
        return Ok(None);
    };

    let pool = get_db().await;
    let account = crate::repo::account::find_by_id(pool, claims.sub)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    match account {
        Some(account) => Ok(Some(SessionUser {
            user_id: account.id.to_string(),
            email: account.email,
            role: claims.role,
        })),
        None => {
            tracing::warn!(account_id = %claims.sub, "session token references a deleted account");
            crate::auth::cookies::schedule_clear_cookie();
            Ok(None)
        }
    }
}

/// Logout: clears the session cookie. Tokens are short-lived and not
/// stored server-side, so there is nothing to revoke.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}
