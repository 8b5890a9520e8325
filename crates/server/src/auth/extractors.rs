use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, Role};

use super::jwt::Claims;

/// Extractor that requires authentication. Returns 401 if no valid token.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Extractor that optionally extracts auth claims. Never fails.
pub struct MaybeAuth(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<Claims>().cloned()))
    }
}

/// Extractor that requires authentication AND a specific role.
/// Returns 401 if unauthenticated, 403 on a role mismatch. Admins pass
/// the COMPANY and ADMIN gates; the STUDENT gate demands the student
/// role itself, since rows created behind it record the caller's id as
/// a student identity.
///
/// Role constants (match `Role` variants):
/// - 1 = Student
/// - 2 = Company
/// - 3 = Admin
pub struct RoleRequired<const ROLE: u8>(pub Claims);

/// STUDENT-only endpoints.
pub type StudentRequired = RoleRequired<1>;
/// COMPANY-only endpoints.
pub type CompanyRequired = RoleRequired<2>;
/// ADMIN-only endpoints.
pub type AdminRequired = RoleRequired<3>;

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for RoleRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let required = match ROLE {
            1 => Role::Student,
            2 => Role::Company,
            _ => Role::Admin,
        };

        let allowed = match required {
            Role::Student => claims.role == Role::Student,
            _ => claims.role.satisfies(required),
        };
        if !allowed {
            return Err(AppError::forbidden(format!(
                "{} role required",
                required.as_str()
            )));
        }

        Ok(RoleRequired(claims))
    }
}
