use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

// ── Roles ───────────────────────────────────────────────────────────

/// Account role. Fixed at registration, stored in the JWT `role` claim
/// in SCREAMING_SNAKE_CASE (the wire format the API has always used).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Role {
    #[serde(rename = "STUDENT")]
    Student,
    #[serde(rename = "COMPANY")]
    Company,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    /// Wire/database string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Company => "COMPANY",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse a wire string. Unknown values are rejected, never defaulted:
    /// a token with a role we don't recognize is an invalid token.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "STUDENT" => Some(Role::Student),
            "COMPANY" => Some(Role::Company),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Resource-level authority: admins act with any role's authority,
    /// everyone else only with their own.
    pub fn satisfies(&self, required: Role) -> bool {
        *self == Role::Admin || *self == required
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DB row structs ──────────────────────────────────────────────────

/// An account record. `role` is stored as text and parsed with
/// [`Role::parse`] at the edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Student profile row, 1:1 with a STUDENT account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct StudentProfile {
    pub account_id: Uuid,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub updated_at: DateTime<Utc>,
}

/// Company profile row, 1:1 with a COMPANY account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CompanyProfile {
    pub account_id: Uuid,
    pub company_name: String,
    pub description: String,
    pub website: String,
    pub location: String,
    pub contact_email: String,
    pub phone: String,
    pub updated_at: DateTime<Utc>,
}

// ── Session types ───────────────────────────────────────────────────

/// The authenticated identity as the client sees it. This is the whole
/// session: explicit, passed through context, loaded and stored only at
/// the server boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// Route-guard check: is this session's role in the declared set?
    pub fn role_in(&self, required: &[Role]) -> bool {
        required.contains(&self.role)
    }
}

// ── API response types ──────────────────────────────────────────────

/// Returned by login and register: the bearer token plus the identity
/// the client needs to bootstrap a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub role: Role,
}

/// API response shape for a student profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudentProfileResponse {
    pub id: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub updated_at: String,
}

impl From<StudentProfile> for StudentProfileResponse {
    fn from(p: StudentProfile) -> Self {
        Self {
            id: p.account_id.to_string(),
            full_name: p.full_name,
            address: p.address,
            phone: p.phone,
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// API response shape for a company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfileResponse {
    pub id: String,
    pub company_name: String,
    pub description: String,
    pub website: String,
    pub location: String,
    pub contact_email: String,
    pub phone: String,
    pub updated_at: String,
}

impl From<CompanyProfile> for CompanyProfileResponse {
    fn from(p: CompanyProfile) -> Self {
        Self {
            id: p.account_id.to_string(),
            company_name: p.company_name,
            description: p.description,
            website: p.website,
            location: p.location,
            contact_email: p.contact_email,
            phone: p.phone,
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(feature = "validation", validate(email(message = "Invalid email address")))]
    pub email: String,
    pub password: String,
}

/// Registration request body. `role` must be STUDENT or COMPANY; admin
/// accounts are provisioned out of band. Profile fields beyond the
/// required name are optional at signup and editable later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[cfg_attr(feature = "validation", validate(email(message = "Invalid email address")))]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    pub role: Role,
    /// Student display name; required when role is STUDENT.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Company display name; required when role is COMPANY.
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Request to update a student profile (only provided fields change).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request to update a company profile (only provided fields change).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
