use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid offer type values matching the DB default and the UI radio set.
pub const OFFER_TYPES: &[&str] = &["stage", "alternance", "temps-partiel", "temps-plein"];

/// Sectors offered by the directory filter UI. Offers may carry other
/// sector strings; this list only drives the filter dropdown.
pub const SECTORS: &[&str] = &[
    "Technologie",
    "Éducation",
    "Santé",
    "Finance",
    "Ingénierie",
    "Marketing",
];

/// Check whether an offer type string is valid.
pub fn is_valid_offer_type(s: &str) -> bool {
    OFFER_TYPES.contains(&s)
}

#[cfg(feature = "validation")]
fn validate_offer_type(value: &str) -> Result<(), validator::ValidationError> {
    if is_valid_offer_type(value) {
        return Ok(());
    }
    Err(validator::ValidationError::new("offer_type")
        .with_message("Offer type must be one of: stage, alternance, temps-partiel, temps-plein".into()))
}

// ── DB row struct ───────────────────────────────────────────────────

/// A posted internship/job offer, owned by a company account.
/// `company_name` is denormalized at creation for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Offer {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub sector: String,
    pub duration: String,
    pub offer_type: String,
    pub description: String,
    pub requirements: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── API response types ──────────────────────────────────────────────

/// API response shape for an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub sector: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub offer_type: String,
    pub description: String,
    pub requirements: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Offer> for OfferResponse {
    fn from(o: Offer) -> Self {
        Self {
            id: o.id.to_string(),
            company_id: o.company_id.to_string(),
            title: o.title,
            company_name: o.company_name,
            location: o.location,
            sector: o.sector,
            duration: o.duration,
            offer_type: o.offer_type,
            description: o.description,
            requirements: o.requirements,
            created_at: o.created_at.to_rfc3339(),
            updated_at: o.updated_at.to_rfc3339(),
        }
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request to create a new offer. The owning company and its display
/// name come from the session, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default = "default_offer_type", rename = "type")]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_offer_type"))
    )]
    pub offer_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
}

fn default_offer_type() -> String {
    "stage".to_string()
}

/// Request to update an offer (only provided fields change).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_offer_type"))
    )]
    pub offer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
}

// ── Directory filter ────────────────────────────────────────────────

/// Filter set for the offer directory. Evaluated client-side against
/// the already-fetched list on every input change; an empty field is an
/// open condition that matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferFilter {
    /// Free text, matched case-insensitively against title, company
    /// name, and description.
    pub query: String,
    /// Exact sector match.
    pub sector: String,
    /// Case-insensitive substring of the location.
    pub location: String,
    /// Case-insensitive substring of the duration.
    pub duration: String,
    /// Exact offer type match.
    pub offer_type: String,
}

impl OfferFilter {
    /// Conjunction over all non-empty fields.
    pub fn matches(&self, offer: &OfferResponse) -> bool {
        self.matches_query(offer)
            && (self.sector.is_empty() || offer.sector == self.sector)
            && contains_ci_or_open(&offer.location, &self.location)
            && contains_ci_or_open(&offer.duration, &self.duration)
            && (self.offer_type.is_empty() || offer.offer_type == self.offer_type)
    }

    fn matches_query(&self, offer: &OfferResponse) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        offer.title.to_lowercase().contains(&q)
            || offer.company_name.to_lowercase().contains(&q)
            || offer.description.to_lowercase().contains(&q)
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.sector.is_empty()
            && self.location.is_empty()
            && self.duration.is_empty()
            && self.offer_type.is_empty()
    }
}

fn contains_ci_or_open(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
