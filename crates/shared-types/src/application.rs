use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::error::AppError;
use crate::offer::OfferResponse;

// ── Status state machine ────────────────────────────────────────────

/// Application review status.
///
/// The workflow is strictly forward:
/// SUBMITTED → UNDER_REVIEW → INTERVIEW_SCHEDULED → ACCEPTED | REJECTED,
/// with WITHDRAWN reachable from any non-terminal state. ACCEPTED,
/// REJECTED and WITHDRAWN are terminal. Every table below is an
/// exhaustive `match`, so adding a variant without updating the
/// transition rules or display labels is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    InterviewScheduled,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    /// Wire/database string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "SUBMITTED",
            ApplicationStatus::UnderReview => "UNDER_REVIEW",
            ApplicationStatus::InterviewScheduled => "INTERVIEW_SCHEDULED",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Withdrawn => "WITHDRAWN",
        }
    }

    /// Parse a wire string. Unknown strings are an error for the caller
    /// to surface, never silently mapped to a default status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SUBMITTED" => Some(ApplicationStatus::Submitted),
            "UNDER_REVIEW" => Some(ApplicationStatus::UnderReview),
            "INTERVIEW_SCHEDULED" => Some(ApplicationStatus::InterviewScheduled),
            "ACCEPTED" => Some(ApplicationStatus::Accepted),
            "REJECTED" => Some(ApplicationStatus::Rejected),
            "WITHDRAWN" => Some(ApplicationStatus::Withdrawn),
            _ => None,
        }
    }

    /// Display label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Soumis",
            ApplicationStatus::UnderReview => "En cours d'examen",
            ApplicationStatus::InterviewScheduled => "Entretien prévu",
            ApplicationStatus::Accepted => "Accepté",
            ApplicationStatus::Rejected => "Refusé",
            ApplicationStatus::Withdrawn => "Retiré",
        }
    }

    /// The statuses this one may move to. Drives both the buttons the
    /// review UI offers and the server-side legality check, so the two
    /// can never disagree.
    pub fn allowed_transitions(&self) -> &'static [ApplicationStatus] {
        match self {
            ApplicationStatus::Submitted => &[
                ApplicationStatus::UnderReview,
                ApplicationStatus::InterviewScheduled,
                ApplicationStatus::Accepted,
                ApplicationStatus::Rejected,
                ApplicationStatus::Withdrawn,
            ],
            ApplicationStatus::UnderReview => &[
                ApplicationStatus::InterviewScheduled,
                ApplicationStatus::Accepted,
                ApplicationStatus::Rejected,
                ApplicationStatus::Withdrawn,
            ],
            ApplicationStatus::InterviewScheduled => &[
                ApplicationStatus::Accepted,
                ApplicationStatus::Rejected,
                ApplicationStatus::Withdrawn,
            ],
            ApplicationStatus::Accepted => &[],
            ApplicationStatus::Rejected => &[],
            ApplicationStatus::Withdrawn => &[],
        }
    }

    /// Whether a transition request to `target` should succeed.
    /// Re-requesting the current status is allowed as a no-op so that
    /// repeating a successful request is idempotent.
    pub fn can_transition_to(&self, target: ApplicationStatus) -> bool {
        *self == target || self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// All statuses, in workflow order. Used for stats breakdowns so
    /// every status appears in aggregations even with a zero count.
    pub fn all() -> &'static [ApplicationStatus] {
        &[
            ApplicationStatus::Submitted,
            ApplicationStatus::UnderReview,
            ApplicationStatus::InterviewScheduled,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Withdrawn,
        ]
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DB row struct ───────────────────────────────────────────────────

/// An application record: one student's submission against one offer.
/// Never deleted; terminal statuses end its life. `status` is stored as
/// text and parsed with [`ApplicationStatus::parse`] at the edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Application {
    pub id: Uuid,
    pub student_id: Uuid,
    pub offer_id: Uuid,
    /// Document handle: a URL or data-URL string, required.
    pub cv_document: String,
    /// Optional cover letter handle.
    pub cover_letter_document: Option<String>,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── API response types ──────────────────────────────────────────────

/// API response shape for an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: String,
    pub student_id: String,
    pub offer_id: String,
    pub cv: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: String,
    pub updated_at: String,
}

impl TryFrom<Application> for ApplicationResponse {
    type Error = AppError;

    /// Rows only ever hold strings written from the enum; a status that
    /// does not parse means the row bypassed the API and is reported as
    /// an internal error, never mapped to a default.
    fn try_from(a: Application) -> Result<Self, AppError> {
        let status = ApplicationStatus::parse(&a.status).ok_or_else(|| {
            AppError::internal(format!("Application {} has malformed status", a.id))
        })?;
        Ok(Self {
            id: a.id.to_string(),
            student_id: a.student_id.to_string(),
            offer_id: a.offer_id.to_string(),
            cv: a.cv_document,
            cover_letter: a.cover_letter_document,
            status,
            submitted_at: a.submitted_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        })
    }
}

/// An application joined with its offer, for the student's list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithOfferResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub offer: OfferResponse,
}

// ── Request types ───────────────────────────────────────────────────

/// Request to submit an application. The student identity comes from
/// the session, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    pub offer_id: Uuid,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "A CV document is required"))
    )]
    pub cv: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

/// Query parameter for `PUT /applications/{id}/status?status=<ENUM>`.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct StatusQuery {
    pub status: String,
}
