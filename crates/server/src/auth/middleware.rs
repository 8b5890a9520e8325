use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_token;

/// Permissive auth middleware.
///
/// On each request:
/// 1. Validates the session token from cookies (or Bearer header fallback)
///    and inserts the Claims into request extensions
/// 2. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 3. After the handler runs, applies any pending cookie action to the response
///
/// Does NOT reject unauthenticated requests — downstream handlers decide
/// authorization.
pub async fn auth_middleware(mut req: Request, next: Next) -> Response {
    if let Some(token) = cookies::extract_session_token(req.headers()) {
        match validate_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                // Expired or tampered token. The request proceeds
                // unauthenticated and handlers answer 401 where it matters.
                tracing::debug!(error = %e, "session token rejected");
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(action) = cookie_slot.0.lock().unwrap().take() {
        match action {
            PendingCookieAction::Set { token } => {
                cookies::set_session_cookie(response.headers_mut(), &token);
            }
            PendingCookieAction::Clear => {
                cookies::clear_session_cookie(response.headers_mut());
            }
        }
    }

    response
}
