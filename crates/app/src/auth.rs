use dioxus::prelude::*;
use shared_types::{Role, SessionUser};

/// The client's session: the authenticated identity, held in one place
/// and passed through context. Loaded from the server on guard mount,
/// stored only by the server (HTTP-only cookie) — nothing here touches
/// browser storage directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.read().as_ref().map(|u| u.role)
    }

    pub fn user_id(&self) -> Option<String> {
        self.current_user.read().as_ref().map(|u| u.user_id.clone())
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The landing page for a freshly authenticated account.
pub fn home_route(role: Role) -> crate::routes::Route {
    use crate::routes::Route;
    match role {
        Role::Student => Route::StudentDashboard {},
        Role::Company => Route::CompanyDashboard {},
        Role::Admin => Route::AdminDashboard {},
    }
}
