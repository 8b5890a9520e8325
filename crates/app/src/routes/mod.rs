pub mod applications;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod offers;
pub mod profile;
pub mod register;

use dioxus::prelude::*;
use shared_types::Role;

use crate::auth::use_session;

use applications::{MyApplications, OfferApplications};
use dashboard::{AdminDashboard, CompanyDashboard, StudentDashboard};
use login::Login;
use not_found::NotFound;
use offers::{CompanyOffers, OfferDetail, OfferDirectory, OfferEdit, OfferNew};
use profile::{CompanyProfilePage, StudentProfilePage};
use register::Register;

/// Application routes. The offer directory and offer detail pages are
/// public; everything else sits behind a role-scoped guard layout.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/register")]
    Register {},
    #[layout(AppLayout)]
        #[route("/")]
        OfferDirectory {},
        #[route("/offers/:id")]
        OfferDetail { id: String },
        #[layout(StudentGuard)]
            #[route("/dashboard")]
            StudentDashboard {},
            #[route("/applications")]
            MyApplications {},
            #[route("/profile/student")]
            StudentProfilePage {},
        #[end_layout]
        #[layout(CompanyGuard)]
            #[route("/company")]
            CompanyDashboard {},
            #[route("/company/offers")]
            CompanyOffers {},
            #[route("/company/offers/new")]
            OfferNew {},
            #[route("/company/offers/:id/edit")]
            OfferEdit { id: String },
            #[route("/company/offers/:id/applications")]
            OfferApplications { id: String },
            #[route("/profile/company")]
            CompanyProfilePage {},
        #[end_layout]
        #[layout(AdminGuard)]
            #[route("/admin")]
            AdminDashboard {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const STUDENT_PAGES: &[Role] = &[Role::Student];
const COMPANY_PAGES: &[Role] = &[Role::Company, Role::Admin];
const ADMIN_PAGES: &[Role] = &[Role::Admin];

/// Role-aware route guard. Each protected layout declares its required
/// role set; every page behind it shares this one check instead of
/// repeating auth-loading/redirect boilerplate.
///
/// `?` propagates RenderError during suspension: the component suspends
/// until the session check resolves (SSR embeds the result, hydration
/// reads it back), and the `SuspenseBoundary` in `App` shows the
/// loading state meanwhile. No data fetch runs before the check passes.
#[component]
fn RouteGuard(required: &'static [Role]) -> Element {
    let mut session = use_session();
    let attempted = use_route::<Route>();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) if user.role_in(required) => {
            if !session.is_authenticated() {
                session.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        // Absent session, wrong role, or a failed check: back to login,
        // rendering nothing from the protected page. The attempted
        // route rides along so login can return here.
        Some(_) => {
            session.clear();
            navigator().push(Route::Login {
                redirect: Some(attempted.to_string()),
            });
            rsx! {
                div { class: "guard-redirect",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        },
    }
}

#[component]
fn StudentGuard() -> Element {
    rsx! { RouteGuard { required: STUDENT_PAGES } }
}

#[component]
fn CompanyGuard() -> Element {
    rsx! { RouteGuard { required: COMPANY_PAGES } }
}

#[component]
fn AdminGuard() -> Element {
    rsx! { RouteGuard { required: ADMIN_PAGES } }
}

/// Top navigation shared by every page. Links are conditioned on the
/// session role; hiding them is cosmetic — the guards and the server
/// enforce access.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let role = session.role();

    let handle_logout = move |_| {
        spawn(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!("logout failed: {e}");
            }
            session.clear();
            navigator().push(Route::Login { redirect: None });
        });
    };

    rsx! {
        header { class: "topbar",
            Link { class: "brand", to: Route::OfferDirectory {}, "JobBridge" }
            nav { class: "topbar-nav",
                Link { to: Route::OfferDirectory {}, "Offers" }
                if role == Some(Role::Student) {
                    Link { to: Route::StudentDashboard {}, "Dashboard" }
                    Link { to: Route::MyApplications {}, "My applications" }
                    Link { to: Route::StudentProfilePage {}, "Profile" }
                }
                if role == Some(Role::Company) {
                    Link { to: Route::CompanyDashboard {}, "Dashboard" }
                    Link { to: Route::CompanyOffers {}, "My offers" }
                    Link { to: Route::CompanyProfilePage {}, "Profile" }
                }
                if role == Some(Role::Admin) {
                    Link { to: Route::AdminDashboard {}, "Admin" }
                }
            }
            div { class: "topbar-session",
                if session.is_authenticated() {
                    button { class: "link-button", onclick: handle_logout, "Log out" }
                } else {
                    Link { to: Route::Login { redirect: None }, "Log in" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
