//! Route access policy.
//!
//! DESIGN
//! ======
//! Guards are a pure function of the route's access level and whether a
//! session token is present. `components::route_guard` evaluates this on
//! every render; nothing here touches the browser.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const HOME_PATH: &str = "/home";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only visitors without a session (login, register).
    GuestOnly,
    /// Only visitors with a session.
    Authenticated,
}

/// Outcome of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

pub fn decide(access: Access, authenticated: bool) -> GuardDecision {
    match (access, authenticated) {
        (Access::Authenticated, false) => GuardDecision::Redirect(LOGIN_PATH),
        (Access::GuestOnly, true) => GuardDecision::Redirect(DASHBOARD_PATH),
        _ => GuardDecision::Render,
    }
}
