//! Admin route gating.
//!
//! The identity check itself belongs to whichever auth provider fronts the
//! site. This module only decides what a request for a path should do given
//! whether a session is present.

use serde::Serialize;

pub const ADMIN_PREFIX: &str = "/admin";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_HOME_PATH: &str = "/admin";

/// Outcome of gating one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "location", rename_all = "snake_case")]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

/// Whether `path` belongs to the admin area (`/admin` or `/admin/...`).
#[must_use]
pub fn is_admin_path(path: &str) -> bool {
    path.strip_prefix(ADMIN_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn is_login_path(path: &str) -> bool {
    path.strip_prefix(ADMIN_LOGIN_PATH)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Decide how a request for `path` is handled.
///
/// Public paths always pass. Unauthenticated admin requests go to the login
/// page; an authenticated visit to the login page goes to the dashboard.
#[must_use]
pub fn admin_gate(path: &str, authenticated: bool) -> GateDecision {
    if !is_admin_path(path) {
        return GateDecision::Allow;
    }
    match (is_login_path(path), authenticated) {
        (true, true) => GateDecision::Redirect(ADMIN_HOME_PATH),
        (true, false) | (false, true) => GateDecision::Allow,
        (false, false) => GateDecision::Redirect(ADMIN_LOGIN_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", false, GateDecision::Allow)]
    #[case("/services/speech-therapy", false, GateDecision::Allow)]
    #[case("/administer", false, GateDecision::Allow)]
    #[case("/admin", false, GateDecision::Redirect(ADMIN_LOGIN_PATH))]
    #[case("/admin/gallery", false, GateDecision::Redirect(ADMIN_LOGIN_PATH))]
    #[case("/admin/login", false, GateDecision::Allow)]
    #[case("/admin/login", true, GateDecision::Redirect(ADMIN_HOME_PATH))]
    #[case("/admin/settings", true, GateDecision::Allow)]
    #[case("/admin/loginx", false, GateDecision::Redirect(ADMIN_LOGIN_PATH))]
    fn gate_cases(#[case] path: &str, #[case] authenticated: bool, #[case] expected: GateDecision) {
        assert_eq!(admin_gate(path, authenticated), expected);
    }
}
