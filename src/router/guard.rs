use crate::router::{DASHBOARD_PATH, LOGIN_PATH, RETURN_PARAM};
use crate::services::Session;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GuardDecision {
    Render,
    Redirect { to: String },
}

/// Decides whether a protected screen may render for `session`.
///
/// Pure and synchronous: it only reads the session snapshot it is given.
/// A refused request is sent to the login page with the requested location
/// attached so login can return there.
pub fn check(session: &Session, requested: &str) -> GuardDecision {
    if session.is_authenticated && session.is_admin {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect {
            to: login_redirect(requested),
        }
    }
}

pub fn login_redirect(requested: &str) -> String {
    if requested.is_empty() || requested == LOGIN_PATH {
        return LOGIN_PATH.to_string();
    }

    format!(
        "{}?{}={}",
        LOGIN_PATH,
        RETURN_PARAM,
        urlencoding::encode(requested)
    )
}

/// Where to go after a successful login. Only same-site paths are honoured;
/// anything else lands on the dashboard.
pub fn return_target(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path) if is_local_path(path) && !path.starts_with(LOGIN_PATH) => path.to_string(),
        _ => DASHBOARD_PATH.to_string(),
    }
}

/// Browsers read `//host` and `/\host` as protocol-relative URLs, and drop
/// tabs and newlines before doing so.
fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/' | '\\'))
        && !path.chars().any(char::is_control)
}
