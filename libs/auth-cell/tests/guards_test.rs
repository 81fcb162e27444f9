use auth_cell::{GuardOutcome, RouteGuard};
use shared_models::auth::{Role, Session};

fn anonymous() -> Session {
    Session::anonymous()
}

fn user() -> Session {
    Session {
        authenticated: true,
        role: Some(Role::User),
    }
}

fn admin() -> Session {
    Session {
        authenticated: true,
        role: Some(Role::Admin),
    }
}

#[test]
fn require_auth_redirects_anonymous_to_login() {
    assert_eq!(
        RouteGuard::RequireAuth.evaluate(&anonymous()),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn require_auth_allows_any_authenticated_session() {
    assert_eq!(RouteGuard::RequireAuth.evaluate(&user()), GuardOutcome::Allow);
    assert_eq!(RouteGuard::RequireAuth.evaluate(&admin()), GuardOutcome::Allow);
}

#[test]
fn require_admin_allows_only_admins() {
    assert_eq!(RouteGuard::RequireAdmin.evaluate(&admin()), GuardOutcome::Allow);
    assert_eq!(
        RouteGuard::RequireAdmin.evaluate(&user()),
        GuardOutcome::RedirectToLanding
    );
    assert_eq!(
        RouteGuard::RequireAdmin.evaluate(&anonymous()),
        GuardOutcome::RedirectToLanding
    );
}

#[test]
fn anonymous_only_bounces_valid_sessions() {
    assert_eq!(
        RouteGuard::AnonymousOnly.evaluate(&anonymous()),
        GuardOutcome::Allow
    );
    assert_eq!(
        RouteGuard::AnonymousOnly.evaluate(&user()),
        GuardOutcome::RedirectToLanding
    );
    assert_eq!(
        RouteGuard::AnonymousOnly.evaluate(&admin()),
        GuardOutcome::RedirectToLanding
    );
}

#[test]
fn authenticated_session_without_role_is_not_admin() {
    let no_role = Session {
        authenticated: true,
        role: None,
    };
    assert_eq!(
        RouteGuard::RequireAdmin.evaluate(&no_role),
        GuardOutcome::RedirectToLanding
    );
    assert_eq!(RouteGuard::RequireAuth.evaluate(&no_role), GuardOutcome::Allow);
}
