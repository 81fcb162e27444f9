use shared_models::auth::Session;

/// The three gate variants screens declare. Guards hold no state: every
/// navigation attempt is evaluated against a fresh session read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// Redirect to the login screen unless authenticated.
    RequireAuth,
    /// Redirect to the landing screen unless an authenticated admin.
    RequireAdmin,
    /// Login/registration screens: redirect already-valid sessions to the
    /// landing screen instead of prompting again.
    AnonymousOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectToLogin,
    RedirectToLanding,
}

impl RouteGuard {
    pub fn evaluate(&self, session: &Session) -> GuardOutcome {
        match self {
            RouteGuard::RequireAuth => {
                if session.authenticated {
                    GuardOutcome::Allow
                } else {
                    GuardOutcome::RedirectToLogin
                }
            }
            RouteGuard::RequireAdmin => {
                if session.is_admin() {
                    GuardOutcome::Allow
                } else {
                    // The landing screen is itself auth-gated, so an
                    // unauthenticated visitor ends up at the login screen
                    // after one more hop.
                    GuardOutcome::RedirectToLanding
                }
            }
            RouteGuard::AnonymousOnly => {
                if session.authenticated {
                    GuardOutcome::RedirectToLanding
                } else {
                    GuardOutcome::Allow
                }
            }
        }
    }
}
