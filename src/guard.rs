use crate::routes::{CompiledRoute, LOGIN_ROUTE_NAME, RouteTable};
use crate::session::{SessionState, SessionStore, is_authenticated};

/// Path the guard redirects to when an unauthenticated session targets a
/// protected route. Resolves to the entry redirect, which lands on login.
pub const ENTRY_PATH: &str = "/";

// Upper bound on redirect hops per navigation. The table's redirects are
// static and one level deep; the bound guarantees termination regardless.
const MAX_REDIRECTS: usize = 8;

/// GuardOutcome
///
/// The terminal decision of one guard evaluation. Every invocation produces
/// exactly one of these; there is no error state observable to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// guard_navigation
///
/// The authentication gate evaluated before every route transition:
/// - a route whose matched chain never declares `requires_auth` is allowed
///   unconditionally;
/// - the login route is allowed even when flagged, preventing a redirect
///   loop;
/// - otherwise the session must hold at least one identity blob, or the
///   navigation is redirected to the entry path.
pub fn guard_navigation(target: &CompiledRoute, session: &dyn SessionStore) -> GuardOutcome {
    if !target.requires_auth {
        return GuardOutcome::Allow;
    }

    if target.name == Some(LOGIN_ROUTE_NAME) {
        return GuardOutcome::Allow;
    }

    if is_authenticated(session) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(ENTRY_PATH)
    }
}

/// Navigation
///
/// The resolved end state of one navigation request: the route that was
/// entered after all redirects, or no match for the requested path.
#[derive(Debug)]
pub enum Navigation<'t> {
    Entered(&'t CompiledRoute),
    NotFound { path: String },
}

/// Navigator
///
/// Binds the compiled route table to a session store and drives full
/// navigations: resolve the path, run the guard, follow declarative and
/// guard redirects until a route is entered. Bounded redirect following
/// makes every navigation terminate.
pub struct Navigator {
    table: RouteTable,
    session: SessionState,
}

impl Navigator {
    pub fn new(table: RouteTable, session: SessionState) -> Self {
        Self { table, session }
    }

    /// The compiled table this navigator serves.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// navigate
    ///
    /// Resolves `path` to its terminal route. Declarative redirects (the
    /// entry path onto login) and guard redirects are followed in place, so
    /// the caller always receives the route that actually gets rendered.
    pub fn navigate(&self, path: &str) -> Navigation<'_> {
        let mut current = path.to_string();

        for _ in 0..MAX_REDIRECTS {
            let Some(route) = self.table.resolve(&current) else {
                return Navigation::NotFound { path: current };
            };

            if let Some(target) = route.redirect {
                current = target.to_string();
                continue;
            }

            match guard_navigation(route, self.session.as_ref()) {
                GuardOutcome::Allow => return Navigation::Entered(route),
                GuardOutcome::Redirect(target) => {
                    tracing::debug!(from = %current, to = %target, "navigation redirected by guard");
                    current = target.to_string();
                }
            }
        }

        Navigation::NotFound { path: current }
    }
}
