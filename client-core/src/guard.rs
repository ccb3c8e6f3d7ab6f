use std::future::Future;

use strum_macros::{AsRefStr, Display};

use crate::route::RouteTable;
use crate::session_store::SessionFlags;

pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// A route change the router is about to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest<'a> {
    /// Name of the matched route.
    pub route: &'a str,
    /// Path as requested, including dynamic segments and query.
    pub full_path: &'a str,
}

impl<'a> NavigationRequest<'a> {
    pub fn new(route: &'a str, full_path: &'a str) -> Self {
        Self { route, full_path }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AccessDenied {
    Unauthenticated,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    Login {
        path: &'static str,
        redirect: String,
    },
    Home {
        path: &'static str,
    },
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login { path, .. } | Self::Home { path } => path,
        }
    }

    /// Path the user asked for before being sent to login.
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Login { redirect, .. } => Some(redirect),
            Self::Home { .. } => None,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Login { path, redirect } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair(REDIRECT_QUERY_KEY, redirect)
                    .finish();
                format!("{path}?{query}")
            }
            Self::Home { path } => (*path).to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect {
        target: RedirectTarget,
        denied: AccessDenied,
        notice: Notice,
    },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Page-level loading indicator bracketing every navigation.
pub trait ProgressIndicator {
    fn start(&self);
    fn done(&self);
}

impl ProgressIndicator for () {
    fn start(&self) {}
    fn done(&self) {}
}

/// Keeps `progress` active until `future` resolves, so the indicator covers
/// the page's data load and not only the synchronous guard check.
pub async fn track<P, F>(progress: &P, future: F) -> F::Output
where
    P: ProgressIndicator + ?Sized,
    F: Future,
{
    progress.start();
    let output = future.await;
    progress.done();
    output
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationGuard {
    routes: RouteTable,
}

impl NavigationGuard {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Runs [`Self::evaluate`] between `progress.start()` and `progress.done()`.
    pub fn navigate(
        &self,
        request: NavigationRequest<'_>,
        session: &impl SessionFlags,
        progress: &impl ProgressIndicator,
    ) -> GuardDecision {
        progress.start();
        let decision = self.evaluate(request, session);
        progress.done();
        decision
    }

    /// Authentication is checked before privilege, so a logged-out user
    /// asking for an admin page is sent to login rather than home.
    pub fn evaluate(
        &self,
        request: NavigationRequest<'_>,
        session: &impl SessionFlags,
    ) -> GuardDecision {
        let access = self.routes.effective_access(request.route);
        if !access.requires_auth {
            return GuardDecision::Allow;
        }

        if !session.is_logged_in() {
            log::info!(
                "Navigation to {path} requires login, redirecting",
                path = request.full_path
            );
            return GuardDecision::Redirect {
                target: RedirectTarget::Login {
                    path: self.routes.login_route().path,
                    redirect: request.full_path.to_owned(),
                },
                denied: AccessDenied::Unauthenticated,
                notice: Notice {
                    level: NoticeLevel::Warning,
                    message: "Please log in first".to_owned(),
                },
            };
        }

        if access.requires_admin && !session.is_admin() {
            log::info!(
                "Navigation to {path} requires admin privileges, redirecting home",
                path = request.full_path
            );
            return GuardDecision::Redirect {
                target: RedirectTarget::Home {
                    path: self.routes.home_route().path,
                },
                denied: AccessDenied::Forbidden,
                notice: Notice {
                    level: NoticeLevel::Error,
                    message: "Administrator privileges required".to_owned(),
                },
            };
        }

        GuardDecision::Allow
    }

    /// Where to go after a successful login. Only local absolute paths are
    /// honoured; anything else lands on the home route.
    pub fn login_return_path(&self, redirect: Option<&str>) -> String {
        let home = self.routes.home_route().path;
        let login = self.routes.login_route().path;
        match redirect {
            Some(path)
                if path.starts_with('/')
                    && !path.starts_with("//")
                    && !path.contains('\\')
                    && path.split(['?', '#']).next() != Some(login) =>
            {
                path.to_owned()
            }
            _ => home.to_owned(),
        }
    }

    /// Extracts the `redirect` value from a raw query string such as
    /// `redirect=%2Ffavorites` or `?redirect=...`.
    pub fn redirect_from_query(query: &str) -> Option<String> {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == REDIRECT_QUERY_KEY)
            .map(|(_, value)| value.into_owned())
    }
}
