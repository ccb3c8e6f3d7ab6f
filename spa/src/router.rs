use std::rc::Rc;

use client_core::{
    GuardDecision, NavigationGuard, NavigationRequest, RedirectTarget, RouteAccess,
    RouteConfigError, RouteDescriptor, RouteTable, SessionFlags,
};
use serde::Serialize;
use strum_macros::IntoStaticStr;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::notifications::use_notifier;
use crate::pages::{
    admin::AdminPage, admin_users::AdminUsersPage, analysis::AnalysisPage,
    favorites::FavoritesPage, login::Login, movie_detail::MovieDetailPage,
    movie_list::MovieList, not_found::NotFound, profile::ProfilePage, register::Register,
};
use crate::progress::use_progress;
use crate::session::use_session;

#[derive(Debug, Clone, Routable, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Route {
    #[at("/")]
    MovieList,
    #[at("/movie/:id")]
    MovieDetail { id: String },
    #[at("/favorites")]
    Favorites,
    #[at("/profile")]
    Profile,
    #[at("/analysis")]
    Analysis,
    #[at("/admin")]
    Admin,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Name under which the route is declared in [`route_table`].
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

const LOGIN: &str = "login";
const HOME: &str = "movie_list";

pub fn route_table() -> Result<RouteTable, RouteConfigError> {
    let routes = vec![
        RouteDescriptor::new(HOME, "/", RouteAccess::public()),
        RouteDescriptor::new("movie_detail", "/movie/:id", RouteAccess::public()),
        RouteDescriptor::new("favorites", "/favorites", RouteAccess::authenticated()),
        RouteDescriptor::new("profile", "/profile", RouteAccess::authenticated()),
        RouteDescriptor::new("analysis", "/analysis", RouteAccess::admin()),
        RouteDescriptor::new("admin", "/admin", RouteAccess::admin()),
        RouteDescriptor::new("admin_users", "/admin/users", RouteAccess::default())
            .child_of("admin"),
        RouteDescriptor::new(LOGIN, "/login", RouteAccess::public()),
        RouteDescriptor::new("register", "/register", RouteAccess::public()),
        RouteDescriptor::new("not_found", "/404", RouteAccess::public()),
    ];
    RouteTable::new(routes, LOGIN, HOME)
}

pub fn navigation_guard() -> Result<NavigationGuard, RouteConfigError> {
    route_table().map(NavigationGuard::new)
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::MovieList => html! { <MovieList /> },
        Route::MovieDetail { id } => html! { <MovieDetailPage movie_id={id} /> },
        Route::Favorites => html! { <FavoritesPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Analysis => html! { <AnalysisPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::AdminUsers => html! { <AdminUsersPage /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedirectQuery {
    pub redirect: String,
}

fn full_path(path: &str, query: &str) -> String {
    match query.trim_start_matches('?') {
        "" => path.to_owned(),
        query => format!("{path}?{query}"),
    }
}

fn follow_redirect(navigator: &Navigator, target: &RedirectTarget) {
    let route = Route::recognize(target.path()).unwrap_or(Route::MovieList);
    let result = match target.redirect() {
        Some(redirect) => navigator.replace_with_query(
            &route,
            &RedirectQuery {
                redirect: redirect.to_owned(),
            },
        ),
        None => {
            navigator.replace(&route);
            Ok(())
        }
    };
    if let Err(error) = result {
        log::error!("Fail to redirect, target={}, error={error:?}", target.href());
    }
}

/// Navigates to a local path that may carry a query string, such as the
/// return path handed to the login page.
pub fn navigate_to_path(navigator: &Navigator, path: &str) {
    let (path, query) = path.split_once('?').unwrap_or((path, ""));
    let route = Route::recognize(path).unwrap_or(Route::MovieList);
    if query.is_empty() {
        navigator.push(&route);
        return;
    }
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    if let Err(error) = navigator.push_with_query(&route, &pairs) {
        log::error!("Fail to navigate, path={path}, error={error:?}");
        navigator.push(&route);
    }
}

/// `Switch` that runs the navigation guard before rendering any route, and
/// again whenever the session's login or admin state changes.
#[function_component(GuardedSwitch)]
pub fn guarded_switch() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let location = use_location();
    let navigator = use_navigator();
    let session = use_session();
    let guard = use_context::<Rc<NavigationGuard>>().expect("navigation guard is provided by App");
    let notifier = use_notifier();
    let progress = use_progress();
    let allowed_path = use_state(|| None::<String>);

    let full_path = location
        .as_ref()
        .map(|location| full_path(location.path(), location.query_str()))
        .unwrap_or_else(|| route.to_path());
    let flags = (session.is_logged_in(), session.is_admin());

    {
        let allowed_path = allowed_path.clone();
        let route = route.clone();
        let session = session.clone();
        use_effect_with((full_path.clone(), flags), move |(full_path, _)| {
            let request = NavigationRequest::new(route.name(), full_path);
            match guard.navigate(request, &**session, &progress) {
                GuardDecision::Allow => allowed_path.set(Some(full_path.clone())),
                GuardDecision::Redirect {
                    target,
                    denied,
                    notice,
                } => {
                    log::info!("Navigation denied, path={full_path}, reason={denied}");
                    notifier.notice(&notice);
                    allowed_path.set(None);
                    match navigator {
                        Some(navigator) => follow_redirect(&navigator, &target),
                        None => log::error!("No router mounted, cannot redirect to {}", target.href()),
                    }
                }
            }
            || ()
        });
    }

    if allowed_path.as_deref() == Some(full_path.as_str()) {
        switch(route)
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_routes() -> Vec<Route> {
        vec![
            Route::MovieList,
            Route::MovieDetail { id: "1".to_owned() },
            Route::Favorites,
            Route::Profile,
            Route::Analysis,
            Route::Admin,
            Route::AdminUsers,
            Route::Login,
            Route::Register,
            Route::NotFound,
        ]
    }

    #[test]
    fn test_route_table_is_valid() {
        assert!(route_table().is_ok());
    }

    #[test]
    fn test_every_route_is_declared() -> Result<(), RouteConfigError> {
        let table = route_table()?;
        for route in all_routes() {
            let descriptor = table.get(route.name());
            assert!(descriptor.is_some(), "{route:?} missing from route table");
            if !matches!(route, Route::MovieDetail { .. }) {
                assert_eq!(descriptor.map(|d| d.path), Some(route.to_path().as_str()));
            }
        }
        Ok(())
    }

    #[test]
    fn test_protected_routes() -> Result<(), RouteConfigError> {
        let table = route_table()?;
        assert_eq!(table.effective_access("favorites"), RouteAccess::authenticated());
        assert_eq!(table.effective_access("analysis"), RouteAccess::admin());
        assert_eq!(table.effective_access("admin_users"), RouteAccess::admin());
        assert_eq!(table.effective_access("movie_detail"), RouteAccess::public());
        Ok(())
    }

    #[test]
    fn test_full_path() {
        assert_eq!(full_path("/favorites", ""), "/favorites");
        assert_eq!(full_path("/favorites", "?"), "/favorites");
        assert_eq!(full_path("/movie/3", "?tab=reviews"), "/movie/3?tab=reviews");
        assert_eq!(full_path("/movie/3", "tab=reviews"), "/movie/3?tab=reviews");
    }
}
