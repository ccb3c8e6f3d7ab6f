mod common;

use client_core::{RouteAccess, RouteConfigError, RouteDescriptor, RouteTable};

fn base_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("home", "/", RouteAccess::public()),
        RouteDescriptor::new("login", "/login", RouteAccess::public()),
    ]
}

#[test]
fn test_effective_access_merges_chain() -> anyhow::Result<()> {
    let table = common::route_table()?;

    assert_eq!(table.effective_access("admin_users"), RouteAccess::admin());
    assert_eq!(table.effective_access("favorites"), RouteAccess::authenticated());
    assert_eq!(table.effective_access("movie_list"), RouteAccess::public());
    assert_eq!(table.effective_access("missing"), RouteAccess::default());

    let chain: Vec<&str> = table.matched_chain("admin_users").map(|route| route.name).collect();
    assert_eq!(chain, vec!["admin_users", "admin"]);
    assert_eq!(table.path_of("admin_users"), Some("/admin/users"));
    assert_eq!(table.login_route().path, "/login");
    assert_eq!(table.home_route().path, "/");
    Ok(())
}

#[test]
fn test_duplicate_route_rejected() {
    let mut routes = base_routes();
    routes.push(RouteDescriptor::new("home", "/home", RouteAccess::public()));
    assert_eq!(
        RouteTable::new(routes, "login", "home"),
        Err(RouteConfigError::DuplicateRoute("home"))
    );
}

#[test]
fn test_unknown_parent_rejected() {
    let mut routes = base_routes();
    routes.push(RouteDescriptor::new("users", "/admin/users", RouteAccess::admin()).child_of("admn"));
    assert_eq!(
        RouteTable::new(routes, "login", "home"),
        Err(RouteConfigError::UnknownParent {
            route: "users",
            parent: "admn",
        })
    );
}

#[test]
fn test_parent_cycle_rejected() {
    let mut routes = base_routes();
    routes.push(RouteDescriptor::new("a", "/a", RouteAccess::authenticated()).child_of("b"));
    routes.push(RouteDescriptor::new("b", "/b", RouteAccess::authenticated()).child_of("a"));
    assert!(matches!(
        RouteTable::new(routes, "login", "home"),
        Err(RouteConfigError::ParentCycle(_))
    ));
}

#[test]
fn test_missing_login_route_rejected() {
    assert_eq!(
        RouteTable::new(base_routes(), "sign_in", "home"),
        Err(RouteConfigError::MissingRoute("sign_in"))
    );
}

#[test]
fn test_guarded_login_route_rejected() {
    let routes = vec![
        RouteDescriptor::new("home", "/", RouteAccess::public()),
        RouteDescriptor::new("login", "/login", RouteAccess::authenticated()),
    ];
    assert_eq!(
        RouteTable::new(routes, "login", "home"),
        Err(RouteConfigError::GuardedLoginRoute("login"))
    );
}

#[test]
fn test_admin_without_auth_rejected() {
    let mut routes = base_routes();
    routes.push(RouteDescriptor::new(
        "stats",
        "/stats",
        RouteAccess {
            requires_auth: false,
            requires_admin: true,
        },
    ));
    assert_eq!(
        RouteTable::new(routes, "login", "home"),
        Err(RouteConfigError::AdminWithoutAuth("stats"))
    );
}
