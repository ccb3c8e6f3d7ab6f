mod common;

use client_core::{
    AccessDenied, GuardDecision, NavigationGuard, NavigationRequest, NoticeLevel, RedirectTarget,
};
use common::CountingProgress;

fn guard() -> anyhow::Result<NavigationGuard> {
    Ok(NavigationGuard::new(common::route_table()?))
}

#[test]
fn test_public_route_always_allowed() -> anyhow::Result<()> {
    let guard = guard()?;
    let (logged_out, _) = common::empty_store();
    let (member, _) = common::logged_in_store(false);
    let (admin, _) = common::logged_in_store(true);

    for route in [("movie_list", "/"), ("movie_detail", "/movie/7"), ("login", "/login")] {
        let request = NavigationRequest::new(route.0, route.1);
        assert!(guard.evaluate(request, &logged_out).is_allowed());
        assert!(guard.evaluate(request, &member).is_allowed());
        assert!(guard.evaluate(request, &admin).is_allowed());
    }
    Ok(())
}

#[test]
fn test_unknown_route_has_no_restriction() -> anyhow::Result<()> {
    let guard = guard()?;
    let (logged_out, _) = common::empty_store();
    let request = NavigationRequest::new("not_declared", "/whatever");
    assert_eq!(guard.evaluate(request, &logged_out), GuardDecision::Allow);
    Ok(())
}

#[test]
fn test_logged_out_redirects_to_login_with_return_path() -> anyhow::Result<()> {
    let guard = guard()?;
    let (logged_out, _) = common::empty_store();

    let decision = guard.evaluate(
        NavigationRequest::new("favorites", "/favorites?page=2"),
        &logged_out,
    );

    let (target, denied, notice) = match decision {
        GuardDecision::Redirect {
            target,
            denied,
            notice,
        } => (target, denied, notice),
        GuardDecision::Allow => panic!("logged out user reached a protected page"),
    };
    assert_eq!(
        target,
        RedirectTarget::Login {
            path: "/login",
            redirect: "/favorites?page=2".to_owned(),
        }
    );
    assert_eq!(target.href(), "/login?redirect=%2Ffavorites%3Fpage%3D2");
    assert_eq!(denied, AccessDenied::Unauthenticated);
    assert_eq!(notice.level, NoticeLevel::Warning);
    Ok(())
}

#[test]
fn test_logged_out_admin_route_goes_to_login_not_home() -> anyhow::Result<()> {
    let guard = guard()?;
    let (logged_out, _) = common::empty_store();

    let decision = guard.evaluate(NavigationRequest::new("analysis", "/analysis"), &logged_out);

    match decision {
        GuardDecision::Redirect { target, denied, .. } => {
            assert_eq!(target.path(), "/login");
            assert_eq!(target.redirect(), Some("/analysis"));
            assert_eq!(denied, AccessDenied::Unauthenticated);
        }
        GuardDecision::Allow => panic!("logged out user reached an admin page"),
    }
    Ok(())
}

#[test]
fn test_non_admin_redirected_home_with_error() -> anyhow::Result<()> {
    let guard = guard()?;
    let (member, _) = common::logged_in_store(false);

    let decision = guard.evaluate(NavigationRequest::new("analysis", "/analysis"), &member);

    match decision {
        GuardDecision::Redirect {
            target,
            denied,
            notice,
        } => {
            assert_eq!(target, RedirectTarget::Home { path: "/" });
            assert_eq!(denied, AccessDenied::Forbidden);
            assert_eq!(notice.level, NoticeLevel::Error);
        }
        GuardDecision::Allow => panic!("non admin reached an admin page"),
    }
    Ok(())
}

#[test]
fn test_child_route_inherits_admin_requirement() -> anyhow::Result<()> {
    let guard = guard()?;
    let (member, _) = common::logged_in_store(false);
    let (admin, _) = common::logged_in_store(true);
    let request = NavigationRequest::new("admin_users", "/admin/users");

    assert!(matches!(
        guard.evaluate(request, &member),
        GuardDecision::Redirect {
            denied: AccessDenied::Forbidden,
            ..
        }
    ));
    assert!(guard.evaluate(request, &admin).is_allowed());
    Ok(())
}

#[test]
fn test_authenticated_routes_allowed_for_members() -> anyhow::Result<()> {
    let guard = guard()?;
    let (member, _) = common::logged_in_store(false);
    let (admin, _) = common::logged_in_store(true);
    let favorites = NavigationRequest::new("favorites", "/favorites");

    assert!(guard.evaluate(favorites, &member).is_allowed());
    assert!(guard.evaluate(favorites, &admin).is_allowed());
    assert!(guard
        .evaluate(NavigationRequest::new("analysis", "/analysis"), &admin)
        .is_allowed());
    Ok(())
}

#[test]
fn test_token_without_user_is_not_admin() -> anyhow::Result<()> {
    let guard = guard()?;
    let (mut store, _) = common::empty_store();
    store.set_token("abc");

    assert!(guard
        .evaluate(NavigationRequest::new("favorites", "/favorites"), &store)
        .is_allowed());
    assert!(!guard
        .evaluate(NavigationRequest::new("admin", "/admin"), &store)
        .is_allowed());
    Ok(())
}

#[test]
fn test_progress_is_balanced() -> anyhow::Result<()> {
    let guard = guard()?;
    let (logged_out, _) = common::empty_store();
    let progress = CountingProgress::default();

    guard.navigate(NavigationRequest::new("movie_list", "/"), &logged_out, &progress);
    guard.navigate(NavigationRequest::new("favorites", "/favorites"), &logged_out, &progress);
    guard.navigate(NavigationRequest::new("admin", "/admin"), &logged_out, &progress);

    assert_eq!(progress.started.get(), 3);
    assert_eq!(progress.finished.get(), 3);
    Ok(())
}

#[test]
fn test_logout_then_navigate_redirects() -> anyhow::Result<()> {
    let guard = guard()?;
    let (mut store, _) = common::logged_in_store(true);
    let request = NavigationRequest::new("admin", "/admin");
    assert!(guard.evaluate(request, &store).is_allowed());

    store.logout();

    assert!(matches!(
        guard.evaluate(request, &store),
        GuardDecision::Redirect {
            denied: AccessDenied::Unauthenticated,
            ..
        }
    ));
    Ok(())
}

#[test]
fn test_login_return_path() -> anyhow::Result<()> {
    let guard = guard()?;
    assert_eq!(guard.login_return_path(Some("/favorites")), "/favorites");
    assert_eq!(guard.login_return_path(Some("/movie/3?x=1")), "/movie/3?x=1");
    assert_eq!(guard.login_return_path(None), "/");
    assert_eq!(guard.login_return_path(Some("")), "/");
    assert_eq!(guard.login_return_path(Some("https://evil.example")), "/");
    assert_eq!(guard.login_return_path(Some("//evil.example")), "/");
    assert_eq!(guard.login_return_path(Some("/login?redirect=/x")), "/");
    Ok(())
}
