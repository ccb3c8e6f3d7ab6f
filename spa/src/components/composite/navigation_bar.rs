use client_core::SessionFlags;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::notifications::{use_notifier, ToastLevel};
use crate::router::Route;
use crate::session::{use_session, SessionAction};

#[function_component(NavigationBar)]
pub fn navigation_bar() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let active = use_route::<Route>();

    let on_logout_click = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Logout);
            notifier.push(ToastLevel::Info, "You have been logged out");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::MovieList);
            }
        })
    };

    let link_classes = |route: Route| {
        if active.as_ref() == Some(&route) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    let member_links = if session.is_logged_in() {
        html! {
            <>
                <li class="nav-item">
                    <Link<Route> classes={link_classes(Route::Favorites)} to={Route::Favorites}>
                        {format!("Favorites ({})", session.favorites().len())}
                    </Link<Route>>
                </li>
                <li class="nav-item">
                    <Link<Route> classes={link_classes(Route::Profile)} to={Route::Profile}>{"Profile"}</Link<Route>>
                </li>
            </>
        }
    } else {
        html! {}
    };

    let admin_links = if session.is_admin() {
        html! {
            <>
                <li class="nav-item">
                    <Link<Route> classes={link_classes(Route::Analysis)} to={Route::Analysis}>{"Analysis"}</Link<Route>>
                </li>
                <li class="nav-item">
                    <Link<Route> classes={link_classes(Route::Admin)} to={Route::Admin}>{"Admin"}</Link<Route>>
                </li>
            </>
        }
    } else {
        html! {}
    };

    let account = match session.user() {
        Some(user) if session.is_logged_in() => html! {
            <>
                <span class="navbar-text me-3">{&user.username}</span>
                <button onclick={on_logout_click} class="btn btn-sm btn-outline-secondary">
                    {"Logout"}
                </button>
            </>
        },
        _ => html! {
            <>
                <Link<Route> classes={classes!("btn", "btn-sm", "btn-outline-primary", "me-2")} to={Route::Login}>{"Login"}</Link<Route>>
                <Link<Route> classes={classes!("btn", "btn-sm", "btn-primary")} to={Route::Register}>{"Register"}</Link<Route>>
            </>
        },
    };

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <Link<Route> classes={classes!("navbar-brand")} to={Route::MovieList}>{"Movie Reviews"}</Link<Route>>
                <div class="collapse navbar-collapse">
                    <ul class="navbar-nav me-auto mb-2 mb-lg-0">
                        <li class="nav-item">
                            <Link<Route> classes={link_classes(Route::MovieList)} to={Route::MovieList}>{"Movies"}</Link<Route>>
                        </li>
                        {member_links}
                        {admin_links}
                    </ul>
                    {account}
                </div>
            </div>
        </nav>
    }
}
