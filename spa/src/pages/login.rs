use std::rc::Rc;

use client_core::{NavigationGuard, SessionFlags};
use shared::User;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{auth_api, favorites_api, ApiError};
use crate::components::composite::login_form::{LoginForm, LoginFormData};
use crate::notifications::use_notifier;
use crate::router::{navigate_to_path, RedirectQuery, Route};
use crate::session::{use_session, SessionAction};

struct SignIn {
    token: String,
    user: User,
    favorites: Option<Vec<String>>,
}

async fn sign_in(data: &LoginFormData) -> Result<SignIn, ApiError> {
    let token = auth_api::login(&data.username, &data.password).await?;
    let authorization = format!("Bearer {}", token.access_token);
    let user = auth_api::get_user_profile(&authorization).await?;
    let favorites = match favorites_api::list(&authorization).await {
        Ok(favorites) => Some(
            favorites
                .into_iter()
                .map(|favorite| favorite.movie.movie_id)
                .collect(),
        ),
        Err(error) => {
            log::warn!("Fail to load favorites after login, keeping local ones. Error={error}");
            None
        }
    };
    Ok(SignIn {
        token: token.access_token,
        user,
        favorites,
    })
}

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let location = use_location();
    let guard = use_context::<Rc<NavigationGuard>>();
    let busy = use_state(|| false);

    let redirect = location
        .as_ref()
        .and_then(|location| NavigationGuard::redirect_from_query(location.query_str()));
    let return_path = match &guard {
        Some(guard) => guard.login_return_path(redirect.as_deref()),
        None => "/".to_owned(),
    };

    let on_login_event = {
        let busy = busy.clone();
        let session = session.clone();
        let return_path = return_path.clone();
        Callback::from(move |event: LoginFormData| {
            let busy = busy.clone();
            let session = session.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let return_path = return_path.clone();
            busy.set(true);
            spawn_local(async move {
                match sign_in(&event).await {
                    Ok(SignIn {
                        token,
                        user,
                        favorites,
                    }) => {
                        notifier.success(format!("Welcome back, {}", user.username));
                        session.dispatch(SessionAction::Login { token, user });
                        if let Some(favorites) = favorites {
                            session.dispatch(SessionAction::ReplaceFavorites(favorites));
                        }
                        if let Some(navigator) = &navigator {
                            navigate_to_path(navigator, &return_path);
                        }
                    }
                    Err(error) => {
                        log::warn!("Login failed, error: {error}");
                        let message = match error {
                            ApiError::Unauthorized => "Incorrect username or password",
                            _ => "Login failed, please try again",
                        };
                        notifier.error(message);
                    }
                }
                busy.set(false);
            });
        })
    };

    let register_link = match &redirect {
        Some(redirect) => html! {
            <Link<Route, RedirectQuery> to={Route::Register} query={Some(RedirectQuery { redirect: redirect.clone() })}>
                {"Create an account"}
            </Link<Route, RedirectQuery>>
        },
        None => html! { <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>> },
    };

    let content = if session.is_logged_in() {
        html! {
            <p class="text-center">
                {"You are already logged in. "}
                <Link<Route> to={Route::MovieList}>{"Browse movies"}</Link<Route>>
            </p>
        }
    } else {
        html! {
            <>
                <LoginForm on_login={on_login_event} busy={*busy} />
                <p class="text-center mt-3">{register_link}</p>
            </>
        }
    };

    html! {
        <main class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-4">
                    <h2 class="text-center mb-4">{ "Login" }</h2>
                    {content}
                </div>
            </div>
        </main>
    }
}
