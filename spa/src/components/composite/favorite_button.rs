use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, favorites_api};
use crate::notifications::{use_notifier, ToastLevel};
use crate::router::{RedirectQuery, Route};
use crate::session::{use_session, SessionAction};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub movie_id: String,
    /// Path to come back to when the user has to log in first.
    pub return_path: String,
}

/// Flips the favorite flag locally first, then syncs the backend and rolls
/// back if the call fails.
#[function_component(FavoriteButton)]
pub fn favorite_button(props: &Props) -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let is_favorite = session.is_favorite(&props.movie_id);

    let onclick = {
        let session = session.clone();
        let movie_id = props.movie_id.clone();
        let return_path = props.return_path.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let authorization = match api::authorization(&session) {
                Ok(authorization) => authorization,
                Err(_) => {
                    notifier.push(ToastLevel::Warning, "Please log in to keep favorites");
                    if let Some(navigator) = &navigator {
                        let query = RedirectQuery {
                            redirect: return_path.clone(),
                        };
                        if let Err(error) = navigator.push_with_query(&Route::Login, &query) {
                            log::error!("Fail to open login page, error={error:?}");
                        }
                    }
                    return;
                }
            };

            let adding = !session.is_favorite(&movie_id);
            session.dispatch(if adding {
                SessionAction::AddFavorite(movie_id.clone())
            } else {
                SessionAction::RemoveFavorite(movie_id.clone())
            });

            let session = session.clone();
            let notifier = notifier.clone();
            let movie_id = movie_id.clone();
            spawn_local(async move {
                let result = if adding {
                    favorites_api::add(&authorization, &movie_id).await.map(|_| ())
                } else {
                    favorites_api::remove_movie(&authorization, &movie_id).await
                };
                let Err(error) = result else {
                    return;
                };
                api::report(&error, &session, &notifier, "update favorites");
                if error.is_unauthorized() {
                    return;
                }
                // After a failed update the backend list is authoritative.
                match favorites_api::list(&authorization).await {
                    Ok(favorites) => session.dispatch(SessionAction::ReplaceFavorites(
                        favorites
                            .into_iter()
                            .map(|favorite| favorite.movie.movie_id)
                            .collect(),
                    )),
                    Err(sync_error) => {
                        log::warn!("Fail to resync favorites, movie_id={movie_id}, error={sync_error}");
                        session.dispatch(SessionAction::RevertFavorite {
                            movie_id,
                            applied: adding,
                        });
                    }
                }
            });
        })
    };

    let (class, label) = if is_favorite {
        ("btn btn-sm btn-warning", "★ Favorite")
    } else {
        ("btn btn-sm btn-outline-warning", "☆ Add to favorites")
    };

    html! {
        <button type="button" {class} {onclick} aria-pressed={is_favorite.to_string()}>
            {label}
        </button>
    }
}
