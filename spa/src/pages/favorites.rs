use client_core::track;
use shared::FavoriteMovie;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, favorites_api};
use crate::components::composite::movie_card::MovieCard;
use crate::notifications::use_notifier;
use crate::progress::use_progress;
use crate::router::Route;
use crate::session::{use_session, SessionAction};

#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let favorites = use_state(|| None::<Vec<FavoriteMovie>>);
    let progress = use_progress();

    {
        let session = session.clone();
        let favorites = favorites.clone();
        use_effect_with((), move |_| {
            match api::authorization(&session) {
                Ok(authorization) => spawn_local(async move {
                    match track(&progress, favorites_api::list(&authorization)).await {
                        Ok(list) => {
                            let movie_ids = list
                                .iter()
                                .map(|favorite| favorite.movie.movie_id.clone())
                                .collect();
                            session.dispatch(SessionAction::ReplaceFavorites(movie_ids));
                            favorites.set(Some(list));
                        }
                        Err(error) => {
                            api::report(&error, &session, &notifier, "load favorites");
                            favorites.set(Some(Vec::new()));
                        }
                    }
                }),
                Err(error) => api::report(&error, &session, &notifier, "load favorites"),
            }
            || ()
        });
    }

    let Some(list) = &*favorites else {
        return html! { <main class="container mt-4"><p>{"Loading favorites..."}</p></main> };
    };

    // Cards disappear as soon as the session drops the id, before the
    // backend confirms.
    let cards = list
        .iter()
        .filter(|favorite| session.is_favorite(&favorite.movie.movie_id))
        .map(|favorite| {
            let since = favorite.favorited_at.format("Saved %Y-%m-%d").to_string();
            html! {
                <div class="col" key={favorite.favorite_id.to_string()}>
                    <MovieCard movie={favorite.movie.clone()}
                        footer={html! { <small class="text-body-secondary">{since}</small> }} />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <main class="container mt-4">
            <h2 class="mb-4">{"My favorites"}</h2>
            if session.favorites().is_empty() {
                <p>
                    {"No favorites yet. "}
                    <Link<Route> to={Route::MovieList}>{"Browse movies"}</Link<Route>>
                </p>
            } else {
                <div class="row row-cols-1 row-cols-md-3 g-4">{cards}</div>
            }
        </main>
    }
}
