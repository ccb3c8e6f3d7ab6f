use client_core::track;
use shared::{GenreCount, Movie};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::movies_api::{self, PAGE_SIZE};
use crate::components::composite::movie_card::MovieCard;
use crate::components::composite::pagination_controls::PaginationControls;
use crate::notifications::use_notifier;
use crate::progress::use_progress;

#[derive(Clone, PartialEq, Default, Debug)]
pub struct MovieListState {
    pub movies: Vec<Movie>,
    pub loading: bool,
}

#[function_component(MovieList)]
pub fn movie_list() -> Html {
    let page = use_state(|| 1u32);
    let state_handle = use_state(MovieListState::default);
    let genres = use_state(Vec::<GenreCount>::new);
    let notifier = use_notifier();
    let progress = use_progress();

    {
        let state_handle = state_handle.clone();
        let notifier = notifier.clone();
        use_effect_with(*page, move |page| {
            let page = *page;
            state_handle.set(MovieListState {
                movies: state_handle.movies.clone(),
                loading: true,
            });
            spawn_local(async move {
                match track(&progress, movies_api::list(page)).await {
                    Ok(movies) => state_handle.set(MovieListState {
                        movies,
                        loading: false,
                    }),
                    Err(error) => {
                        log::error!("Fail to list movies, page={page}, error={error}");
                        notifier.error("Could not load movies");
                        state_handle.set(MovieListState::default());
                    }
                }
            });
            || ()
        });
    }

    {
        let genres = genres.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match movies_api::genre_stats().await {
                    Ok(stats) => genres.set(stats),
                    Err(error) => log::warn!("Fail to load genre stats, error={error}"),
                }
            });
            || ()
        });
    }

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let has_more = state_handle.movies.len() as u32 == PAGE_SIZE;

    let cards = state_handle.movies.iter().map(|movie| {
        html! {
            <div class="col" key={movie.movie_id.clone()}>
                <MovieCard movie={movie.clone()} />
            </div>
        }
    });

    let genre_items = genres.iter().take(10).map(|genre| {
        html! {
            <li class="list-group-item d-flex justify-content-between">
                {&genre.genre}
                <span class="badge text-bg-primary rounded-pill">{genre.count.to_string()}</span>
            </li>
        }
    });

    html! {
        <main class="container mt-4">
            <div class="row">
                <div class="col-md-9">
                    if state_handle.loading && state_handle.movies.is_empty() {
                        <p>{"Loading movies..."}</p>
                    } else {
                        <div class="row row-cols-1 row-cols-md-3 g-4 mb-4">
                            { for cards }
                        </div>
                    }
                    <PaginationControls current_page={*page} {has_more} on_page_change={on_page_change} />
                </div>
                <aside class="col-md-3">
                    <h5>{"Genres"}</h5>
                    <ul class="list-group">{ for genre_items }</ul>
                </aside>
            </div>
        </main>
    }
}
