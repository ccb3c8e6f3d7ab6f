use client_core::{track, SessionFlags};
use shared::{MovieDetail, NewReviewRequest, Review};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, movies_api, reviews_api};
use crate::components::composite::favorite_button::FavoriteButton;
use crate::components::composite::review_form::{ReviewForm, ReviewFormData};
use crate::components::composite::review_list::ReviewList;
use crate::notifications::use_notifier;
use crate::progress::use_progress;
use crate::router::{RedirectQuery, Route};
use crate::session::use_session;

#[derive(Clone, PartialEq, Debug)]
enum Loaded {
    Loading,
    Missing,
    Found(Box<MovieDetail>),
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub movie_id: String,
}

#[function_component(MovieDetailPage)]
pub fn movie_detail_page(props: &Props) -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let movie = use_state(|| Loaded::Loading);
    let reviews = use_state(Vec::<Review>::new);
    let submitting = use_state(|| false);
    let progress = use_progress();

    {
        let movie = movie.clone();
        let reviews = reviews.clone();
        let notifier = notifier.clone();
        use_effect_with(props.movie_id.clone(), move |movie_id| {
            let movie_id = movie_id.clone();
            movie.set(Loaded::Loading);
            spawn_local(async move {
                match track(&progress, movies_api::get_by_id(&movie_id)).await {
                    Ok(Some(detail)) => movie.set(Loaded::Found(Box::new(detail))),
                    Ok(None) => {
                        log::warn!("Movie not found in backend, movie_id={movie_id}");
                        movie.set(Loaded::Missing);
                    }
                    Err(error) => {
                        log::error!("Fail to fetch movie, movie_id={movie_id}, error={error}");
                        notifier.error("Could not load this movie");
                        movie.set(Loaded::Missing);
                    }
                }
                match reviews_api::list_for_movie(&movie_id).await {
                    Ok(list) => reviews.set(list),
                    Err(error) => log::warn!("Fail to fetch reviews, movie_id={movie_id}, error={error}"),
                }
            });
            || ()
        });
    }

    let on_review = {
        let session = session.clone();
        let reviews = reviews.clone();
        let submitting = submitting.clone();
        let movie_id = props.movie_id.clone();
        Callback::from(move |data: ReviewFormData| {
            let authorization = match api::authorization(&session) {
                Ok(authorization) => authorization,
                Err(error) => {
                    api::report(&error, &session, &notifier, "post a review");
                    return;
                }
            };
            let request = NewReviewRequest {
                movie_id: movie_id.clone(),
                content: data.content,
                sentiment: data.sentiment,
            };
            let session = session.clone();
            let notifier = notifier.clone();
            let reviews = reviews.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            spawn_local(async move {
                match reviews_api::create(&authorization, &request).await {
                    Ok(review) => {
                        let mut list = (*reviews).clone();
                        list.insert(0, review);
                        reviews.set(list);
                        notifier.success("Review posted");
                    }
                    Err(error) => api::report(&error, &session, &notifier, "post a review"),
                }
                submitting.set(false);
            });
        })
    };

    let detail = match &*movie {
        Loaded::Loading => return html! { <main class="container mt-4"><p>{"Loading..."}</p></main> },
        Loaded::Missing => {
            return html! {
                <main class="container mt-4">
                    <p>{"Movie not found."}</p>
                    <Link<Route> to={Route::MovieList}>{"Back to movies"}</Link<Route>>
                </main>
            }
        }
        Loaded::Found(detail) => detail,
    };

    let return_path = Route::MovieDetail {
        id: props.movie_id.clone(),
    }
    .to_path();

    let review_form = if session.is_logged_in() {
        html! { <ReviewForm on_submit={on_review} busy={*submitting} /> }
    } else {
        html! {
            <p>
                <Link<Route, RedirectQuery> to={Route::Login} query={Some(RedirectQuery { redirect: return_path.clone() })}>
                    {"Log in"}
                </Link<Route, RedirectQuery>>
                {" to write a review."}
            </p>
        }
    };

    html! {
        <main class="container mt-4">
            <div class="row">
                <div class="col-md-4">
                    <img src={detail.movie.img.content.clone()} class="img-fluid rounded" alt={detail.movie.title.clone()} />
                </div>
                <div class="col-md-8">
                    <h2>{&detail.movie.title}</h2>
                    <p class="text-body-secondary">{detail.movie.genres().collect::<Vec<_>>().join(" / ")}</p>
                    <p>{&detail.movie.description}</p>
                    <FavoriteButton movie_id={props.movie_id.clone()} {return_path} />
                    <a class="btn btn-sm btn-link" href={detail.movie.url_film.clone()} target="_blank" rel="noopener">
                        {format!("View on {}", detail.movie.source)}
                    </a>
                </div>
            </div>
            <h4 class="mt-4">{"Reviews"}</h4>
            {review_form}
            <ReviewList reviews={(*reviews).clone()} imported={detail.reviews.clone()} />
        </main>
    }
}
