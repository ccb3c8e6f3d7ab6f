use client_core::track;
use shared::{MovieAnalytics, ReviewAnalytics, UserAnalytics};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, analytics_api, ApiError};
use crate::notifications::use_notifier;
use crate::progress::use_progress;
use crate::session::use_session;

#[derive(Clone, PartialEq, Default, Debug)]
pub struct Dashboard {
    pub reviews: Option<ReviewAnalytics>,
    pub movies: Option<MovieAnalytics>,
    pub users: Option<UserAnalytics>,
}

fn percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_owned();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

fn series_table<'a>(labels: &'a [String], counts: &'a [u64], label: &str) -> Html {
    let rows = labels.iter().zip(counts).map(|(label, count)| {
        html! { <tr><td>{label.clone()}</td><td>{count.to_string()}</td></tr> }
    });
    html! {
        <table class="table table-sm">
            <thead><tr><th>{label.to_owned()}</th><th>{"Count"}</th></tr></thead>
            <tbody>{ for rows }</tbody>
        </table>
    }
}

fn review_section(analytics: &ReviewAnalytics) -> Html {
    let sentiment = &analytics.sentiment_distribution;
    let total = sentiment.total();
    let keywords = analytics.keywords.iter().take(20).map(|keyword| {
        html! { <span class="badge text-bg-light me-1">{format!("{} ({:.1})", keyword.word, keyword.weight)}</span> }
    });
    html! {
        <section class="mb-5">
            <h4>{"Reviews"}</h4>
            <ul class="list-inline">
                <li class="list-inline-item">{format!("Positive {}", percent(sentiment.positive, total))}</li>
                <li class="list-inline-item">{format!("Neutral {}", percent(sentiment.neutral, total))}</li>
                <li class="list-inline-item">{format!("Negative {}", percent(sentiment.negative, total))}</li>
            </ul>
            <p>{ for keywords }</p>
            {series_table(&analytics.review_trend.dates, &analytics.review_trend.counts, "Day")}
        </section>
    }
}

fn movie_section(analytics: &MovieAnalytics) -> Html {
    let ratings = analytics
        .rating_distribution
        .ratings
        .iter()
        .map(|rating| format!("{rating} ★"))
        .collect::<Vec<_>>();
    html! {
        <section class="mb-5">
            <h4>{"Movies"}</h4>
            <div class="row">
                <div class="col-md-4">{series_table(&ratings, &analytics.rating_distribution.counts, "Rating")}</div>
                <div class="col-md-4">{series_table(&analytics.genre_distribution.genres, &analytics.genre_distribution.counts, "Genre")}</div>
                <div class="col-md-4">{series_table(&analytics.release_trend.months, &analytics.release_trend.counts, "Month")}</div>
            </div>
        </section>
    }
}

fn user_section(analytics: &UserAnalytics) -> Html {
    let behaviors = &analytics.user_behaviors;
    html! {
        <section class="mb-5">
            <h4>{"Users"}</h4>
            <p>{format!(
                "{} users, {} reviews, {} users with favorites",
                behaviors.total_users, behaviors.reviews, behaviors.favorites
            )}</p>
            <div class="row">
                <div class="col-md-6">{series_table(&analytics.activity_data.dates, &analytics.activity_data.counts, "Active day")}</div>
                <div class="col-md-6">{series_table(&analytics.registration_trend.months, &analytics.registration_trend.counts, "Registration month")}</div>
            </div>
        </section>
    }
}

/// Keeps the value, or remembers the first failure so only one toast shows.
fn keep<T>(result: Result<T, ApiError>, first_error: &mut Option<ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            first_error.get_or_insert(error);
            None
        }
    }
}

#[function_component(AnalysisPage)]
pub fn analysis_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let dashboard = use_state(Dashboard::default);
    let progress = use_progress();

    {
        let session = session.clone();
        let dashboard = dashboard.clone();
        use_effect_with((), move |_| {
            if let Ok(authorization) = api::authorization(&session) {
                spawn_local(async move {
                    let (reviews, movies, users) = track(&progress, async {
                        (
                            analytics_api::reviews(&authorization).await,
                            analytics_api::movies(&authorization).await,
                            analytics_api::users(&authorization).await,
                        )
                    })
                    .await;
                    let mut first_error: Option<ApiError> = None;
                    let next = Dashboard {
                        reviews: keep(reviews, &mut first_error),
                        movies: keep(movies, &mut first_error),
                        users: keep(users, &mut first_error),
                    };
                    if let Some(error) = first_error {
                        api::report(&error, &session, &notifier, "load analytics");
                    }
                    dashboard.set(next);
                });
            }
            || ()
        });
    }

    html! {
        <main class="container mt-4">
            <h2 class="mb-4">{"Analytics"}</h2>
            if let Some(reviews) = &dashboard.reviews { {review_section(reviews)} }
            if let Some(movies) = &dashboard.movies { {movie_section(movies)} }
            if let Some(users) = &dashboard.users { {user_section(users)} }
        </main>
    }
}
