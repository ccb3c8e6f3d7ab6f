use client_core::track;
use shared::Review;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, reviews_api};
use crate::components::composite::review_list::ReviewList;
use crate::notifications::use_notifier;
use crate::progress::use_progress;
use crate::session::use_session;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let reviews = use_state(Vec::<Review>::new);
    let progress = use_progress();

    {
        let session = session.clone();
        let reviews = reviews.clone();
        let notifier = notifier.clone();
        use_effect_with((), move |_| {
            if let Ok(authorization) = api::authorization(&session) {
                spawn_local(async move {
                    match track(&progress, reviews_api::list_mine(&authorization)).await {
                        Ok(list) => reviews.set(list),
                        Err(error) => api::report(&error, &session, &notifier, "load your reviews"),
                    }
                });
            }
            || ()
        });
    }

    let on_delete = {
        let session = session.clone();
        let reviews = reviews.clone();
        Callback::from(move |review_id: Uuid| {
            let Ok(authorization) = api::authorization(&session) else {
                return;
            };
            let session = session.clone();
            let reviews = reviews.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                match reviews_api::delete(&authorization, &review_id).await {
                    Ok(()) => {
                        let list = reviews
                            .iter()
                            .filter(|review| review.review_id != review_id)
                            .cloned()
                            .collect();
                        reviews.set(list);
                        notifier.success("Review deleted");
                    }
                    Err(error) => api::report(&error, &session, &notifier, "delete the review"),
                }
            });
        })
    };

    let Some(user) = session.user() else {
        return html! {
            <main class="container mt-4"><p>{"Profile not loaded yet."}</p></main>
        };
    };

    html! {
        <main class="container mt-4">
            <h2>{&user.username}</h2>
            <dl class="row">
                <dt class="col-sm-3">{"Email"}</dt>
                <dd class="col-sm-9">{&user.email}</dd>
                <dt class="col-sm-3">{"Role"}</dt>
                <dd class="col-sm-9">{if user.is_admin { "Administrator" } else { "Member" }}</dd>
                <dt class="col-sm-3">{"Favorites"}</dt>
                <dd class="col-sm-9">{session.favorites().len().to_string()}</dd>
                if let Some(created_at) = user.created_at {
                    <dt class="col-sm-3">{"Member since"}</dt>
                    <dd class="col-sm-9">{created_at.format("%Y-%m-%d").to_string()}</dd>
                }
            </dl>
            <h4>{"My reviews"}</h4>
            <ReviewList reviews={(*reviews).clone()} on_delete={Some(on_delete)} />
        </main>
    }
}
