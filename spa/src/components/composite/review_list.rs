use shared::{MovieReview, Review, Sentiment};
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub reviews: Vec<Review>,
    #[prop_or_default]
    pub imported: Vec<MovieReview>,
    /// When set, reviews get a delete button.
    #[prop_or_default]
    pub on_delete: Option<Callback<Uuid>>,
}

fn sentiment_badge(sentiment: Sentiment) -> Html {
    let class = match sentiment {
        Sentiment::Positive => "badge text-bg-success",
        Sentiment::Neutral => "badge text-bg-secondary",
        Sentiment::Negative => "badge text-bg-danger",
    };
    html! { <span {class}>{sentiment.as_ref()}</span> }
}

#[function_component(ReviewList)]
pub fn review_list(props: &Props) -> Html {
    if props.reviews.is_empty() && props.imported.is_empty() {
        return html! { <p class="text-body-secondary">{"No reviews yet."}</p> };
    }

    let reviews = props.reviews.iter().map(|review| {
        let delete = props.on_delete.as_ref().map(|on_delete| {
            let on_delete = on_delete.clone();
            let review_id = review.review_id;
            html! {
                <button class="btn btn-sm btn-link text-danger"
                    onclick={Callback::from(move |_: MouseEvent| on_delete.emit(review_id))}>
                    {"Delete"}
                </button>
            }
        });
        html! {
            <li class="list-group-item" key={review.review_id.to_string()}>
                <div class="d-flex justify-content-between">
                    <strong>{&review.username}</strong>
                    <small class="text-body-secondary">
                        {review.created_at.format("%Y-%m-%d %H:%M").to_string()}
                    </small>
                </div>
                <p class="mb-1">{&review.content}</p>
                {sentiment_badge(review.sentiment)}
                {delete.unwrap_or_default()}
            </li>
        }
    });

    let imported = props.imported.iter().map(|review| {
        html! {
            <li class="list-group-item" key={review.review_id.clone()}>
                <strong>{&review.uname}</strong>
                <p class="mb-1">{&review.content}</p>
            </li>
        }
    });

    html! {
        <ul class="list-group list-group-flush">
            { for reviews }
            { for imported }
        </ul>
    }
}
