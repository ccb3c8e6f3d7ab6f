use shared::Sentiment;
use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::atoms::select::Select;

#[derive(Debug, PartialEq, Default, Clone)]
pub struct ReviewFormData {
    pub content: String,
    pub sentiment: Sentiment,
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_submit: Callback<ReviewFormData>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(ReviewForm)]
pub fn review_form(props: &Props) -> Html {
    let state = use_state(ReviewFormData::default);

    let on_content = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let Some(target) = event.target() else {
                return;
            };
            let mut data = (*state).clone();
            data.content = target.unchecked_into::<HtmlTextAreaElement>().value();
            state.set(data);
        })
    };

    let on_sentiment = {
        let state = state.clone();
        Callback::from(move |value: String| match Sentiment::from_str(&value) {
            Ok(sentiment) => {
                let mut data = (*state).clone();
                data.sentiment = sentiment;
                state.set(data);
            }
            Err(error) => log::warn!("Unknown sentiment option, value={value}, error={error}"),
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let data = (*state).clone();
            if !data.content.trim().is_empty() {
                on_submit.emit(data);
                state.set(ReviewFormData::default());
            }
        })
    };

    let options = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
        .iter()
        .map(|sentiment| {
            let value = sentiment.as_ref().to_owned();
            let mut label = value.clone();
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            (value, label)
        })
        .collect::<Vec<_>>();

    html! {
        <form onsubmit={on_submit} class="mb-4">
            <div class="mb-3">
                <label for="review-content" class="form-label">{"Your review"}</label>
                <textarea id="review-content" class="form-control" rows="3"
                    value={state.content.clone()} oninput={on_content} />
            </div>
            <div class="mb-3">
                <label for="review-sentiment" class="form-label">{"Sentiment"}</label>
                <Select id="review-sentiment" name="sentiment" {options}
                    selected={Some(state.sentiment.as_ref().to_owned())}
                    on_change={on_sentiment} />
            </div>
            <input class="btn btn-primary" type="submit" value="Submit review" disabled={props.busy} />
        </form>
    }
}
