use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    #[prop_or_default]
    pub id: String,
    #[prop_or_default]
    pub name: String,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    #[prop_or_default]
    pub selected: Option<String>,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let on_change = {
        let on_change_cb = props.on_change.clone();
        Callback::from(move |event: Event| {
            let Some(target): Option<EventTarget> = event.target() else {
                return;
            };
            on_change_cb.emit(target.unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let options_html = props.options.iter().map(|(value, label)| {
        let is_selected = props.selected.as_deref() == Some(value.as_str());
        html! {
            <option value={value.clone()} selected={is_selected}>
                {label}
            </option>
        }
    });

    html! {
        <select
            id={props.id.clone()}
            name={props.name.clone()}
            class="form-select"
            onchange={on_change}>
            { for options_html }
        </select>
    }
}
