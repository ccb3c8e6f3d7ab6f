use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub current_page: u32,
    pub has_more: bool,
    pub on_page_change: Callback<u32>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &Props) -> Html {
    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        let page = props.current_page;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if page > 1 {
                on_page_change.emit(page - 1);
            }
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        let page = props.current_page;
        let has_more = props.has_more;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if has_more {
                on_page_change.emit(page + 1);
            }
        })
    };

    html! {
        <nav aria-label="Movies pagination">
            <ul class="pagination justify-content-center">
                <li class={if props.current_page <= 1 { "page-item disabled" } else { "page-item" }}>
                    <a class="page-link" href="#" onclick={on_previous} aria-label="Previous">
                        <span aria-hidden="true">{"«"}</span>
                    </a>
                </li>
                <li class="page-item active">
                    <span class="page-link">{format!("Page {}", props.current_page)}</span>
                </li>
                <li class={if !props.has_more { "page-item disabled" } else { "page-item" }}>
                    <a class="page-link" href="#" onclick={on_next} aria-label="Next">
                        <span aria-hidden="true">{"»"}</span>
                    </a>
                </li>
            </ul>
        </nav>
    }
}
