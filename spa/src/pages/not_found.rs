use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();
    let path = location
        .map(|location| location.path().to_owned())
        .unwrap_or_default();

    html! {
        <main class="container mt-5 text-center">
            <h2>{"404"}</h2>
            <p class="text-body-secondary">{format!("No page matches {path}")}</p>
            <Link<Route> classes={classes!("btn", "btn-outline-primary")} to={Route::MovieList}>
                { "Back to the movie list" }
            </Link<Route>>
        </main>
    }
}
