use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_session();
    let username = session
        .user()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    html! {
        <main class="container mt-4">
            <h2>{"Administration"}</h2>
            <p class="text-body-secondary">{format!("Signed in as {username}")}</p>
            <div class="list-group">
                <Link<Route> classes={classes!("list-group-item", "list-group-item-action")} to={Route::AdminUsers}>
                    {"Registered users"}
                </Link<Route>>
                <Link<Route> classes={classes!("list-group-item", "list-group-item-action")} to={Route::Analysis}>
                    {"Analytics dashboards"}
                </Link<Route>>
            </div>
        </main>
    }
}
