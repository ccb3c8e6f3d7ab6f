use client_core::track;
use shared::User;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, auth_api};
use crate::notifications::use_notifier;
use crate::progress::use_progress;
use crate::session::use_session;

#[function_component(AdminUsersPage)]
pub fn admin_users_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let users = use_state(|| None::<Vec<User>>);
    let progress = use_progress();

    {
        let session = session.clone();
        let users = users.clone();
        use_effect_with((), move |_| {
            if let Ok(authorization) = api::authorization(&session) {
                spawn_local(async move {
                    match track(&progress, auth_api::list_users(&authorization)).await {
                        Ok(list) => users.set(Some(list)),
                        Err(error) => {
                            api::report(&error, &session, &notifier, "list users");
                            users.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let Some(list) = &*users else {
        return html! { <main class="container mt-4"><p>{"Loading users..."}</p></main> };
    };

    let rows = list.iter().map(|user| {
        html! {
            <tr key={user.username.clone()}>
                <td>{&user.username}</td>
                <td>{&user.email}</td>
                <td>{if user.is_admin { "admin" } else { "member" }}</td>
            </tr>
        }
    });

    html! {
        <main class="container mt-4">
            <h2 class="mb-4">{format!("Users ({})", list.len())}</h2>
            <table class="table table-striped">
                <thead>
                    <tr><th>{"User name"}</th><th>{"Email"}</th><th>{"Role"}</th></tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        </main>
    }
}
