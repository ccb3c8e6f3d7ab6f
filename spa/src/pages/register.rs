use shared::SignUpRequest;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth_api;
use crate::components::atoms::input_text::{InputText, InputType};
use crate::notifications::use_notifier;
use crate::router::{RedirectQuery, Route};

#[derive(Debug, Clone, PartialEq, Default)]
struct RegisterFormData {
    username: String,
    email: String,
    password: String,
    password_confirmation: String,
}

impl RegisterFormData {
    fn validate(&self) -> Result<SignUpRequest, &'static str> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err("User name and email are required");
        }
        if self.password.len() < 6 {
            return Err("Password must have at least 6 characters");
        }
        if self.password != self.password_confirmation {
            return Err("Passwords do not match");
        }
        Ok(SignUpRequest {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

#[function_component(Register)]
pub fn register() -> Html {
    let state = use_state(RegisterFormData::default);
    let notifier = use_notifier();
    let navigator = use_navigator();
    let location = use_location();
    let busy = use_state(|| false);

    let redirect = location
        .as_ref()
        .and_then(|location| client_core::NavigationGuard::redirect_from_query(location.query_str()));

    let field = |update: fn(&mut RegisterFormData, String)| {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut data = (*state).clone();
            update(&mut data, value);
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match state.validate() {
                Ok(request) => request,
                Err(message) => {
                    notifier.error(message);
                    return;
                }
            };
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match auth_api::register(&request).await {
                    Ok(user) => {
                        notifier.success(format!("Account {} created, please log in", user.username));
                        if let Some(navigator) = &navigator {
                            let result = match redirect {
                                Some(redirect) => navigator
                                    .push_with_query(&Route::Login, &RedirectQuery { redirect }),
                                None => {
                                    navigator.push(&Route::Login);
                                    Ok(())
                                }
                            };
                            if let Err(error) = result {
                                log::error!("Fail to open login page, error={error:?}");
                            }
                        }
                    }
                    Err(error) => {
                        log::warn!("Register failed, error: {error}");
                        notifier.error("Registration failed, the user name may already be taken");
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <main class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-4">
                    <h2 class="text-center mb-4">{ "Register" }</h2>
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label for="username" class="form-label">{ "User name" }</label>
                            <InputText id="username" name="username" class={"form-control"}
                                on_change={field(|data, value| data.username = value)} />
                        </div>
                        <div class="mb-3">
                            <label for="email" class="form-label">{ "Email" }</label>
                            <InputText id="email" name="email" class={"form-control"}
                                input_type={InputType::Email}
                                on_change={field(|data, value| data.email = value)} />
                        </div>
                        <div class="mb-3">
                            <label for="password" class="form-label">{ "Password" }</label>
                            <InputText id="password" name="password" class={"form-control"}
                                input_type={InputType::Password}
                                on_change={field(|data, value| data.password = value)} />
                        </div>
                        <div class="mb-3">
                            <label for="password-confirmation" class="form-label">{ "Confirm password" }</label>
                            <InputText id="password-confirmation" name="password_confirmation" class={"form-control"}
                                input_type={InputType::Password}
                                on_change={field(|data, value| data.password_confirmation = value)} />
                        </div>
                        <div class="d-grid">
                            <input class="btn btn-primary" type="submit" value="Register" disabled={*busy} />
                        </div>
                    </form>
                </div>
            </div>
        </main>
    }
}
