use std::rc::Rc;

use client_core::{NavigationGuard, SessionFlags};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, auth_api},
    components::composite::navigation_bar::NavigationBar,
    notifications::{NotificationContext, NotificationList, ToastAction, ToastLevel, Toasts},
    progress::{Progress, ProgressBar, ProgressContext},
    router::GuardedSwitch,
    session::{SessionAction, SessionContext, SessionState},
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub guard: Rc<NavigationGuard>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let session = use_reducer(SessionState::hydrate);
    let toasts = use_reducer(Toasts::default);
    let progress = use_reducer(Progress::default);

    {
        let session = session.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            log::info!("App mounted, is_logged={}", session.is_logged_in());
            if let Ok(authorization) = api::authorization(&session) {
                spawn_local(async move {
                    match auth_api::get_user_profile(&authorization).await {
                        Ok(user) => session.dispatch(SessionAction::SetUser(user)),
                        Err(error) if error.is_unauthorized() => {
                            log::warn!("Stored token rejected, login out! error={error}");
                            session.dispatch(SessionAction::Logout);
                            toasts.dispatch(ToastAction::Push {
                                level: ToastLevel::Warning,
                                message: "Your session has expired, please log in again".to_owned(),
                            });
                        }
                        Err(error) => {
                            log::warn!("Fail to refresh user profile, keeping cached one. error={error}");
                        }
                    }
                });
            }
            || ()
        });
    }

    html! {
        <ContextProvider<Rc<NavigationGuard>> context={props.guard.clone()}>
        <ContextProvider<SessionContext> context={session}>
        <ContextProvider<NotificationContext> context={toasts}>
        <ContextProvider<ProgressContext> context={progress}>
            <BrowserRouter>
                <ProgressBar />
                <NavigationBar />
                <GuardedSwitch />
                <NotificationList />
            </BrowserRouter>
        </ContextProvider<ProgressContext>>
        </ContextProvider<NotificationContext>>
        </ContextProvider<SessionContext>>
        </ContextProvider<Rc<NavigationGuard>>>
    }
}
