use std::rc::Rc;

use client_core::{Notice, NoticeLevel};
use strum_macros::AsRefStr;
use uuid::Uuid;
use yew::prelude::*;
use yew_hooks::use_timeout;

const TOAST_TIMEOUT_MILLIS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn alert_class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Info => "alert-info",
            Self::Warning => "alert-warning",
            Self::Error => "alert-danger",
        }
    }
}

impl From<NoticeLevel> for ToastLevel {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Warning => Self::Warning,
            NoticeLevel::Error => Self::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toasts {
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Push { level: ToastLevel, message: String },
    Dismiss(Uuid),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push { level, message } => items.push(Toast {
                id: Uuid::new_v4(),
                level,
                message,
            }),
            ToastAction::Dismiss(id) => items.retain(|toast| toast.id != id),
        }
        Rc::new(Self { items })
    }
}

pub type NotificationContext = UseReducerHandle<Toasts>;

#[derive(Clone, PartialEq)]
pub struct Notifier {
    context: NotificationContext,
}

impl Notifier {
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        self.context.dispatch(ToastAction::Push {
            level,
            message: message.into(),
        });
    }

    pub fn notice(&self, notice: &Notice) {
        self.push(notice.level.into(), notice.message.clone());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    let context =
        use_context::<NotificationContext>().expect("notification context is provided by App");
    Notifier { context }
}

#[derive(PartialEq, Properties)]
struct ToastProps {
    toast: Toast,
    on_dismiss: Callback<Uuid>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        use_timeout(move || on_dismiss.emit(id), TOAST_TIMEOUT_MILLIS);
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", props.toast.level.alert_class(), "alert-dismissible")}
             role="alert"
             data-level={props.toast.level.as_ref().to_owned()}>
            {&props.toast.message}
            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}

#[function_component(NotificationList)]
pub fn notification_list() -> Html {
    let Some(context) = use_context::<NotificationContext>() else {
        return html! {};
    };

    let on_dismiss = {
        let context = context.clone();
        Callback::from(move |id: Uuid| context.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="position-fixed top-0 end-0 p-3" style="z-index: 1080">
            { for context.items.iter().map(|toast| html! {
                <ToastView key={toast.id.to_string()} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let toasts = Rc::new(Toasts::default());
        let toasts = toasts.reduce(ToastAction::Push {
            level: ToastLevel::Warning,
            message: "Please log in first".to_owned(),
        });
        assert_eq!(toasts.items.len(), 1);
        let id = toasts.items[0].id;
        let toasts = toasts.reduce(ToastAction::Dismiss(id));
        assert!(toasts.items.is_empty());
    }

    #[test]
    fn test_notice_level_mapping() {
        assert_eq!(ToastLevel::from(NoticeLevel::Warning), ToastLevel::Warning);
        assert_eq!(ToastLevel::from(NoticeLevel::Error).as_ref(), "error");
    }
}
