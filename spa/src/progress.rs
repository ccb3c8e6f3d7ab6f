use std::rc::Rc;

use client_core::ProgressIndicator;
use yew::prelude::*;

/// Number of navigations currently being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pending: u32,
}

impl Progress {
    pub fn is_active(&self) -> bool {
        self.pending > 0
    }
}

pub enum ProgressAction {
    Start,
    Done,
}

impl Reducible for Progress {
    type Action = ProgressAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let pending = match action {
            ProgressAction::Start => self.pending + 1,
            ProgressAction::Done => self.pending.saturating_sub(1),
        };
        Rc::new(Self { pending })
    }
}

pub type ProgressContext = UseReducerHandle<Progress>;

/// [`ProgressIndicator`] backed by the progress context; a no-op when no
/// context is mounted.
#[derive(Clone, PartialEq)]
pub struct ProgressHandle(Option<ProgressContext>);

impl ProgressIndicator for ProgressHandle {
    fn start(&self) {
        if let Some(context) = &self.0 {
            context.dispatch(ProgressAction::Start);
        }
    }

    fn done(&self) {
        if let Some(context) = &self.0 {
            context.dispatch(ProgressAction::Done);
        }
    }
}

#[hook]
pub fn use_progress() -> ProgressHandle {
    ProgressHandle(use_context::<ProgressContext>())
}

/// Visible while a page load wrapped in [`client_core::track`] is in flight.
#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let active = use_context::<ProgressContext>().is_some_and(|progress| progress.is_active());
    if !active {
        return html! {};
    }
    html! {
        <div class="progress position-fixed top-0 start-0 w-100 rounded-0" style="height: 3px; z-index: 1090">
            <div class="progress-bar progress-bar-striped progress-bar-animated w-100" role="progressbar"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_never_underflows() {
        let progress = Rc::new(Progress::default());
        let progress = progress.reduce(ProgressAction::Start);
        assert!(progress.is_active());
        let progress = progress.reduce(ProgressAction::Done);
        let progress = progress.reduce(ProgressAction::Done);
        assert!(!progress.is_active());
    }
}
