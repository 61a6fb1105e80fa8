// src/app/state.rs

pub(crate) use crate::app::phases::PhaseView;

/// Waiting for the first market list. Reloads after that stay in `Running`.
#[derive(Default, Clone)]
pub(crate) struct LoadingState;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Loading(LoadingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}
