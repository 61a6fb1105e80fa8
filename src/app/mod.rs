mod phases;
mod root;
mod state;

pub(crate) use state::{AppState, LoadingState, PhaseView, RunningState};

pub use root::App;
