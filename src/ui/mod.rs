mod asset_card;
mod dashboard_view;
mod detail_window;
mod panels;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use asset_card::card_grid;
pub(crate) use panels::NavigationTarget;
pub(crate) use screens::render_loading;
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
