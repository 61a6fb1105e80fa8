use std::time::Duration;

/// Quiescence window between the last keystroke and the search being applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const SEARCH_DEBOUNCE_MIN_MS: u64 = 50;
pub const SEARCH_DEBOUNCE_MAX_MS: u64 = 1000;

/// Cards shown per category section on the landing view.
pub const CATEGORY_SECTION_SIZE: usize = 4;

pub mod card {
    pub const WIDTH: f32 = 260.0;
    pub const SPARKLINE_HEIGHT: f32 = 60.0;
    pub const ICON_SIZE: f32 = 32.0;
}

pub mod detail {
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const ICON_SIZE: f32 = 60.0;
    pub const MAX_BODY_HEIGHT: f32 = 560.0;
}
