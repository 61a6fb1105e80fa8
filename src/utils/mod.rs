mod debounce;
mod format;
mod perf;
mod time_utils;

pub use debounce::Debouncer;
pub use format::{
    format_market_cap, format_percentage, format_price, format_supply, strip_html,
    truncate_description,
};
pub use time_utils::{TimeUtils, format_date};
