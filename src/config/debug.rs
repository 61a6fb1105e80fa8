//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every upstream request and its outcome.
    pub log_requests: bool,

    /// Filter descriptor changes and derived view sizes.
    pub log_filter: bool,

    /// Detail overlay open/close and dropped stale responses.
    pub log_detail: bool,

    /// Debounced search emissions.
    pub log_search: bool,

    /// Activate trace_time macro (slow frame sections)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_requests: true,
    log_detail: true,

    log_filter: false,
    log_search: false,
    log_performance: false,
};
