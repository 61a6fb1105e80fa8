mod dashboard;
mod detail;
mod request;

pub use {
    dashboard::{CategorySection, Dashboard, LoadStatus, RemoteSearch},
    detail::{DetailOverlay, DetailStatus},
    request::{RequestSlot, RequestTicket},
};
