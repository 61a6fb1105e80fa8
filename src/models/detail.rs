use crate::{
    config::DF,
    data::NetworkError,
    domain::{Asset, AssetDetail},
    models::{RequestSlot, RequestTicket},
};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading,
    Loaded(Box<AssetDetail>),
    /// Scoped to the overlay; the dashboard underneath is unaffected.
    Failed(NetworkError),
}

#[derive(Debug, Clone)]
struct OpenDetail {
    asset: Asset,
    status: DetailStatus,
}

/// The asset detail window. At most one asset is shown; only the response to
/// the latest `open` is ever applied.
#[derive(Debug, Default)]
pub struct DetailOverlay {
    slot: RequestSlot,
    open: Option<OpenDetail>,
}

impl DetailOverlay {
    /// Shows the overlay immediately in `Loading`. The caller fetches the
    /// detail and hands it back with the returned ticket.
    pub fn open(&mut self, asset: &Asset) -> RequestTicket {
        #[cfg(debug_assertions)]
        if DF.log_detail {
            log::info!("Detail overlay opened for {}", asset.id);
        }
        self.open = Some(OpenDetail {
            asset: asset.clone(),
            status: DetailStatus::Loading,
        });
        self.slot.issue()
    }

    /// Card click: hides a loaded overlay of the same asset, otherwise (re)opens.
    /// Returns a ticket when a new fetch is needed.
    pub fn toggle(&mut self, asset: &Asset) -> Option<RequestTicket> {
        match &self.open {
            Some(open) if open.asset.id == asset.id => match open.status {
                DetailStatus::Loaded(_) => {
                    self.close();
                    None
                }
                DetailStatus::Loading => None,
                DetailStatus::Failed(_) => Some(self.open(asset)),
            },
            _ => Some(self.open(asset)),
        }
    }

    /// Applies a fetch result if `ticket` is still the latest and the overlay is open.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<AssetDetail, NetworkError>,
    ) -> bool {
        let Some(open) = self.open.as_mut() else {
            #[cfg(debug_assertions)]
            if DF.log_detail {
                log::info!("Dropping detail response: overlay closed");
            }
            return false;
        };
        if !self.slot.accept(ticket) {
            #[cfg(debug_assertions)]
            if DF.log_detail {
                log::info!("Dropping stale detail response (showing {})", open.asset.id);
            }
            return false;
        }
        open.status = match result {
            Ok(detail) => DetailStatus::Loaded(Box::new(detail)),
            Err(err) => DetailStatus::Failed(err),
        };
        true
    }

    /// Discards the shown detail and makes in-flight responses stale.
    pub fn close(&mut self) {
        self.open = None;
        self.slot.invalidate();
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn asset(&self) -> Option<&Asset> {
        self.open.as_ref().map(|open| &open.asset)
    }

    pub fn status(&self) -> Option<&DetailStatus> {
        self.open.as_ref().map(|open| &open.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn asset(id: &str) -> Asset {
        Asset {
            id: id.to_string(),
            symbol: id[..3].to_string(),
            name: id.to_string(),
            image: String::new(),
            current_price: 1.0,
            market_cap: 1.0,
            market_cap_rank: None,
            price_change_percentage_24h: 0.0,
            price_change_percentage_7d: None,
            sparkline_7d: None,
            category: Category::Other,
        }
    }

    fn detail(id: &str) -> AssetDetail {
        AssetDetail {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id[..3].to_string(),
            image: String::new(),
            description_html: String::new(),
            homepage: None,
            blockchain_sites: Vec::new(),
            current_price: 1.0,
            market_cap: 1.0,
            price_change_percentage_24h: 0.0,
            total_volume: 0.0,
            circulating_supply: 0.0,
            max_supply: None,
            ath: 0.0,
            ath_date: None,
        }
    }

    fn loaded_id(overlay: &DetailOverlay) -> Option<String> {
        match overlay.status() {
            Some(DetailStatus::Loaded(d)) => Some(d.id.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_open_shows_loading_then_detail() {
        let mut overlay = DetailOverlay::default();
        let ticket = overlay.open(&asset("bitcoin"));
        assert_eq!(overlay.status(), Some(&DetailStatus::Loading));

        assert!(overlay.resolve(ticket, Ok(detail("bitcoin"))));
        assert_eq!(loaded_id(&overlay).as_deref(), Some("bitcoin"));
    }

    #[test]
    fn test_late_result_after_close_is_ignored() {
        let mut overlay = DetailOverlay::default();
        let ticket = overlay.open(&asset("bitcoin"));
        overlay.close();

        assert!(!overlay.resolve(ticket, Ok(detail("bitcoin"))));
        assert!(!overlay.is_open());
        assert_eq!(overlay.status(), None);
    }

    #[test]
    fn test_latest_open_wins() {
        let mut overlay = DetailOverlay::default();
        let first = overlay.open(&asset("bitcoin"));
        let second = overlay.open(&asset("ethereum"));

        // Second response arrives first, then the stale first one.
        assert!(overlay.resolve(second, Ok(detail("ethereum"))));
        assert!(!overlay.resolve(first, Ok(detail("bitcoin"))));
        assert_eq!(loaded_id(&overlay).as_deref(), Some("ethereum"));
        assert_eq!(overlay.asset().map(|a| a.id.as_str()), Some("ethereum"));
    }

    #[test]
    fn test_failure_is_scoped_to_overlay() {
        let mut overlay = DetailOverlay::default();
        let ticket = overlay.open(&asset("bitcoin"));
        let err = NetworkError::Status {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert!(overlay.resolve(ticket, Err(err.clone())));
        assert_eq!(overlay.status(), Some(&DetailStatus::Failed(err)));
    }

    #[test]
    fn test_toggle_closes_loaded_and_retries_failed() {
        let mut overlay = DetailOverlay::default();
        let btc = asset("bitcoin");

        let ticket = overlay.toggle(&btc).unwrap();
        assert_eq!(overlay.toggle(&btc), None, "no second fetch while loading");
        overlay.resolve(ticket, Ok(detail("bitcoin")));
        assert_eq!(overlay.toggle(&btc), None);
        assert!(!overlay.is_open());

        let ticket = overlay.toggle(&btc).unwrap();
        overlay.resolve(ticket, Err(NetworkError::Transport("offline".to_string())));
        let retry = overlay.toggle(&btc);
        assert!(retry.is_some());
        assert_eq!(overlay.status(), Some(&DetailStatus::Loading));

        let other = overlay.toggle(&asset("ethereum"));
        assert!(other.is_some());
        assert!(!overlay.resolve(retry.unwrap(), Ok(detail("bitcoin"))));
    }
}
