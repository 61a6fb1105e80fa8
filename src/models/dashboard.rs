use {
    crate::{
        analysis::{apply, matches_search},
        config::{CATEGORY_SECTION_SIZE, DF},
        data::NetworkError,
        domain::{Asset, CategoryFilter, CategoryInfo, FilterDescriptor, SortKey},
        models::{RequestSlot, RequestTicket},
        utils::Debouncer,
    },
    itertools::Itertools,
    std::time::Duration,
    web_time::Instant,
};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(NetworkError),
}

/// State of the upstream (`/search`) lookup for the current debounced query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteSearch {
    #[default]
    Idle,
    Searching {
        query: String,
    },
    Done {
        query: String,
        assets: Vec<Asset>,
    },
    Failed {
        query: String,
        error: NetworkError,
    },
}

/// One landing-page section: a category and its first few assets in list order.
#[derive(Debug)]
pub struct CategorySection<'a> {
    pub info: &'a CategoryInfo,
    pub assets: Vec<&'a Asset>,
}

/// Everything the dashboard screen shows, minus the detail overlay.
///
/// The asset list is replaced wholesale by `finish_list_fetch` and never
/// mutated otherwise; every visible list is derived from it on demand.
#[derive(Debug)]
pub struct Dashboard {
    assets: Vec<Asset>,
    status: LoadStatus,
    filter: FilterDescriptor,
    search_input: String,
    debouncer: Debouncer<String>,
    list_slot: RequestSlot,
    remote_slot: RequestSlot,
    remote: RemoteSearch,
}

impl Dashboard {
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            assets: Vec::new(),
            status: LoadStatus::Loading,
            filter: FilterDescriptor::default(),
            search_input: String::new(),
            debouncer: Debouncer::new(search_debounce),
            list_slot: RequestSlot::default(),
            remote_slot: RequestSlot::default(),
            remote: RemoteSearch::Idle,
        }
    }

    // --- Asset list ---

    /// Marks the list as loading. Only the returned ticket's result will be applied.
    pub fn begin_list_fetch(&mut self) -> RequestTicket {
        self.status = LoadStatus::Loading;
        self.list_slot.issue()
    }

    /// A failure leaves an empty list behind so no stale cards are shown under the banner.
    pub fn finish_list_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Asset>, NetworkError>,
    ) -> bool {
        if !self.list_slot.accept(ticket) {
            log::warn!("Dropping stale market list response");
            return false;
        }
        match result {
            Ok(assets) => {
                self.assets = assets;
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                self.assets.clear();
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn list_error(&self) -> Option<&NetworkError> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    // --- Search ---

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Records a keystroke. The filter only sees it once typing pauses (see `tick`).
    pub fn set_search_input(&mut self, input: impl Into<String>, now: Instant) {
        self.search_input = input.into();
        self.debouncer.submit(self.search_input.clone(), now);
    }

    /// Empties the search box and the applied search at once, skipping the debounce.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.debouncer.cancel();
        self.filter.search.clear();
        self.reset_remote_search();
    }

    /// Applies a due debounced search. Returns true when the filter changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(search) = self.debouncer.poll(now) else {
            return false;
        };
        if search == self.filter.search {
            return false;
        }
        if DF.log_search {
            log::info!("Search applied: '{}'", search);
        }
        self.filter.search = search;
        self.reset_remote_search();
        true
    }

    /// Time until the pending search becomes due, for scheduling a repaint.
    pub fn search_due_in(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    pub fn showing_search_results(&self) -> bool {
        !self.filter.search.is_empty()
    }

    /// Every loaded asset matching the applied search, in list order.
    pub fn search_results(&self) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|asset| matches_search(asset, &self.filter.search))
            .collect()
    }

    // --- Filter bar ---

    pub fn filter(&self) -> &FilterDescriptor {
        &self.filter
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.filter.sort_by = key;
        self.log_filter();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.filter.sort_direction = self.filter.sort_direction.flipped();
        self.log_filter();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.log_filter();
    }

    fn log_filter(&self) {
        if DF.log_filter {
            log::info!(
                "Filter: sort {} {} | category {} | search '{}'",
                self.filter.sort_by,
                self.filter.sort_direction.as_ref(),
                self.filter.category,
                self.filter.search
            );
        }
    }

    /// The "All" grid: search, category filter and sort applied to the list.
    pub fn visible_assets(&self) -> Vec<&Asset> {
        crate::trace_time!("visible_assets", 2_000, { apply(&self.assets, &self.filter) })
    }

    /// Landing sections in `infos` order, each capped at `CATEGORY_SECTION_SIZE`.
    /// Categories without assets are left out.
    pub fn category_sections<'a>(&'a self, infos: &'a [CategoryInfo]) -> Vec<CategorySection<'a>> {
        let mut by_category = self.assets.iter().into_group_map_by(|asset| asset.category);
        infos
            .iter()
            .filter_map(|info| {
                let mut assets = by_category.remove(&info.id)?;
                assets.truncate(CATEGORY_SECTION_SIZE);
                Some(CategorySection { info, assets })
            })
            .collect()
    }

    // --- Upstream search ---

    pub fn remote_search(&self) -> &RemoteSearch {
        &self.remote
    }

    /// Starts an upstream lookup for the applied search. None when there is nothing to search.
    pub fn begin_remote_search(&mut self) -> Option<(RequestTicket, String)> {
        let query = self.filter.search.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();
        self.remote = RemoteSearch::Searching {
            query: query.clone(),
        };
        Some((self.remote_slot.issue(), query))
    }

    pub fn finish_remote_search(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Asset>, NetworkError>,
    ) -> bool {
        let query = match &self.remote {
            RemoteSearch::Searching { query } => query.clone(),
            _ => return false,
        };
        if !self.remote_slot.accept(ticket) {
            return false;
        }
        self.remote = match result {
            Ok(assets) => RemoteSearch::Done { query, assets },
            Err(error) => RemoteSearch::Failed { query, error },
        };
        true
    }

    fn reset_remote_search(&mut self) {
        self.remote = RemoteSearch::Idle;
        self.remote_slot.invalidate();
    }
}
