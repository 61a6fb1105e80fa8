use {
    eframe::{
        Frame,
        egui::{Context, Key, Visuals},
    },
    poll_promise::Promise,
    std::{mem, sync::Arc},
    web_time::Instant,
};

use crate::{
    Cli,
    app::{AppState, LoadingState, PhaseView, RunningState},
    config::{CategoryTable, DF},
    data::{CategoryClassifier, CoinGeckoProvider, MarketDataService, NetworkError, TaskRunner},
    domain::{Asset, AssetDetail},
    models::{Dashboard, DetailOverlay, RequestTicket},
    ui::{NavigationTarget, UI_CONFIG, render_loading},
};

type ListResponse = (RequestTicket, Result<Vec<Asset>, NetworkError>);
type DetailResponse = (RequestTicket, Result<AssetDetail, NetworkError>);

pub struct App {
    pub(crate) dashboard: Dashboard,
    pub(crate) detail: DetailOverlay,
    pub(crate) categories: CategoryTable,
    pub(crate) scroll_target: Option<NavigationTarget>,
    service: MarketDataService,
    tasks: TaskRunner,
    list_tasks: Vec<Promise<ListResponse>>,
    detail_tasks: Vec<Promise<DetailResponse>>,
    search_tasks: Vec<Promise<ListResponse>>,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let categories = Self::load_categories(&args)?;
        let classifier = CategoryClassifier::from_table(&categories);
        let provider = CoinGeckoProvider::new(&args.api_base_url)?;
        log::info!(
            "Using {} with {} categorized assets",
            args.api_base_url,
            classifier.len()
        );

        let mut app = Self {
            dashboard: Dashboard::new(args.search_debounce()),
            detail: DetailOverlay::default(),
            categories,
            scroll_target: None,
            service: MarketDataService::new(Arc::new(provider), Arc::new(classifier)),
            tasks: TaskRunner::new()?,
            list_tasks: Vec::new(),
            detail_tasks: Vec::new(),
            search_tasks: Vec::new(),
            state: AppState::default(),
        };
        app.reload_market_list(&cc.egui_ctx);
        Ok(app)
    }

    fn load_categories(args: &Cli) -> anyhow::Result<CategoryTable> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &args.categories {
            return CategoryTable::from_path(path);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = args;
        CategoryTable::bundled()
    }

    // --- Requests ---

    /// (Re)fetches the market list. Any in-flight list response becomes stale.
    pub(crate) fn reload_market_list(&mut self, ctx: &Context) {
        let ticket = self.dashboard.begin_list_fetch();
        let service = self.service.clone();
        let task = self.tasks.spawn(ctx, async move {
            (ticket, service.fetch_market_list().await)
        });
        self.list_tasks.push(task);
    }

    /// Card click: opens (and fetches) or hides the detail overlay for `asset`.
    pub(crate) fn toggle_detail(&mut self, ctx: &Context, asset: &Asset) {
        let Some(ticket) = self.detail.toggle(asset) else {
            return;
        };
        let service = self.service.clone();
        let id = asset.id.clone();
        let task = self.tasks.spawn(ctx, async move {
            (ticket, service.fetch_asset_detail(&id).await)
        });
        self.detail_tasks.push(task);
    }

    pub(crate) fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Looks the applied search up upstream, beyond the loaded top-N list.
    pub(crate) fn search_upstream(&mut self, ctx: &Context) {
        let Some((ticket, query)) = self.dashboard.begin_remote_search() else {
            return;
        };
        let service = self.service.clone();
        let task = self.tasks.spawn(ctx, async move {
            (ticket, service.search_assets(&query).await)
        });
        self.search_tasks.push(task);
    }

    /// Hands finished responses to the view-models. Stale ones are dropped there.
    fn poll_tasks(&mut self) {
        for (ticket, result) in drain_ready(&mut self.list_tasks) {
            if self.dashboard.finish_list_fetch(ticket, result) && DF.log_requests {
                log::info!("Market list applied: {} assets", self.dashboard.assets().len());
            }
        }
        for (ticket, result) in drain_ready(&mut self.detail_tasks) {
            self.detail.resolve(ticket, result);
        }
        for (ticket, result) in drain_ready(&mut self.search_tasks) {
            self.dashboard.finish_remote_search(ticket, result);
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            if self.detail.is_open() {
                self.close_detail();
            } else if !self.dashboard.search_input().is_empty() {
                self.dashboard.clear_search();
            }
        }
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(Key::F5)) && !self.dashboard.is_loading() {
            self.reload_market_list(ctx);
        }
    }

    // --- Phases ---

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, state: &mut LoadingState) -> AppState {
        self.poll_tasks();
        if !self.dashboard.is_loading() {
            return AppState::Running(RunningState);
        }
        render_loading(ctx);
        AppState::Loading(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.poll_tasks();

        let now = Instant::now();
        self.dashboard.tick(now);
        if let Some(wait) = self.dashboard.search_due_in(now) {
            ctx.request_repaint_after(wait);
        }

        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_footer(ctx);
        self.render_central_panel(ctx);
        self.render_detail_window(ctx);
    }
}

/// Takes the results of finished promises, keeping the pending ones.
fn drain_ready<T: Send + 'static>(tasks: &mut Vec<Promise<T>>) -> Vec<T> {
    let mut ready = Vec::new();
    let mut pending = Vec::with_capacity(tasks.len());
    for task in tasks.drain(..) {
        match task.try_take() {
            Ok(value) => ready.push(value),
            Err(task) => pending.push(task),
        }
    }
    *tasks = pending;
    ready
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
