use {
    crate::{
        app::App,
        config::CategoryTable,
        data::NetworkError,
        domain::{Asset, CategoryFilter, SortDirection, SortKey},
        models::{Dashboard, RemoteSearch},
        ui::{NavigationTarget, UI_CONFIG, UI_TEXT, UiStyleExt, card_grid},
    },
    eframe::egui::{
        Align, CentralPanel, ComboBox, Context, RichText, ScrollArea, Spinner, Ui,
    },
    strum::IntoEnumIterator,
};

/// What a frame of the central panel asks the app to do afterwards.
#[derive(Default)]
struct PanelActions {
    reload: bool,
    search_upstream: bool,
    open: Option<Asset>,
}

impl PanelActions {
    fn open(&mut self, clicked: Option<Asset>) {
        if clicked.is_some() {
            self.open = clicked;
        }
    }
}

impl App {
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let mut actions = PanelActions::default();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| {
                        if self.dashboard.showing_search_results() {
                            render_search_view(ui, &self.dashboard, &mut actions);
                        } else {
                            render_landing_view(
                                ui,
                                &mut self.dashboard,
                                &self.categories,
                                &mut self.scroll_target,
                                &mut actions,
                            );
                        }
                    });
            });

        if actions.reload {
            self.reload_market_list(ctx);
        }
        if actions.search_upstream {
            self.search_upstream(ctx);
        }
        if let Some(asset) = actions.open {
            self.toggle_detail(ctx, &asset);
        }
    }
}

// --- Landing ---

fn render_landing_view(
    ui: &mut Ui,
    dashboard: &mut Dashboard,
    categories: &CategoryTable,
    scroll_target: &mut Option<NavigationTarget>,
    actions: &mut PanelActions,
) {
    render_hero(ui);

    section_heading(
        ui,
        &UI_TEXT.categories_heading,
        &UI_TEXT.categories_subtitle,
        NavigationTarget::Categories,
        scroll_target,
    );
    if list_placeholder(ui, dashboard, actions) {
        for section in dashboard.category_sections(&categories.categories) {
            ui.add_space(16.0);
            ui.label(
                RichText::new(&section.info.name)
                    .size(18.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label_subdued(&section.info.description);
            ui.horizontal_wrapped(|ui| {
                ui.label_subdued(&UI_TEXT.label_examples);
                for example in &section.info.examples {
                    ui.label(
                        RichText::new(example)
                            .small()
                            .background_color(UI_CONFIG.colors.card_footer),
                    );
                }
            });
            ui.add_space(8.0);
            actions.open(card_grid(ui, section.info.id.as_ref(), &section.assets));
        }
    }

    ui.add_space(32.0);
    section_heading(
        ui,
        &UI_TEXT.all_heading,
        &UI_TEXT.all_subtitle,
        NavigationTarget::AllAssets,
        scroll_target,
    );
    if list_placeholder(ui, dashboard, actions) {
        render_filter_bar(ui, dashboard, categories);
        ui.add_space(12.0);
        let visible = dashboard.visible_assets();
        if visible.is_empty() {
            ui.label_subdued(&UI_TEXT.no_matches);
        } else {
            actions.open(card_grid(ui, "all_assets", &visible));
        }
    }
}

fn render_hero(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(
            RichText::new(&UI_TEXT.hero_title)
                .size(30.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label(RichText::new(&UI_TEXT.hero_subtitle).color(UI_CONFIG.colors.subdued));
    });
    ui.add_space(12.0);
    ui.columns(UI_TEXT.hero_points.len(), |columns| {
        for (column, (title, text)) in columns.iter_mut().zip(UI_TEXT.hero_points) {
            column.vertical_centered(|ui| {
                ui.label_subheader(*title);
                ui.label_subdued(*text);
            });
        }
    });
    ui.add_space(24.0);
}

/// Heading of a landing section; scrolls into view when the top navigation asked for it.
fn section_heading(
    ui: &mut Ui,
    title: &str,
    subtitle: &str,
    target: NavigationTarget,
    scroll_target: &mut Option<NavigationTarget>,
) {
    let response = ui.label(
        RichText::new(title)
            .size(24.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    if *scroll_target == Some(target) {
        response.scroll_to_me(Some(Align::TOP));
        *scroll_target = None;
    }
    ui.label_subdued(subtitle);
    ui.add_space(8.0);
}

/// Spinner while loading, error banner on failure. True when the list is ready to render.
fn list_placeholder(ui: &mut Ui, dashboard: &Dashboard, actions: &mut PanelActions) -> bool {
    if dashboard.is_loading() {
        ui.vertical_centered(|ui| ui.add(Spinner::new().size(32.0)));
        return false;
    }
    if let Some(err) = dashboard.list_error() {
        actions.reload |= error_banner(ui, &UI_TEXT.error_list, err);
        return false;
    }
    true
}

/// Returns true when Reload was clicked.
fn error_banner(ui: &mut Ui, message: &str, err: &NetworkError) -> bool {
    let mut reload = false;
    UI_CONFIG.error_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.error_text(message);
            ui.label_subdued(err.to_string());
            ui.add_space(6.0);
            reload = ui.button(&UI_TEXT.button_reload).clicked();
        });
    });
    reload
}

fn category_filter_label(filter: CategoryFilter, categories: &CategoryTable) -> String {
    match filter {
        CategoryFilter::All => UI_TEXT.filter_all_categories.clone(),
        CategoryFilter::Only(category) => categories.name_of(category).to_string(),
    }
}

fn render_filter_bar(ui: &mut Ui, dashboard: &mut Dashboard, categories: &CategoryTable) {
    ui.horizontal(|ui| {
        ui.label_subdued(&UI_TEXT.filter_category);
        let current = dashboard.filter().category;
        let mut selected = current;
        ComboBox::from_id_salt("category_filter")
            .selected_text(category_filter_label(current, categories))
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut selected,
                    CategoryFilter::All,
                    &UI_TEXT.filter_all_categories,
                );
                for info in &categories.categories {
                    ui.selectable_value(&mut selected, CategoryFilter::Only(info.id), &info.name);
                }
            });
        if selected != current {
            dashboard.set_category(selected);
        }

        ui.separator();

        ui.label_subdued(&UI_TEXT.filter_sort_by);
        let current = dashboard.filter().sort_by;
        let mut selected = current;
        ComboBox::from_id_salt("sort_key")
            .selected_text(current.to_string())
            .show_ui(ui, |ui| {
                for key in SortKey::iter() {
                    ui.selectable_value(&mut selected, key, key.to_string());
                }
            });
        if selected != current {
            dashboard.set_sort_key(selected);
        }

        let icon = match dashboard.filter().sort_direction {
            SortDirection::Asc => &UI_TEXT.icon_sort_asc,
            SortDirection::Desc => &UI_TEXT.icon_sort_desc,
        };
        if ui
            .button(icon)
            .on_hover_text(dashboard.filter().sort_direction.as_ref())
            .clicked()
        {
            dashboard.toggle_sort_direction();
        }
    });
}

// --- Search ---

fn render_search_view(ui: &mut Ui, dashboard: &Dashboard, actions: &mut PanelActions) {
    if !list_placeholder(ui, dashboard, actions) {
        return;
    }

    let term = &dashboard.filter().search;
    let results = dashboard.search_results();
    if results.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{} \"{}\"", UI_TEXT.search_none, term))
                    .size(16.0)
                    .color(UI_CONFIG.colors.subdued),
            );
        });
    } else {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&UI_TEXT.search_results_for)
                    .size(18.0)
                    .color(UI_CONFIG.colors.label),
            );
            ui.label(
                RichText::new(format!("\"{}\"", term))
                    .size(18.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
        });
        ui.label_subdued(format!("{} {} cryptocurrencies", UI_TEXT.search_found, results.len()));
        ui.add_space(12.0);
        actions.open(card_grid(ui, "search_results", &results));
    }

    ui.add_space(24.0);
    render_remote_results(ui, dashboard, &results, actions);
}

/// Upstream matches that are not already among the local results.
fn render_remote_results(
    ui: &mut Ui,
    dashboard: &Dashboard,
    local: &[&Asset],
    actions: &mut PanelActions,
) {
    match dashboard.remote_search() {
        RemoteSearch::Idle => {
            ui.vertical_centered(|ui| {
                actions.search_upstream = ui
                    .button(&UI_TEXT.search_upstream)
                    .on_hover_text(&UI_TEXT.search_upstream_hover)
                    .clicked();
            });
        }
        RemoteSearch::Searching { .. } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label_subdued(&UI_TEXT.search_upstream_running);
            });
        }
        RemoteSearch::Done { assets, .. } => {
            let extra: Vec<&Asset> = assets
                .iter()
                .filter(|remote| local.iter().all(|shown| shown.id != remote.id))
                .collect();
            if extra.is_empty() {
                ui.label_subdued(&UI_TEXT.search_upstream_none);
            } else {
                ui.label_subheader(&UI_TEXT.search_upstream_heading);
                ui.add_space(8.0);
                actions.open(card_grid(ui, "remote_results", &extra));
            }
        }
        RemoteSearch::Failed { error, .. } => {
            ui.error_text(format!("{}: {}", UI_TEXT.error_search, error));
        }
    }
}
