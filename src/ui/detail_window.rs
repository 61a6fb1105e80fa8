use {
    crate::{
        app::App,
        config::constants::detail as layout,
        domain::AssetDetail,
        models::DetailStatus,
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
        utils::{format_date, format_market_cap, format_percentage, format_price, format_supply},
    },
    eframe::egui::{
        Align2, Context, Grid, Id, Image, RichText, ScrollArea, Spinner, Ui, Vec2, Window,
    },
};

impl App {
    pub(crate) fn render_detail_window(&mut self, ctx: &Context) {
        let Some(asset) = self.detail.asset() else {
            return;
        };
        let title = format!("{} ({})", asset.name, asset.symbol.to_uppercase());

        let mut open = true;
        let mut close_clicked = false;
        Window::new(title)
            .id(Id::new("asset_detail_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .default_width(layout::WINDOW_WIDTH)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_width(layout::WINDOW_WIDTH);
                match self.detail.status() {
                    Some(DetailStatus::Loaded(detail)) => {
                        ScrollArea::vertical()
                            .max_height(layout::MAX_BODY_HEIGHT)
                            .show(ui, |ui| render_detail_body(ui, detail));
                    }
                    Some(DetailStatus::Failed(err)) => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(12.0);
                            ui.error_text(&UI_TEXT.error_detail);
                            ui.label_subdued(err.to_string());
                            ui.add_space(8.0);
                            close_clicked = ui.button(&UI_TEXT.button_close).clicked();
                            ui.add_space(12.0);
                        });
                    }
                    Some(DetailStatus::Loading) | None => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            ui.add(Spinner::new().size(40.0).color(UI_CONFIG.colors.accent));
                            ui.add_space(24.0);
                        });
                    }
                }
            });

        if !open || close_clicked {
            self.close_detail();
        }
    }
}

fn render_detail_body(ui: &mut Ui, detail: &AssetDetail) {
    ui.horizontal(|ui| {
        if !detail.image.is_empty() {
            ui.add(
                Image::new(detail.image.as_str())
                    .fit_to_exact_size(Vec2::splat(layout::ICON_SIZE)),
            );
        }
        ui.vertical(|ui| {
            ui.label(
                RichText::new(&detail.name)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label_subdued(detail.symbol.to_uppercase());
        });
    });
    ui.separator();

    ui.label_subheader(&UI_TEXT.detail_market_info);
    ui.add_space(4.0);
    render_market_grid(ui, detail);
    ui.add_space(12.0);

    ui.label_subheader(&UI_TEXT.detail_about);
    match detail.description_text() {
        Some(text) => ui.label(RichText::new(text).color(UI_CONFIG.colors.label)),
        None => ui.label(
            RichText::new(&UI_TEXT.detail_no_description)
                .italics()
                .color(UI_CONFIG.colors.subdued),
        ),
    };
    ui.add_space(12.0);

    ui.label_subheader(&UI_TEXT.detail_links);
    ui.horizontal_wrapped(|ui| {
        if let Some(homepage) = &detail.homepage {
            ui.hyperlink_to(&UI_TEXT.detail_website, homepage);
        }
        if let Some(explorer) = detail.blockchain_sites.first() {
            ui.hyperlink_to(&UI_TEXT.detail_explorer, explorer);
        }
        ui.hyperlink_to(&UI_TEXT.detail_coingecko, detail.coingecko_url());
    });
}

fn render_market_grid(ui: &mut Ui, detail: &AssetDetail) {
    let heading = UI_CONFIG.colors.heading;
    let max_supply = detail
        .max_supply
        .map(format_supply)
        .unwrap_or_else(|| UI_TEXT.label_unlimited.clone());
    let ath_date = detail
        .ath_date
        .as_ref()
        .map(format_date)
        .unwrap_or_else(|| UI_TEXT.label_unknown.clone());

    Grid::new("detail_market_grid")
        .num_columns(2)
        .spacing([48.0, 10.0])
        .show(ui, |ui| {
            ui.metric(&UI_TEXT.detail_price, &format_price(detail.current_price), heading);
            ui.metric(
                &UI_TEXT.detail_market_cap,
                &format_market_cap(detail.market_cap),
                heading,
            );
            ui.end_row();

            ui.metric(
                &UI_TEXT.detail_change_24h,
                &format_percentage(detail.price_change_percentage_24h),
                UI_CONFIG.change_color(detail.price_change_percentage_24h),
            );
            ui.metric(
                &UI_TEXT.detail_volume,
                &format_market_cap(detail.total_volume),
                heading,
            );
            ui.end_row();

            ui.metric(
                &UI_TEXT.detail_circulating,
                &format_supply(detail.circulating_supply),
                heading,
            );
            ui.metric(&UI_TEXT.detail_max_supply, &max_supply, heading);
            ui.end_row();

            ui.metric(&UI_TEXT.detail_ath, &format_price(detail.ath), heading);
            ui.metric(&UI_TEXT.detail_ath_date, &ath_date, heading);
            ui.end_row();
        });
}
