use {
    crate::{
        config::constants::card,
        domain::Asset,
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
        utils::{format_market_cap, format_percentage, format_price},
    },
    eframe::egui::{Align, CursorIcon, Image, Layout, RichText, Sense, Ui, Vec2},
    egui_plot::{Line, Plot, PlotPoints},
};

/// Lays `assets` out as a wrapping grid of cards. Returns the clicked asset, if any.
/// `id_salt` keeps cards of the same asset in different grids apart.
pub(crate) fn card_grid(ui: &mut Ui, id_salt: &str, assets: &[&Asset]) -> Option<Asset> {
    let mut clicked = None;
    ui.push_id(id_salt, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(16.0);
            for asset in assets {
                if asset_card(ui, asset) {
                    clicked = Some((*asset).clone());
                }
            }
        });
    });
    clicked
}

/// One asset card. The whole card is the click target.
pub(crate) fn asset_card(ui: &mut Ui, asset: &Asset) -> bool {
    let hover_id = ui.id().with(("asset_card_hover", &asset.id));
    let was_hovered = ui.data(|d| d.get_temp::<bool>(hover_id).unwrap_or(false));

    let inner = UI_CONFIG.card_frame(was_hovered).show(ui, |ui| {
        ui.set_width(card::WIDTH);
        ui.spacing_mut().item_spacing = Vec2::new(8.0, 6.0);
        card_header(ui, asset);
        if !asset.sparkline().is_empty() {
            sparkline(ui, asset);
        }
        ui.separator();
        ui.horizontal(|ui| {
            ui.label_subdued(&UI_TEXT.card_market_cap);
            ui.label(
                RichText::new(format_market_cap(asset.market_cap))
                    .small()
                    .color(UI_CONFIG.colors.heading),
            );
        });
    });

    let response = inner
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
        .on_hover_text(&UI_TEXT.card_details_hover);
    let hovered = response.hovered();
    ui.data_mut(|d| d.insert_temp(hover_id, hovered));
    response.clicked()
}

fn card_header(ui: &mut Ui, asset: &Asset) {
    ui.horizontal(|ui| {
        if !asset.image.is_empty() {
            ui.add(
                Image::new(asset.image.as_str())
                    .fit_to_exact_size(Vec2::splat(card::ICON_SIZE))
                    .corner_radius(card::ICON_SIZE / 2.0),
            );
        }
        ui.vertical(|ui| {
            ui.label(RichText::new(&asset.name).strong().color(UI_CONFIG.colors.heading));
            ui.label_subdued(asset.symbol.to_uppercase());
        });
        ui.with_layout(Layout::top_down(Align::Max), |ui| {
            ui.label(
                RichText::new(format_price(asset.current_price))
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.label(
                RichText::new(format_percentage(asset.price_change_percentage_24h))
                    .small()
                    .color(UI_CONFIG.change_color(asset.price_change_percentage_24h)),
            );
        });
    });
}

/// 7-day price line, green when the 7d change is non-negative.
fn sparkline(ui: &mut Ui, asset: &Asset) {
    let color = if asset.trending_up_7d() {
        UI_CONFIG.colors.positive
    } else {
        UI_CONFIG.colors.negative
    };
    let points = PlotPoints::from_ys_f64(asset.sparkline());

    Plot::new(("sparkline", &asset.id))
        .height(card::SPARKLINE_HEIGHT)
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("", points).color(color).width(1.5));
        });
}
