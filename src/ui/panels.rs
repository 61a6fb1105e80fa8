use {
    crate::{
        app::App,
        config::COINGECKO,
        models::RemoteSearch,
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    },
    eframe::egui::{
        Align, Button, Context, FontId, Layout, RichText, TextEdit, TopBottomPanel,
    },
    web_time::Instant,
};

/// Landing-page anchors reachable from the top navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationTarget {
    Categories,
    AllAssets,
}

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.app_title)
                            .size(20.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    for (target, label) in [
                        (NavigationTarget::Categories, &UI_TEXT.nav_categories),
                        (NavigationTarget::AllAssets, &UI_TEXT.nav_all),
                    ] {
                        if ui.nav_link(label, FontId::proportional(14.0)).clicked() {
                            // Anchors live on the landing view.
                            self.dashboard.clear_search();
                            self.scroll_target = Some(target);
                        }
                    }

                    // Right to left: upstream search, clear, then the search box.
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let can_search_upstream = self.dashboard.showing_search_results()
                            && !matches!(
                                self.dashboard.remote_search(),
                                RemoteSearch::Searching { .. }
                            );
                        let upstream = ui
                            .add_enabled(
                                can_search_upstream,
                                Button::new(&UI_TEXT.search_upstream),
                            )
                            .on_hover_text(&UI_TEXT.search_upstream_hover);
                        if upstream.clicked() {
                            self.search_upstream(ctx);
                        }

                        if !self.dashboard.search_input().is_empty()
                            && ui.button(&UI_TEXT.icon_close).clicked()
                        {
                            self.dashboard.clear_search();
                        }

                        let mut input = self.dashboard.search_input().to_owned();
                        let response = ui.add(
                            TextEdit::singleline(&mut input)
                                .hint_text(&UI_TEXT.search_hint)
                                .desired_width(280.0),
                        );
                        if response.changed() {
                            self.dashboard.set_search_input(input, Instant::now());
                        }
                    });
                });
            });
    }

    pub(crate) fn render_footer(&self, ctx: &Context) {
        TopBottomPanel::bottom("footer")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subdued(&UI_TEXT.footer_tagline);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.hyperlink_to(
                            RichText::new(&UI_TEXT.footer_attribution).small(),
                            COINGECKO.web.home_url,
                        );
                        if !self.dashboard.assets().is_empty() {
                            ui.separator();
                            ui.label_subdued(format!("{} assets", self.dashboard.assets().len()));
                        }
                    });
                });
            });
    }
}
