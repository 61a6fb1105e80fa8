use {
    crate::ui::{UI_CONFIG, UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText, Spinner},
};

pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading(
                    RichText::new(&UI_TEXT.ls_title)
                        .size(28.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(20.0);
                ui.add(Spinner::new().size(48.0).color(UI_CONFIG.colors.accent));
                ui.add_space(10.0);
                ui.label(
                    RichText::new(&UI_TEXT.ls_fetching)
                        .italics()
                        .color(UI_CONFIG.colors.subdued),
                );
            });
        });
}
