use {
    crate::ui::UI_CONFIG,
    eframe::egui::{
        Color32, CursorIcon, FontId, Response, RichText, Sense, Stroke, Ui, Vec2, WidgetInfo,
        WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).strong().color(UI_CONFIG.colors.heading)
}

pub(crate) trait UiStyleExt {
    /// Text link for the top navigation, underlined in the accent color while hovered.
    fn nav_link(&mut self, text: &str, font_id: FontId) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn error_text(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn nav_link(&mut self, text: &str, font_id: FontId) -> Response {
        let padding = Vec2::new(8.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, UI_CONFIG.colors.label);
        let (rect, response) =
            self.allocate_exact_size(galley.size() + padding * 2.0, Sense::click());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Link, true, text));

        if self.is_rect_visible(rect) {
            let active = response.hovered() || response.has_focus();
            let color = if active {
                UI_CONFIG.colors.heading
            } else {
                UI_CONFIG.colors.label
            };
            let painter = self.painter();
            painter.galley_with_override_text_color(rect.left_top() + padding, galley, color);
            if active {
                let y = rect.bottom() - 1.0;
                painter.hline(
                    rect.x_range().shrink(padding.x),
                    y,
                    Stroke::new(2.0, UI_CONFIG.colors.accent),
                );
            }
        }
        response.on_hover_cursor(CursorIcon::PointingHand)
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn error_text(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error_text));
    }
}
