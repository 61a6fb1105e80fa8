use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub accent: Color32,
    pub background: Color32,
    pub header: Color32,
    pub card: Color32,
    pub card_footer: Color32,
    pub card_border: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(209, 213, 219),
        heading: Color32::WHITE,
        subdued: Color32::from_rgb(156, 163, 175),
        accent: Color32::from_rgb(59, 130, 246),
        background: Color32::from_rgb(17, 24, 39),
        header: Color32::from_rgb(31, 41, 55),
        card: Color32::from_rgb(31, 41, 55),
        card_footer: Color32::from_rgb(55, 65, 81),
        card_border: Color32::from_rgb(55, 65, 81),
        positive: Color32::from_rgb(16, 185, 129),
        negative: Color32::from_rgb(239, 68, 68),
        error_fill: Color32::from_rgb(69, 10, 10),
        error_text: Color32::from_rgb(248, 113, 113),
    },
};

impl UiConfig {
    /// Green for gains (zero included), red for losses.
    pub fn change_color(&self, value: f64) -> Color32 {
        if value >= 0.0 {
            self.colors.positive
        } else {
            self.colors.negative
        }
    }

    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.header,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    /// Footer (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.header,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 6),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 16),
            ..Default::default()
        }
    }

    pub fn card_frame(&self, hovered: bool) -> Frame {
        let border = if hovered {
            self.colors.accent
        } else {
            self.colors.card_border
        };
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, border),
            corner_radius: CornerRadius::same(10),
            inner_margin: Margin::same(14),
            ..Default::default()
        }
    }

    pub fn error_frame(&self) -> Frame {
        Frame {
            fill: self.colors.error_fill,
            stroke: Stroke::new(1.0, self.colors.negative),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
