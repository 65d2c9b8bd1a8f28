//! Card
//!
//! Framed group used for each settings section. The title is drawn in an
//! accent colour above the contents.

use eframe::egui;

/// Framed group with consistent padding, fill and rounding.
pub struct Card {
    title: Option<egui::RichText>,
    accent: Option<egui::Color32>,
    fill: Option<egui::Color32>,
    stroke: Option<egui::Stroke>,
    inner_margin: egui::Margin,
    corner_radius: egui::CornerRadius,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            title: None,
            accent: None,
            fill: None,
            stroke: None,
            inner_margin: egui::Margin::same(16),
            corner_radius: egui::CornerRadius::same(8),
        }
    }
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<egui::RichText>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title colour. Defaults to the visuals' hyperlink colour.
    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn title_color(&self, visuals: &egui::Visuals) -> egui::Color32 {
        self.accent.unwrap_or(visuals.hyperlink_color)
    }

    pub fn fill(mut self, fill: egui::Color32) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn stroke(mut self, stroke: egui::Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn inner_margin(mut self, margin: impl Into<egui::Margin>) -> Self {
        self.inner_margin = margin.into();
        self
    }

    pub fn corner_radius(mut self, radius: impl Into<egui::CornerRadius>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    /// Frame used when painting; unset colours come from the current visuals.
    pub fn frame(&self, visuals: &egui::Visuals) -> egui::Frame {
        egui::Frame::new()
            .fill(self.fill.unwrap_or(visuals.faint_bg_color))
            .stroke(self.stroke.unwrap_or(visuals.widgets.noninteractive.bg_stroke))
            .inner_margin(self.inner_margin)
            .corner_radius(self.corner_radius)
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let frame = self.frame(ui.visuals());
        let title_color = self.title_color(ui.visuals());
        let title = self.title;
        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(title) = title {
                ui.heading(title.color(title_color));
                ui.add_space(8.0);
            }
            add_contents(ui)
        })
    }
}
