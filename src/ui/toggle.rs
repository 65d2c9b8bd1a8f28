//! Toggle switch widget
//!
//! A pill-shaped on/off switch. The widget never owns the value: it paints
//! what the caller passes in and reports the requested new value through the
//! change callback.

use eframe::egui;

/// Optional styling for a [`Toggle`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleStyle {
    /// Multiplier applied to the default switch size
    pub scale: f32,
    /// Track colour when on. Falls back to the selection colour.
    pub on_fill: Option<egui::Color32>,
    /// Track colour when off. Falls back to the widget background.
    pub off_fill: Option<egui::Color32>,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            on_fill: None,
            off_fill: None,
        }
    }
}

/// On/off switch bound to a caller-owned value.
pub struct Toggle<F: FnMut(bool)> {
    id: egui::Id,
    value: bool,
    on_change: F,
    label: String,
    style: ToggleStyle,
}

impl<F: FnMut(bool)> Toggle<F> {
    pub fn new(id: impl Into<egui::Id>, value: bool, on_change: F) -> Self {
        Self {
            id: id.into(),
            value,
            on_change,
            label: String::new(),
            style: ToggleStyle::default(),
        }
    }

    /// Accessible name for the switch
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn style(mut self, style: ToggleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.style.scale = scale;
        self
    }

    pub fn on_fill(mut self, color: egui::Color32) -> Self {
        self.style.on_fill = Some(color);
        self
    }

    pub fn off_fill(mut self, color: egui::Color32) -> Self {
        self.style.off_fill = Some(color);
        self
    }
}

impl<F: FnMut(bool)> egui::Widget for Toggle<F> {
    fn ui(mut self, ui: &mut egui::Ui) -> egui::Response {
        let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0) * self.style.scale;
        let (_, rect) = ui.allocate_space(desired_size);
        let mut response = ui.interact(rect, self.id, egui::Sense::click());

        // Covers pointer clicks and Space/Enter while focused.
        if response.clicked() {
            (self.on_change)(!self.value);
            response.mark_changed();
            ui.ctx().request_repaint();
        }

        let value = self.value;
        let label = self.label;
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), value, &label)
        });

        if ui.is_rect_visible(rect) {
            let how_on = ui.ctx().animate_bool_responsive(self.id, value);
            let visuals = ui.style().interact_selectable(&response, value);
            let track_fill = if value {
                self.style.on_fill.unwrap_or(visuals.bg_fill)
            } else {
                self.style.off_fill.unwrap_or(visuals.bg_fill)
            };

            let rect = rect.expand(visuals.expansion);
            let radius = 0.5 * rect.height();
            ui.painter()
                .rect(rect, radius, track_fill, visuals.bg_stroke, egui::StrokeKind::Inside);

            let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
            let center = egui::pos2(knob_x, rect.center().y);
            ui.painter()
                .circle(center, 0.75 * radius, visuals.bg_fill, visuals.fg_stroke);
        }

        response
    }
}

/// Shorthand for adding an unstyled [`Toggle`].
pub fn toggle(
    ui: &mut egui::Ui,
    id: impl Into<egui::Id>,
    value: bool,
    on_change: impl FnMut(bool),
) -> egui::Response {
    ui.add(Toggle::new(id, value, on_change))
}
