use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
use settings_panel::ui::toggle::Toggle;

fn input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, 300.0))),
        events,
        ..Default::default()
    }
}

fn pointer_button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

/// Renders a toggle showing `value` and records every callback.
fn run(ctx: &egui::Context, value: bool, calls: &mut Vec<bool>, events: Vec<Event>) {
    let _ = ctx.run(input(events), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(Toggle::new("under_test", value, |v| calls.push(v)).label("Under test"));
        });
    });
}

fn click(ctx: &egui::Context, value: bool, calls: &mut Vec<bool>) {
    let pos = ctx
        .read_response(egui::Id::new("under_test"))
        .expect("toggle was rendered")
        .rect
        .center();
    run(ctx, value, calls, vec![Event::PointerMoved(pos)]);
    run(ctx, value, calls, vec![pointer_button(pos, true)]);
    run(ctx, value, calls, vec![pointer_button(pos, false)]);
}

#[test]
fn test_no_callback_without_interaction() {
    let ctx = egui::Context::default();
    let mut calls = Vec::new();
    for _ in 0..3 {
        run(&ctx, true, &mut calls, Vec::new());
    }
    assert!(calls.is_empty());
}

#[test]
fn test_click_reports_negated_value_once() {
    for value in [true, false] {
        let ctx = egui::Context::default();
        let mut calls = Vec::new();
        run(&ctx, value, &mut calls, Vec::new());
        click(&ctx, value, &mut calls);
        assert_eq!(calls, vec![!value]);
    }
}

#[test]
fn test_widget_does_not_own_value() {
    // The caller ignores the callback, so every click requests the same change.
    let ctx = egui::Context::default();
    let mut calls = Vec::new();
    run(&ctx, false, &mut calls, Vec::new());
    click(&ctx, false, &mut calls);
    click(&ctx, false, &mut calls);
    assert_eq!(calls, vec![true, true]);
}

#[test]
fn test_toggle_size_scales() {
    let ctx = egui::Context::default();
    let mut sizes = Vec::new();
    let _ = ctx.run(input(Vec::new()), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            sizes.push(ui.add(Toggle::new("small", true, |_| {})).rect.size());
            sizes.push(ui.add(Toggle::new("large", true, |_| {}).scale(2.0)).rect.size());
        });
    });
    assert_eq!(sizes.len(), 2);
    assert!((sizes[1].x - 2.0 * sizes[0].x).abs() < 0.01);
    assert!((sizes[0].x - 2.0 * sizes[0].y).abs() < 0.01);
}
