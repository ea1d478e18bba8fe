//! Selection info panel

/// Draws `text` in a small undecorated box at the top of the viewport
///
/// Nothing is drawn when `text` is `None`.
pub fn info_panel(ui: &imgui::Ui, text: Option<&str>) {
    let Some(text) = text else {
        return;
    };
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("##info_panel")
        .position([display_size[0] * 0.5, 20.0], imgui::Condition::Always)
        .position_pivot([0.5, 0.0])
        .title_bar(false)
        .resizable(false)
        .movable(false)
        .collapsible(false)
        .always_auto_resize(true)
        .bg_alpha(0.7)
        .build(|| {
            ui.text(text);
        });
}
