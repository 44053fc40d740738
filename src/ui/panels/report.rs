// DeviceDiag - ui/panels/report.rs
//
// Central report view: a read-only, selectable, monospace text area that
// fills the window and scrolls both ways.

use crate::app::state::AppState;
use egui::text::{CCursor, CCursorRange};

/// Stable id of the report text area, so menu commands can reach its
/// selection state from outside the panel.
pub fn text_id() -> egui::Id {
    egui::Id::new("report_text")
}

/// Current selection of the report text area as character indices
/// (primary, secondary), if the area has ever had a cursor.
pub fn selection(ctx: &egui::Context) -> Option<(usize, usize)> {
    let state = egui::TextEdit::load_state(ctx, text_id())?;
    let range = state.cursor.char_range()?;
    Some((range.primary.index, range.secondary.index))
}

/// Render the report text area.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let id = text_id();
    let font = egui::FontId::monospace(state.font_size);

    egui::ScrollArea::both()
        .id_salt("report_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // A `&str` buffer is selectable and copyable but not editable.
            let mut text: &str = &state.report;
            let mut output = egui::TextEdit::multiline(&mut text)
                .id(id)
                .font(font)
                .desired_width(f32::INFINITY)
                .desired_rows(1)
                .show(ui);

            if state.request_select_all {
                state.request_select_all = false;
                let end = state.report.chars().count();
                output
                    .state
                    .cursor
                    .set_char_range(Some(CCursorRange::two(
                        CCursor::new(0),
                        CCursor::new(end),
                    )));
                output.state.store(ui.ctx(), id);
                ui.memory_mut(|mem| mem.request_focus(id));
            }
        });
}
