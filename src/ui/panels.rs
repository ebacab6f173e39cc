use eframe::egui::{self, Color32, RichText, Ui};

use crate::context::{DashboardContext, IncidentState};
use crate::state::{AnalysisMode, ViewState};

// ---------------------------------------------------------------------------
// Left side panel – analysis options
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, context: &DashboardContext, state: &mut ViewState) {
    ui.heading("분석 옵션");
    ui.separator();

    ui.strong("분석 유형 선택");
    egui::ComboBox::from_id_salt("analysis_mode")
        .selected_text(state.mode.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for mode in AnalysisMode::ALL {
                ui.selectable_value(&mut state.mode, mode, mode.label());
            }
        });

    ui.add_space(8.0);
    ui.checkbox(&mut state.show_raw, "🔍 원본 데이터 보기");
    ui.separator();

    // ---- Loaded data summary ----
    ui.label(format!("뉴스 데이터: {}개 연도", context.news.len()));
    let incidents = match &context.incidents {
        IncidentState::Loaded(table) => format!("해킹 사고 데이터: {}개 유형", table.rows.len()),
        IncidentState::Missing => "해킹 사고 데이터: 없음".to_string(),
        IncidentState::Failed(_) => "해킹 사고 데이터: 읽기 실패".to_string(),
    };
    ui.label(incidents);

    if !context.font.is_registered() {
        // Hangul cannot render without the font, so this one stays in English.
        ui.add_space(8.0);
        ui.label(
            RichText::new("Korean font not loaded: labels may show as boxes")
                .small()
                .color(Color32::from_rgb(204, 136, 0)),
        );
    }
}
