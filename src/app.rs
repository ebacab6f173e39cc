use eframe::egui::{self, RichText, ScrollArea};

use crate::context::DashboardContext;
use crate::state::ViewState;
use crate::ui::{panels, views};

pub const TITLE: &str = "사이버 해킹 데이터 대시보드";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    context: DashboardContext,
    state: ViewState,
}

impl DashboardApp {
    pub fn new(context: DashboardContext) -> Self {
        Self {
            context,
            state: ViewState::default(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: analysis options ----
        egui::SidePanel::left("options_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.context, &mut self.state);
            });

        // ---- Central panel: selected view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.label(RichText::new(TITLE).size(26.0).strong());
                    ui.add_space(8.0);
                    views::show(ui, &self.context, &mut self.state);
                });
        });
    }
}
