use std::hash::Hash;

use eframe::egui::{Label, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::context::{DashboardContext, IncidentState};
use crate::data::model::{IncidentTable, NewsYearTable};

const ROW_HEIGHT: f32 = 20.0;
const MAX_TABLE_HEIGHT: f32 = 320.0;

/// Scrollable, striped grid of `rows` × `headers.len()` text cells.
fn grid(
    ui: &mut Ui,
    id: impl Hash,
    headers: &[String],
    rows: usize,
    cell: impl Fn(usize, usize) -> String,
) {
    ui.push_id(id, |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(true)
                .max_scroll_height(MAX_TABLE_HEIGHT)
                .columns(
                    Column::auto().at_least(48.0).at_most(480.0).clip(true),
                    headers.len(),
                )
                .header(ROW_HEIGHT + 2.0, |mut header| {
                    for h in headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows, |mut row| {
                        let r = row.index();
                        for c in 0..headers.len() {
                            row.col(|ui: &mut Ui| {
                                ui.add(Label::new(cell(r, c)).truncate());
                            });
                        }
                    });
                });
        });
    });
}

pub fn news_grid(ui: &mut Ui, table: &NewsYearTable) {
    grid(
        ui,
        ("news", &table.year),
        &table.headers,
        table.len(),
        |r, c| {
            table.rows[r]
                .get(c)
                .map(|cell| cell.to_string())
                .unwrap_or_default()
        },
    );
}

pub fn incident_grid(ui: &mut Ui, table: &IncidentTable) {
    let headers: Vec<String> = std::iter::once(table.label_header.clone())
        .chain(table.years.iter().cloned())
        .collect();

    grid(ui, "incidents", &headers, table.rows.len(), |r, c| {
        let row = &table.rows[r];
        match c {
            0 => row.label.clone(),
            _ => row.counts[c - 1].to_string(),
        }
    });
}

// ---------------------------------------------------------------------------
// Raw data section
// ---------------------------------------------------------------------------

/// Every loaded table, unmodified. `detail` selects the headings used by
/// the raw-data toggle.
pub fn raw_tables(ui: &mut Ui, context: &DashboardContext, detail: bool) {
    let (news_heading, incident_heading) = if detail {
        ("뉴스 데이터 상세", "해킹 사고 데이터 상세")
    } else {
        ("뉴스 데이터", "해킹 사고 데이터")
    };

    ui.push_id(detail, |ui: &mut Ui| {
        super::subheader(ui, news_heading);
        if context.news.is_empty() {
            super::warning(ui, "뉴스 데이터가 없습니다.");
        }
        for (year, table) in &context.news {
            ui.label(RichText::new(format!("{year}년 뉴스")).strong());
            if table.is_empty() {
                ui.label("기사가 없습니다.");
                continue;
            }
            news_grid(ui, table);
            ui.add_space(6.0);
        }

        super::subheader(ui, incident_heading);
        match &context.incidents {
            IncidentState::Loaded(table) => incident_grid(ui, table),
            IncidentState::Missing => super::warning(ui, "해킹 사고 데이터가 없습니다."),
            IncidentState::Failed(reason) => super::error(ui, reason.as_str()),
        }
    });
}
