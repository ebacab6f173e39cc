use eframe::egui::{self, Ui};

use super::cloud::{self, EguiMeasure};
use super::plot::{self, BarGroup, LineSeries};
use super::{error, subheader, tables, warning};
use crate::analysis::{self, PANDEMIC_PERIOD, RELAXED_PERIOD, TOP_WORDS, TREND_YEARS};
use crate::color::series_colors;
use crate::context::{DashboardContext, IncidentState};
use crate::data::model::TITLE_COLUMN;
use crate::state::{AnalysisMode, GeneratedCloud, ViewState};
use crate::wordcloud::{self, LayoutOptions};

/// Render the selected mode, then the raw tables if the toggle is on.
pub fn show(ui: &mut Ui, context: &DashboardContext, state: &mut ViewState) {
    match state.mode {
        AnalysisMode::NewsVisualization => news_view(ui, context, state),
        AnalysisMode::IncidentAnalysis => incident_view(ui, context),
        AnalysisMode::RawData => {
            ui.heading("원본 데이터");
            tables::raw_tables(ui, context, false);
        }
    }

    if state.show_raw {
        ui.add_space(12.0);
        ui.separator();
        ui.heading("원본 데이터 상세 보기");
        tables::raw_tables(ui, context, true);
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

fn news_view(ui: &mut Ui, context: &DashboardContext, state: &mut ViewState) {
    ui.heading("해킹 뉴스 기사 수 (연도별)");
    if context.news.is_empty() {
        warning(ui, "뉴스 데이터가 없습니다.");
        return;
    }

    let points = analysis::article_counts(&context.news)
        .into_iter()
        .filter_map(|(year, count)| Some([year.parse::<f64>().ok()?, count as f64]))
        .collect();
    let series = [LineSeries {
        name: "기사 수".to_string(),
        points,
        color: series_colors(1)[0],
    }];
    plot::year_line_chart(
        ui,
        "article_counts",
        "연도별 해킹 뉴스 기사 수",
        &series,
        "기사 수",
        false,
    );

    subheader(ui, "제목 워드클라우드");
    let Some(mut picked) = state
        .cloud_year_or(context.news_years())
        .map(str::to_owned)
    else {
        return;
    };

    let mut generate = false;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("연도 선택");
        egui::ComboBox::from_id_salt("wc_year")
            .selected_text(&picked)
            .show_ui(ui, |ui: &mut Ui| {
                for year in context.news_years() {
                    ui.selectable_value(&mut picked, year.to_string(), year);
                }
            });
        generate = ui.button("생성").clicked();
    });
    state.select_cloud_year(&picked);

    if generate {
        generate_cloud(ui.ctx(), context, state, &picked);
    }
    if let Some(notice) = &state.cloud_notice {
        warning(ui, notice.as_str());
    }
    if let Some(generated) = state.current_cloud() {
        cloud::word_cloud(ui, generated, &context.font);
    }
}

/// Build the word cloud for `year` and store it in `state`.
fn generate_cloud(
    egui_ctx: &egui::Context,
    context: &DashboardContext,
    state: &mut ViewState,
    year: &str,
) {
    state.cloud = None;
    state.cloud_notice = None;

    let Some(table) = context.news.get(year) else {
        return;
    };
    let Some(titles) = table.titles() else {
        state.cloud_notice = Some(format!("{year}년 데이터에 '{TITLE_COLUMN}' 열이 없습니다."));
        return;
    };

    let words = analysis::word_frequencies(&titles, TOP_WORDS);
    if words.is_empty() {
        state.cloud_notice = Some(format!("{year}년 기사 제목에서 단어를 찾지 못했습니다."));
        return;
    }

    let measure = EguiMeasure::new(egui_ctx, &context.font);
    let cloud = wordcloud::layout(&words, &measure, &LayoutOptions::default());
    if cloud.is_empty() {
        state.cloud_notice = Some("단어를 배치할 공간이 없습니다.".to_string());
        return;
    }
    log::info!(
        "Word cloud for {year}: placed {} of {} words",
        cloud.words.len(),
        words.len()
    );
    state.cloud = Some(GeneratedCloud {
        year: year.to_string(),
        cloud,
    });
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

fn incident_view(ui: &mut Ui, context: &DashboardContext) {
    ui.heading(format!(
        "해킹 사고 유형별 건수 추이 ({}~{})",
        TREND_YEARS.0, TREND_YEARS.1
    ));
    let table = match &context.incidents {
        IncidentState::Loaded(table) => table,
        IncidentState::Missing => {
            warning(ui, "hacking.xlsx 파일을 찾을 수 없습니다.");
            return;
        }
        IncidentState::Failed(reason) => {
            error(ui, format!("hacking.xlsx 파일을 읽을 수 없습니다: {reason}"));
            return;
        }
    };

    let trend = analysis::incident_trend(table, TREND_YEARS.0, TREND_YEARS.1);
    let series: Vec<LineSeries> = trend
        .into_iter()
        .zip(series_colors(table.rows.len()))
        .map(|(t, color)| LineSeries {
            name: t.label,
            points: t.points,
            color,
        })
        .collect();
    plot::year_line_chart(
        ui,
        "incident_trend",
        "사고 유형별 연도별 건수",
        &series,
        "건수",
        true,
    );

    subheader(ui, "코로나 전·후 총건수 비교");
    let comparison = analysis::compare_periods(table);
    let categories: Vec<String> = comparison.iter().map(|c| c.label.clone()).collect();
    let colors = series_colors(2);
    let groups = [
        BarGroup {
            name: format!("코로나({}-{})", &PANDEMIC_PERIOD.0[2..], &PANDEMIC_PERIOD.1[2..]),
            values: comparison.iter().map(|c| c.pandemic as f64).collect(),
            color: colors[0],
        },
        BarGroup {
            name: format!("완화({}-{})", &RELAXED_PERIOD.0[2..], &RELAXED_PERIOD.1[2..]),
            values: comparison.iter().map(|c| c.relaxed as f64).collect(),
            color: colors[1],
        },
    ];
    plot::grouped_bar_chart(
        ui,
        "period_comparison",
        "시기별 해킹 사고 총건수 비교",
        &categories,
        &groups,
        "총건수",
    );
}

#[cfg(test)]
mod tests {
    use eframe::egui::epaint::ClippedShape;
    use eframe::egui::{vec2, CentralPanel, Context, FullOutput, Pos2, RawInput, Rect, Shape};

    use super::*;
    use crate::data::model::{CellValue, IncidentRow, IncidentTable, NewsYearTable};

    fn news_table(year: &str, headers: &[&str], cells: &[&str]) -> NewsYearTable {
        NewsYearTable {
            year: year.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: cells
                .iter()
                .map(|c| vec![CellValue::Text(c.to_string())])
                .collect(),
        }
    }

    fn incident_table() -> IncidentTable {
        let row = |label: &str, base: u64| IncidentRow {
            label: label.to_string(),
            counts: (0..10).map(|i| base + i).collect(),
        };
        IncidentTable {
            label_header: "사고유형".into(),
            years: (2015..=2024).map(|y: u16| y.to_string()).collect(),
            rows: vec![row("홈페이지 변조", 100), row("DDoS 공격", 200)],
        }
    }

    fn context(news: Vec<NewsYearTable>, incidents: IncidentState) -> DashboardContext {
        let news = news.into_iter().map(|t| (t.year.clone(), t)).collect();
        DashboardContext::new(news, incidents)
    }

    fn input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 4000.0))),
            ..RawInput::default()
        }
    }

    /// Every string painted during the frame, in paint order.
    fn painted_text(output: &FullOutput) -> String {
        fn collect(shape: &Shape, out: &mut String) {
            match shape {
                Shape::Text(text) => {
                    out.push_str(text.galley.text());
                    out.push('\n');
                }
                Shape::Vec(shapes) => shapes.iter().for_each(|s| collect(s, out)),
                _ => {}
            }
        }

        let mut out = String::new();
        for ClippedShape { shape, .. } in &output.shapes {
            collect(shape, &mut out);
        }
        out
    }

    /// Render one frame of the central panel without a window.
    fn render(context: &DashboardContext, state: &mut ViewState) -> String {
        let ctx = Context::default();
        let output = ctx.run(input(), |ctx| {
            CentralPanel::default().show(ctx, |ui| show(ui, context, state));
        });
        painted_text(&output)
    }

    fn generate(context: &DashboardContext, state: &mut ViewState, year: &str) {
        let ctx = Context::default();
        let _ = ctx.run(input(), |ctx| generate_cloud(ctx, context, state, year));
    }

    #[test]
    fn every_mode_warns_when_inputs_are_missing() {
        let context = context(Vec::new(), IncidentState::Missing);

        for mode in AnalysisMode::ALL {
            for show_raw in [false, true] {
                let mut state = ViewState {
                    mode,
                    show_raw,
                    ..ViewState::default()
                };
                let text = render(&context, &mut state);

                match mode {
                    AnalysisMode::NewsVisualization => {
                        assert!(text.contains("뉴스 데이터가 없습니다"), "{mode:?}: {text}")
                    }
                    AnalysisMode::IncidentAnalysis => assert!(
                        text.contains("hacking.xlsx 파일을 찾을 수 없습니다"),
                        "{mode:?}: {text}"
                    ),
                    AnalysisMode::RawData => {
                        assert!(text.contains("해킹 사고 데이터가 없습니다"), "{mode:?}: {text}")
                    }
                }
                if show_raw {
                    assert!(text.contains("해킹 사고 데이터가 없습니다"), "{mode:?}: {text}");
                }
                assert_eq!(text.contains("원본 데이터 상세 보기"), show_raw, "{mode:?}");
            }
        }
    }

    #[test]
    fn failed_summary_shows_its_reason() {
        let context = context(Vec::new(), IncidentState::Failed("cell F5: \"n/a\"".into()));
        let mut state = ViewState {
            mode: AnalysisMode::IncidentAnalysis,
            ..ViewState::default()
        };

        let text = render(&context, &mut state);
        assert!(text.contains("cell F5"), "{text}");
        assert!(!text.contains("사고 유형별 연도별 건수"));
    }

    #[test]
    fn raw_toggle_appends_tables_below_the_selected_view() {
        let context = context(
            vec![news_table("2023", &[TITLE_COLUMN], &["랜섬웨어 공격"])],
            IncidentState::Loaded(incident_table()),
        );
        let mut state = ViewState {
            mode: AnalysisMode::IncidentAnalysis,
            show_raw: true,
            ..ViewState::default()
        };

        let text = render(&context, &mut state);
        let chart = text.find("사고 유형별 연도별 건수").expect("trend chart");
        let bars = text.find("시기별 해킹 사고 총건수 비교").expect("period chart");
        let raw = text.find("해킹 사고 데이터 상세").expect("raw tables");
        assert!(chart < bars && bars < raw, "{text}");

        state.show_raw = false;
        let text = render(&context, &mut state);
        assert!(!text.contains("해킹 사고 데이터 상세"));
    }

    #[test]
    fn cloud_needs_a_title_column() {
        let context = context(
            vec![news_table("2021", &["날짜"], &["2021-03-04"])],
            IncidentState::Missing,
        );
        let mut state = ViewState::default();

        generate(&context, &mut state, "2021");
        assert!(state.cloud.is_none());
        let notice = state.cloud_notice.as_deref().unwrap_or_default();
        assert!(notice.contains(TITLE_COLUMN), "{notice}");
    }

    #[test]
    fn cloud_needs_qualifying_words() {
        let context = context(
            vec![news_table("2022", &[TITLE_COLUMN], &["a", "!", "해"])],
            IncidentState::Missing,
        );
        let mut state = ViewState::default();

        generate(&context, &mut state, "2022");
        assert!(state.cloud.is_none());
        let notice = state.cloud_notice.as_deref().unwrap_or_default();
        assert!(notice.contains("단어를 찾지 못했습니다"), "{notice}");
    }

    #[test]
    fn generated_cloud_is_stored_and_painted() {
        let context = context(
            vec![news_table(
                "2023",
                &[TITLE_COLUMN],
                &["랜섬웨어 공격 증가", "랜섬웨어 피해", "공공기관 랜섬웨어"],
            )],
            IncidentState::Missing,
        );
        let mut state = ViewState::default();
        state.select_cloud_year("2023");
        state.cloud_notice = Some("stale".into());

        generate(&context, &mut state, "2023");
        assert_eq!(state.cloud_notice, None);
        let generated = state.cloud.as_ref().expect("cloud");
        assert_eq!(generated.year, "2023");
        assert_eq!(generated.cloud.words[0].word, "랜섬웨어");
        assert_eq!(generated.cloud.words[0].count, 3);

        let text = render(&context, &mut state);
        assert!(text.contains("연도별 해킹 뉴스 기사 수"));
        assert!(text.contains("랜섬웨어"), "{text}");
    }
}
