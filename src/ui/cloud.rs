use eframe::egui::{self, Align2, Color32, FontFamily, FontId, Sense, Ui, Vec2};

use crate::color::word_palette;
use crate::fonts::FontStatus;
use crate::wordcloud::{TextMeasure, WordCloud};

/// Measures text with the fonts currently installed in an egui context.
pub struct EguiMeasure<'a> {
    ctx: &'a egui::Context,
    family: FontFamily,
}

impl<'a> EguiMeasure<'a> {
    pub fn new(ctx: &'a egui::Context, font: &FontStatus) -> Self {
        Self {
            ctx,
            family: font.family(),
        }
    }
}

impl TextMeasure for EguiMeasure<'_> {
    fn measure(&self, text: &str, font_size: f32) -> Vec2 {
        let font_id = FontId::new(font_size, self.family.clone());
        self.ctx
            .fonts(|fonts| fonts.layout_no_wrap(text.to_owned(), font_id, Color32::BLACK).size())
    }
}

/// Paint a laid-out cloud on a white canvas scaled to the available width.
pub fn word_cloud(ui: &mut Ui, cloud: &WordCloud, font: &FontStatus) {
    let scale = (ui.available_width() / cloud.canvas.x).max(0.1);
    let (rect, response) = ui.allocate_exact_size(cloud.canvas * scale, Sense::hover());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    let family = font.family();
    let colors = word_palette();
    for (rank, word) in cloud.words.iter().enumerate() {
        painter.text(
            rect.min + word.rect.min.to_vec2() * scale,
            Align2::LEFT_TOP,
            &word.word,
            FontId::new(word.font_size * scale, family.clone()),
            colors[rank % colors.len()],
        );
    }

    let hovered = response.hover_pos().and_then(|pos| {
        let local = ((pos - rect.min) / scale).to_pos2();
        cloud.words.iter().find(|w| w.rect.contains(local))
    });
    if let Some(word) = hovered {
        response.on_hover_text(format!("{}: {}회", word.word, word.count));
    }
}
