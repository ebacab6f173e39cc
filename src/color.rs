use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` visually distinct colours with evenly spaced hues.
pub fn generate_palette(n: usize, saturation: f32, lightness: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, saturation, lightness);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Line / bar series colours, one per series.
pub fn series_colors(n: usize) -> Vec<Color32> {
    generate_palette(n, 0.75, 0.55)
}

/// Number of hues cycled through by word-cloud words.
const WORD_HUES: usize = 12;

/// Word-cloud colours in rank order, dark enough to read on white. Index
/// with `rank % len`.
pub fn word_palette() -> Vec<Color32> {
    let hues = generate_palette(WORD_HUES, 0.65, 0.38);
    // stride 5 is coprime with 12, so neighbours get distant hues
    (0..WORD_HUES).map(|i| hues[(i * 5) % WORD_HUES]).collect()
}
