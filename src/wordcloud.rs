//! Word-cloud layout.
//!
//! Words are placed largest first on a fixed canvas. Each word starts at a
//! font size derived from its frequency relative to the previous word, then
//! walks an Archimedean spiral out from the centre until it finds a spot that
//! overlaps nothing already placed. If no spot exists the font shrinks and the
//! search repeats; once a word cannot fit even at the minimum size the canvas
//! is considered full.

use eframe::egui::{vec2, Pos2, Rect, Vec2};

use crate::analysis::WordFrequency;

/// Size of the rendered word-frequency image.
pub const CANVAS_SIZE: Vec2 = vec2(800.0, 400.0);

/// Distance between successive turns of the search spiral, in pixels.
const SPIRAL_SPACING: f32 = 6.0;

/// Measures the extent of `text` drawn at `font_size`.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Vec2;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub canvas: Vec2,
    pub max_font_size: f32,
    pub min_font_size: f32,
    /// Multiplier applied when a word does not fit.
    pub shrink: f32,
    /// 0.0 ranks only, 1.0 sizes strictly proportional to frequency.
    pub relative_scaling: f32,
    /// Free space kept around every word.
    pub margin: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas: CANVAS_SIZE,
            max_font_size: 110.0,
            min_font_size: 4.0,
            shrink: 0.9,
            relative_scaling: 0.5,
            margin: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: f32,
    /// Text extent in canvas coordinates (margin excluded).
    pub rect: Rect,
}

/// A finished layout; coordinates are relative to the canvas origin.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCloud {
    pub canvas: Vec2,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lay out `words` (most frequent first) on the canvas.
pub fn layout(words: &[WordFrequency], measure: &dyn TextMeasure, opts: &LayoutOptions) -> WordCloud {
    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
    let mut occupied: Vec<Rect> = Vec::with_capacity(words.len());

    let Some(first) = words.first() else {
        return WordCloud {
            canvas: opts.canvas,
            words: placed,
        };
    };

    let mut font_size = opts.max_font_size;
    let mut last_count = first.count.max(1) as f32;

    for entry in words {
        let count = entry.count as f32;
        font_size *= opts.relative_scaling * (count / last_count) + (1.0 - opts.relative_scaling);

        let mut spot = None;
        while font_size >= opts.min_font_size {
            let extent = measure.measure(&entry.word, font_size) + Vec2::splat(2.0 * opts.margin);
            if let Some(rect) = find_spot(extent, &occupied, opts.canvas) {
                spot = Some(rect);
                break;
            }
            font_size *= opts.shrink;
        }

        let Some(rect) = spot else {
            log::debug!(
                "Word cloud full after {} of {} words",
                placed.len(),
                words.len()
            );
            break;
        };

        occupied.push(rect);
        placed.push(PlacedWord {
            word: entry.word.clone(),
            count: entry.count,
            font_size,
            rect: rect.shrink(opts.margin),
        });
        last_count = count.max(1.0);
    }

    WordCloud {
        canvas: opts.canvas,
        words: placed,
    }
}

/// First free position for a box of `size` along a spiral from the centre.
fn find_spot(size: Vec2, occupied: &[Rect], canvas: Vec2) -> Option<Rect> {
    if size.x > canvas.x || size.y > canvas.y {
        return None;
    }

    let bounds = Rect::from_min_size(Pos2::ZERO, canvas);
    let center = bounds.center();
    let aspect = canvas.x / canvas.y;
    // radius in y units at which the spiral has swept the canvas corners
    let max_radius = canvas.y * std::f32::consts::FRAC_1_SQRT_2 + size.y;
    let growth = SPIRAL_SPACING / std::f32::consts::TAU;

    let mut theta = 0.0_f32;
    loop {
        let radius = growth * theta;
        if radius > max_radius {
            return None;
        }

        let offset = vec2(radius * theta.cos() * aspect, radius * theta.sin());
        let candidate = Rect::from_center_size(center + offset, size);
        if bounds.contains_rect(candidate) && !occupied.iter().any(|r| r.intersects(candidate)) {
            return Some(candidate);
        }

        // roughly constant arc length between candidates
        theta += (4.0 / radius.max(1.0)).clamp(0.02, 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed advance per character.
    struct Mono;

    impl TextMeasure for Mono {
        fn measure(&self, text: &str, font_size: f32) -> Vec2 {
            vec2(text.chars().count() as f32 * font_size * 0.6, font_size)
        }
    }

    fn freq(words: &[(&str, usize)]) -> Vec<WordFrequency> {
        words
            .iter()
            .map(|(w, c)| WordFrequency {
                word: w.to_string(),
                count: *c,
            })
            .collect()
    }

    fn many(n: usize) -> Vec<WordFrequency> {
        (0..n)
            .map(|i| WordFrequency {
                word: format!("단어{i}"),
                count: n - i,
            })
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_cloud() {
        let cloud = layout(&[], &Mono, &LayoutOptions::default());
        assert!(cloud.is_empty());
        assert_eq!(cloud.canvas, CANVAS_SIZE);
    }

    #[test]
    fn most_frequent_word_is_centered() {
        let cloud = layout(
            &freq(&[("해킹", 10), ("공격", 3)]),
            &Mono,
            &LayoutOptions::default(),
        );
        let first = &cloud.words[0];
        assert_eq!(first.word, "해킹");
        let c = first.rect.center();
        assert!((c.x - 400.0).abs() < 0.01 && (c.y - 200.0).abs() < 0.01);
    }

    #[test]
    fn words_stay_on_canvas_without_overlap() {
        let cloud = layout(&many(60), &Mono, &LayoutOptions::default());
        assert!(!cloud.is_empty());

        let bounds = Rect::from_min_size(Pos2::ZERO, CANVAS_SIZE);
        for (i, a) in cloud.words.iter().enumerate() {
            assert!(bounds.contains_rect(a.rect), "{} off canvas", a.word);
            for b in &cloud.words[i + 1..] {
                assert!(
                    !a.rect.intersects(b.rect),
                    "{} overlaps {}",
                    a.word,
                    b.word
                );
            }
        }
    }

    #[test]
    fn font_size_never_grows_with_rank() {
        let cloud = layout(&many(40), &Mono, &LayoutOptions::default());
        for pair in cloud.words.windows(2) {
            assert!(pair[1].font_size <= pair[0].font_size);
        }
        // placement keeps the input order
        for (i, w) in cloud.words.iter().enumerate() {
            assert_eq!(w.word, format!("단어{i}"));
        }
    }

    #[test]
    fn oversized_words_are_shrunk_to_fit() {
        let opts = LayoutOptions {
            max_font_size: 400.0,
            ..LayoutOptions::default()
        };
        let cloud = layout(&freq(&[("ransomware", 5)]), &Mono, &opts);
        assert_eq!(cloud.words.len(), 1);
        assert!(cloud.words[0].font_size < 400.0);
        assert!(cloud.words[0].rect.width() <= CANVAS_SIZE.x);
    }

    #[test]
    fn flat_counts_keep_filling_gaps_with_small_words() {
        let flat: Vec<WordFrequency> = (0..100)
            .map(|i| WordFrequency {
                word: format!("단어{i}"),
                count: 1,
            })
            .collect();

        let coarse = LayoutOptions {
            min_font_size: 10.0,
            ..LayoutOptions::default()
        };
        let coarse_placed = layout(&flat, &Mono, &coarse).words.len();
        let placed = layout(&flat, &Mono, &LayoutOptions::default()).words.len();

        assert!(
            placed > coarse_placed,
            "placed {placed}, with a 10px floor {coarse_placed}"
        );
    }

    #[test]
    fn stops_once_canvas_is_full() {
        let opts = LayoutOptions {
            canvas: vec2(120.0, 40.0),
            max_font_size: 30.0,
            min_font_size: 20.0,
            ..LayoutOptions::default()
        };
        let cloud = layout(&many(50), &Mono, &opts);
        assert!(cloud.words.len() < 50);
    }
}
