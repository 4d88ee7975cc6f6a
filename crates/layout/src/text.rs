//! Word wrapping and horizontal line placement.

use crate::fonts;
use folio_style::{FontWeight, TextAlign};

/// One wrapped line with its measured width.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub width: f32,
}

/// Greedy word wrap against `max_width`. Breaks only at word boundaries —
/// a word wider than the line gets a line of its own and overflows rather
/// than being split mid-word. Explicit `\n` always forces a break. The
/// result is deterministic and stable: re-wrapping the joined output
/// yields the same lines.
pub fn wrap(text: &str, font_size: f32, weight: FontWeight, max_width: f32) -> Vec<Line> {
    let space_width = fonts::text_width(" ", font_size, weight);
    let mut lines = Vec::new();

    for hard_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in hard_line.split_whitespace() {
            let word_width = fonts::text_width(word, font_size, weight);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space_width + word_width > max_width {
                lines.push(Line {
                    text: std::mem::take(&mut current),
                    width: current_width,
                });
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            }
        }

        lines.push(Line {
            text: current,
            width: current_width,
        });
    }

    lines
}

/// Horizontal offset of a line within a content area of `max_width`,
/// anchored at `left`. Justified text is placed per word via
/// [`justify_words`]; here it anchors left like the last line of a
/// justified paragraph.
pub fn line_x(line: &Line, align: TextAlign, left: f32, max_width: f32) -> f32 {
    match align {
        TextAlign::Left | TextAlign::Justify => left,
        TextAlign::Center => left + (max_width - line.width) / 2.0,
        TextAlign::Right => left + max_width - line.width,
    }
}

/// Splits a wrapped line into words with x positions that distribute the
/// free space evenly across the inter-word gaps, filling `max_width`
/// exactly. Returns one entry per word. Lines with fewer than two words
/// cannot be justified and come back left-anchored.
pub fn justify_words(
    line: &Line,
    font_size: f32,
    weight: FontWeight,
    left: f32,
    max_width: f32,
) -> Vec<(String, f32, f32)> {
    let words: Vec<&str> = line.text.split(' ').collect();
    let space_width = fonts::text_width(" ", font_size, weight);

    let gap_count = words.len().saturating_sub(1);
    let extra_per_gap = if gap_count > 0 {
        ((max_width - line.width) / gap_count as f32).max(0.0)
    } else {
        0.0
    };

    let mut placed = Vec::with_capacity(words.len());
    let mut x = left;
    for word in words {
        let word_width = fonts::text_width(word, font_size, weight);
        placed.push((word.to_string(), x, word_width));
        x += word_width + space_width + extra_per_gap;
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 12.0;

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        let lines = wrap(
            "alpha beta gamma delta epsilon",
            SIZE,
            FontWeight::Normal,
            100.0,
        );
        assert!(lines.len() > 1);
        // No line is wider than the limit (every word here fits on a line).
        for line in &lines {
            assert!(line.width <= 100.0 + 0.01, "line too wide: {:?}", line);
            // Words survive intact.
            assert!(!line.text.contains('-'));
        }
    }

    #[test]
    fn wrap_never_splits_a_long_word() {
        let lines = wrap("supercalifragilistic", SIZE, FontWeight::Normal, 20.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "supercalifragilistic");
        assert!(lines[0].width > 20.0);
    }

    #[test]
    fn wrap_respects_hard_line_breaks() {
        let lines = wrap("one\ntwo", SIZE, FontWeight::Normal, 500.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "one");
        assert_eq!(lines[1].text, "two");
    }

    #[test]
    fn wrap_is_idempotent_over_its_own_output() {
        let text = "the quick brown fox jumps over the lazy dog again and again until wrapped";
        let first = wrap(text, SIZE, FontWeight::Normal, 120.0);
        let rejoined = first
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let second = wrap(&rejoined, SIZE, FontWeight::Normal, 120.0);
        assert_eq!(first, second);
    }

    #[test]
    fn center_alignment_centers_each_line() {
        let line = Line {
            text: "mid".into(),
            width: 40.0,
        };
        let x = line_x(&line, TextAlign::Center, 50.0, 200.0);
        assert!((x - (50.0 + 80.0)).abs() < 0.001);
    }

    #[test]
    fn justify_fills_the_line_exactly() {
        let lines = wrap("aa bb cc dd", SIZE, FontWeight::Normal, 400.0);
        assert_eq!(lines.len(), 1);
        let placed = justify_words(&lines[0], SIZE, FontWeight::Normal, 10.0, 400.0);
        assert_eq!(placed.len(), 4);
        let (_, last_x, last_w) = placed.last().unwrap();
        assert!((last_x + last_w - 410.0).abs() < 0.01);
    }
}
