//! Plain-text rendering of a [`TickLayout`], used by the headless driver.

use kairoscope_engine::timeline::{Emphasis, TickLayout};

/// Renders a tick layout as three text rows: labels, tick marks, baseline.
///
/// Row legend: `|` major tick, `.` minor tick, `=` elapsed baseline, `-`
/// remaining baseline, `O` the present-moment anchor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStrip {
    /// Logical points covered by one character column.
    pub points_per_column: f32,
}

impl Default for TextStrip {
    fn default() -> Self {
        Self { points_per_column: 8.0 }
    }
}

impl TextStrip {
    pub fn new(points_per_column: f32) -> Self {
        Self { points_per_column }
    }

    /// Renders the part of `layout` inside `[0, width)`.
    pub fn render(&self, layout: &TickLayout, width: f32) -> String {
        let columns = self.column_count(width);
        let mut labels = vec![' '; columns];
        let mut marks = vec![' '; columns];
        let mut baseline: Vec<char> = (0..columns)
            .map(|c| if self.x_of(c) < layout.present_x { '=' } else { '-' })
            .collect();

        for mark in &layout.marks {
            let Some(col) = self.column_of(mark.line.from.x, columns) else {
                continue;
            };
            marks[col] = match mark.emphasis {
                Emphasis::Accent => '|',
                Emphasis::Muted => '.',
            };
            if let Some(label) = &mark.label {
                let len = label.text.chars().count();
                let start = col.saturating_sub(len / 2);
                for (i, ch) in label.text.chars().enumerate() {
                    if let Some(slot) = labels.get_mut(start + i) {
                        *slot = ch;
                    }
                }
            }
        }

        if let Some(col) = self.column_of(layout.present_x, columns) {
            baseline[col] = 'O';
        }

        let rows: [String; 3] = [
            labels.into_iter().collect::<String>().trim_end().to_string(),
            marks.into_iter().collect::<String>().trim_end().to_string(),
            baseline.into_iter().collect(),
        ];
        rows.join("\n")
    }

    fn column_count(&self, width: f32) -> usize {
        if width <= 0.0 || self.points_per_column <= 0.0 {
            return 0;
        }
        (width / self.points_per_column).ceil() as usize
    }

    fn x_of(&self, column: usize) -> f32 {
        column as f32 * self.points_per_column
    }

    fn column_of(&self, x: f32, columns: usize) -> Option<usize> {
        if x < 0.0 || !x.is_finite() {
            return None;
        }
        let col = (x / self.points_per_column).floor() as usize;
        (col < columns).then_some(col)
    }
}
