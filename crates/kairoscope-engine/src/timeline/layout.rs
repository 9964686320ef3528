use super::tick::Tick;

/// Accessibility label carried by the present-moment anchor.
pub const ANCHOR_LABEL: &str = "Present moment anchor";

const ANCHOR_FRACTION: f32 = 0.08;
const STRIP_MIN_HEIGHT: f32 = 200.0;
const STRIP_HEIGHT_PER_ANCHOR: f32 = 2.8;
const CANVAS_MIN_HEIGHT: f32 = 160.0;
const CANVAS_HEIGHT_PER_ANCHOR: f32 = 2.4;
const TITLE_TOP_PADDING: f32 = 24.0;
const TITLE_BOTTOM_PADDING: f32 = 32.0;
const STRIP_HORIZONTAL_PADDING: f32 = 24.0;

const MAJOR_HEIGHT: f32 = 36.0;
const MINOR_HEIGHT: f32 = 20.0;
const MAJOR_STROKE: f32 = 2.0;
const MINOR_STROKE: f32 = 1.0;
const LABEL_GAP: f32 = 12.0;

/// Ticks closer than this to zero are treated as sitting on the anchor.
const ANCHOR_EPSILON: f32 = 0.1;

/// Point in logical pixels (origin top-left, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Straight line between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Stroke color role; concrete colors belong to the presentation layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Emphasis {
    Accent,
    Muted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    /// Center of the label.
    pub position: Point,
}

/// Vertical tick line plus optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub line: Segment,
    pub stroke_width: f32,
    pub emphasis: Emphasis,
    pub label: Option<LabelPlacement>,
}

/// Screen-level metrics of the timeline shell for a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShellMetrics {
    pub anchor_diameter: f32,
    /// Height reserved for the tick strip.
    pub strip_height: f32,
    /// Height of the tick canvas inside the strip.
    pub canvas_height: f32,
    /// Width of the tick canvas after horizontal padding.
    pub canvas_width: f32,
    /// Distance from the top edge to the title baseline box.
    pub title_top: f32,
    pub title_bottom_padding: f32,
}

impl ShellMetrics {
    /// Metrics for a `width` x `height` viewport with `safe_top` inset.
    pub fn for_viewport(width: f32, height: f32, safe_top: f32) -> Self {
        let anchor_diameter = width.min(height) * ANCHOR_FRACTION;
        Self {
            anchor_diameter,
            strip_height: (anchor_diameter * STRIP_HEIGHT_PER_ANCHOR).max(STRIP_MIN_HEIGHT),
            canvas_height: (anchor_diameter * CANVAS_HEIGHT_PER_ANCHOR).max(CANVAS_MIN_HEIGHT),
            canvas_width: (width - 2.0 * STRIP_HORIZONTAL_PADDING).max(0.0),
            title_top: safe_top + TITLE_TOP_PADDING,
            title_bottom_padding: TITLE_BOTTOM_PADDING,
        }
    }
}

/// Positioned timeline primitives for one canvas.
///
/// Canvas coordinates: origin top-left of the tick canvas. Tick offsets are
/// measured from the horizontal center.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLayout {
    pub center_x: f32,
    pub baseline_y: f32,
    /// Horizontal position of the present-moment anchor.
    pub present_x: f32,
    /// Full-width baseline, extending one canvas width past each edge.
    pub track: Segment,
    /// Part of the baseline left of the anchor.
    pub elapsed: Segment,
    pub marks: Vec<TickMark>,
    pub anchor_center: Point,
    pub anchor_diameter: f32,
}

impl TickLayout {
    pub fn compute(ticks: &[Tick], width: f32, height: f32, anchor_diameter: f32) -> Self {
        let center_x = width / 2.0;
        let baseline_y = height * 0.5;

        let present_offset = ticks
            .iter()
            .find(|t| t.offset.abs() < ANCHOR_EPSILON)
            .map_or(0.0, |t| t.offset);
        let present_x = center_x + present_offset;

        let track = Segment {
            from: Point::new(-width, baseline_y),
            to: Point::new(width * 2.0, baseline_y),
        };
        let elapsed = Segment {
            from: Point::new(-width, baseline_y),
            to: Point::new(present_x.min(width * 2.0), baseline_y),
        };

        let marks = ticks.iter().map(|t| mark(t, center_x, baseline_y)).collect();

        Self {
            center_x,
            baseline_y,
            present_x,
            track,
            elapsed,
            marks,
            anchor_center: Point::new(present_x, baseline_y),
            anchor_diameter,
        }
    }
}

fn mark(tick: &Tick, center_x: f32, baseline_y: f32) -> TickMark {
    let x = center_x + tick.offset;
    let major = tick.kind.is_major();
    let half = (if major { MAJOR_HEIGHT } else { MINOR_HEIGHT }) / 2.0;

    TickMark {
        line: Segment {
            from: Point::new(x, baseline_y - half),
            to: Point::new(x, baseline_y + half),
        },
        stroke_width: if major { MAJOR_STROKE } else { MINOR_STROKE },
        emphasis: if major { Emphasis::Accent } else { Emphasis::Muted },
        label: tick.label.as_ref().map(|text| LabelPlacement {
            text: text.clone(),
            position: Point::new(x, baseline_y - half - LABEL_GAP),
        }),
    }
}
