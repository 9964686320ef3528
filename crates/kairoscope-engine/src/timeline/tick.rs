/// Half-width of the placeholder tick set (indices `-12..=12`).
pub const PLACEHOLDER_HALF_WIDTH: u32 = 12;

/// Distance in logical points between neighbouring ticks of the placeholder set.
pub const PLACEHOLDER_SPACING: f32 = 32.0;

/// Time-unit marker appended to major tick labels.
pub const UNIT_SUFFIX: &str = "s";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TickKind {
    Major,
    Minor,
}

impl TickKind {
    /// Even indices are major, odd indices minor.
    #[inline]
    pub fn for_index(index: i64) -> Self {
        if index % 2 == 0 {
            TickKind::Major
        } else {
            TickKind::Minor
        }
    }

    #[inline]
    pub fn is_major(self) -> bool {
        self == TickKind::Major
    }
}

/// One visual mark on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Integer position relative to the anchor; `0` is the present moment.
    pub index: i64,
    pub kind: TickKind,
    /// Present only on major ticks away from the anchor.
    pub label: Option<String>,
    /// Signed distance from the anchor in logical points.
    pub offset: f32,
}

impl Tick {
    /// Builds the tick at `index` for a given spacing.
    pub fn at(index: i64, spacing: f32) -> Self {
        let kind = TickKind::for_index(index);
        let label = if index != 0 && kind.is_major() {
            Some(format!("{}{}", index.unsigned_abs(), UNIT_SUFFIX))
        } else {
            None
        };

        Self {
            index,
            kind,
            label,
            offset: index as f32 * spacing,
        }
    }

    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.index == 0
    }
}

/// Tick generation request.
///
/// `spacing` is expected to be positive; offsets are ascending only then.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickSpec {
    pub half_width: u32,
    pub spacing: f32,
}

impl TickSpec {
    pub const fn new(half_width: u32, spacing: f32) -> Self {
        Self { half_width, spacing }
    }

    /// The fixed 25-tick set rendered before any scale integration exists.
    pub const fn placeholder() -> Self {
        Self::new(PLACEHOLDER_HALF_WIDTH, PLACEHOLDER_SPACING)
    }

    /// Number of ticks produced: `2 * half_width + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        2 * self.half_width as usize + 1
    }

    /// Ticks for indices `-half_width..=half_width`, left to right.
    pub fn generate(&self) -> Vec<Tick> {
        let n = i64::from(self.half_width);
        let mut ticks = Vec::with_capacity(self.len());
        ticks.extend((-n..=n).map(|i| Tick::at(i, self.spacing)));
        ticks
    }
}

impl Default for TickSpec {
    fn default() -> Self {
        Self::placeholder()
    }
}
