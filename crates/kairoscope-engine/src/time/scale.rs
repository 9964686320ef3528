/// Scale state tracked by [`TimeScaleEngine`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeScaleState {
    /// Units of elapsed time represented per logical point.
    pub units_per_point: f64,
}

impl Default for TimeScaleState {
    fn default() -> Self {
        Self { units_per_point: 1.0 }
    }
}

/// Converts gesture input into a temporal scale.
///
/// Gesture integration does not exist yet; the scale is only ever replaced
/// wholesale through [`update`](Self::update).
#[derive(Debug, Clone, Default)]
pub struct TimeScaleEngine {
    state: TimeScaleState,
}

impl TimeScaleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: TimeScaleState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> TimeScaleState {
        self.state
    }

    /// Replaces the stored scale unconditionally.
    pub fn update(&mut self, units_per_point: f64) {
        self.state.units_per_point = units_per_point;
    }
}
