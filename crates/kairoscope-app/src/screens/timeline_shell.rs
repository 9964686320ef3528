use std::sync::Arc;

use kairoscope_engine::timeline::{ShellMetrics, Snapshot, TickLayout, ANCHOR_LABEL};

use crate::environment::AppEnvironment;
use crate::view_model::{Transition, TimelineViewModel};

use super::APP_TITLE;

/// Everything needed to draw one frame of the shell.
#[derive(Debug, Clone)]
pub struct ShellFrame {
    pub metrics: ShellMetrics,
    pub ticks: TickLayout,
    pub snapshot: Arc<Snapshot>,
}

/// Timeline screen: title, tick strip and present-moment anchor.
#[derive(Debug)]
pub struct TimelineShell {
    view_model: TimelineViewModel,
}

impl TimelineShell {
    pub fn new(environment: &AppEnvironment) -> Self {
        Self::with_view_model(TimelineViewModel::from_factory(&environment.timeline_factory))
    }

    pub fn with_view_model(view_model: TimelineViewModel) -> Self {
        Self { view_model }
    }

    pub fn title(&self) -> &'static str {
        APP_TITLE
    }

    pub fn anchor_accessibility_label(&self) -> &'static str {
        ANCHOR_LABEL
    }

    /// Screen became visible.
    pub fn on_appear(&mut self) -> Transition {
        self.view_model.start()
    }

    /// Screen left the hierarchy.
    pub fn on_disappear(&mut self) -> Transition {
        self.view_model.stop()
    }

    #[inline]
    pub fn view_model(&self) -> &TimelineViewModel {
        &self.view_model
    }

    /// Lays out the published snapshot for a `width` x `height` viewport.
    pub fn frame(&self, width: f32, height: f32, safe_top: f32) -> ShellFrame {
        let metrics = ShellMetrics::for_viewport(width, height, safe_top);
        let snapshot = self.view_model.snapshot();
        let ticks = TickLayout::compute(
            snapshot.ticks(),
            metrics.canvas_width,
            metrics.canvas_height,
            metrics.anchor_diameter,
        );
        ShellFrame { metrics, ticks, snapshot }
    }
}
