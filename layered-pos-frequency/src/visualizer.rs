//! Hand-off point to whatever renders statistics.

use std::path::Path;

use crate::histogram::Histogram;

/// Renders a histogram to `destination`. What gets produced there is up to
/// the implementation; the aggregator never inspects it.
pub trait Visualizer {
    fn render(&self, statistics: &Histogram, destination: &Path);
}

/// Visualizer that only logs what it was asked to render.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    fn render(&self, statistics: &Histogram, destination: &Path) {
        tracing::debug!(
            "skipping render of {} labels to {}",
            statistics.len(),
            destination.display()
        );
    }
}
