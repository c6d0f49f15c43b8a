//! Panel sizing.
//!
//! Two independent rules share this module. [`Sizer::compute_size`] runs once
//! after a fresh row set has been rendered and measured; it grows or shrinks
//! the whole panel to fit. [`Sizer::content_area_height`] runs on every host
//! resize and only re-derives the scrollable region, refusing to go below the
//! usability floor so a manual shrink-drag cannot collapse it.

use tracing::debug;

use crate::types::{HeightStrategy, PanelGeometry};

/// Sizing constants, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizerConfig {
    pub min_width: u32,
    /// Added to the widest row
    pub horizontal_padding: u32,
    pub min_height: Option<u32>,
    pub max_height: u32,
    /// Slack for one more row plus a scrollbar
    pub scroll_buffer: u32,
    /// Smallest content area a host resize may produce
    pub content_floor: u32,
    /// Row height used by [`HeightStrategy::Estimated`]
    pub estimated_row_height: u32,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            min_width: 300,
            horizontal_padding: 40,
            min_height: Some(150),
            max_height: 1000,
            scroll_buffer: 28,
            content_floor: 100,
            estimated_row_height: 22,
        }
    }
}

/// Fixed vertical overhead around the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    /// Trigger control height
    pub control_height: u32,
    /// Gap below the trigger control
    pub control_margin: u32,
    /// Frame padding, applied top and bottom
    pub frame_padding: u32,
}

impl Chrome {
    pub fn fixed_height(&self) -> u32 {
        self.control_height + self.control_margin + 2 * self.frame_padding
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            control_height: 28,
            control_margin: 12,
            frame_padding: 10,
        }
    }
}

/// Post-render measurements of the current row set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMetrics {
    /// Rendered width of each row
    pub row_widths: Vec<u32>,
    /// Total stacked height of all rows including gaps
    pub content_height: u32,
}

impl RowMetrics {
    /// Metrics with a content height chosen by `strategy`.
    ///
    /// `measured_heights` are the laid-out heights of each row; they are only
    /// summed for [`HeightStrategy::Measured`].
    pub fn from_rows(
        row_widths: Vec<u32>,
        measured_heights: &[u32],
        strategy: HeightStrategy,
        config: &SizerConfig,
    ) -> Self {
        let content_height = match strategy {
            HeightStrategy::Measured => measured_heights.iter().sum(),
            HeightStrategy::Estimated => {
                row_widths.len() as u32 * config.estimated_row_height
            }
        };
        Self {
            row_widths,
            content_height,
        }
    }

    pub fn max_row_width(&self) -> u32 {
        self.row_widths.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sizer {
    pub config: SizerConfig,
}

impl Sizer {
    pub fn new(config: SizerConfig) -> Self {
        Self { config }
    }

    /// Panel size that fits `metrics` plus chrome, within the configured bounds
    pub fn compute_size(&self, metrics: &RowMetrics, chrome: &Chrome) -> PanelGeometry {
        let cfg = &self.config;
        let width = self.fit_width(metrics.max_row_width());

        let wanted = metrics
            .content_height
            .saturating_add(chrome.fixed_height())
            .saturating_add(cfg.scroll_buffer);
        let mut height = wanted.min(cfg.max_height);
        if let Some(min) = cfg.min_height {
            height = height.max(min.min(cfg.max_height));
        }

        debug!(
            rows = metrics.row_widths.len(),
            content_height = metrics.content_height,
            width,
            height,
            "computed panel size"
        );
        PanelGeometry::new(width, height)
    }

    /// Panel width for rows no wider than `max_row_width`
    pub fn fit_width(&self, max_row_width: u32) -> u32 {
        self.config
            .min_width
            .max(max_row_width.saturating_add(self.config.horizontal_padding))
    }

    /// Content area left inside a panel of `panel_height`, or `None` when it
    /// would not exceed the floor and the previous height must be kept
    pub fn content_area_height(&self, panel_height: u32, chrome: &Chrome) -> Option<u32> {
        let available = panel_height.saturating_sub(chrome.fixed_height());
        (available > self.config.content_floor).then_some(available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(widths: &[u32], content_height: u32) -> RowMetrics {
        RowMetrics {
            row_widths: widths.to_vec(),
            content_height,
        }
    }

    #[test]
    fn default_chrome_overhead() {
        assert_eq!(Chrome::default().fixed_height(), 60);
    }

    #[test]
    fn narrow_rows_get_minimum_width() {
        let size = Sizer::default().compute_size(&metrics(&[120, 200], 400), &Chrome::default());
        assert_eq!(size.width, 300);
        assert_eq!(size.height, 400 + 60 + 28);
    }

    #[test]
    fn wide_rows_add_padding() {
        let size = Sizer::default().compute_size(&metrics(&[120, 410, 260], 0), &Chrome::default());
        assert_eq!(size.width, 450);
    }

    #[test]
    fn height_is_clamped() {
        let sizer = Sizer::default();
        let chrome = Chrome::default();
        assert_eq!(sizer.compute_size(&metrics(&[], 0), &chrome).height, 150);
        assert_eq!(sizer.compute_size(&metrics(&[], 5000), &chrome).height, 1000);
    }

    #[test]
    fn min_height_can_be_omitted() {
        let sizer = Sizer::new(SizerConfig {
            min_height: None,
            ..SizerConfig::default()
        });
        assert_eq!(sizer.compute_size(&metrics(&[], 0), &Chrome::default()).height, 88);
    }

    #[test]
    fn estimated_height_ignores_measurements() {
        let cfg = SizerConfig::default();
        let estimated =
            RowMetrics::from_rows(vec![10, 20, 30], &[50, 50, 50], HeightStrategy::Estimated, &cfg);
        let measured =
            RowMetrics::from_rows(vec![10, 20, 30], &[50, 50, 50], HeightStrategy::Measured, &cfg);
        assert_eq!(estimated.content_height, 66);
        assert_eq!(measured.content_height, 150);
    }

    #[test]
    fn content_area_respects_floor() {
        let sizer = Sizer::default();
        let chrome = Chrome::default();
        assert_eq!(sizer.content_area_height(200, &chrome), Some(140));
        assert_eq!(sizer.content_area_height(160, &chrome), None);
        assert_eq!(sizer.content_area_height(161, &chrome), Some(101));
        assert_eq!(sizer.content_area_height(20, &chrome), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn size_within_bounds(
            widths in proptest::collection::vec(0u32..100_000, 0..64),
            content_height in 0u32..1_000_000,
        ) {
            let size = Sizer::default().compute_size(
                &RowMetrics { row_widths: widths, content_height },
                &Chrome::default(),
            );
            prop_assert!(size.width >= 300);
            prop_assert!((150..=1000).contains(&size.height));
        }

        #[test]
        fn floor_never_yields_small_area(panel_height in 0u32..2000) {
            let sizer = Sizer::default();
            if let Some(h) = sizer.content_area_height(panel_height, &Chrome::default()) {
                prop_assert!(h > 100);
            }
        }
    }
}
