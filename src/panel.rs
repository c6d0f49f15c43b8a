//! The system info widget: trigger state, current rows and content-area height.
//!
//! The widget knows nothing about how it is drawn. A host embeds it, reports
//! its own size through [`HostPanel`], and forwards external resizes to
//! [`SysInfoPanel::on_host_resized`].

use tracing::{debug, info, warn};

use crate::error::CheckError;
use crate::inventory::{normalize, InventoryPayload, LibraryCatalog};
use crate::sizer::{Chrome, RowMetrics, Sizer, SizerConfig};
use crate::types::{DisplayRow, HeightStrategy, PanelGeometry, TriggerState};

/// Text of the single row shown when a check fails
pub const ERROR_MESSAGE: &str = "Failed to get system information";

/// What a host needs to offer the widget
pub trait HostPanel {
    /// Current panel size
    fn size(&self) -> PanelGeometry;
    /// Request a new panel size; the host may clamp it
    fn set_size(&mut self, size: PanelGeometry);
    /// Re-layout after a size change
    fn relayout(&mut self);
}

/// Widget configuration; replaces separate widget variants
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    /// Show a PyTorch row ahead of the library rows
    pub include_runtime_row: bool,
    pub height_strategy: HeightStrategy,
    pub catalog: LibraryCatalog,
    pub sizer: SizerConfig,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            include_runtime_row: true,
            height_strategy: HeightStrategy::default(),
            catalog: LibraryCatalog::default(),
            sizer: SizerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Empty,
    Rows(Vec<DisplayRow>),
    Failed(CheckError),
}

pub struct SysInfoPanel {
    options: WidgetOptions,
    sizer: Sizer,
    chrome: Chrome,
    trigger: TriggerState,
    content: PanelContent,
    /// Height of the scrollable row region
    content_height: u32,
    /// First visible row
    scroll: usize,
    /// A fresh row set has not been measured yet
    needs_autosize: bool,
}

impl SysInfoPanel {
    pub fn new(options: WidgetOptions, chrome: Chrome) -> Self {
        let sizer = Sizer::new(options.sizer);
        let content_height = sizer
            .content_area_height(PanelGeometry::DEFAULT.height, &chrome)
            .unwrap_or(options.sizer.content_floor);
        Self {
            options,
            sizer,
            chrome,
            trigger: TriggerState::Idle,
            content: PanelContent::Empty,
            content_height,
            scroll: 0,
            needs_autosize: false,
        }
    }

    /// Give a newly embedded panel its default size
    pub fn mount<H: HostPanel>(&mut self, host: &mut H) {
        host.set_size(PanelGeometry::DEFAULT);
        host.relayout();
        self.on_host_resized(host.size());
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn sizer(&self) -> &Sizer {
        &self.sizer
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn trigger(&self) -> TriggerState {
        self.trigger
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn needs_autosize(&self) -> bool {
        self.needs_autosize
    }

    /// Number of lines the content region shows
    pub fn line_count(&self) -> usize {
        match &self.content {
            PanelContent::Empty => 0,
            PanelContent::Rows(rows) => rows.len(),
            PanelContent::Failed(_) => 1,
        }
    }

    /// Start a check. Returns `false` while another check is in flight.
    pub fn begin_check(&mut self) -> bool {
        if !self.trigger.is_enabled() {
            debug!("check already in flight, ignoring trigger");
            return false;
        }
        self.trigger = TriggerState::Checking;
        self.content = PanelContent::Empty;
        self.scroll = 0;
        self.needs_autosize = false;
        true
    }

    /// Finish the in-flight check with its outcome.
    ///
    /// The trigger is re-enabled before the outcome is looked at.
    pub fn finish_check(&mut self, result: Result<InventoryPayload, CheckError>) {
        self.trigger = TriggerState::Idle;
        self.scroll = 0;
        match result {
            Ok(payload) => {
                let rows = normalize(
                    &payload,
                    &self.options.catalog,
                    self.options.include_runtime_row,
                );
                info!(rows = rows.len(), "system info check complete");
                self.content = PanelContent::Rows(rows);
                self.needs_autosize = true;
            }
            Err(err) => {
                warn!(error = %err, "system info check failed");
                self.content = PanelContent::Failed(err);
                self.needs_autosize = false;
            }
        }
    }

    /// Fit the host to the rendered rows.
    ///
    /// `row_widths` and `measured_heights` are the host's post-render
    /// measurements; the heights are only used by the measured strategy.
    pub fn autosize<H: HostPanel>(
        &mut self,
        host: &mut H,
        row_widths: Vec<u32>,
        measured_heights: &[u32],
    ) -> PanelGeometry {
        let metrics = RowMetrics::from_rows(
            row_widths,
            measured_heights,
            self.options.height_strategy,
            &self.options.sizer,
        );
        let size = self.sizer.compute_size(&metrics, &self.chrome);
        host.set_size(size);
        host.relayout();
        self.needs_autosize = false;
        self.on_host_resized(host.size());
        size
    }

    /// Re-derive the content area after the host changed the panel size.
    /// Below the floor the previous height is kept.
    pub fn on_host_resized(&mut self, size: PanelGeometry) {
        match self.sizer.content_area_height(size.height, &self.chrome) {
            Some(height) => self.content_height = height,
            None => debug!(
                panel_height = size.height,
                kept = self.content_height,
                "content area below floor, keeping previous height"
            ),
        }
    }

    pub fn scroll_down(&mut self, visible: usize) {
        let max = self.line_count().saturating_sub(visible);
        self.scroll = (self.scroll + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Host that records every call and applies sizes verbatim
    #[derive(Default)]
    struct RecordingHost {
        size: PanelGeometry,
        relayouts: usize,
    }

    impl HostPanel for RecordingHost {
        fn size(&self) -> PanelGeometry {
            self.size
        }

        fn set_size(&mut self, size: PanelGeometry) {
            self.size = size;
        }

        fn relayout(&mut self) {
            self.relayouts += 1;
        }
    }

    fn payload(value: serde_json::Value) -> InventoryPayload {
        serde_json::from_value(value).expect("object payload")
    }

    fn panel() -> SysInfoPanel {
        SysInfoPanel::new(WidgetOptions::default(), Chrome::default())
    }

    #[test]
    fn starts_idle_with_default_content_area() {
        let panel = panel();
        assert_eq!(panel.trigger(), TriggerState::Idle);
        assert_eq!(panel.content(), &PanelContent::Empty);
        assert_eq!(panel.content_height(), 140);
    }

    #[test]
    fn second_trigger_is_refused_while_checking() {
        let mut panel = panel();
        assert!(panel.begin_check());
        assert_eq!(panel.trigger(), TriggerState::Checking);
        assert!(!panel.begin_check());
    }

    #[test]
    fn begin_clears_previous_rows() {
        let mut panel = panel();
        panel.begin_check();
        panel.finish_check(Ok(payload(json!({"python_version": "3.10.14"}))));
        assert!(matches!(panel.content(), PanelContent::Rows(_)));

        panel.begin_check();
        assert_eq!(panel.content(), &PanelContent::Empty);
    }

    #[test]
    fn transport_failure_shows_one_error_row_and_reenables() {
        let mut panel = panel();
        panel.begin_check();
        panel.finish_check(Err(CheckError::transport("connection refused")));

        assert_eq!(panel.line_count(), 1);
        assert!(matches!(panel.content(), PanelContent::Failed(CheckError::Transport(_))));
        assert_eq!(panel.trigger(), TriggerState::Idle);
        assert!(panel.trigger().is_enabled());
        assert!(!panel.needs_autosize());
    }

    #[test]
    fn success_requests_autosize() {
        let mut panel = panel();
        panel.begin_check();
        panel.finish_check(Ok(payload(json!({}))));
        assert!(panel.needs_autosize());
        assert_eq!(panel.line_count(), 8 + 12);
    }

    #[test]
    fn autosize_applies_to_host_and_updates_content_area() {
        let mut panel = panel();
        let mut host = RecordingHost::default();
        panel.mount(&mut host);
        assert_eq!(host.size, PanelGeometry::DEFAULT);

        let size = panel.autosize(&mut host, vec![180, 420], &[22; 20]);
        assert_eq!(size, PanelGeometry::new(460, 440 + 60 + 28));
        assert_eq!(host.size, size);
        assert_eq!(host.relayouts, 2);
        assert_eq!(panel.content_height(), size.height - 60);
    }

    #[test]
    fn estimated_strategy_uses_row_count() {
        let options = WidgetOptions {
            height_strategy: HeightStrategy::Estimated,
            ..WidgetOptions::default()
        };
        let mut panel = SysInfoPanel::new(options, Chrome::default());
        let mut host = RecordingHost::default();
        let size = panel.autosize(&mut host, vec![100; 10], &[999; 10]);
        assert_eq!(size.height, 220 + 60 + 28);
    }

    #[test]
    fn shrink_below_floor_keeps_content_height() {
        let mut panel = panel();
        panel.on_host_resized(PanelGeometry::new(400, 500));
        assert_eq!(panel.content_height(), 440);

        panel.on_host_resized(PanelGeometry::new(400, 150));
        assert_eq!(panel.content_height(), 440);

        panel.on_host_resized(PanelGeometry::new(400, 300));
        assert_eq!(panel.content_height(), 240);
    }

    #[test]
    fn scrolling_is_bounded() {
        let mut panel = panel();
        panel.begin_check();
        panel.finish_check(Ok(payload(json!({}))));
        for _ in 0..100 {
            panel.scroll_down(5);
        }
        assert_eq!(panel.scroll(), panel.line_count() - 5);
        for _ in 0..100 {
            panel.scroll_up();
        }
        assert_eq!(panel.scroll(), 0);
    }
}
