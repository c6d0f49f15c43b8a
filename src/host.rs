//! Terminal host for the panel.
//!
//! The panel is sized in logical pixels; the terminal maps one cell to
//! `CELL_WIDTH` × `CELL_HEIGHT` of them.

use ratatui::layout::Rect;
use tracing::debug;

use crate::panel::HostPanel;
use crate::sizer::Chrome;
use crate::types::PanelGeometry;

pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

/// Border row top and bottom, one line of trigger, one blank line below it
pub const TERMINAL_CHROME: Chrome = Chrome {
    control_height: CELL_HEIGHT,
    control_margin: CELL_HEIGHT,
    frame_padding: CELL_HEIGHT,
};

pub fn px_to_cols(px: u32) -> u16 {
    px.div_ceil(CELL_WIDTH).min(u16::MAX as u32) as u16
}

pub fn px_to_rows(px: u32) -> u16 {
    px.div_ceil(CELL_HEIGHT).min(u16::MAX as u32) as u16
}

pub fn cols_to_px(cols: u16) -> u32 {
    cols as u32 * CELL_WIDTH
}

pub fn rows_to_px(rows: u16) -> u32 {
    rows as u32 * CELL_HEIGHT
}

/// Floating panel inside a terminal canvas
#[derive(Debug, Clone)]
pub struct TerminalHost {
    size: PanelGeometry,
    /// Canvas the panel must fit in
    bounds: PanelGeometry,
    relayouts: u64,
}

impl TerminalHost {
    pub fn new(canvas: Rect) -> Self {
        let bounds = rect_geometry(canvas);
        Self {
            size: clamp(PanelGeometry::DEFAULT, bounds),
            bounds,
            relayouts: 0,
        }
    }

    /// Panel rectangle anchored at the canvas origin
    pub fn panel_rect(&self, canvas: Rect) -> Rect {
        Rect {
            x: canvas.x,
            y: canvas.y,
            width: px_to_cols(self.size.width).min(canvas.width),
            height: px_to_rows(self.size.height).min(canvas.height),
        }
    }

    pub fn relayouts(&self) -> u64 {
        self.relayouts
    }

    /// Track a new canvas size. Returns `true` when the panel had to shrink.
    pub fn set_bounds(&mut self, canvas: Rect) -> bool {
        let bounds = rect_geometry(canvas);
        if bounds == self.bounds {
            return false;
        }
        self.bounds = bounds;
        let clamped = clamp(self.size, bounds);
        let changed = clamped != self.size;
        self.size = clamped;
        changed
    }

    /// Manual resize by whole cells
    pub fn resize_by(&mut self, cols: i32, rows: i32) -> PanelGeometry {
        let width = self.size.width as i64 + cols as i64 * CELL_WIDTH as i64;
        let height = self.size.height as i64 + rows as i64 * CELL_HEIGHT as i64;
        let requested = PanelGeometry::new(
            width.clamp(0, u32::MAX as i64) as u32,
            height.clamp(0, u32::MAX as i64) as u32,
        );
        self.size = clamp(requested, self.bounds);
        debug!(width = self.size.width, height = self.size.height, "panel resized by user");
        self.size
    }
}

impl HostPanel for TerminalHost {
    fn size(&self) -> PanelGeometry {
        self.size
    }

    fn set_size(&mut self, size: PanelGeometry) {
        self.size = clamp(size, self.bounds);
    }

    fn relayout(&mut self) {
        self.relayouts += 1;
    }
}

fn rect_geometry(rect: Rect) -> PanelGeometry {
    PanelGeometry::new(cols_to_px(rect.width), rows_to_px(rect.height))
}

/// At least one cell, at most the canvas
fn clamp(size: PanelGeometry, bounds: PanelGeometry) -> PanelGeometry {
    PanelGeometry::new(
        size.width.min(bounds.width).max(CELL_WIDTH),
        size.height.min(bounds.height).max(CELL_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_conversion_rounds_up() {
        assert_eq!(px_to_cols(300), 38);
        assert_eq!(px_to_cols(296), 37);
        assert_eq!(px_to_rows(1000), 63);
        assert_eq!(cols_to_px(80), 640);
    }

    #[test]
    fn terminal_chrome_is_four_cells() {
        assert_eq!(TERMINAL_CHROME.fixed_height(), 64);
    }

    #[test]
    fn default_panel_fits_large_canvas() {
        let host = TerminalHost::new(Rect::new(0, 2, 200, 60));
        assert_eq!(host.size(), PanelGeometry::DEFAULT);
        let rect = host.panel_rect(Rect::new(0, 2, 200, 60));
        assert_eq!((rect.width, rect.height), (50, 13));
    }

    #[test]
    fn set_size_is_clamped_to_canvas() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 80, 21));
        host.set_size(PanelGeometry::new(900, 900));
        assert_eq!(host.size(), PanelGeometry::new(640, 336));
    }

    #[test]
    fn shrinking_canvas_reports_change() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 200, 60));
        assert!(!host.set_bounds(Rect::new(0, 0, 200, 60)));
        assert!(host.set_bounds(Rect::new(0, 0, 40, 60)));
        assert_eq!(host.size().width, 320);
    }

    #[test]
    fn manual_resize_moves_by_cells() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 200, 60));
        assert_eq!(host.resize_by(0, -1).height, 184);
        assert_eq!(host.resize_by(2, 0).width, 416);
        assert_eq!(host.resize_by(0, -100).height, CELL_HEIGHT);
    }
}
