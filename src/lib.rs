//! System info panel.
//!
//! Fetches a host inventory snapshot from a backend's `/sysinfo/check`
//! endpoint, normalizes it into ordered label/value rows and keeps an
//! auto-sizing panel fitted to them.

pub mod app;
pub mod cli;
pub mod client;
pub mod error;
pub mod host;
pub mod inventory;
pub mod logging;
pub mod panel;
pub mod print;
pub mod sizer;
pub mod types;
pub mod ui;

pub use error::{AppError, CheckError, Result};
pub use inventory::{normalize, InventoryPayload, LibraryCatalog};
pub use panel::{HostPanel, SysInfoPanel, WidgetOptions};
pub use sizer::{Chrome, RowMetrics, Sizer, SizerConfig};
pub use types::{DisplayRow, HeightStrategy, PanelGeometry, TriggerState};
