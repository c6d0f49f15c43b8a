use serde::Serialize;

/// One label/value line of the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
    /// Set only for library rows whose version resolved to the sentinel
    pub missing: bool,
}

impl DisplayRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            missing: false,
        }
    }

    pub fn missing(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            missing: true,
            ..Self::new(label, value)
        }
    }
}

/// Panel size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelGeometry {
    pub width: u32,
    pub height: u32,
}

impl PanelGeometry {
    /// Size a freshly created panel starts with
    pub const DEFAULT: PanelGeometry = PanelGeometry::new(400, 200);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How the content height fed to the sizer is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HeightStrategy {
    /// Sum of each row's laid-out height
    #[default]
    Measured,
    /// Row count times a fixed row height
    Estimated,
}

/// State of the "run check" trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    Checking,
}

impl TriggerState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Run System Info Check",
            Self::Checking => "Checking...",
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self == Self::Idle
    }
}
