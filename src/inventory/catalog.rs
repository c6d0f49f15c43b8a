/// Value shown for a library the backend did not report
pub const NOT_INSTALLED: &str = "Not installed";

/// Libraries checked by default, in display order
pub const DEFAULT_LIBRARIES: [&str; 12] = [
    "torchvision",
    "torchaudio",
    "xformers",
    "sageattention",
    "nunchaku",
    "peft",
    "triton",
    "opencv",
    "pillow",
    "numpy",
    "transformers",
    "diffusers",
];

/// Ordered list of library identifiers rendered after the fixed rows.
///
/// The order is the display order. It never depends on the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryCatalog {
    entries: Vec<String>,
}

impl LibraryCatalog {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LibraryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARIES)
    }
}

/// Payload key holding the version of `identifier`, e.g. `"Sage Attention"` → `"sage_attention_version"`
pub fn payload_key(identifier: &str) -> String {
    let mut key: String = identifier
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
        .collect();
    key.push_str("_version");
    key
}
