use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::client::{ClientConfig, DEFAULT_ENDPOINT};
use crate::host::CELL_HEIGHT;
use crate::inventory::LibraryCatalog;
use crate::panel::WidgetOptions;
use crate::sizer::SizerConfig;
use crate::types::HeightStrategy;

/// System info panel — checks a backend's host inventory and shows it in an auto-sizing panel
#[derive(Parser, Debug)]
#[command(name = "sysinfo-panel")]
#[command(author, version, about)]
#[command(long_about = "Interactive panel that asks a backend for a snapshot of its \n\
    environment (OS, CPU, memory, GPU/CUDA, Python and ML library versions) \n\
    via POST /sysinfo/check and renders it as label/value rows.\n\n\
    Press Enter inside the panel to run a check, or use --print to run \n\
    one check and write the rows to stdout.")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Leave out the PyTorch row
    #[arg(long)]
    pub no_runtime_row: bool,

    /// How row content height is obtained when autosizing
    #[arg(long, value_enum, default_value_t = HeightStrategy::Measured)]
    pub height_strategy: HeightStrategy,

    /// Libraries to list, in display order (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub libraries: Vec<String>,

    /// Run one check, print the rows and exit
    #[arg(long)]
    pub print: bool,

    /// With --print, emit the raw payload as pretty JSON instead of rows
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Write logs to this file (the interactive panel never logs to the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Info-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug-level logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    pub fn widget_options(&self) -> WidgetOptions {
        let catalog = if self.libraries.is_empty() {
            LibraryCatalog::default()
        } else {
            LibraryCatalog::new(
                self.libraries
                    .iter()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty()),
            )
        };
        WidgetOptions {
            include_runtime_row: !self.no_runtime_row,
            height_strategy: self.height_strategy,
            catalog,
            sizer: SizerConfig {
                // terminal rows are exactly one cell tall
                estimated_row_height: CELL_HEIGHT,
                ..SizerConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["sysinfo-panel"]);
        let options = cli.widget_options();
        assert!(options.include_runtime_row);
        assert_eq!(options.height_strategy, HeightStrategy::Measured);
        assert_eq!(options.catalog, LibraryCatalog::default());
        assert_eq!(cli.client_config(), ClientConfig::default());
    }

    #[test]
    fn variant_flags() {
        let cli = Cli::parse_from([
            "sysinfo-panel",
            "--no-runtime-row",
            "--height-strategy",
            "estimated",
            "--libraries",
            "numpy, triton",
            "--endpoint",
            "http://gpu-box:8188",
        ]);
        let options = cli.widget_options();
        assert!(!options.include_runtime_row);
        assert_eq!(options.height_strategy, HeightStrategy::Estimated);
        assert_eq!(options.catalog, LibraryCatalog::new(["numpy", "triton"]));
        assert_eq!(cli.client_config().endpoint, "http://gpu-box:8188");
    }

    #[test]
    fn json_requires_print() {
        assert!(Cli::try_parse_from(["sysinfo-panel", "--json"]).is_err());
        assert!(Cli::try_parse_from(["sysinfo-panel", "--print", "--json"]).is_ok());
    }
}
