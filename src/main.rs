use clap::Parser;
use ratatui::layout::Rect;
use std::process::ExitCode;
use sysinfo_panel::{
    app::App,
    cli::Cli,
    client::CheckClient,
    error::Result,
    inventory::normalize,
    logging::{self, LogTarget},
    print,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let target = if cli.print {
        LogTarget::Stderr
    } else {
        cli.log_file.clone().map_or(LogTarget::Off, LogTarget::File)
    };
    logging::init(cli.verbose, cli.debug, target)?;
    info!("sysinfo-panel v{}", env!("CARGO_PKG_VERSION"));

    let client = CheckClient::new(&cli.client_config())?;
    let options = cli.widget_options();

    if cli.print {
        let payload = match client.check().await {
            Ok(payload) => payload,
            Err(err) => {
                error!(error = %err, "system info check failed");
                print!("{}", print::render_failure(&err));
                return Ok(ExitCode::FAILURE);
            }
        };
        let text = if cli.json {
            print::render_json(&payload)?
        } else {
            let rows = normalize(&payload, &options.catalog, options.include_runtime_row);
            print::render_rows(&rows)
        };
        print!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // Run the app
    let mut terminal = ratatui::init();
    let size = terminal.size()?;
    let mut app = App::new(client, options, Rect::new(0, 0, size.width, size.height));
    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    result.map(|()| ExitCode::SUCCESS)
}
