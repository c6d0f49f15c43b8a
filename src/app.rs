use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error};

use crate::client::CheckClient;
use crate::error::{CheckError, Result};
use crate::host::{TerminalHost, TERMINAL_CHROME};
use crate::inventory::InventoryPayload;
use crate::panel::{HostPanel, SysInfoPanel, WidgetOptions};
use crate::ui;

// -- Refresh Intervals --
/// Clock redraw
const REFRESH_UI: Duration = Duration::from_secs(1);
/// How often an in-flight check is polled for completion
const CHECK_POLL: Duration = Duration::from_millis(100);

type CheckHandle = JoinHandle<std::result::Result<InventoryPayload, CheckError>>;

/// Main application state
pub struct App {
    /// The embedded system info widget
    pub panel: SysInfoPanel,
    /// Terminal-side panel geometry
    pub host: TerminalHost,
    /// Backend client, cloned into each check task
    pub client: CheckClient,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Whether terminal is too small
    pub too_small: bool,
    /// In-flight check
    check_handle: Option<CheckHandle>,
}

impl App {
    pub fn new(client: CheckClient, options: WidgetOptions, screen: Rect) -> Self {
        let mut host = TerminalHost::new(ui::canvas_area(screen));
        let mut panel = SysInfoPanel::new(options, TERMINAL_CHROME);
        panel.mount(&mut host);
        Self {
            panel,
            host,
            client,
            should_quit: false,
            show_help: false,
            too_small: false,
            check_handle: None,
        }
    }

    /// Run the main event loop
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut ui_tick = interval(REFRESH_UI);
        let mut check_tick = interval(CHECK_POLL);
        let mut event_stream = crossterm::event::EventStream::new();

        loop {
            self.poll_check().await;

            // Track terminal size as the host canvas
            let size = terminal.size()?;
            let screen = Rect::new(0, 0, size.width, size.height);
            self.too_small = size.width < ui::MIN_COLS || size.height < ui::MIN_ROWS;
            self.set_canvas(ui::canvas_area(screen));

            terminal.draw(|frame| ui::render(frame, self))?;

            if self.should_quit {
                return Ok(());
            }

            tokio::select! {
                _ = ui_tick.tick() => {}
                _ = check_tick.tick(), if self.check_handle.is_some() => {}
                event = event_stream.next() => {
                    match event {
                        Some(Ok(evt)) => self.handle_event(evt),
                        Some(Err(e)) => error!(error = %e, "terminal event error"),
                        None => self.should_quit = true,
                    }
                }
            }
        }
    }

    /// Whether a check is still running
    pub fn is_checking(&self) -> bool {
        self.check_handle.is_some()
    }

    /// Spawn a check unless one is already in flight
    pub fn start_check(&mut self) {
        if !self.panel.begin_check() {
            return;
        }
        let client = self.client.clone();
        self.check_handle = Some(tokio::spawn(async move { client.check().await }));
    }

    /// Collect a finished check, then fit the panel to the new rows
    pub async fn poll_check(&mut self) {
        let finished = self
            .check_handle
            .as_ref()
            .is_some_and(|handle| handle.is_finished());
        if !finished {
            return;
        }
        let Some(handle) = self.check_handle.take() else {
            return;
        };

        let result = match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(CheckError::transport(format!(
                "check task did not complete: {}",
                join_err
            ))),
        };
        self.panel.finish_check(result);

        if self.panel.needs_autosize() {
            let (widths, heights) = ui::panel::measure_rows(&self.panel);
            let size = self.panel.autosize(&mut self.host, widths, &heights);
            debug!(width = size.width, height = size.height, "panel autosized");
        }
    }

    /// Host canvas changed; clamp the panel and tell the widget
    pub fn set_canvas(&mut self, canvas: Rect) {
        if self.host.set_bounds(canvas) {
            self.panel.on_host_resized(self.host.size());
        }
    }

    fn resize_panel(&mut self, cols: i32, rows: i32) {
        let size = self.host.resize_by(cols, rows);
        self.host.relayout();
        self.panel.on_host_resized(size);
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }

            // Ctrl+C always quits immediately
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return;
            }

            // Help overlay takes priority
            if self.show_help {
                match key.code {
                    KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                    _ => {}
                }
                return;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.show_help = true,
                KeyCode::Enter | KeyCode::Char('r') => self.start_check(),
                KeyCode::Char('j') | KeyCode::Down => {
                    let visible = ui::panel::visible_rows(&self.panel);
                    self.panel.scroll_down(visible);
                }
                KeyCode::Char('k') | KeyCode::Up => self.panel.scroll_up(),
                KeyCode::Char('[') => self.resize_panel(0, -1),
                KeyCode::Char(']') => self.resize_panel(0, 1),
                KeyCode::Char('<') => self.resize_panel(-1, 0),
                KeyCode::Char('>') => self.resize_panel(1, 0),
                _ => {}
            }
        }
    }
}
