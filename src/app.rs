use std::io;
use std::time::Duration;

use ::time::{format_description::well_known, OffsetDateTime};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::board::Board;
use crate::fetch::StatsClient;
use crate::types::Snapshot;
use crate::ui;

/// Outcome of one poll, sent from the poller task to the UI loop.
#[derive(Debug)]
pub enum FetchOutcome {
    Snapshot(Snapshot),
    Failed(String),
}

/// All application state for the scoreboard UI.
///
/// Two states only: before the first successful fetch the board is `None`;
/// after it, the board is built once and only ever updated in place.
#[derive(Debug, Default)]
pub struct App {
    pub board: Option<Board>,
    pub last_updated: Option<String>,
    pub last_error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one poll outcome into the state. The first successful snapshot
    /// builds the board; later ones update it in place. A snapshot the board
    /// rejects (shape drift, malformed data) is reported like a fetch failure
    /// and the board keeps its previous contents.
    pub fn on_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Snapshot(snapshot) => {
                let res = if let Some(board) = self.board.as_mut() {
                    board.apply(&snapshot)
                } else {
                    match Board::build(&snapshot) {
                        Ok(board) => {
                            self.board = Some(board);
                            Ok(())
                        }
                        Err(e) => Err(e),
                    }
                };
                match res {
                    Ok(()) => {
                        self.last_error = None;
                        self.last_updated = Some(now_rfc3339());
                    }
                    Err(e) => self.last_error = Some(format!("{e:#}")),
                }
            }
            FetchOutcome::Failed(msg) => self.last_error = Some(msg),
        }
    }
}

/// Poll the stats endpoint forever on a fixed period, pushing outcomes to the
/// UI loop. Each fetch is awaited before the next tick is taken and missed
/// ticks are delayed rather than bursted, so polls never overlap.
pub fn spawn_poller(
    client: StatsClient,
    period: Duration,
    tx: mpsc::Sender<FetchOutcome>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }
            let outcome = match client.fetch_stats().await {
                Ok(snapshot) => FetchOutcome::Snapshot(snapshot),
                Err(e) => FetchOutcome::Failed(format!("{e:#}")),
            };
            if tx.send(outcome).await.is_err() {
                break;
            }
        }
    })
}

/// Run the TUI: set up the terminal, start the poller, and loop on input and
/// poll outcomes until the user quits.
pub async fn run(client: StatsClient, period: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::channel(8);
    let cancel = CancellationToken::new();
    let source = client.stats_url().to_string();
    let poller = spawn_poller(client, period, tx, cancel.clone());

    let mut app = App::new();
    let res = run_loop(&mut terminal, &mut app, &mut rx, &source).await;

    cancel.cancel();
    let _ = poller.await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<FetchOutcome>,
    source: &str,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, source))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true
                        }
                        _ => {}
                    }
                }
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            app.on_outcome(outcome);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}
