use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use scorewatch::app;
use scorewatch::board::{Board, FIXED_COLUMNS};
use scorewatch::fetch::StatsClient;

/// scorewatch — Live attack-defense CTF scoreboard for the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scorewatch",
    version,
    about = "Live attack-defense CTF scoreboard for the terminal, polling a game server's stats API.",
    long_about = None
)]
struct Cli {
    /// Base URL of the game server (the stats API lives at <URL>/api/getStats).
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    url: String,

    /// Seconds between polls of the stats API.
    #[arg(long = "interval-secs", default_value_t = 10)]
    interval_secs: u64,

    /// HTTP request timeout in milliseconds.
    #[arg(long = "timeout-ms", default_value_t = 5000)]
    timeout_ms: u64,

    /// Fetch one snapshot, print the board to stdout, and exit (no TUI).
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = StatsClient::new(&cli.url, Duration::from_millis(cli.timeout_ms))?;

    if cli.once {
        println!("scorewatch configuration:");
        println!("  url          : {}", cli.url);
        println!("  timeout_ms   : {}", cli.timeout_ms);
        let snapshot = client.fetch_stats().await?;
        let board = Board::build(&snapshot)?;
        print_board(&board);
        return Ok(());
    }

    app::run(client, Duration::from_secs(cli.interval_secs.max(1))).await
}

fn print_board(board: &Board) {
    println!("\n{}", board.round_label);
    let legend: Vec<&str> = board.legend.iter().map(|c| c.text.as_str()).collect();
    println!("Statuses: {}", legend.join(" "));

    let mut rank_w = "#".len();
    let mut name_w = "team".len();
    let mut ip_w = "ip".len();
    let mut score_w = "score".len();
    for row in &board.rows {
        rank_w = rank_w.max(row[0].text.len());
        name_w = name_w.max(row[1].text.len());
        ip_w = ip_w.max(row[2].text.len());
        score_w = score_w.max(row[3].text.len());
    }

    println!(
        "\n{:<rank_w$}  {:<name_w$}  {:<ip_w$}  {:>score_w$}",
        "#",
        "team",
        "ip",
        "score",
        rank_w = rank_w,
        name_w = name_w,
        ip_w = ip_w,
        score_w = score_w
    );
    println!(
        "{:-<rank_w$}  {:-<name_w$}  {:-<ip_w$}  {:-<score_w$}",
        "",
        "",
        "",
        "",
        rank_w = rank_w,
        name_w = name_w,
        ip_w = ip_w,
        score_w = score_w
    );
    for row in &board.rows {
        println!(
            "{:<rank_w$}  {:<name_w$}  {:<ip_w$}  {:>score_w$}",
            row[0].text,
            row[1].text,
            row[2].text,
            row[3].text,
            rank_w = rank_w,
            name_w = name_w,
            ip_w = ip_w,
            score_w = score_w
        );
        for (service, cell) in board.columns[FIXED_COLUMNS..].iter().zip(&row[FIXED_COLUMNS..]) {
            println!("    {}: {}", service, cell.text.replace('\n', " | "));
        }
    }
}
