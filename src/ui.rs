use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell as TableCell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::board::{Board, Cell, FIXED_COLUMNS};

/// Height of one team row: SLA percentage, SLA checks, and flag points lines.
const ROW_HEIGHT: u16 = 3;

/// Draw the whole screen: round label, legend, scoreboard table, status line.
pub fn draw(f: &mut Frame, app: &App, source: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    if let Some(board) = app.board.as_ref() {
        draw_round(f, board, chunks[0]);
        draw_legend(f, board, chunks[1]);
        draw_table(f, board, chunks[2]);
    } else {
        let waiting = Paragraph::new(format!("Waiting for first snapshot from {source}..."));
        f.render_widget(waiting, chunks[2]);
    }
    draw_status(f, app, source, chunks[3]);
}

fn draw_round(f: &mut Frame, board: &Board, area: Rect) {
    let label = Paragraph::new(board.round_label.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(label, area);
}

fn draw_legend(f: &mut Frame, board: &Board, area: Rect) {
    let mut spans = Vec::with_capacity(board.legend.len() * 2);
    for entry in &board.legend {
        spans.push(Span::styled(format!(" {} ", entry.text), cell_style(entry)));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_table(f: &mut Frame, board: &Board, area: Rect) {
    let header = Row::new(
        board
            .columns
            .iter()
            .map(|c| TableCell::from(c.as_str())),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = board.rows.iter().map(|row| {
        Row::new(
            row.iter()
                .map(|cell| TableCell::from(Text::from(cell.text.clone())).style(cell_style(cell))),
        )
        .height(ROW_HEIGHT)
    });

    let table = Table::new(rows, column_widths(board))
        .header(header)
        .column_spacing(1);
    f.render_widget(table, area);
}

fn draw_status(f: &mut Frame, app: &App, source: &str, area: Rect) {
    let line = match &app.last_error {
        Some(err) => Line::from(Span::styled(
            format!("fetch error: {err}"),
            Style::default().fg(Color::Red),
        )),
        None => match &app.last_updated {
            Some(ts) => Line::from(format!("{source} | updated {ts} | q to quit")),
            None => Line::from(format!("{source} | q to quit")),
        },
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Colored cells render black text on their status background; plain cells
/// keep the terminal default.
fn cell_style(cell: &Cell) -> Style {
    match cell.bg {
        Some(bg) => Style::default().bg(bg).fg(Color::Black),
        None => Style::default(),
    }
}

fn column_widths(board: &Board) -> Vec<Constraint> {
    let mut widths = vec![
        Constraint::Length(4),  // rank
        Constraint::Length(18), // team
        Constraint::Length(15), // IP
        Constraint::Length(8),  // score
    ];
    widths.extend(
        board.columns[FIXED_COLUMNS..]
            .iter()
            .map(|_| Constraint::Min(24)),
    );
    widths
}
