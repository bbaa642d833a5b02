//! Interactive terminal front end (ratatui + crossterm)

mod view;

use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::app::App;
use crate::commands::Cmd;
use crate::keymap::{keystroke_from_crossterm, Command};
use crate::model::CellId;

pub use view::{parse_input, TerminalView};

/// Narrowest a cell is drawn, in columns
const MIN_CELL_WIDTH: usize = 5;

/// Route one key event: keymap first, then the input line while editing
pub fn handle_key_event(app: &mut App<TerminalView>, key: KeyEvent) -> Option<Cmd> {
    let keystroke = keystroke_from_crossterm(&key)?;

    if app.command_for(&keystroke).is_some() {
        return app.handle_keystroke(keystroke);
    }

    if app.model().is_editing() && app.view_mut().edit_input(&key) {
        return Some(Cmd::Redraw);
    }

    None
}

/// Run the interactive grid until the user quits
pub fn run(mut app: App<TerminalView>) -> Result<()> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    stdout()
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    struct Cleanup;
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = stdout().execute(LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        }
    }
    let _cleanup = Cleanup;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| draw(frame, &app))?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(100)).context("event poll error")? {
            continue;
        }

        match event::read().context("event read error")? {
            Event::Key(key) => match handle_key_event(&mut app, key) {
                Some(cmd) if cmd.is_quit() => break,
                Some(cmd) => dirty |= cmd.needs_redraw(),
                None => {}
            },
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }

    tracing::info!("Terminal session ended");
    Ok(())
}

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &App<TerminalView>) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(frame.area());

    draw_title(frame, app, chunks[0]);
    draw_grid(frame, app.view(), chunks[1]);
    draw_status(frame, app, chunks[2]);

    if app.view().is_editor_open() {
        draw_editor(frame, app, chunks[1]);
    }
}

fn draw_title(frame: &mut Frame, app: &App<TerminalView>, area: Rect) {
    let model = app.model();
    let accent = app.view().palette().accent.into();
    let title = Line::from(vec![
        Span::styled(
            " gridpad ",
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {} cells, {} columns x {} rows",
            model.cell_count(),
            model.column_count(),
            model.row_count()
        )),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_grid(frame: &mut Frame, view: &TerminalView, area: Rect) {
    let columns = view.rows().first().map_or(1, Vec::len).max(1);
    let widest = view
        .rows()
        .iter()
        .flatten()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0);
    // One column of padding on each side plus the separator
    let available = (area.width as usize / columns).saturating_sub(3);
    let cell_width = widest.max(MIN_CELL_WIDTH).min(available.max(1));

    let palette = view.palette();
    let normal = Style::default()
        .fg(palette.cell_fg.into())
        .bg(palette.cell_bg.into());
    let highlighted = Style::default()
        .fg(palette.highlight_fg.into())
        .bg(palette.highlight_bg.into())
        .add_modifier(Modifier::BOLD);
    let rule = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(view.rows().len() * 2);
    for (y, row) in view.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (x, text) in row.iter().enumerate() {
            let style = if view.highlighted() == Some(CellId::from_xy(x, y)) {
                highlighted
            } else {
                normal
            };
            spans.push(Span::styled(
                format!(" {} ", fit(text, cell_width)),
                style,
            ));
            spans.push(Span::styled("│", rule));
        }
        lines.push(Line::from(spans));
        lines.push(Line::styled(
            "─".repeat(row.len() * (cell_width + 3)),
            rule,
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_status(frame: &mut Frame, app: &App<TerminalView>, area: Rect) {
    let model = app.model();
    let (mode, mode_style) = if model.is_editing() {
        (
            " EDIT ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            " BROWSE ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    let hints = [Command::EnterOrCommitEdit, Command::CancelEdit, Command::Quit]
        .into_iter()
        .filter_map(|cmd| {
            app.keymap()
                .display_for(cmd)
                .map(|key| format!("{} {}", key, cmd.label()))
        })
        .collect::<Vec<_>>()
        .join("  ");

    let status = Line::from(vec![
        Span::styled(mode, mode_style),
        Span::raw(format!(" {} ", model.cursor_id())),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn draw_editor(frame: &mut Frame, app: &App<TerminalView>, area: Rect) {
    let width = area.width.min(40);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.saturating_sub(3) / 2,
        width,
        area.height.min(3),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.view().palette().accent.into()))
        .title(format!(" Edit {} ", app.model().cursor_id()));

    let input = Line::from(vec![
        Span::raw(app.view().input().to_string()),
        Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(input).block(block), popup);
}

/// Pad or truncate `text` to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
