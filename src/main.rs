use anyhow::{Context, Result};
use clap::Parser;

use gridpad::cli::CliArgs;
use gridpad::keymap::{load_default_keymap, Keymap};
use gridpad::tui::{self, TerminalView};
use gridpad::view::markup::render_markup;
use gridpad::{App, GridConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // The interactive grid owns the terminal, so only log to stderr for --markup
    gridpad::tracing::init(args.markup);

    let mut config = GridConfig::load(args.config.as_deref()).context("failed to load config")?;
    args.apply_overrides(&mut config);

    let model = config.build_model().context("invalid grid configuration")?;
    tracing::info!(
        cells = model.cell_count(),
        columns = model.column_count(),
        "Starting gridpad"
    );

    if args.markup {
        print!("{}", render_markup(&model, &config.theme));
        return Ok(());
    }

    let bindings = load_default_keymap(args.keymap.as_deref()).context("failed to load keymap")?;
    let view = TerminalView::from_model(&model, &config.theme);
    let app = App::new(model, view, Keymap::with_bindings(bindings));

    tui::run(app)
}
