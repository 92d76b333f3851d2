//! main.rs
//! Entry point for gls

use glimpse::config::Config;
use glimpse::core::terminal_width;
use glimpse::ui::print_listing;
use glimpse::utils::cli::{CliAction, handle_args};

use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;

fn main() -> io::Result<()> {
    let request = match handle_args() {
        CliAction::List(request) => request,
        CliAction::Exit => return Ok(()),
    };

    // -v or RUST_LOG, silent otherwise
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if request.verbose {
            "debug"
        } else {
            "off"
        }),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let config = Config::load().with_overrides(&request.overrides);

    let dir = request
        .path
        .as_deref()
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    if !dir.is_dir() {
        eprintln!("[glimpse] Error: '{}' is not a directory.", dir.display());
        std::process::exit(1);
    }

    let stdout = io::stdout();
    let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let width = terminal_width(config.display().fallback_width());
    log::debug!("listing {} at {} columns (color: {})", dir.display(), width, color);

    let mut out = BufWriter::new(stdout.lock());
    print_listing(&mut out, &dir, &config, width, color)
}
