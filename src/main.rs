//! Kitchenplan CLI
//!
//! Usage:
//!   kitchenplan [OPTIONS] [TOKEN]
//!
//! Decodes a share token (argument or stdin), prints the plan as text with
//! an item summary, and echoes the re-encoded token. `--empty WxH` mints a
//! token for a fresh plan instead.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use kitchenplan::layout::{MAX_DIM, MIN_DIM};
use kitchenplan::render::{render_plan, render_summary};
use kitchenplan::{codec, Dimensions, Layout, Theme};

#[derive(Parser)]
#[command(name = "kitchenplan")]
#[command(about = "Inspect and mint kitchen floorplan share tokens")]
struct Cli {
    /// Share token (reads from stdin if not provided); a leading '#' is
    /// tolerated so URL fragments can be pasted directly
    token: Option<String>,

    /// Theme file overriding item labels and glyphs (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Print only the item summary, not the plan grid
    #[arg(short, long)]
    summary: bool,

    /// Mint a token for an empty WxH plan and exit (e.g. --empty 16x12)
    #[arg(short, long, value_name = "WxH")]
    empty: Option<String>,
}

fn parse_dimensions(size: &str) -> Result<Dimensions, String> {
    let (w, h) = size
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{size}'"))?;
    let width: usize = w
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{w}'"))?;
    let height: usize = h
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{h}'"))?;
    if !(MIN_DIM..=MAX_DIM).contains(&width) || !(MIN_DIM..=MAX_DIM).contains(&height) {
        return Err(format!(
            "dimensions {width}x{height} outside supported range {MIN_DIM}..={MAX_DIM}"
        ));
    }
    Ok(Dimensions::new(width, height))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(size) = &cli.empty {
        match parse_dimensions(size) {
            Ok(dims) => {
                println!("{}", codec::encode(&Layout::empty(dims)));
                return ExitCode::SUCCESS;
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("Error loading theme '{}': {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Theme::default(),
    };

    let token = match &cli.token {
        Some(token) => token.clone(),
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Error: no token given (pass one as an argument or on stdin)");
                return ExitCode::FAILURE;
            }
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {e}");
                return ExitCode::FAILURE;
            }
            buffer
        }
    };

    let layout = match codec::decode_fragment(token.trim()) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !cli.summary {
        print!("{}", render_plan(&layout, &theme));
        println!();
    }
    print!("{}", render_summary(&layout, &theme));
    println!("plan: {}", layout.dimensions());
    println!("token: {}", codec::encode(&layout));
    ExitCode::SUCCESS
}
