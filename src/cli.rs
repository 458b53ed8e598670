use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::board::{Board, BoardEvent};
use crate::board_dump::{BoardDump, write_board_dump};
use crate::config::load_config;
use crate::render::render_svg;
use crate::seed;
use crate::store::{Note, NoteStore};

#[derive(Parser, Debug)]
#[command(
    name = "noteboard",
    version,
    about = "Hierarchical note-board: tidy layout, SVG and JSON scene output"
)]
pub struct Args {
    /// Board JSON file (map of id -> note) or '-' for stdin; demo forest if omitted
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Config JSON file (theme name + board geometry)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Viewport width the tidy layout centers within
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Toggle collapse on a note id before resolving (repeatable)
    #[arg(long = "collapse", value_name = "ID")]
    pub collapse: Vec<String>,

    /// Toggle selection on a note id and its subtree (repeatable)
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Run the tidy layout before resolving the scene
    #[arg(long = "layout", default_value_t = false)]
    pub layout: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.board.viewport_width = width;
    }

    let store = read_board(args.input.as_deref())?;
    let mut board = Board::new(store, config.board.clone());
    for id in &args.collapse {
        board.apply(BoardEvent::ToggleCollapse(id.clone()));
    }
    for id in &args.select {
        board.apply(BoardEvent::Select(id.clone()));
    }
    if args.layout {
        board.apply(BoardEvent::Layout);
    }

    let scene = board.scene();
    match args.format {
        OutputFormat::Svg => {
            let svg = render_svg(&scene, &config.theme, &config.board);
            write_output(&svg, args.output.as_deref())
        }
        OutputFormat::Json => match args.output.as_deref() {
            Some(path) => write_board_dump(path, &scene, board.store()),
            None => {
                let dump = BoardDump::from_scene(&scene, board.store());
                write_output(&serde_json::to_string_pretty(&dump)?, None)
            }
        },
    }
}

fn read_board(path: Option<&Path>) -> Result<NoteStore> {
    let contents = match path {
        None => return Ok(seed::demo_store()),
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    parse_board(&contents)
}

fn parse_board(contents: &str) -> Result<NoteStore> {
    let notes: BTreeMap<String, Note> = serde_json::from_str(contents)?;
    for (key, note) in &notes {
        if *key != note.id {
            return Err(anyhow::anyhow!(
                "board entry keyed {key} holds note id {}",
                note.id
            ));
        }
    }
    Ok(NoteStore::from_notes(notes.into_values())?)
}

fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}
