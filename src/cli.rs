use crate::config::load_config;
use crate::ir::parse_panel_inputs;
use crate::panel::build_chart_panel;
use crate::reflow::{normalize_fragment, reflow_fragment};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "mxpr",
    version,
    about = "Chart panel generator and vertical reflow for draw.io fragments"
)]
pub struct Args {
    /// Input file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// What the input holds: a JSON panel request, or a fragment to reflow
    #[arg(short = 'm', long = "mode", value_enum, default_value = "panels")]
    pub mode: Mode,

    /// Config JSON/JSON5 file overriding theme colors and layout constants
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Repair truncated fragment markup before reflowing
    #[arg(long = "repair")]
    pub repair: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Mode {
    Panels,
    Reflow,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;

    let output = match args.mode {
        Mode::Panels => {
            let inputs = parse_panel_inputs(&input)?;
            inputs
                .iter()
                .map(|panel| build_chart_panel(panel, &config.theme, &config.panel))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Mode::Reflow => {
            let fragment = if args.repair {
                normalize_fragment(&input)
            } else {
                input
            };
            reflow_fragment(&fragment, &config.reflow)
        }
    };

    write_output(&output, args.output.as_deref())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
