//! panelkit CLI - generate nested sheet layouts for CNC routing.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;

use panelkit::{init_logging, Mode, Params, BUILD_DATE, VERSION};
use panelkit_designer::{generate, write_svg};

#[derive(Parser)]
#[command(name = "panelkit")]
#[command(version, about = "Parametric sheet-part generator for CNC-routed furniture kits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a part set, nest it onto the sheet, and write SVG
    Generate(GenerateArgs),
    /// Write the default parameter file as JSON
    Params {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Which part family to generate
    mode: ModeArg,
    /// JSON parameter file; missing fields take defaults, all values are
    /// clamped to their documented ranges
    #[arg(short, long)]
    params: Option<PathBuf>,
    /// Output SVG file (default: panelkit-<mode>-<timestamp>.svg)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Include part labels in the SVG
    #[arg(long)]
    labels: bool,
    /// Print the placement table as JSON to stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Modular,
    Box,
    Chair,
    Desk,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Mode {
        match m {
            ModeArg::Modular => Mode::Modular,
            ModeArg::Box => Mode::Box,
            ModeArg::Chair => Mode::Chair,
            ModeArg::Desk => Mode::Desk,
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let params = match &args.params {
        Some(path) => Params::load(path)?,
        None => Params::default(),
    };
    let mode: Mode = args.mode.into();
    let clamped = params.clamped();
    let result = generate(&clamped, mode);

    let out = args.out.unwrap_or_else(|| {
        let stamp = chrono::Utc::now().format("%Y-%m-%d-%H-%M-%S");
        PathBuf::from(format!("panelkit-{mode}-{stamp}.svg"))
    });
    write_svg(&out, &clamped.sheet(), &result.placed, args.labels)?;

    if args.json {
        let rows: Vec<_> = result
            .placed
            .iter()
            .map(|p| {
                let o = p.offset();
                json!({
                    "label": p.label,
                    "kind": p.kind.as_str(),
                    "x": o.x,
                    "y": o.y,
                    "width": p.width,
                    "height": p.height,
                })
            })
            .collect();
        let summary = json!({
            "mode": mode.as_str(),
            "sheet": { "width": clamped.sheet_w, "height": clamped.sheet_h, "gap": clamped.gap },
            "placed": rows,
            "dropped": result.dropped,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    info!(version = VERSION, build = BUILD_DATE, "panelkit starting");

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => run_generate(args)?,
        Commands::Params { out } => {
            let params = Params::default();
            match out {
                Some(path) => params.save(&path)?,
                None => println!("{}", serde_json::to_string_pretty(&params)?),
            }
        }
    }
    Ok(())
}
