use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "rfs", version, about = "Responsive font size calculator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a length without viewport scaling.
    Value(ValueArgs),
    /// Render a length as a fluid `calc()` value.
    Fluid(FluidArgs),
    /// Evaluate a fluid length at a viewport width.
    At(AtArgs),
    /// Print a heading/body type scale at a viewport width.
    Preview(PreviewArgs),
    /// Print the normalized options as JSON.
    Options,
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Options JSON (camelCase keys; missing keys use defaults).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base value, e.g. `20px` or `1.25rem` (bare numbers are px).
    #[arg(long, global = true)]
    base_value: Option<String>,

    /// Breakpoint, e.g. `1200px` or `75em` (bare numbers are px).
    #[arg(long, global = true)]
    breakpoint: Option<String>,

    /// Scaling factor; values <= 1 disable fluid output.
    #[arg(long, global = true)]
    factor: Option<f64>,

    /// Output unit.
    #[arg(long, global = true, value_enum)]
    unit: Option<UnitChoice>,

    /// Root font size in px.
    #[arg(long, global = true)]
    rem_value: Option<f64>,

    /// Fractional digits kept in output.
    #[arg(long, global = true)]
    precision: Option<u32>,

    /// Scale with `vmin` instead of `vw`.
    #[arg(long, global = true)]
    two_dimensional: bool,

    /// Never emit fluid values.
    #[arg(long, global = true)]
    disable_rfs: bool,

    /// Log option resolution to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitChoice {
    Px,
    Rem,
}

#[derive(Parser, Debug)]
struct ValueArgs {
    /// Length in the configured unit, e.g. `1.25`.
    #[arg(allow_hyphen_values = true)]
    input: String,
}

#[derive(Parser, Debug)]
struct FluidArgs {
    /// Length in the configured unit, e.g. `2`.
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Print the unit-keyed JSON object instead of CSS.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct AtArgs {
    /// Length in the configured unit, e.g. `2`.
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Viewport width in px.
    #[arg(long)]
    width: f64,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Viewport width in px.
    #[arg(long)]
    width: f64,

    /// h1 size in rem.
    #[arg(long, default_value_t = 2.5)]
    h1: f64,
    /// h2 size in rem.
    #[arg(long, default_value_t = 2.0)]
    h2: f64,
    /// h3 size in rem.
    #[arg(long, default_value_t = 1.75)]
    h3: f64,
    /// h4 size in rem.
    #[arg(long, default_value_t = 1.5)]
    h4: f64,
    /// h5 size in rem.
    #[arg(long, default_value_t = 1.25)]
    h5: f64,
    /// h6 size in rem.
    #[arg(long, default_value_t = 1.0)]
    h6: f64,
    /// Body size in rem.
    #[arg(long, default_value_t = 1.0)]
    body: f64,

    /// Print rows as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.engine.verbose);
    let engine = build_engine(&cli.engine)?;
    match cli.cmd {
        Command::Value(args) => cmd_value(&engine, &args),
        Command::Fluid(args) => cmd_fluid(&engine, &args),
        Command::At(args) => cmd_at(&engine, &args),
        Command::Preview(args) => cmd_preview(&engine, &args),
        Command::Options => cmd_options(&engine),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn length_arg(s: &str) -> rfs::LengthInput {
    match s.trim().parse::<f64>() {
        Ok(px) => rfs::LengthInput::Px(px),
        Err(_) => rfs::LengthInput::from(s),
    }
}

fn build_engine(args: &EngineArgs) -> anyhow::Result<rfs::Rfs> {
    let mut def = match &args.config {
        Some(path) => rfs::RfsOptionsDef::from_path(path)?,
        None => rfs::RfsOptionsDef::default(),
    };

    if let Some(v) = &args.base_value {
        def.base_value = length_arg(v);
    }
    if let Some(v) = &args.breakpoint {
        def.breakpoint = length_arg(v);
    }
    if let Some(v) = args.factor {
        def.factor = v;
    }
    if let Some(v) = args.unit {
        def.unit = match v {
            UnitChoice::Px => "px",
            UnitChoice::Rem => "rem",
        }
        .to_string();
    }
    if let Some(v) = args.rem_value {
        def.rem_value = v;
    }
    if let Some(v) = args.precision {
        def.unit_precision = v;
    }
    if args.two_dimensional {
        def.two_dimensional = true;
    }
    if args.disable_rfs {
        def.enable_rfs = false;
    }

    rfs::Rfs::new(&def).context("invalid rfs options")
}

fn cmd_value(engine: &rfs::Rfs, args: &ValueArgs) -> anyhow::Result<()> {
    let v = engine.value(&args.input)?;
    println!("{v}");
    Ok(())
}

fn cmd_fluid(engine: &rfs::Rfs, args: &FluidArgs) -> anyhow::Result<()> {
    let v = engine.fluid_value(&args.input)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string(&v).context("serialize fluid value")?
        );
    } else {
        println!("{v}");
    }
    Ok(())
}

fn cmd_at(engine: &rfs::Rfs, args: &AtArgs) -> anyhow::Result<()> {
    let v = engine.fluid_value(&args.input)?;
    let px = engine.pixel_value_at_screen_width(&v, args.width);
    println!("{v} @ {}px = {px}", args.width);
    Ok(())
}

fn cmd_preview(engine: &rfs::Rfs, args: &PreviewArgs) -> anyhow::Result<()> {
    let sizes = [
        ("h1", args.h1),
        ("h2", args.h2),
        ("h3", args.h3),
        ("h4", args.h4),
        ("h5", args.h5),
        ("h6", args.h6),
        ("body", args.body),
    ];
    let rows = rfs::preview_scale(engine, sizes, args.width)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize preview")?
        );
        return Ok(());
    }
    for row in rows {
        println!("{} : {}px", row.label.to_uppercase(), row.px);
    }
    Ok(())
}

fn cmd_options(engine: &rfs::Rfs) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(engine.options()).context("serialize options")?
    );
    Ok(())
}
