#![deny(unsafe_code)]
//! CLI binary for tracing streamlines through synthesized vector fields.
//!
//! Subcommands:
//! - `trace <source>`: sample a flow source onto a grid, trace seeds, print JSON
//! - `render <source>`: same, but write a PNG colored by a traced scalar
//! - `list`: print available flow sources and colormaps

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use streamline_core::source::sample_onto;
use streamline_core::{
    DegeneratePolicy, RectilinearGrid, SeedSet, SourceSpec, StreamlineTracer, Streamlines,
    TraceOptions,
};
use streamline_render::{ColorBy, Colormap, RasterView};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "streamline", about = "Fixed-step streamline tracer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trace streamlines and print them as JSON.
    Trace {
        #[command(flatten)]
        args: TraceArgs,

        /// Write the streamlines to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Trace streamlines and write a PNG snapshot.
    Render {
        #[command(flatten)]
        args: TraceArgs,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 512)]
        height: usize,

        /// Scalar used for line color (magnitude, u, v, w, uniform).
        #[arg(long, default_value = "magnitude")]
        color_by: String,

        /// Colormap name (viridis, magma, gray).
        #[arg(short, long, default_value = "viridis")]
        colormap: String,

        /// Output file path.
        #[arg(short, long, default_value = "streamlines.png")]
        output: PathBuf,
    },
    /// List available flow sources and colormaps.
    List,
}

#[derive(Args)]
struct TraceArgs {
    /// Flow source name (e.g. "vortex").
    source: String,

    /// Flow source parameters as a JSON string.
    #[arg(long, default_value = "{}")]
    params: String,

    /// Trace options as a JSON object (steps, step_length, outputs,
    /// on_degenerate). Output flags given on the command line are added.
    #[arg(long = "options", conflicts_with_all = ["steps", "step_length", "reject_degenerate"])]
    options_json: Option<String>,

    /// Grid points along x.
    #[arg(long, default_value_t = 64)]
    nx: usize,

    /// Grid points along y.
    #[arg(long, default_value_t = 64)]
    ny: usize,

    /// Grid points along z; 1 traces in the plane.
    #[arg(long, default_value_t = 1)]
    nz: usize,

    /// Grid extent along x as "min,max".
    #[arg(long, default_value = "-5,5", value_parser = parse_range, allow_hyphen_values = true)]
    x_range: (f64, f64),

    /// Grid extent along y as "min,max".
    #[arg(long, default_value = "-5,5", value_parser = parse_range, allow_hyphen_values = true)]
    y_range: (f64, f64),

    /// Grid extent along z as "min,max".
    #[arg(long, default_value = "-1,1", value_parser = parse_range, allow_hyphen_values = true)]
    z_range: (f64, f64),

    /// First seed of the seeding line as "x,y[,z]".
    #[arg(long, default_value = "-4,-4", value_parser = parse_point, allow_hyphen_values = true)]
    seed_from: [f64; 3],

    /// Last seed of the seeding line as "x,y[,z]".
    #[arg(long, default_value = "-4,4", value_parser = parse_point, allow_hyphen_values = true)]
    seed_to: [f64; 3],

    /// Number of seeds along the seeding line.
    #[arg(long, default_value_t = 16)]
    seeds: usize,

    /// Integration steps per line.
    #[arg(short, long, default_value_t = 200)]
    steps: usize,

    /// Distance advanced per step.
    #[arg(short = 'l', long, default_value_t = 0.05)]
    step_length: f64,

    /// Record the field magnitude at every point.
    #[arg(long)]
    magnitude: bool,

    /// Record the x component at every point.
    #[arg(long)]
    u: bool,

    /// Record the y component at every point.
    #[arg(long)]
    v: bool,

    /// Record the z component at every point (3D only).
    #[arg(long)]
    w: bool,

    /// Fail on a zero-magnitude sample instead of propagating NaN.
    #[arg(long)]
    reject_degenerate: bool,
}

impl TraceArgs {
    fn grid(&self) -> Result<RectilinearGrid, CliError> {
        Ok(RectilinearGrid::uniform(
            [self.nx, self.ny, self.nz],
            [self.x_range, self.y_range, self.z_range],
        )?)
    }

    fn options(&self) -> Result<TraceOptions, CliError> {
        let mut options = match &self.options_json {
            Some(json) => {
                let value: serde_json::Value = serde_json::from_str(json)
                    .map_err(|source| CliError::Json { flag: "--options", source })?;
                TraceOptions::from_json(&value)?
            }
            None => {
                let policy = if self.reject_degenerate {
                    DegeneratePolicy::Reject
                } else {
                    DegeneratePolicy::Propagate
                };
                TraceOptions::new(self.steps, self.step_length).with_policy(policy)
            }
        };
        let flags = &mut options.outputs;
        flags.magnitude |= self.magnitude;
        flags.u |= self.u;
        flags.v |= self.v;
        flags.w |= self.w;
        Ok(options)
    }

    /// Builds the grid and field, then traces with `options`.
    fn run(&self, options: &TraceOptions) -> Result<(RectilinearGrid, Streamlines), CliError> {
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|source| CliError::Json { flag: "--params", source })?;
        let spec = SourceSpec::from_name(&self.source, &params)?;
        let grid = self.grid()?;
        let field = sample_onto(&grid, spec.build().as_ref());
        let seeds = SeedSet::line(self.seed_from, self.seed_to, self.seeds);
        let lines = StreamlineTracer::new(&grid, &field)?.trace(&seeds, options)?;
        info!(
            source = %self.source,
            seeds = lines.seed_count(),
            points = lines.points_per_line(),
            "trace complete"
        );
        Ok((grid, lines))
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("'{part}' is not a number: {e}"))
        })
        .collect()
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    match parse_numbers(s)?.as_slice() {
        [lo, hi] => Ok((*lo, *hi)),
        _ => Err(format!("expected \"min,max\", got '{s}'")),
    }
}

fn parse_point(s: &str) -> Result<[f64; 3], String> {
    match parse_numbers(s)?.as_slice() {
        [x, y] => Ok([*x, *y, 0.0]),
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("expected \"x,y\" or \"x,y,z\", got '{s}'")),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sources = SourceSpec::list_names();
            let colormaps = Colormap::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "sources": sources,
                    "colormaps": colormaps,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sources:");
                for name in sources {
                    println!("  {name}");
                }
                println!("Colormaps:");
                println!("  {}", colormaps.join(", "));
            }
        }
        Command::Trace { args, output } => {
            let (_, lines) = args.run(&args.options()?)?;
            let body = serde_json::to_string(&lines)?;
            match &output {
                Some(path) => {
                    std::fs::write(path, body).map_err(|source| CliError::Write {
                        path: path.clone(),
                        source,
                    })?;
                    if cli.json {
                        let info = serde_json::json!({
                            "source": args.source,
                            "seeds": lines.seed_count(),
                            "points": lines.points_per_line(),
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!(
                            "traced {} lines of {} points -> {}",
                            lines.seed_count(),
                            lines.points_per_line(),
                            path.display()
                        );
                    }
                }
                None => println!("{body}"),
            }
        }
        Command::Render {
            args,
            width,
            height,
            color_by,
            colormap,
            output,
        } => {
            let colormap = Colormap::from_name(&colormap).map_err(|_| CliError::UnknownName {
                kind: "colormap",
                name: colormap.clone(),
                expected: Colormap::list_names(),
            })?;
            let color_by = ColorBy::from_name(&color_by).map_err(|_| CliError::UnknownName {
                kind: "color source",
                name: color_by.clone(),
                expected: ColorBy::list_names(),
            })?;

            let mut options = args.options()?;
            match color_by {
                ColorBy::Magnitude => options.outputs.magnitude = true,
                ColorBy::U => options.outputs.u = true,
                ColorBy::V => options.outputs.v = true,
                ColorBy::W => options.outputs.w = true,
                ColorBy::Uniform => {}
            }
            let (grid, lines) = args.run(&options)?;
            let view = RasterView::fit_grid(&grid, width, height)?;
            streamline_render::snapshot::write_png(&lines, &view, color_by, &colormap, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "source": args.source,
                    "width": width,
                    "height": height,
                    "seeds": lines.seed_count(),
                    "steps": lines.points_per_line() - 1,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({} seeds, {} steps) -> {}",
                    args.source,
                    lines.seed_count(),
                    lines.points_per_line() - 1,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({
                "error": e.to_string(),
                "kind": e.kind(),
                "exit_code": e.exit_code(),
            });
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
