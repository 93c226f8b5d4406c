//! Command-line entry point: build the enclosure and export STL files.

use std::path::PathBuf;
use std::process::ExitCode;

use enclosure::{run_build, BuildOptions, BuildOutput, ParamSet};
use kernel_bridge::TruckKernel;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: casegen [--params <file.json>] [--out <dir>] \
[--components <dir>] [--skip-edge-rounding]";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(std::env::args().skip(1)) {
        Ok(output) => {
            println!("wrote {}", output.enclosure_path.display());
            println!("wrote {}", output.front_panel_path.display());
            println!("wrote {}", output.rear_panel_path.display());
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<BuildOutput, String> {
    let mut params_path: Option<PathBuf> = None;
    let mut options = BuildOptions::new(std::path::Path::new("."));

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--params" => {
                params_path = Some(PathBuf::from(
                    args.next().ok_or("--params needs a file argument")?,
                ));
            }
            "--out" => {
                options.out_dir =
                    PathBuf::from(args.next().ok_or("--out needs a directory argument")?);
            }
            "--components" => {
                options.components_dir = Some(PathBuf::from(
                    args.next().ok_or("--components needs a directory argument")?,
                ));
            }
            "--skip-edge-rounding" => options.skip_edge_rounding = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument '{other}'\n{USAGE}")),
        }
    }

    let params = match params_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            serde_json::from_str::<ParamSet>(&text)
                .map_err(|e| format!("invalid parameter file {}: {e}", path.display()))?
        }
        None => ParamSet::default(),
    };

    let mut kernel = TruckKernel::new();
    run_build(&mut kernel, &params, &options).map_err(|e| e.to_string())
}
