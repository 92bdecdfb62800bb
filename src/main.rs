// SPDX-License-Identifier: MPL-2.0
use glissade::{config, site};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
glissade - static site builder

USAGE:
  glissade [OPTIONS] [SITE_ROOT]

ARGS:
  [SITE_ROOT]        Site source directory (default: current directory)

OPTIONS:
  --config <FILE>    Config file (default: glissade.toml in the site root)
  --out <DIR>        Output directory (overrides the config)
  -h, --help         Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let out_dir: Option<PathBuf> = match args.opt_value_from_str("--out") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let root = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let loaded = match &config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(&root),
    };
    let mut site_config = match loaded {
        Ok(site_config) => site_config.rooted_at(&root),
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(out_dir) = out_dir {
        site_config.out_dir = out_dir;
    }

    match site::generate(&site_config) {
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("Warning: {warning}");
            }
            println!("Built {} into {}", report, site_config.out_dir.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
