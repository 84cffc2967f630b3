//! quadhatch - hatch a convex quadrilateral from the command line
//!
//! Usage:
//!   quadhatch --points x1 y1 x2 y2 x3 y3 x4 y4 --angle <deg> --step <dist>
//!   quadhatch ... --svg out.svg --png out.png   Also draw the result
//!   quadhatch --job hatch.yaml                  Read parameters from YAML

mod cli;

use std::env;
use std::io;
use std::process;

use env_logger::Env;
use log::{debug, info};

use quadhatch::{generate_crosshatch, generate_hatch};

use cli::{Command, Config, USAGE};
use cli::{output, render};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match cli::args::parse(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage.");
            process::exit(1);
        }
    };

    process::exit(run(&config));
}

/// Hatch, print, then render. Returns the process exit status.
fn run(config: &Config) -> i32 {
    debug!("{:?}", config);

    let hatch = if config.cross {
        generate_crosshatch(&config.rect, config.angle, config.step)
    } else {
        generate_hatch(&config.rect, config.angle, config.step)
    };
    info!("{} hatch segments", hatch.len());

    let mut stdout = io::stdout().lock();
    let printed = if config.json {
        output::write_json(&mut stdout, &hatch)
    } else {
        output::write_lines(&mut stdout, &hatch)
    };
    if let Err(e) = printed {
        eprintln!("Failed to print segments: {}", e);
        return 1;
    }

    let mut status = 0;

    if let Some(path) = &config.svg {
        if let Err(e) = render::write_svg(path, &config.rect, &hatch) {
            eprintln!("Failed to write svg file {}: {}", path.display(), e);
            status = 1;
        }
    }

    if let Some(path) = &config.png {
        if let Err(e) = render::write_png(path, &config.rect, &hatch) {
            eprintln!("Failed to write png file {}: {}", path.display(), e);
            status = 1;
        }
    }

    status
}
