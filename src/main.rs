use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use shazam::cli::{Cli, Command};
use shazam::config::Config;
use shazam::hash::{wildcard, ChecksumError, Processor, SumManifest};
use shazam::logging;
use shazam::output::{self, BarProgress};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            match err.downcast_ref::<ChecksumError>() {
                Some(e) => output::print_error(e),
                None => eprintln!("shazam: error: {:#}", err),
            }
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = Config::load(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    let mut processor = Processor::new(config.engine());
    if config.progress && !cli.no_progress && !cli.json {
        processor = processor.with_progress(Box::new(BarProgress::new()));
    }

    let report = match cli.command {
        Command::Sum {
            paths,
            algorithm,
            output: out,
            write,
        } => {
            let algorithm = match algorithm {
                Some(alg) => alg,
                None => config.algorithm()?,
            };
            let paths = wildcard::expand_all(&paths)?;
            let target = out.or_else(|| write.then(|| SumManifest::default_output_name(algorithm)));
            let report = processor.compute_only(&paths, algorithm, target.as_deref())?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_sums(&report);
            }
            report
        }
        Command::Check {
            path,
            digest,
            algorithm,
        } => {
            let report = processor.verify_one(&path, &digest, algorithm)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_checks(&report, verbose);
            }
            report
        }
        Command::Verify { manifest, algorithm } => {
            let report = processor.verify_many(&manifest, algorithm)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_checks(&report, verbose);
            }
            report
        }
        Command::All { path } => {
            let report = processor.dump_all(&path)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_dump(&report);
            }
            return Ok(0);
        }
    };

    Ok(output::exit_code(&report) as u8)
}
