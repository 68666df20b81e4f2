use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::process::ExitCode;

use subnet_summary::cli::Cli;
use subnet_summary::output::{export_report, print_report};
use subnet_summary::summarize;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    log::info!("#Start main()");

    let cli = Cli::parse();

    let report = match summarize(&cli.cidr) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{}", format!("Error rendering JSON: {e}").red());
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report);
    }

    if let Some(path) = &cli.output {
        if let Err(e) = export_report(&report, path, cli.force) {
            eprintln!("{}", e.to_string().red());
            return ExitCode::FAILURE;
        }
        println!("Report written to {}", path.display());
    }

    ExitCode::SUCCESS
}

/// Initialize log4rs from log4rs.yml, falling back to a plain stderr
/// appender when the file is not present next to the binary.
fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
            .expect("Error building fallback log config");
        let _ = log4rs::init_config(config);
    }
}
