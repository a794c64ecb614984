//! Legal Timeline CLI
//!
//! Prints exactly one JSON object on stdout. Logs go to stderr.

use clap::Parser;
use timeline_cli::{error_json, render, run, RunOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let options = match RunOptions::try_parse() {
        Ok(options) => options,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return;
        }
        Err(err) => {
            println!("{}", error_json(&anyhow::Error::new(err), false));
            std::process::exit(1);
        }
    };

    // stdout carries the JSON result, so all logging goes to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&options).and_then(|result| render(&result, options.pretty)) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            tracing::error!("timeline extraction failed: {:#}", err);
            println!("{}", error_json(&err, options.pretty));
            std::process::exit(1);
        }
    }
}
