use clap::Parser;
use log::warn;
use std::error::Error;

mod args;
mod lookup;

use crate::args::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if let Err(e) = lookup::run_lookup(&args).await {
        warn!("Error occurred {:?}", e);
        eprintln!("An error occurred: {}", e);
        let mut cause = e.source();
        while let Some(c) = cause {
            eprintln!("  caused by: {}", c);
            cause = c.source();
        }
        std::process::exit(1);
    }
}
