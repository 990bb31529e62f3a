#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod cache;
mod config;
mod error;
mod fetch;
mod parse;
mod pipeline;

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use crate::{
    config::{Cli, Config},
    fetch::make_client,
    pipeline::{Menu, Pipeline},
};

pub use error::{Error, Result};

async fn run(cli: Cli) -> Result<Menu> {
    // sampled once; every check in this run uses the same instant
    let now = Local::now().naive_local();
    let config = Config::from_cli(cli)?;
    log::debug!("{config:?}");
    let client = make_client()?;
    Pipeline::new(&client, &config.cache, &config.url, now)
        .force(config.force)
        .run()
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(menu) => {
            log::debug!("served from {:?}", menu.source);
            println!("{}", menu.text);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_expected() => {
            println!("{e}");
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
