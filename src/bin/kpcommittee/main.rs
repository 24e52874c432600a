// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

mod attacker_cost;
mod costs;
mod kscheme;
mod solve;

use std::error::Error;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, Level};

use kpcommittee::config::{self, Config};
use kpcommittee::sweep::SweepParams;
use kpcommittee::Mode;

use attacker_cost::AttackerCostCmd;
use costs::CostsCmd;
use kscheme::KschemeCmd;
use solve::SolveCmd;

pub type CmdResult = Result<(), Box<dyn Error>>;

/// Minimum cost for an adversary to stop or overtake a weighted committee
#[derive(Parser)]
#[clap(name = "kpcommittee", version = "0.1")]
#[clap(arg_required_else_help = true)]
struct RootCmd {
    /// Config file, defaults to ~/.kpcommittee/config.json
    #[clap(long, global = true)]
    config: Option<String>,
    /// Print debug output
    #[clap(short, long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: SubCmd,
}

#[derive(Subcommand)]
enum SubCmd {
    Solve(SolveCmd),
    AttackerCost(AttackerCostCmd),
    Costs(CostsCmd),
    Kscheme(KschemeCmd),
}

fn main() {
    let cmd: RootCmd = RootCmd::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cmd.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let cfg = match load_config(cmd.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let res = match cmd.subcmd {
        SubCmd::Solve(c) => c.entrypoint(&cfg),
        SubCmd::AttackerCost(c) => c.entrypoint(&cfg),
        SubCmd::Costs(c) => c.entrypoint(&cfg),
        SubCmd::Kscheme(c) => c.entrypoint(&cfg),
    };
    if let Err(e) = res {
        error!("{}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> config::Result<Config> {
    match path {
        Some(p) => Config::load_from_file(&config::expand_path(p)?),
        None => match config::get_default_config_dir() {
            Ok(dir) => Config::load_or_default(&dir),
            Err(_) => Ok(Config::default()),
        },
    }
}

/// Command line values take precedence over the config file.
pub fn sweep_params(
    cfg: &Config,
    n_nodes: Option<usize>,
    n_seats: Option<usize>,
    mode: Option<Mode>,
) -> kpcommittee::Result<SweepParams> {
    let params = SweepParams {
        n_nodes: n_nodes.unwrap_or(cfg.n_nodes),
        n_seats: n_seats.unwrap_or(cfg.n_seats),
        mode: mode.unwrap_or(cfg.mode),
    };
    params.validate()?;
    Ok(params)
}
