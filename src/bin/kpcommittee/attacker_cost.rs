// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use clap::Args;

use kpcommittee::config::Config;
use kpcommittee::sweep::{attacker_cost_grid, zipf_range};
use kpcommittee::Mode;

use crate::CmdResult;

/// Minimum attacker cost over a range of Zipf exponents and k-schemes
#[derive(Args)]
pub struct AttackerCostCmd {
    /// Number of nodes in the network
    #[clap(long)]
    n_nodes: Option<usize>,
    /// Number of seats in the committee
    #[clap(long)]
    n_seats: Option<usize>,
    /// Either stop or overtake the committee
    #[clap(long)]
    mode: Option<Mode>,
    /// Smallest Zipf exponent
    #[clap(long)]
    zipfc_min: Option<f64>,
    /// Largest Zipf exponent
    #[clap(long)]
    zipfc_max: Option<f64>,
    /// Increment between Zipf exponents
    #[clap(long)]
    zipfc_step: Option<f64>,
    /// Sweep the k-scheme over 1..=k_max tiers
    #[clap(long)]
    k_max: Option<usize>,
    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

impl AttackerCostCmd {
    pub fn entrypoint(&self, cfg: &Config) -> CmdResult {
        let params = crate::sweep_params(cfg, self.n_nodes, self.n_seats, self.mode)?;
        let exponents = zipf_range(
            self.zipfc_min.unwrap_or(cfg.zipfc_min),
            self.zipfc_max.unwrap_or(cfg.zipfc_max),
            self.zipfc_step.unwrap_or(cfg.zipfc_step),
        )?;
        let k_max = self.k_max.unwrap_or(cfg.k_max);

        let grid = attacker_cost_grid(&params, k_max, &exponents)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&grid)?);
            return Ok(());
        }

        print!("{:>8}", "s");
        for curve in &grid {
            print!(" {:>12}", format!("k={}", curve.k));
        }
        println!();
        for (i, s) in exponents.iter().enumerate() {
            print!("{:>8.3}", s);
            for curve in &grid {
                print!(" {:>12.6}", curve.points[i].attacker_cost);
            }
            println!();
        }
        Ok(())
    }
}
