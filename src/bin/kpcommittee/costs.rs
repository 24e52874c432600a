// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use clap::Args;

use kpcommittee::config::Config;
use kpcommittee::sweep::zipf_range;
use kpcommittee::{generate_costs, CostVector, ZipfExponents};

use crate::CmdResult;

/// Zipf cost vectors of the network for a range of exponents
#[derive(Args)]
pub struct CostsCmd {
    /// Number of nodes in the network
    #[clap(long)]
    n_nodes: Option<usize>,
    /// Only print the costs of the first n_seats nodes
    #[clap(long)]
    n_seats: Option<usize>,
    /// Smallest Zipf exponent
    #[clap(long)]
    zipfc_min: Option<f64>,
    /// Largest Zipf exponent
    #[clap(long)]
    zipfc_max: Option<f64>,
    /// Increment between Zipf exponents
    #[clap(long)]
    zipfc_step: Option<f64>,
    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

impl CostsCmd {
    pub fn entrypoint(&self, cfg: &Config) -> CmdResult {
        let n_nodes = self.n_nodes.unwrap_or(cfg.n_nodes);
        let exponents = zipf_range(
            self.zipfc_min.unwrap_or(cfg.zipfc_min),
            self.zipfc_max.unwrap_or(cfg.zipfc_max),
            self.zipfc_step.unwrap_or(cfg.zipfc_step),
        )?;

        let columns = exponents
            .iter()
            .map(|&s| -> kpcommittee::Result<CostVector> {
                let costs = generate_costs(n_nodes, &ZipfExponents::Scalar(s))?;
                Ok(match self.n_seats {
                    Some(n_seats) => costs.truncated(n_seats),
                    None => costs,
                })
            })
            .collect::<kpcommittee::Result<Vec<CostVector>>>()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&columns)?);
            return Ok(());
        }

        print!("{:>6}", "rank");
        for s in &exponents {
            print!(" {:>10}", format!("s={:.3}", s));
        }
        println!();
        let rows = columns.first().map_or(0, |c| c.len());
        for i in 0..rows {
            print!("{:>6}", i + 1);
            for costs in &columns {
                print!(" {:>10.6}", costs[i]);
            }
            println!();
        }
        Ok(())
    }
}
