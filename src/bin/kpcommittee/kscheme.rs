// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use kpcommittee::config::Config;
use kpcommittee::data::committee::tier_ranges;
use kpcommittee::{generate_weights, WeightVector};

use crate::CmdResult;

/// Voting power of every seat under the k-schemes for k = 1..=k_max
#[derive(Args)]
pub struct KschemeCmd {
    /// Number of seats in the committee
    #[clap(long)]
    n_seats: Option<usize>,
    /// Largest number of tiers
    #[clap(long)]
    k_max: Option<usize>,
    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct Scheme {
    k: usize,
    weights: WeightVector,
}

impl KschemeCmd {
    pub fn entrypoint(&self, cfg: &Config) -> CmdResult {
        let n = self.n_seats.unwrap_or(cfg.n_seats);
        let k_max = self.k_max.unwrap_or(cfg.k_max);

        let schemes = (1..=k_max)
            .map(|k| -> kpcommittee::Result<Scheme> {
                for tier in tier_ranges(n, k)? {
                    debug!(k, value = tier.value, seats = ?tier.seats, "tier");
                }
                Ok(Scheme {
                    k,
                    weights: generate_weights(n, k)?,
                })
            })
            .collect::<kpcommittee::Result<Vec<Scheme>>>()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&schemes)?);
            return Ok(());
        }

        print!("{:>6}", "seat");
        for scheme in &schemes {
            print!(" {:>6}", format!("k={}", scheme.k));
        }
        println!();
        for i in 0..n {
            print!("{:>6}", i + 1);
            for scheme in &schemes {
                print!(" {:>6}", scheme.weights[i]);
            }
            println!();
        }
        println!();
        for scheme in &schemes {
            println!("k={}: total voting power {}", scheme.k, scheme.weights.total());
        }
        Ok(())
    }
}
