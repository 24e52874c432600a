// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use clap::Args;
use serde::Serialize;

use kpcommittee::config::Config;
use kpcommittee::sweep::SweepParams;
use kpcommittee::{generate_costs, generate_weights, solve, Mode, Selection, ZipfExponents};

use crate::CmdResult;

/// Solve a single committee instance
#[derive(Args)]
pub struct SolveCmd {
    /// Number of nodes in the network
    #[clap(long)]
    n_nodes: Option<usize>,
    /// Number of seats in the committee
    #[clap(long)]
    n_seats: Option<usize>,
    /// Zipf exponent of the cost law
    #[clap(long)]
    zipfc: Option<f64>,
    /// Either stop or overtake the committee
    #[clap(long)]
    mode: Option<Mode>,
    /// Number of tiers of the k-scheme
    #[clap(short, long)]
    k: Option<usize>,
    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct SolveReport<'a> {
    params: SweepParams,
    zipf_exponent: f64,
    k: usize,
    costs: &'a [f64],
    weights: &'a [u64],
    selection: &'a Selection<u64>,
}

impl SolveCmd {
    pub fn entrypoint(&self, cfg: &Config) -> CmdResult {
        let params = crate::sweep_params(cfg, self.n_nodes, self.n_seats, self.mode)?;
        let s = self.zipfc.unwrap_or(cfg.zipfc);
        let k = self.k.unwrap_or(cfg.k);

        let costs = generate_costs(params.n_nodes, &ZipfExponents::Scalar(s))?
            .truncated(params.n_seats);
        let weights = generate_weights(params.n_seats, k)?;
        let selection = solve(&costs, &weights, params.mode.threshold())?;

        if self.json {
            let report = SolveReport {
                params,
                zipf_exponent: s,
                k,
                costs: &costs,
                weights: &weights,
                selection: &selection,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{:>6} {:>12} {:>8} {:>9}", "seat", "cost", "weight", "selected");
        for (i, (c, w)) in costs.iter().zip(weights.iter()).enumerate() {
            println!(
                "{:>6} {:>12.6} {:>8} {:>9}",
                i + 1,
                c,
                w,
                selection.contains(i)
            );
        }
        println!();

        let seats: Vec<usize> = selection.seats.iter().map(|i| i + 1).collect();
        println!(
            "To {} the committee with the total voting power of {},",
            params.mode,
            weights.total()
        );
        println!(
            "an adversary needs to obtain at least voting power of {}.",
            selection.required_weight
        );
        println!("The minimum cost of doing this is {:.6}.", selection.total_cost);
        println!("Seats to be selected: {:?}", seats);
        println!("Obtained voting power: {}", selection.total_weight);
        Ok(())
    }
}
