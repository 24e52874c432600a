// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use criterion::Criterion;
use rand::{thread_rng, Rng};

use kpcommittee::data::basics::Threshold;
use kpcommittee::{generate_costs, generate_weights, solve, ZipfExponents};

fn instance(n_nodes: usize, n_seats: usize, k: usize) -> (Vec<f64>, Vec<u64>) {
    let costs = generate_costs(n_nodes, &ZipfExponents::Scalar(1.0))
        .unwrap()
        .truncated(n_seats)
        .into_inner();
    let weights = generate_weights(n_seats, k).unwrap().into_inner();
    (costs, weights)
}

pub fn solve_stop(c: &mut Criterion) {
    let (costs, weights) = instance(1000, 200, 20);

    c.bench_function("solver::solve() stop (200 seats, k=20)", |b| {
        b.iter(|| solve(&costs, &weights, Threshold::stop()).unwrap())
    });
}

pub fn solve_overtake(c: &mut Criterion) {
    let (costs, weights) = instance(1000, 200, 200);

    c.bench_function("solver::solve() overtake (200 seats, k=200)", |b| {
        b.iter(|| solve(&costs, &weights, Threshold::overtake()).unwrap())
    });
}

pub fn solve_random(c: &mut Criterion) {
    const SEATS: usize = 100;
    let mut rng = thread_rng();

    c.bench_function("solver::solve() random (100 seats)", |b| {
        b.iter_with_setup(
            || {
                let costs: Vec<f64> = (0..SEATS).map(|_| rng.gen::<f64>()).collect();
                let weights: Vec<u64> = (0..SEATS).map(|_| rng.gen_range(1, 50)).collect();
                (costs, weights)
            },
            |(costs, weights)| solve(&costs, &weights, Threshold::overtake()).unwrap(),
        );
    });
}
