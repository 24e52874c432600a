// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use criterion::Criterion;
use rand::{thread_rng, Rng};

use kpcommittee::data::cost::{generate_costs, ZipfExponents};

pub fn zipf_costs(c: &mut Criterion) {
    const NODES: usize = 100_000;
    let mut rng = thread_rng();

    c.bench_function("cost::generate_costs() (100k nodes)", |b| {
        b.iter_with_setup(
            || ZipfExponents::Scalar(rng.gen_range(0.5, 1.5)),
            |s| generate_costs(NODES, &s).unwrap(),
        );
    });
}

pub fn zipf_costs_per_seat(c: &mut Criterion) {
    const NODES: usize = 100_000;
    let mut rng = thread_rng();

    c.bench_function("cost::generate_costs() per seat (100k nodes)", |b| {
        b.iter_with_setup(
            || ZipfExponents::PerSeat((0..NODES).map(|_| rng.gen_range(0.5, 1.5)).collect()),
            |s| generate_costs(NODES, &s).unwrap(),
        );
    });
}
