// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use criterion::Criterion;
use rand::{thread_rng, Rng};

use kpcommittee::data::committee::generate_weights;

pub fn kscheme_weights(c: &mut Criterion) {
    const SEATS: usize = 10_000;
    let mut rng = thread_rng();

    c.bench_function("committee::generate_weights() (10k seats)", |b| {
        b.iter_with_setup(
            || rng.gen_range(1, SEATS + 1),
            |k| generate_weights(SEATS, k).unwrap(),
        );
    });
}
