// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

mod committee;
mod cost;

pub use committee::*;
pub use cost::*;
