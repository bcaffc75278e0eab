/*
Decision literal selection: a free variable is chosen uniformly at
random, and its polarity is also a coin flip. The `rand` crate and a seeded
`StdRng` (rather than a hand-rolled PRNG) are what the sibling pack solvers
(`otter_sat`, `splr`) reach for to keep decisions reproducible across runs
with the same seed.
*/

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;

use crate::cnf::{Literal, Var};

pub fn choose_decision_literal(free: &HashSet<Var>, rng: &mut StdRng) -> Literal {
    let index = rng.gen_range(0..free.len());
    let var = *free.iter().nth(index).expect("index is within free.len()");
    if rng.gen_bool(0.5) {
        var as Literal
    } else {
        -(var as Literal)
    }
}
