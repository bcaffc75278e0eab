/*
Genealogy combination for conflict-driven backjumping.

`combine` folds the (decide_a, decide_b) pairs of two antecedents into one:
alpha is the most recent decision either depends on, beta is the most
recent decision strictly before alpha that either depends on. `Option<usize>`
is used as the trail-index type precisely so this can lean on its derived
`Ord` (`None < Some(_)`), which already reproduces the "no such decision"
sentinel the max-of-four computation needs without writing it out by hand.
*/

pub fn combine(candidates: [Option<usize>; 4]) -> (Option<usize>, Option<usize>) {
    let alpha = *candidates.iter().max().expect("four candidates is never empty");
    let beta = candidates.iter().copied().filter(|c| *c < alpha).max().unwrap_or(None);
    (alpha, beta)
}

pub fn combine_pair(a: (Option<usize>, Option<usize>), b: (Option<usize>, Option<usize>)) -> (Option<usize>, Option<usize>) {
    combine([a.0, a.1, b.0, b.1])
}
