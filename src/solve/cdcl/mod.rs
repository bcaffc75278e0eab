/*
Conflict-driven clause learning over `Cnf3`.

Every assigned literal carries a genealogy: the trail index of the most
recent decision it depends on (`decide_a`), and the second-most recent one
(`decide_b`), folded together through whichever clause forced it. A conflict
between two falsified literals of a clause combines their genealogies the
same way. The search always learns the negation of `decide_a`'s own literal
(the most recent decision the conflict depends on) as a permanent unit, and
backjumps to just past `decide_b` (or all the way to the root if the conflict
depends on only one decision) before asserting it — so the same conflict can
never recur, and each conflict strictly shrinks the set of still-free
variables, so the search terminates within at most one conflict per variable.
*/

mod conflict;
mod decide;
mod engine;

pub use engine::{solve, solve_with_stats, Antecedent, Engine, Rule};
