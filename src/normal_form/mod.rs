/*
The two clausal lowerings. Both take a propositional `Expr` and a
`VarTable` to intern into, and produce a `Cnf`. `distributive` is the
textbook CDNNF -> NNF -> cartesian-product construction (potentially
exponential in clause count). `tseytin` introduces one auxiliary variable per
subexpression and is linear in the size of the input, at the cost of the
auxiliary variables showing up in the model.
*/

pub mod distributive;
pub mod tseytin;
