//! Core data structures and logic algorithms

pub mod clause;
pub mod goal;
pub mod logic_variable;
pub mod substitution;
pub mod term;
pub mod unify;
