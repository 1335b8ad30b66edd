pub use crate::{
    config::SolverConfig,
    core::{
        clause::Clause,
        logic_variable::FreshVars,
        substitution::{Checkpoint, Substitution},
        term::{Symbol, Term},
        unify::unify,
    },
    database::KnowledgeBase,
    error::{LogicError, LogicResult},
    solve::{Solution, Solutions},
};
