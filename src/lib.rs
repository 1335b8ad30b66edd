//! A small logic programming engine.
//!
//! Terms are atoms, variables and compound terms. A [`KnowledgeBase`]
//! holds facts and rules, and a query is answered by SLD resolution:
//! unification with occurs-check, depth-first search over the clauses in
//! the order they were added, and backtracking through a trail of
//! variable bindings. Solutions are produced lazily.
//!
//! ```
//! use mini_prolog::{knowledge_base, terms};
//!
//! let kb = knowledge_base! {
//!     parent(pam, bob);
//!     parent(tom, bob);
//!     parent(bob, ann);
//!     grandparent(?X, ?Y) :- parent(?X, ?Z), parent(?Z, ?Y);
//! };
//! let answers: Vec<String> = kb
//!     .query(terms![grandparent(?G, ann)])
//!     .map(|solution| solution.unwrap().to_string())
//!     .collect();
//! assert_eq!(answers, ["G = pam", "G = tom"]);
//! ```

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[macro_use]
extern crate log;

#[macro_use]
pub mod macros;
pub mod config;
pub mod core;
#[macro_use]
pub mod database;
pub mod error;
pub mod prelude;
pub mod solve;

#[cfg(test)]
mod testing;

pub use crate::config::SolverConfig;
pub use crate::core::clause::Clause;
pub use crate::core::term::Term;
pub use crate::database::KnowledgeBase;
pub use crate::error::{LogicError, LogicResult};
pub use crate::solve::{Solution, Solutions};
