use crate::config::SolverConfig;
use crate::core::clause::Clause;
use crate::core::term::{Symbol, Term};
use crate::solve::Solutions;
use rustc_hash::FxHashMap;
use std::ops::Range;

/// Ordered, append-only collection of clauses.
///
/// Clause order is the order in which resolution tries them.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
    /// clause indices per `(functor, arity)`, in insertion order
    predicates: FxHashMap<(Symbol, usize), Vec<usize>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_clause(&mut self, clause: Clause) {
        debug!("add_clause({})", clause);
        let index = self.clauses.len();
        if let Some(key) = clause.head().predicate_key() {
            self.predicates.entry(key).or_default().push(index);
        }
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Indices of the clauses whose head might unify with `goal`, in order.
    ///
    /// `goal` should already be dereferenced; an unbound variable goal can
    /// match any clause.
    pub(crate) fn candidates(&self, goal: &Term) -> Candidates<'_> {
        match goal.predicate_key() {
            None => Candidates::All(0..self.clauses.len()),
            Some(key) => match self.predicates.get(&key) {
                Some(indices) => Candidates::Indexed(indices.iter()),
                None => Candidates::All(0..0),
            },
        }
    }

    /// Prove `goals` from left to right, producing every solution lazily.
    pub fn query(&self, goals: impl IntoIterator<Item = Term>) -> Solutions<'_> {
        self.query_with(goals, SolverConfig::default())
    }

    pub fn query_with(
        &self,
        goals: impl IntoIterator<Item = Term>,
        config: SolverConfig,
    ) -> Solutions<'_> {
        Solutions::new(self, goals.into_iter().collect(), config)
    }
}

impl Extend<Clause> for KnowledgeBase {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        for clause in iter {
            self.add_clause(clause)
        }
    }
}

impl std::iter::FromIterator<Clause> for KnowledgeBase {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        let mut kb = KnowledgeBase::new();
        kb.extend(iter);
        kb
    }
}

pub(crate) enum Candidates<'kb> {
    All(Range<usize>),
    Indexed(std::slice::Iter<'kb, usize>),
}

impl Iterator for Candidates<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Candidates::All(range) => range.next(),
            Candidates::Indexed(iter) => iter.next().copied(),
        }
    }
}

/// Build a knowledge base from clauses written as
/// `head(args...);` or `head(args...) :- goal(args...), ...;`.
///
/// Arguments use the syntax of [`term!`](crate::term): `?X` is a variable,
/// any other identifier is an atom.
#[macro_export]
macro_rules! knowledge_base {
    ($(
        $h:ident $( ( $($ha:tt)* ) )?
        $( :- $( $g:ident $( ( $($ga:tt)* ) )? ),+ )?
    );* $(;)?) => {{
        #[allow(unused_mut)]
        let mut kb = $crate::database::KnowledgeBase::new();
        $(
            kb.add_clause($crate::core::clause::Clause::from_parts(
                stringify!($h),
                $crate::terms![$($($ha)*)?],
                vec![$($( $crate::term!($g $( ( $($ga)* ) )?) ),+)?],
            ));
        )*
        kb
    }};
}
