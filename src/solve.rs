//! SLD resolution.
//!
//! Goals are selected left to right and clauses are tried in knowledge base
//! order. The search is depth-first and produces every solution, driven one
//! at a time by [`Solutions::next`].
//!
//! Each open node of the proof tree is a `ChoicePoint` on an explicit
//! stack. It records the goal being resolved, the goals after it, the
//! clauses not yet tried, and the trail position to return to before the
//! next clause is tried. Backtracking is therefore a trail rollback plus a
//! stack pop.

use crate::config::SolverConfig;
use crate::core::goal::Goals;
use crate::core::logic_variable::FreshVars;
use crate::core::substitution::{Checkpoint, Substitution};
use crate::core::term::{Symbol, Term};
use crate::database::{Candidates, KnowledgeBase};
use crate::error::{LogicError, LogicResult};
use std::fmt::{self, Formatter};
use std::iter::FusedIterator;

/// One answer to a query: the value of every query variable.
#[derive(Clone, PartialEq, Eq)]
pub struct Solution {
    bindings: Vec<(Symbol, Term)>,
}

impl Solution {
    /// Value of the query variable `var`, with all bindings applied.
    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.iter().find(|(name, _)| &**name == var).map(|(_, t)| t)
    }

    /// Query variables and their values in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> + '_ {
        self.bindings.iter().map(|(name, t)| (&**name, t))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        match iter.next() {
            None => write!(f, "true"),
            Some((var, t)) => {
                write!(f, "{} = {}", var, t)?;
                for (var, t) in iter {
                    write!(f, ", {} = {}", var, t)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}

struct ChoicePoint<'kb> {
    goal: Term,
    rest: Goals,
    candidates: Candidates<'kb>,
    checkpoint: Checkpoint,
    depth: usize,
}

/// Lazy sequence of the solutions of one query.
///
/// Yields `Ok(solution)` for each proof found. If a limit from the
/// [`SolverConfig`] is hit, a single `Err` is yielded and the sequence
/// ends. An empty sequence means the query has no proof.
pub struct Solutions<'kb> {
    kb: &'kb KnowledgeBase,
    config: SolverConfig,
    query_vars: Vec<Symbol>,
    sub: Substitution,
    fresh: FreshVars,
    stack: Vec<ChoicePoint<'kb>>,
    start: Option<Goals>,
    steps: usize,
    done: bool,
}

impl<'kb> Solutions<'kb> {
    pub(crate) fn new(kb: &'kb KnowledgeBase, goals: Goals, config: SolverConfig) -> Self {
        let mut query_vars = vec![];
        goals.iter().for_each(|goal| goal.collect_vars(&mut query_vars));
        debug!("query({:?}) over {} clauses", goals, kb.len());
        Solutions {
            kb,
            config,
            fresh: FreshVars::avoiding(query_vars.iter().cloned()),
            query_vars,
            sub: Substitution::empty(),
            stack: vec![],
            start: Some(goals),
            steps: 0,
            done: false,
        }
    }

    /// Number of clause attempts made so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Continue the search with `goals` at proof depth `depth`.
    ///
    /// Returns a solution if no goals remain, an error if the depth limit is
    /// exceeded, and `None` after opening a new choice point.
    fn descend(&mut self, goals: Goals, depth: usize) -> Option<LogicResult<Solution>> {
        let (goal, rest) = match goals.split_first() {
            Some(split) => split,
            None => return Some(Ok(self.solution())),
        };
        if let Some(max_depth) = self.config.max_depth {
            if depth > max_depth {
                return Some(Err(LogicError::DepthLimitExceeded(max_depth)));
            }
        }
        trace!("descend(goal: {}, depth: {})", goal, depth);
        let candidates = self.kb.candidates(self.sub.dereference(&goal));
        let checkpoint = self.sub.mark();
        self.stack.push(ChoicePoint { goal, rest, candidates, checkpoint, depth });
        None
    }

    fn solution(&self) -> Solution {
        let bindings = self
            .query_vars
            .iter()
            .map(|var| (var.clone(), self.sub.apply(&Term::Var(var.clone()))))
            .collect();
        let solution = Solution { bindings };
        debug!("solution: {}", solution);
        solution
    }

    fn finish(&mut self) {
        self.done = true;
        self.stack.clear();
    }

    fn step(&mut self) -> Option<LogicResult<Solution>> {
        if let Some(goals) = self.start.take() {
            if let Some(result) = self.descend(goals, 0) {
                return Some(result);
            }
        }

        loop {
            let cp = match self.stack.last_mut() {
                Some(cp) => cp,
                None => return None,
            };
            // undo whatever the previous clause attempt at this node bound
            self.sub.rollback(cp.checkpoint);

            let index = match cp.candidates.next() {
                Some(index) => index,
                None => {
                    trace!("backtrack(goal: {})", cp.goal);
                    self.stack.pop();
                    continue;
                }
            };

            self.steps += 1;
            if let Some(max_steps) = self.config.max_steps {
                if self.steps > max_steps {
                    return Some(Err(LogicError::StepLimitExceeded(max_steps)));
                }
            }

            let clause = self.fresh.rename_clause(&self.kb.clauses()[index]);
            if !self.sub.unify(&cp.goal, clause.head()) {
                continue;
            }
            trace!("resolve(goal: {}, clause: {})", cp.goal, clause);

            let depth = cp.depth + 1;
            let goals = Goals::prepend(clause.body(), cp.rest.clone());
            if let Some(result) = self.descend(goals, depth) {
                return Some(result);
            }
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = LogicResult<Solution>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.step() {
            Some(Ok(solution)) => Some(Ok(solution)),
            Some(Err(err)) => {
                warn!("query aborted after {} steps: {}", self.steps, err);
                self.finish();
                Some(Err(err))
            }
            None => {
                debug!("query exhausted after {} steps", self.steps);
                self.finish();
                None
            }
        }
    }
}

impl FusedIterator for Solutions<'_> {}
