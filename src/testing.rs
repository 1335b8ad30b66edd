use crate::config::SolverConfig;
use crate::core::term::Term;
use crate::database::KnowledgeBase;
use crate::solve::{Solution, Solutions};

/// Runaway test queries fail instead of hanging.
const TEST_STEP_LIMIT: usize = 100_000;

fn query(kb: &KnowledgeBase, goals: Vec<Term>) -> Solutions<'_> {
    kb.query_with(goals, SolverConfig::unbounded().with_max_steps(TEST_STEP_LIMIT))
}

/// Run a query to completion, panicking if a solver limit is hit.
pub fn solve(kb: &KnowledgeBase, goals: Vec<Term>) -> Vec<Solution> {
    query(kb, goals).collect::<Result<_, _>>().unwrap()
}

/// Assert that a query has no solution
pub fn fails(kb: &KnowledgeBase, goals: Vec<Term>) {
    assert!(solve(kb, goals).is_empty());
}

/// Assert that a query succeeds at least once
pub fn succeeds(kb: &KnowledgeBase, goals: Vec<Term>) {
    let first = query(kb, goals).next();
    assert!(matches!(first, Some(Ok(_))), "expected a solution, got {:?}", first);
}

/// The values of `var` in every solution, in order.
pub fn answers(kb: &KnowledgeBase, goals: Vec<Term>, var: &str) -> Vec<String> {
    solve(kb, goals)
        .iter()
        .map(|solution| solution.get(var).unwrap().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeds_accepts_a_proof() {
        let kb = knowledge_base! { sunny; };
        succeeds(&kb, terms![sunny]);
    }

    #[test]
    #[should_panic(expected = "expected a solution")]
    fn succeeds_rejects_a_query_cut_short_by_a_limit() {
        let kb = knowledge_base! { loop_forever :- loop_forever; };
        succeeds(&kb, terms![loop_forever]);
    }

    #[test]
    #[should_panic(expected = "expected a solution")]
    fn succeeds_rejects_a_failed_query() {
        succeeds(&KnowledgeBase::new(), terms![sunny]);
    }
}
