use crate::core::term::Term;
use std::fmt::{self, Formatter};
use std::rc::Rc;

/// Persistent list of goals that remain to be proven.
///
/// Resolution replaces the first goal with a clause body, so the rest of the
/// list is shared between all branches that split off at that point.
#[derive(Clone, Default)]
pub struct Goals(Option<Rc<Node>>);

struct Node {
    goal: Term,
    next: Goals,
}

impl Goals {
    pub fn empty() -> Self {
        Goals(None)
    }

    pub fn cons(goal: Term, next: Goals) -> Self {
        Goals(Some(Rc::new(Node { goal, next })))
    }

    /// `goals ++ rest`
    pub fn prepend(goals: &[Term], rest: Goals) -> Self {
        goals.iter().rev().fold(rest, |list, goal| Goals::cons(goal.clone(), list))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn first(&self) -> Option<&Term> {
        self.0.as_ref().map(|node| &node.goal)
    }

    /// Split off the selected goal.
    pub fn split_first(&self) -> Option<(Term, Goals)> {
        self.0.as_ref().map(|node| (node.goal.clone(), node.next.clone()))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> GoalsIter<'_> {
        GoalsIter(self)
    }
}

impl std::iter::FromIterator<Term> for Goals {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let goals: Vec<_> = iter.into_iter().collect();
        Goals::prepend(&goals, Goals::empty())
    }
}

impl Drop for Goals {
    // unlink iteratively so long goal lists don't overflow the stack
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.0.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct GoalsIter<'a>(&'a Goals);

impl<'a> Iterator for GoalsIter<'a> {
    type Item = &'a Term;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0 .0.as_ref()?;
        self.0 = &node.next;
        Some(&node.goal)
    }
}

impl fmt::Debug for Goals {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(name: &str) -> Term {
        Term::atom(name)
    }

    #[test]
    fn prepend_keeps_body_order() {
        let rest: Goals = vec![goal("c"), goal("d")].into_iter().collect();
        let goals = Goals::prepend(&[goal("a"), goal("b")], rest.clone());
        let names: Vec<_> = goals.iter().map(Term::to_string).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn split_first_shares_the_tail() {
        let goals: Goals = vec![goal("a"), goal("b")].into_iter().collect();
        let (first, rest) = goals.split_first().unwrap();
        assert_eq!(first, goal("a"));
        assert_eq!(rest.first(), Some(&goal("b")));
        assert!(Goals::empty().split_first().is_none());
    }

    #[test]
    fn dropping_a_long_list_does_not_overflow() {
        let goals: Goals = (0..200_000).map(|i| Term::atom(format!("g{}", i))).collect();
        assert_eq!(goals.len(), 200_000);
        drop(goals);
    }
}
