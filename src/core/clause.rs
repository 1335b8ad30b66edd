use crate::core::term::{Symbol, Term};
use crate::error::{LogicError, LogicResult};
use std::fmt::{self, Formatter};

/// A fact (`head.`) or a rule (`head :- goal, ...`).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    head: Term,
    body: Vec<Term>,
}

impl Clause {
    /// Create a clause, rejecting a bare variable as head.
    pub fn new(head: Term, body: Vec<Term>) -> LogicResult<Self> {
        if head.is_var() {
            return Err(LogicError::VariableHead(head));
        }
        Ok(Clause { head, body })
    }

    /// Create a clause with an empty body.
    pub fn fact(head: Term) -> LogicResult<Self> {
        Clause::new(head, vec![])
    }

    /// Build the clause `functor(args...) :- body`.
    ///
    /// The head is built from its functor, so it is never a variable. With no
    /// arguments the head is the atom `functor`.
    pub fn from_parts(functor: impl Into<Symbol>, args: Vec<Term>, body: Vec<Term>) -> Self {
        Clause { head: Term::compound(functor, args), body }
    }

    pub fn head(&self) -> &Term {
        &self.head
    }

    pub fn body(&self) -> &[Term] {
        &self.body
    }

    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    pub fn into_parts(self) -> (Term, Vec<Term>) {
        (self.head, self.body)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        let mut goals = self.body.iter();
        if let Some(goal) = goals.next() {
            write!(f, " :- {}", goal)?;
            for goal in goals {
                write!(f, ", {}", goal)?;
            }
        }
        write!(f, ".")
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
