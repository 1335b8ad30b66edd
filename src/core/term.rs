//! Terms are the values the engine reasons about.
//!
//! A term is an atom, a logic variable or a compound term made of a
//! functor and a non-empty list of argument terms.

use std::fmt::{self, Formatter};
use std::sync::Arc;

/// Interned-by-sharing name of an atom, variable or functor.
pub type Symbol = Arc<str>;

/// Atom, logic variable or compound term.
///
/// Compound arguments live behind an `Arc` so cloning a term is cheap and
/// structurally shares its arguments; use [`Term::deep_copy`] when a fully
/// independent copy is wanted.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Atom(Symbol),
    Var(Symbol),
    Compound(Symbol, Arc<[Term]>),
}

impl Term {
    /// Create an atom.
    pub fn atom(name: impl Into<Symbol>) -> Self {
        Term::Atom(name.into())
    }

    /// Create an (unbound) logic variable.
    pub fn var(name: impl Into<Symbol>) -> Self {
        Term::Var(name.into())
    }

    /// Create a compound term `functor(args...)`.
    ///
    /// Without arguments the result is the atom `functor`: zero-arity
    /// compounds do not exist.
    pub fn compound(functor: impl Into<Symbol>, args: Vec<Term>) -> Self {
        let functor = functor.into();
        if args.is_empty() {
            Term::Atom(functor)
        } else {
            Term::Compound(functor, args.into())
        }
    }

    /// Name of the atom or variable, or the functor of a compound.
    pub fn name(&self) -> &str {
        match self {
            Term::Atom(name) | Term::Var(name) | Term::Compound(name, _) => name,
        }
    }

    /// Number of arguments; zero for atoms and variables.
    pub fn arity(&self) -> usize {
        match self {
            Term::Compound(_, args) => args.len(),
            Term::Atom(_) | Term::Var(_) => 0,
        }
    }

    /// Arguments of a compound term, empty for anything else.
    pub fn args(&self) -> &[Term] {
        match self {
            Term::Compound(_, args) => args,
            Term::Atom(_) | Term::Var(_) => &[],
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    /// `(functor, arity)` of atoms and compounds; `None` for variables.
    pub fn predicate_key(&self) -> Option<(Symbol, usize)> {
        match self {
            Term::Atom(name) => Some((name.clone(), 0)),
            Term::Compound(functor, args) => Some((functor.clone(), args.len())),
            Term::Var(_) => None,
        }
    }

    /// Recursively duplicate the term without sharing any argument storage.
    pub fn deep_copy(&self) -> Term {
        match self {
            Term::Atom(name) => Term::Atom(name.clone()),
            Term::Var(name) => Term::Var(name.clone()),
            Term::Compound(functor, args) => Term::Compound(
                functor.clone(),
                args.iter().map(Term::deep_copy).collect::<Vec<_>>().into(),
            ),
        }
    }

    /// Compare two terms as written, without looking through any substitution.
    pub fn structural_eq(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Atom(a), Term::Atom(b)) | (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Compound(f, xs), Term::Compound(g, ys)) => {
                f == g
                    && xs.len() == ys.len()
                    && xs.iter().zip(ys.iter()).all(|(x, y)| x.structural_eq(y))
            }
            _ => false,
        }
    }

    /// Push the names of all variables in the term, in order of first
    /// appearance, skipping names already in `out`.
    pub fn collect_vars(&self, out: &mut Vec<Symbol>) {
        match self {
            Term::Var(name) => {
                if !out.contains(name) {
                    out.push(name.clone())
                }
            }
            Term::Atom(_) => {}
            Term::Compound(_, args) => args.iter().for_each(|arg| arg.collect_vars(out)),
        }
    }

    /// Returns `true` if the term contains no variables.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Atom(_) => true,
            Term::Compound(_, args) => args.iter().all(Term::is_ground),
        }
    }
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Term::atom(name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) | Term::Var(name) => write!(f, "{}", name),
            Term::Compound(functor, args) => {
                write!(f, "{}(", functor)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                }
                for arg in iter {
                    write!(f, ", {}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
