//! Substitutions map variables to terms.
//!
//! The substitution is kept as a trail: an append-only log of bindings.
//! Backtracking marks the trail length and later truncates back to it,
//! which undoes every binding made in between.

use crate::core::term::{Symbol, Term};
use rustc_hash::FxHashMap;
use std::fmt::{self, Formatter};

/// Position in the trail returned by [`Substitution::mark`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

#[derive(Clone)]
struct Binding {
    var: Symbol,
    term: Term,
    /// Trail index of the binding this one shadows, if any.
    shadowed: Option<usize>,
}

/// Mapping of variables to terms, recorded as a trail.
#[derive(Clone, Default)]
pub struct Substitution {
    trail: Vec<Binding>,
    index: FxHashMap<Symbol, usize>,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of bindings on the trail.
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Record the binding `var => term`.
    ///
    /// The caller is responsible for the occurs-check; binding a variable
    /// to a term containing itself would make [`Substitution::apply`] loop.
    pub fn bind(&mut self, var: impl Into<Symbol>, term: Term) {
        let var = var.into();
        let position = self.trail.len();
        let shadowed = self.index.insert(var.clone(), position);
        trace!("bind({} => {})", var, term);
        self.trail.push(Binding { var, term, shadowed });
    }

    /// Most recent binding of `var`.
    pub fn lookup(&self, var: &str) -> Option<&Term> {
        self.index.get(var).map(|&i| &self.trail[i].term)
    }

    /// Follow variable bindings until reaching an atom, a compound or an
    /// unbound variable.
    ///
    /// If `t` is not a bound variable, `t` itself is returned.
    pub fn dereference<'a>(&'a self, t: &'a Term) -> &'a Term {
        let mut t = t;
        while let Term::Var(name) = t {
            match self.lookup(name) {
                Some(next) => t = next,
                None => break,
            }
        }
        t
    }

    /// Replace every bound variable in `t`, at any depth, by its value.
    pub fn apply(&self, t: &Term) -> Term {
        match self.dereference(t) {
            Term::Compound(functor, args) => Term::Compound(
                functor.clone(),
                args.iter().map(|arg| self.apply(arg)).collect::<Vec<_>>().into(),
            ),
            t => t.clone(),
        }
    }

    /// Returns `true` if the variable `var` occurs in `t` once all bound
    /// variables in `t` are substituted.
    pub fn occurs(&self, var: &str, t: &Term) -> bool {
        match self.dereference(t) {
            Term::Var(name) => &**name == var,
            Term::Atom(_) => false,
            Term::Compound(_, args) => args.iter().any(|arg| self.occurs(var, arg)),
        }
    }

    /// Remember the current trail length.
    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Undo all bindings made since `checkpoint` was taken.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        let Checkpoint(len) = checkpoint;
        while self.trail.len() > len {
            if let Some(binding) = self.trail.pop() {
                match binding.shadowed {
                    Some(prev) => {
                        self.index.insert(binding.var, prev);
                    }
                    None => {
                        self.index.remove(&binding.var);
                    }
                }
            }
        }
    }

    /// Bindings in the order they were made.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Term)> + '_ {
        self.trail.iter().map(|b| (&*b.var, &b.term))
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.bindings();
        if let Some((var, val)) = iter.next() {
            write!(f, "{}: {}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {}: {}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Construct a substitution
#[cfg(test)]
macro_rules! substitution {
    ($($var:ident : $val:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut s = $crate::core::substitution::Substitution::empty();
        $(
            s.bind(stringify!($var), $crate::core::term::Term::from($val));
        )*
        s
    }};
}
