//! Fresh logic variables.
//!
//! Every time a clause is used in a proof its variables must be replaced by
//! variables that appear nowhere else in the search. [`FreshVars`] mints
//! those names from a counter that lives as long as one query.

use crate::core::clause::Clause;
use crate::core::term::{Symbol, Term};
use rustc_hash::{FxHashMap, FxHashSet};

/// Source of fresh variable names.
///
/// Fresh names have the form `<name>#<n>`. Names in the reserved set, such
/// as the variables of the query being solved, are never handed out, so a
/// fresh variable cannot capture a variable that is not renamed.
#[derive(Debug, Default)]
pub struct FreshVars {
    counter: usize,
    reserved: FxHashSet<Symbol>,
}

impl FreshVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source of fresh names that never produces any of `names`.
    pub fn avoiding(names: impl IntoIterator<Item = Symbol>) -> Self {
        FreshVars { counter: 0, reserved: names.into_iter().collect() }
    }

    /// Number of counter values used so far, including skipped reserved names.
    pub fn count(&self) -> usize {
        self.counter
    }

    /// Forget all previously created variables.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Create a new unique variable derived from `name`.
    pub fn fresh(&mut self, name: &str) -> Symbol {
        // strip a previous suffix so renamed names do not grow without bound
        let base = name.split('#').next().unwrap_or(name);
        loop {
            let fresh: Symbol = format!("{}#{}", base, self.counter).into();
            self.counter += 1;
            if !self.reserved.contains(&fresh) {
                return fresh;
            }
        }
    }

    /// Rename all variables in `clause`, consistently across head and body.
    pub fn rename_clause(&mut self, clause: &Clause) -> Clause {
        let mut renaming = Renaming::new(self);
        let head = clause.head();
        let args = head.args().iter().map(|arg| renaming.rename(arg)).collect();
        let body = clause.body().iter().map(|goal| renaming.rename(goal)).collect();
        Clause::from_parts(head.name(), args, body)
    }

    /// Rename all variables in a single term.
    pub fn rename(&mut self, term: &Term) -> Term {
        Renaming::new(self).rename(term)
    }
}

/// One clause instantiation: maps each source variable to its fresh
/// replacement so repeated occurrences stay identical.
struct Renaming<'a> {
    vars: &'a mut FreshVars,
    map: FxHashMap<Symbol, Symbol>,
}

impl<'a> Renaming<'a> {
    fn new(vars: &'a mut FreshVars) -> Self {
        Renaming { vars, map: FxHashMap::default() }
    }

    fn rename(&mut self, term: &Term) -> Term {
        match term {
            Term::Atom(_) => term.clone(),
            Term::Var(name) => {
                if let Some(fresh) = self.map.get(name) {
                    return Term::Var(fresh.clone());
                }
                let fresh = self.vars.fresh(name);
                self.map.insert(name.clone(), fresh.clone());
                Term::Var(fresh)
            }
            Term::Compound(functor, args) => Term::Compound(
                functor.clone(),
                args.iter().map(|arg| self.rename(arg)).collect::<Vec<_>>().into(),
            ),
        }
    }
}
