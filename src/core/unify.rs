//! Syntactic unification with occurs-check.

use crate::core::substitution::Substitution;
use crate::core::term::Term;

impl Substitution {
    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// On success the substitution is extended so that both terms become
    /// equal once applied. On failure the substitution is left exactly as
    /// it was before the call.
    pub fn unify(&mut self, u: &Term, v: &Term) -> bool {
        let checkpoint = self.mark();
        let unified = self.unify_inner(u, v);
        if !unified {
            self.rollback(checkpoint);
        }
        unified
    }

    fn unify_inner(&mut self, u: &Term, v: &Term) -> bool {
        let u = self.dereference(u).clone();
        let v = self.dereference(v).clone();

        match (&u, &v) {
            (Term::Var(x), Term::Var(y)) if x == y => true,
            (Term::Var(x), t) | (t, Term::Var(x)) => {
                if self.occurs(x, t) {
                    trace!("unify: occurs-check rejects {} = {}", x, t);
                    return false;
                }
                self.bind(x.clone(), t.clone());
                true
            }
            (Term::Atom(a), Term::Atom(b)) => a == b,
            (Term::Compound(f, xs), Term::Compound(g, ys)) => {
                f == g
                    && xs.len() == ys.len()
                    && xs.iter().zip(ys.iter()).all(|(x, y)| self.unify_inner(x, y))
            }
            _ => false,
        }
    }
}

/// Unify `t1` and `t2`, extending `sub` on success.
pub fn unify(t1: &Term, t2: &Term, sub: &mut Substitution) -> bool {
    sub.unify(t1, t2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    fn atom(name: &str) -> Term {
        Term::atom(name)
    }

    fn var(name: &str) -> Term {
        Term::var(name)
    }

    fn f(args: Vec<Term>) -> Term {
        Term::compound("f", args)
    }

    #[test]
    fn unify_same_var_does_not_modify_substitution() {
        let mut s = Substitution::empty();
        assert!(s.unify(&var("X"), &var("X")));
        assert!(s.is_empty());
    }

    #[test]
    fn unify_two_vars_binds_one_to_the_other() {
        let mut s = Substitution::empty();
        assert!(s.unify(&var("X"), &var("Y")));
        assert_eq!(s.len(), 1);
        assert_eq!(s.dereference(&var("X")), s.dereference(&var("Y")));
    }

    #[test]
    fn unify_term_with_var_extends_substitution() {
        let mut s = Substitution::empty();
        assert!(s.unify(&atom("a"), &var("X")));
        assert_eq!(s.lookup("X"), Some(&atom("a")));
    }

    #[test]
    fn unify_same_atoms_does_not_modify_substitution() {
        let mut s = Substitution::empty();
        assert!(s.unify(&atom("a"), &atom("a")));
        assert!(s.is_empty());
    }

    #[test]
    fn unify_different_atoms_fails() {
        let mut s = Substitution::empty();
        assert!(!s.unify(&atom("a"), &atom("b")));
        assert!(s.is_empty());
    }

    #[test]
    fn occurs_check_rejects_cyclic_binding() {
        let mut s = Substitution::empty();
        assert!(!s.unify(&var("X"), &f(vec![var("X")])));
        assert!(!s.unify(&f(vec![var("X")]), &var("X")));
        assert!(s.is_empty());
    }

    #[test]
    fn occurs_check_looks_through_earlier_bindings() {
        let mut s = Substitution::empty();
        assert!(s.unify(&var("Y"), &f(vec![var("X")])));
        assert!(!s.unify(&var("X"), &var("Y")));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn compound_arguments_share_bindings_left_to_right() {
        let mut s = Substitution::empty();
        let lhs = Term::compound("p", vec![var("X"), var("X")]);
        assert!(s.unify(&lhs, &Term::compound("p", vec![atom("a"), var("Y")])));
        assert_eq!(s.apply(&var("Y")), atom("a"));

        let mut s = Substitution::empty();
        assert!(!s.unify(&lhs, &Term::compound("p", vec![atom("a"), atom("b")])));
    }

    #[test]
    fn failed_compound_unification_leaves_no_partial_bindings() {
        let mut s = Substitution::empty();
        let lhs = Term::compound("p", vec![var("X"), atom("b")]);
        let rhs = Term::compound("p", vec![atom("a"), atom("c")]);
        assert!(!s.unify(&lhs, &rhs));
        assert!(s.is_empty());
    }

    #[test]
    fn functor_and_arity_must_match() {
        let mut s = Substitution::empty();
        assert!(!s.unify(&f(vec![atom("a")]), &Term::compound("g", vec![atom("a")])));
        assert!(!s.unify(&f(vec![atom("a")]), &f(vec![atom("a"), atom("b")])));
        assert!(!s.unify(&atom("f"), &f(vec![atom("a")])));
    }

    #[test]
    fn nested_terms_unify() {
        let mut s = Substitution::empty();
        let lhs = f(vec![Term::compound("g", vec![var("X")]), var("Y")]);
        let rhs = f(vec![var("Z"), Term::compound("h", vec![var("Z")])]);
        assert!(unify(&lhs, &rhs, &mut s));
        assert_eq!(s.apply(&lhs), s.apply(&rhs));
        assert_eq!(s.apply(&var("Y")).to_string(), "h(g(X))");
    }

    /// Small random terms over a tiny vocabulary so unification succeeds
    /// often enough to be interesting.
    #[derive(Clone, Debug)]
    struct SmallTerm(Term);

    fn small_term(g: &mut Gen, depth: usize) -> Term {
        let kinds = if depth == 0 { 2 } else { 4 };
        match u8::arbitrary(g) % kinds {
            0 => Term::atom(*g.choose(&["a", "b"]).unwrap()),
            1 => Term::var(*g.choose(&["X", "Y", "Z"]).unwrap()),
            _ => {
                let arity = 1 + usize::arbitrary(g) % 2;
                let args = (0..arity).map(|_| small_term(g, depth - 1)).collect();
                Term::compound(*g.choose(&["f", "g"]).unwrap(), args)
            }
        }
    }

    impl Arbitrary for SmallTerm {
        fn arbitrary(g: &mut Gen) -> Self {
            SmallTerm(small_term(g, 3))
        }
    }

    #[quickcheck]
    fn atoms_unify_with_themselves(name: String) -> bool {
        let mut s = Substitution::empty();
        s.unify(&atom(&name), &atom(&name)) && s.is_empty()
    }

    #[quickcheck]
    fn unification_is_symmetric_in_outcome(a: SmallTerm, b: SmallTerm) -> bool {
        let mut s1 = Substitution::empty();
        let mut s2 = Substitution::empty();
        s1.unify(&a.0, &b.0) == s2.unify(&b.0, &a.0)
    }

    #[quickcheck]
    fn successful_unification_makes_terms_equal(a: SmallTerm, b: SmallTerm) -> bool {
        let mut s = Substitution::empty();
        !s.unify(&a.0, &b.0) || s.apply(&a.0) == s.apply(&b.0)
    }

    #[quickcheck]
    fn variable_binds_to_ground_term_without_it(t: SmallTerm) -> bool {
        let mut s = Substitution::empty();
        let x = var("X");
        if !t.0.is_ground() {
            return true;
        }
        s.unify(&x, &t.0) && s.dereference(&x) == &t.0
    }

    #[quickcheck]
    fn variable_never_unifies_with_compound_containing_it(t: SmallTerm) -> bool {
        let mut s = Substitution::empty();
        let wrapped = f(vec![t.0, var("X")]);
        !s.unify(&var("X"), &wrapped) && s.is_empty()
    }
}
