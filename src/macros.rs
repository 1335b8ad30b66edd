//! Macros for writing terms and clauses as Rust code.
//!
//! `?X` is the variable `X`, a bare identifier is an atom and
//! `f(arg, ...)` is a compound term. A runtime value can be spliced in with
//! `{expr}` where `expr` converts into a `Term`.

/// Build a single term.
///
/// ```
/// # use mini_prolog::term;
/// let t = term!(parent(?X, bob));
/// assert_eq!(t.to_string(), "parent(X, bob)");
/// ```
#[macro_export]
macro_rules! term {
    (? $v:ident) => {
        $crate::core::term::Term::var(stringify!($v))
    };
    ($f:ident ( $($args:tt)* )) => {
        $crate::core::term::Term::compound(stringify!($f), $crate::terms![$($args)*])
    };
    ($a:ident) => {
        $crate::core::term::Term::atom(stringify!($a))
    };
    ({ $e:expr }) => {
        $crate::core::term::Term::from($e)
    };
}

/// Build a comma separated list of terms, e.g. the goals of a query.
#[macro_export]
macro_rules! terms {
    (@munch [$($done:expr,)*]) => {
        vec![$($done),*]
    };
    (@munch [$($done:expr,)*] ? $v:ident $(, $($rest:tt)*)?) => {
        $crate::terms!(@munch [$($done,)* $crate::term!(? $v),] $($($rest)*)?)
    };
    (@munch [$($done:expr,)*] $f:ident ( $($args:tt)* ) $(, $($rest:tt)*)?) => {
        $crate::terms!(@munch [$($done,)* $crate::term!($f($($args)*)),] $($($rest)*)?)
    };
    (@munch [$($done:expr,)*] $a:ident $(, $($rest:tt)*)?) => {
        $crate::terms!(@munch [$($done,)* $crate::term!($a),] $($($rest)*)?)
    };
    (@munch [$($done:expr,)*] { $e:expr } $(, $($rest:tt)*)?) => {
        $crate::terms!(@munch [$($done,)* $crate::term!({ $e }),] $($($rest)*)?)
    };
    () => {
        ::std::vec::Vec::<$crate::core::term::Term>::new()
    };
    ($($t:tt)+) => {
        $crate::terms!(@munch [] $($t)+)
    };
}

/// Build a fact `head(args...)` or a rule `head(args...) :- goal, ...`.
#[macro_export]
macro_rules! clause {
    ($h:ident $( ( $($ha:tt)* ) )? :- $($body:tt)+) => {
        $crate::core::clause::Clause::from_parts(
            stringify!($h),
            $crate::terms![$($($ha)*)?],
            $crate::terms![$($body)+],
        )
    };
    ($h:ident $( ( $($ha:tt)* ) )?) => {
        $crate::core::clause::Clause::from_parts(
            stringify!($h),
            $crate::terms![$($($ha)*)?],
            ::std::vec::Vec::new(),
        )
    };
}
