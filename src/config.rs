//! Solver configuration.

/// Limits applied to a single query.
///
/// Logic programs may have infinite search trees. By default the solver
/// imposes no limit and such a query never finishes; setting a limit turns
/// runaway searches into a [`LogicError`](crate::error::LogicError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    /// Maximum number of nested resolution steps on one branch.
    pub max_depth: Option<usize>,
    /// Maximum number of clause attempts for the whole query.
    pub max_steps: Option<usize>,
}

impl SolverConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth: Some(max_depth), ..self }
    }

    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps: Some(max_steps), ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let config = SolverConfig::default();
        assert_eq!(config, SolverConfig::unbounded());
        assert_eq!(config.max_depth, None);
        assert_eq!(config.max_steps, None);
    }

    #[test]
    fn builders_set_limits() {
        let config = SolverConfig::unbounded().with_max_depth(10).with_max_steps(1000);
        assert_eq!(config.max_depth, Some(10));
        assert_eq!(config.max_steps, Some(1000));
    }
}
