use crate::core::term::Term;
use thiserror::Error;

pub type LogicResult<T> = Result<T, LogicError>;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum LogicError {
    #[error("clause head must be an atom or compound term, found variable `{0}`")]
    VariableHead(Term),
    /// the proof tree of the current branch grew deeper than the configured limit
    #[error("proof depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),
    #[error("resolution step limit of {0} exceeded")]
    StepLimitExceeded(usize),
}
