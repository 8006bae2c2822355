use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("cannot {action} a document in {state} state")]
    Transition {
        state: &'static str,
        action: &'static str,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
