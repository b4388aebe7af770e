use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleNameError {
    #[error("Bundle name is empty")]
    Empty,
    #[error("Bundle name is {0} bytes long, the limit is {1}")]
    TooLong(usize, usize),
    #[error("Bundle name '{0}' contains a path separator")]
    PathSeparator(String),
    #[error("Bundle name '{0}' contains a traversal sequence")]
    Traversal(String),
    #[error("Bundle name '{0}' contains a control character")]
    ControlCharacter(String),
}
