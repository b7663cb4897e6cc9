use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("'{input}' is not a valid number for {field}")]
    Parse { field: String, input: String },

    #[error("input ended before the recipe was complete")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
