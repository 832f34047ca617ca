use thiserror::Error;

/// User-visible failures of the profile pipeline.
///
/// Missing attributes or labels inside a well-formed document are never
/// reported here; extraction degrades them to defaults instead.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The source document is not well-formed XML.
    #[error("malformed profile document: {message}")]
    MalformedSource { message: String },

    /// A compiler was invoked before any profile was loaded.
    #[error("no profile loaded")]
    NoSchemaLoaded,

    /// The requested table does not exist in the loaded schema.
    #[error("no data available for table '{table}'")]
    UnknownTable { table: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProfileError {
    /// True for failures the user can resolve by choosing another table or
    /// loading a document first.
    pub fn is_missing_selection(&self) -> bool {
        matches!(self, Self::NoSchemaLoaded | Self::UnknownTable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
