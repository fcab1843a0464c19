use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("FileError: {0}")]
    File(#[from] FileError),
    #[error("TextError: {0}")]
    Text(#[from] TextError),
    #[error("MathError: {0}")]
    Math(#[from] MathError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum FileError {
    #[error("JSON file not found at {path}")]
    NotFound { path: String },
    #[error("File I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {format} at {path}: {message}")]
    Parse {
        path: String,
        format: &'static str,
        message: String,
    },
    #[error("Failed to serialize {format} for {path}: {message}")]
    Serialize {
        path: String,
        format: &'static str,
        message: String,
    },
    #[error("Key '{key}' not found in {path}")]
    KeyNotFound { key: String, path: String },
}

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load encoding {encoding}: {message}")]
    EncodingLoad { encoding: String, message: String },
    #[error("Encountered text corresponding to disallowed special token '{token}'")]
    DisallowedSpecialToken { token: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("Shape mismatch: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },
    #[error("Window size must be greater than zero")]
    ZeroWindow,
    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "high",
            ErrorSeverity::Medium => "medium",
            ErrorSeverity::Low => "low",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::File(file_error) => match file_error {
                FileError::NotFound { .. } => ErrorSeverity::Critical,
                FileError::Io { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Text(TextError::EncodingLoad { .. }) => ErrorSeverity::High,
            AppError::Text(_) => ErrorSeverity::Medium,
            AppError::Math(_) => ErrorSeverity::Low,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::File(FileError::NotFound { path }) => {
                format!("JSON file not found: {}", path)
            }
            AppError::File(FileError::KeyNotFound { key, .. }) => {
                format!("Key '{}' not found", key)
            }
            AppError::Math(MathError::ShapeMismatch { left, right }) => {
                format!("Vectors differ in length ({} vs {})", left, right)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::File(FileError::NotFound { .. }) => {
                Some("Check the path or create the file before loading it".to_string())
            }
            AppError::File(FileError::Io { .. }) => {
                Some("Make sure the parent directory exists and is writable".to_string())
            }
            AppError::Text(TextError::DisallowedSpecialToken { .. }) => {
                Some("Strip special token markers such as <|endoftext|> from the input".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the settings file to fall back to defaults".to_string())
            }
            _ => None,
        }
    }
}
