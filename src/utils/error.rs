use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    #[error("Unknown {kind}: '{value}'")]
    UnsupportedVariant { kind: String, value: String },

    #[error("Container id already registered: {id}")]
    DuplicateId { id: String },

    #[error("Unparsable date '{value}': expected MM/DD/YYYY or MM-DD-YYYY")]
    DateParse { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller-supplied value violates a domain constraint.
    InvalidInput,
    /// Lookup by id failed.
    NotFound,
    /// Unknown shape, plant type, season, unit or tolerance.
    UnsupportedVariant,
    Configuration,
    System,
}

impl GardenError {
    pub fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        GardenError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: &str, id: &str) -> Self {
        GardenError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    pub fn unsupported(kind: &str, value: &str) -> Self {
        GardenError::UnsupportedVariant {
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GardenError::InvalidInput { .. }
            | GardenError::DuplicateId { .. }
            | GardenError::DateParse { .. } => ErrorCategory::InvalidInput,
            GardenError::NotFound { .. } => ErrorCategory::NotFound,
            GardenError::UnsupportedVariant { .. } => ErrorCategory::UnsupportedVariant,
            GardenError::Config { .. } | GardenError::Toml(_) => ErrorCategory::Configuration,
            GardenError::Io(_) | GardenError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            GardenError::InvalidInput { field, reason, .. } => {
                format!("The value given for '{}' is not usable: {}", field, reason)
            }
            GardenError::NotFound { kind, id } => {
                format!("No {} named '{}' exists in this plan", kind, id)
            }
            GardenError::UnsupportedVariant { kind, value } => {
                format!("'{}' is not a known {}", value, kind)
            }
            GardenError::DuplicateId { id } => {
                format!("Two containers share the id '{}'", id)
            }
            GardenError::DateParse { value } => format!("Could not read the date '{}'", value),
            GardenError::Config { message } => format!("The plan file is invalid: {}", message),
            GardenError::Toml(_) => "The plan file is not valid TOML".to_string(),
            GardenError::Io(e) => format!("Could not read the plan file: {}", e),
            GardenError::Serialization(_) => "Could not render the report".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::InvalidInput => {
                "Check dimensions (inches, depth 2-48, length/width up to 240), dates (MM/DD/YYYY) and names"
            }
            ErrorCategory::NotFound => "Check the container id against the [[containers]] section",
            ErrorCategory::UnsupportedVariant => {
                "Use a supported value (shape: rectangle|circle, tolerance: tender|half-hardy|hardy) or give avg_per_plant for unlisted plants"
            }
            ErrorCategory::Configuration => "Compare the plan file against the documented sections",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, GardenError>;
