use thiserror::Error;

/// Result type alias using FacetsFormError
pub type Result<T> = std::result::Result<T, FacetsFormError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests and the CLI exit report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input/Validation
    InvalidConfig,
    InvalidPage,
    UnknownWidget,
    DuplicateFacet,
    InvalidAncestors,

    // Date range
    InvalidInterval,
    MalformedInterval,
    EmptyRange,
    InvalidSummaryFormat,

    // Live total access
    InvalidFacetsSource,
    UnsupportedFacetsSource,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvalidPage => "ERR_INVALID_PAGE",
            ExErrorKind::UnknownWidget => "ERR_UNKNOWN_WIDGET",
            ExErrorKind::DuplicateFacet => "ERR_DUPLICATE_FACET",
            ExErrorKind::InvalidAncestors => "ERR_INVALID_ANCESTORS",
            ExErrorKind::InvalidInterval => "ERR_INVALID_INTERVAL",
            ExErrorKind::MalformedInterval => "ERR_MALFORMED_INTERVAL",
            ExErrorKind::EmptyRange => "ERR_EMPTY_RANGE",
            ExErrorKind::InvalidSummaryFormat => "ERR_INVALID_SUMMARY_FORMAT",
            ExErrorKind::InvalidFacetsSource => "ERR_INVALID_FACETS_SOURCE",
            ExErrorKind::UnsupportedFacetsSource => "ERR_UNSUPPORTED_FACETS_SOURCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for
/// debugging. Every [`FacetsFormError`] converts into one.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    facet: Option<String>,
    facets_source: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            facet: None,
            facets_source: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add facet context
    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        self.facet = Some(facet.into());
        self
    }

    /// Add facets source context
    pub fn with_facets_source(mut self, facets_source: impl Into<String>) -> Self {
        self.facets_source = Some(facets_source.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn facet(&self) -> Option<&str> {
        self.facet.as_deref()
    }

    pub fn facets_source(&self) -> Option<&str> {
        self.facets_source.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(facet) = &self.facet {
            write!(f, " (facet: {})", facet)?;
        }
        if let Some(facets_source) = &self.facets_source {
            write!(f, " (facets_source: {})", facets_source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for facets-form operations
///
/// The filter tracker itself never fails; these cover the fallible edges:
/// configuration, page fixtures, date-range values and live-total requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacetsFormError {
    // ===== Configuration / fixtures =====
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid page: {reason}")]
    InvalidPage { reason: String },

    /// Widget kind tag has no registered adapter
    #[error("Unknown widget '{widget}' for facet {facet}")]
    UnknownWidget { facet: String, widget: String },

    /// Two widgets on one form claim the same facet
    #[error("Facet {facet} is declared by more than one widget")]
    DuplicateFacet { facet: String },

    /// Ancestor attribute is not a JSON object or list
    #[error("Invalid ancestors for facet {facet}: {reason}")]
    InvalidAncestors { facet: String, reason: String },

    // ===== Date range =====
    #[error("Not a valid '{interval}' interval. The '{delimiter}' delimiter is missing.")]
    InvalidInterval { interval: String, delimiter: String },

    #[error("Malformed '{interval}' interval. Date should be a 'date only' or 'date and time'.")]
    MalformedInterval { interval: String },

    #[error("Date range should have at least one of the beginning or ending dates set")]
    EmptyRange,

    /// Summary date format with an unknown or incomplete specifier
    #[error("Invalid date format '{format}'")]
    InvalidSummaryFormat { format: String },

    // ===== Live total =====
    #[error("Invalid facets_source: '{facets_source}'")]
    InvalidFacetsSource { facets_source: String },

    #[error("Live total only supports Search API facets sources, got '{facets_source}'")]
    UnsupportedFacetsSource { facets_source: String },

    // ===== IO =====
    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from FacetsFormError to ExError
impl From<FacetsFormError> for ExError {
    fn from(err: FacetsFormError) -> Self {
        let message = err.to_string();
        match err {
            FacetsFormError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            FacetsFormError::InvalidPage { .. } => {
                ExError::new(ExErrorKind::InvalidPage).with_message(message)
            }
            FacetsFormError::UnknownWidget { facet, .. } => ExError::new(ExErrorKind::UnknownWidget)
                .with_facet(facet)
                .with_message(message),
            FacetsFormError::DuplicateFacet { facet } => ExError::new(ExErrorKind::DuplicateFacet)
                .with_facet(facet)
                .with_message(message),
            FacetsFormError::InvalidAncestors { facet, .. } => {
                ExError::new(ExErrorKind::InvalidAncestors)
                    .with_facet(facet)
                    .with_op("parse_ancestors")
                    .with_message(message)
            }
            FacetsFormError::InvalidInterval { .. } => ExError::new(ExErrorKind::InvalidInterval)
                .with_op("parse_interval")
                .with_message(message),
            FacetsFormError::MalformedInterval { .. } => {
                ExError::new(ExErrorKind::MalformedInterval)
                    .with_op("parse_interval")
                    .with_message(message)
            }
            FacetsFormError::EmptyRange => ExError::new(ExErrorKind::EmptyRange)
                .with_op("range_condition")
                .with_message(message),
            FacetsFormError::InvalidSummaryFormat { .. } => {
                ExError::new(ExErrorKind::InvalidSummaryFormat)
                    .with_op("range_summary")
                    .with_message(message)
            }
            FacetsFormError::InvalidFacetsSource { facets_source } => {
                ExError::new(ExErrorKind::InvalidFacetsSource)
                    .with_op("live_total_access")
                    .with_facets_source(facets_source)
                    .with_message(message)
            }
            FacetsFormError::UnsupportedFacetsSource { facets_source } => {
                ExError::new(ExErrorKind::UnsupportedFacetsSource)
                    .with_op("live_total_access")
                    .with_facets_source(facets_source)
                    .with_message(message)
            }
            FacetsFormError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            FacetsFormError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for FacetsFormError {
    fn from(err: serde_json::Error) -> Self {
        FacetsFormError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FacetsFormError {
    fn from(err: serde_yaml::Error) -> Self {
        FacetsFormError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for FacetsFormError {
    fn from(err: std::io::Error) -> Self {
        FacetsFormError::Io {
            message: err.to_string(),
        }
    }
}
