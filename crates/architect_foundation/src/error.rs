//! Error types for the Architect system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Architect operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records an enclosing instruction, innermost first.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a name resolution error.
    #[must_use]
    pub fn name_resolution(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameResolution(token.into()))
    }

    /// Creates an unknown instruction type error.
    #[must_use]
    pub fn unknown_instruction_type(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownInstructionType(code.into()))
    }

    /// Creates a missing functional character error.
    #[must_use]
    pub fn missing_functional_char(line: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingFunctionalChar(line.into()))
    }

    /// Creates an attribute resolution error.
    #[must_use]
    pub fn attribute_resolution(entity: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(ErrorKind::AttributeResolution {
            entity: entity.into(),
            code: code.into(),
        })
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(item: impl Into<String>, container: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNotFound {
            item: item.into(),
            container: container.into(),
        })
    }

    /// Creates a capability error.
    #[must_use]
    pub fn capability(entity: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::new(ErrorKind::Capability {
            entity: entity.into(),
            capability: capability.into(),
        })
    }

    /// Creates an argument arity error.
    #[must_use]
    pub fn argument_arity(min: usize, max: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArgumentArity { min, max, actual })
    }

    /// Creates a link invariant violation.
    #[must_use]
    pub fn link_invariant(room: impl Into<String>) -> Self {
        Self::new(ErrorKind::LinkInvariant(room.into()))
    }

    /// Creates a malformed conditional error.
    #[must_use]
    pub fn malformed_conditional(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedConditional(message.into()))
    }

    /// Creates an invalid content error.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidContent(message.into()))
    }

    /// Creates a semantic limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: SemanticLimit) -> Self {
        Self::new(ErrorKind::LimitExceeded(limit))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A token matched no room, thing, or reserved alias.
    #[error("`{0}` is not a thing, room, or alias")]
    NameResolution(String),

    /// The first three characters of an instruction name no handler.
    #[error("unknown instruction type: `{0}`")]
    UnknownInstructionType(String),

    /// An instruction contains none of the functional characters.
    #[error("instruction lacks a functional character: `{0}`")]
    MissingFunctionalChar(String),

    /// An attribute-set instruction used a code missing from the table.
    #[error("{entity} has no attribute for code `{code}`")]
    AttributeResolution {
        /// The entity being modified.
        entity: String,
        /// The unrecognised attribute code.
        code: String,
    },

    /// A removal referenced something the container does not hold.
    #[error("{item} is not held by {container}")]
    ItemNotFound {
        /// The missing item.
        item: String,
        /// The container that was searched.
        container: String,
    },

    /// An entity was used in a role it cannot fill.
    #[error("{entity} has no {capability} attribute")]
    Capability {
        /// The entity that was used.
        entity: String,
        /// The capability it lacks.
        capability: String,
    },

    /// An action received the wrong number of arguments.
    #[error("arity mismatch: expected {min} to {max} arguments, got {actual}")]
    ArgumentArity {
        /// Minimum number of arguments.
        min: usize,
        /// Maximum number of arguments.
        max: usize,
        /// Actual number of arguments.
        actual: usize,
    },

    /// A room was linked to itself while symmetric linking is enabled.
    #[error("symmetric linking forbids linking {0} to itself")]
    LinkInvariant(String),

    /// The parameters of a conditional could not be split into branches.
    #[error("malformed conditional: {0}")]
    MalformedConditional(String),

    /// A link instruction named no known direction.
    #[error("invalid direction: `{0}`")]
    InvalidDirection(String),

    /// A prop was moved towards the inventory.
    #[error("{0} is a prop and cannot be carried")]
    Immovable(String),

    /// A bag is at capacity.
    #[error("bag `{bag}` is full (limit {limit})")]
    BagFull {
        /// The bag that is full.
        bag: String,
        /// Its capacity.
        limit: usize,
    },

    /// Raw content or an attribute value is inconsistent.
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// Semantic limit exceeded (kill switch triggered).
    #[error("limit exceeded: {0}")]
    LimitExceeded(SemanticLimit),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticLimit {
    /// Conditionals nested deeper than the configured depth.
    MaxDepth {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepth { limit } => {
                write!(f, "max instruction depth ({limit}) exceeded")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Enclosing instructions, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }

    /// Returns the innermost instruction, if any was recorded.
    #[must_use]
    pub fn instruction(&self) -> Option<&str> {
        self.stack.first().map(String::as_str)
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.stack {
            writeln!(f, "  in {frame}")?;
        }
        Ok(())
    }
}
