//! Interpreter configuration.

/// Default bound on `ift` nesting.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Settings that change how instructions are executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Whether links are created as symmetric pairs and self-links rejected.
    pub euclidean: bool,
    /// Deepest permitted `ift` nesting.
    pub max_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            euclidean: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl InterpreterConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the Euclidean link policy.
    #[must_use]
    pub fn with_euclidean(mut self, euclidean: bool) -> Self {
        self.euclidean = euclidean;
        self
    }

    /// Sets the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
