//! Player-visible text accumulators.

/// The two output buffers a driver polls after each turn.
///
/// The setting is replaced wholesale when the player enters a room. The
/// action log grows by one line per message and is drained each turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    setting: String,
    log: String,
}

impl Output {
    /// Creates empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line to the action log.
    pub fn puts(&mut self, line: &str) {
        self.log.push_str(line);
        self.log.push('\n');
    }

    /// Replaces the setting.
    pub fn set_setting(&mut self, setting: impl Into<String>) {
        self.setting = setting.into();
    }

    /// Returns the current setting.
    #[must_use]
    pub fn setting(&self) -> &str {
        &self.setting
    }

    /// Returns the undrained action log.
    #[must_use]
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Takes the action log, leaving it empty.
    pub fn drain(&mut self) -> String {
        std::mem::take(&mut self.log)
    }

    /// Returns the action log length, for use with [`Output::truncate_log`].
    #[must_use]
    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    /// Discards log text written after `len`.
    pub fn truncate_log(&mut self, len: usize) {
        self.log.truncate(len);
    }
}
