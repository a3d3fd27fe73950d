//! Session configuration

/// Configuration for a [`RoadmapSession`](crate::RoadmapSession)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Capacity of the month event channel
    ///
    /// Events are advisory; when the receiver lags past this many buffered
    /// events, further events are dropped rather than blocking a toggle.
    pub event_buffer: usize,
    /// Whether month completions stamp the remote reminder timestamp
    pub stamp_unlocks: bool,
}

impl SessionConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            event_buffer: 16,
            stamp_unlocks: true,
        }
    }

    /// Set the month event channel capacity
    #[must_use]
    pub fn with_event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = capacity.max(1);
        self
    }

    /// Enable or disable reminder timestamp stamping
    #[must_use]
    pub fn with_unlock_stamping(mut self, enabled: bool) -> Self {
        self.stamp_unlocks = enabled;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = SessionConfig::new()
            .with_event_buffer(4)
            .with_unlock_stamping(false);
        assert_eq!(config.event_buffer, 4);
        assert!(!config.stamp_unlocks);
    }

    #[test]
    fn event_buffer_is_never_zero() {
        assert_eq!(SessionConfig::new().with_event_buffer(0).event_buffer, 1);
    }
}
