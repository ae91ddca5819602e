//! Session construction.
//!
//! The widget ships in two variants: the full one with a preview surface
//! and percent handling, and a reduced one without them. The full variant
//! is the default; the reduced one is a feature subset, not a separate
//! code path.

use super::Session;
use serde::{Deserialize, Serialize};

/// Feature toggles distinguishing the two widget variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// Render the pending-expression preview.
    pub preview: bool,
    /// Handle the percent key (a silent no-op when disabled).
    pub percent: bool,
}

impl Features {
    /// The full widget: preview surface plus percent handling.
    pub fn full() -> Self {
        Self {
            preview: true,
            percent: true,
        }
    }

    /// The reduced widget: display surface only, no percent key.
    pub fn basic() -> Self {
        Self {
            preview: false,
            percent: false,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::full()
    }
}

/// Builder for constructing sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use reckon::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .preview(false)
///     .percent(true)
///     .build();
///
/// assert!(!session.features().preview);
/// assert!(session.features().percent);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionBuilder {
    features: Features,
}

impl SessionBuilder {
    /// Create a builder with the full feature set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the pending-expression preview.
    pub fn preview(mut self, enabled: bool) -> Self {
        self.features.preview = enabled;
        self
    }

    /// Toggle percent-key handling.
    pub fn percent(mut self, enabled: bool) -> Self {
        self.features.percent = enabled;
        self
    }

    /// Replace the whole feature set at once.
    pub fn features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Build the session.
    pub fn build(self) -> Session {
        Session::with_features(self.features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_yields_the_full_variant() {
        let session = SessionBuilder::new().build();
        assert_eq!(session.features(), Features::full());
    }

    #[test]
    fn toggles_apply_independently() {
        let session = SessionBuilder::new().preview(false).build();
        assert!(!session.features().preview);
        assert!(session.features().percent);
    }

    #[test]
    fn basic_features_disable_both_extras() {
        let session = SessionBuilder::new().features(Features::basic()).build();
        assert!(!session.features().preview);
        assert!(!session.features().percent);
    }

    #[test]
    fn built_sessions_start_at_defaults() {
        let session = SessionBuilder::new().build();
        assert_eq!(session.display_text(), "0");
        assert!(session.first_operand().is_none());
        assert!(session.pending_operator().is_none());
    }
}
