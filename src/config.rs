//! UI Configuration

use leptos_animate::AnimateOptions;
use log::LevelFilter;

use crate::filter::StatusFilter;

/// Static settings, provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Filter used when no preference has been saved
    pub default_filter: StatusFilter,
    /// List animation settings
    pub animation: AnimateOptions,
    pub log_level: LevelFilter,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_filter: StatusFilter::all(),
            animation: AnimateOptions::default(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl UiConfig {
    /// Filter to start with: the saved one, else the default
    pub fn initial_filter(&self, saved: Option<StatusFilter>) -> StatusFilter {
        saved.unwrap_or(self.default_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoStatus;

    #[test]
    fn test_initial_filter_prefers_saved() {
        let config = UiConfig::default();
        let saved = StatusFilter::only(TodoStatus::Pending);
        assert_eq!(config.initial_filter(Some(saved)), saved);
        assert_eq!(config.initial_filter(None), StatusFilter::all());
    }

    #[test]
    fn test_default_animation() {
        let config = UiConfig::default();
        assert_eq!(config.animation.duration_ms, 250.0);
        assert!(!config.animation.disrespect_user_motion_preference);
    }
}
