//! # Unwind Core Library
//!
//! State and logic behind the Unwind yoga companion, independent of any
//! specific user interface.
//!
//! ## Modules
//!
//! - `screen`: the closed set of screens and the transition table
//! - `navigator`: current-screen holder
//! - `onboarding`: personalization wizard answers and step gating
//! - `calendar`: 42-cell month grid for the progress view
//! - `credentials`: login form validation
//! - `account`: new-vs-returning user lookup
//! - `store`: application state driven by intents
//! - `settings`: configuration management
//! - `theme`: UI theming system

pub mod account;
pub mod calendar;
pub mod credentials;
pub mod navigator;
pub mod onboarding;
pub mod screen;
pub mod settings;
pub mod store;
pub mod theme;

pub use screen::{MainTab, NavAction, Screen};
pub use store::{AppState, Intent, Outcome, ProgressTab};

#[cfg(test)]
mod tests {
    use crate::settings::Settings;
    use crate::store::AppState;
    use crate::theme::ThemeVariant;
    use crate::Screen;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeVariant::Blossom);
        assert!(settings.new_users_by_default);
        assert!(settings.returning_emails.is_empty());
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_state_from_settings() {
        let app = AppState::from_settings(&Settings::default());
        assert_eq!(app.screen(), Screen::Welcome);
        assert_eq!(app.active_days().len(), 6);
        assert!(app.choices().stretch_level.is_none());
        assert!(app.credentials().email.is_empty());
    }
}
