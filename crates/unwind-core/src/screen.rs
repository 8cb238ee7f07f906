//! Screens and the transition table that links them.
//!
//! ```text
//!   welcome ──► login ──► personalize ──► stretchLevel ─► trainingDays ─► dailyTime ─► practiceTime
//!    │  ▲         │  (returning user)                                                    │
//!    │  │         └──────────────────────────► dailyPlan ◄───────────────────────────────┘
//!    │  │                                       │  ▲
//!    │  └──── profile (logout) ◄── tab bar ─────┘  │
//!    └─► termsOfUse / privacyPolicy (back ► welcome)
//! ```
//!
//! Only the unguarded affordances live in [`route`]. Wizard "Continue" and the
//! login submit are decided by the store once their predicates pass.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One full-view UI state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Personalize,
    StretchLevel,
    TrainingDays,
    DailyTime,
    PracticeTime,
    DailyPlan,
    Library,
    TermsOfUse,
    PrivacyPolicy,
    Profile,
    Progress,
}

impl Screen {
    /// Screens that carry the bottom tab bar.
    pub fn shows_tab_bar(&self) -> bool {
        matches!(
            self,
            Self::DailyPlan | Self::Library | Self::Progress | Self::Profile
        )
    }

    /// The tab highlighted in the tab bar, if any.
    pub fn main_tab(&self) -> Option<MainTab> {
        match self {
            Self::DailyPlan => Some(MainTab::Home),
            Self::Library => Some(MainTab::Library),
            Self::Progress => Some(MainTab::Progress),
            Self::Profile => Some(MainTab::Profile),
            _ => None,
        }
    }
}

/// Entries of the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MainTab {
    Home,
    Library,
    Progress,
    Profile,
}

impl MainTab {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Home => Screen::DailyPlan,
            Self::Library => Screen::Library,
            Self::Progress => Screen::Progress,
            Self::Profile => Screen::Profile,
        }
    }
}

/// Unguarded navigation affordances a screen may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    GetStarted,
    StartPersonalizing,
    OpenTerms,
    OpenPrivacy,
    OpenProfile,
    BrowseLibrary,
    Logout,
    Tab(MainTab),
}

/// Pure `(screen, action) -> screen` lookup. `None` means the screen has no
/// such affordance.
pub fn route(current: Screen, action: NavAction) -> Option<Screen> {
    use NavAction::*;
    use Screen::*;

    match (current, action) {
        (Welcome, GetStarted) => Some(Login),
        (Welcome | Login | Profile, OpenTerms) => Some(TermsOfUse),
        (Welcome | Login | Profile, OpenPrivacy) => Some(PrivacyPolicy),

        (Login, Back) => Some(Welcome),
        (Personalize, Back) => Some(Login),
        (Personalize, StartPersonalizing) => Some(StretchLevel),

        (StretchLevel, Back) => Some(Personalize),
        (TrainingDays, Back) => Some(StretchLevel),
        (DailyTime, Back) => Some(TrainingDays),
        (PracticeTime, Back) => Some(DailyTime),

        (TermsOfUse | PrivacyPolicy, Back) => Some(Welcome),

        (DailyPlan, OpenProfile) => Some(Profile),
        (DailyPlan, BrowseLibrary) => Some(Library),
        (Profile, Logout) => Some(Welcome),
        (DailyPlan | Library | Progress | Profile, Tab(tab)) => Some(tab.screen()),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_closed_set_of_thirteen() {
        assert_eq!(Screen::iter().count(), 13);
        assert_eq!(Screen::default(), Screen::Welcome);
    }

    #[test]
    fn test_welcome_forward_only_to_login() {
        assert_eq!(route(Screen::Welcome, NavAction::GetStarted), Some(Screen::Login));
        assert_eq!(route(Screen::Welcome, NavAction::Back), None);
        assert_eq!(route(Screen::Welcome, NavAction::StartPersonalizing), None);
        assert_eq!(route(Screen::Welcome, NavAction::Tab(MainTab::Home)), None);
    }

    #[test]
    fn test_welcome_reachable_from_logout_and_back_affordances() {
        for screen in Screen::iter() {
            let via_back = route(screen, NavAction::Back);
            let via_logout = route(screen, NavAction::Logout);
            let reaches_welcome =
                via_back == Some(Screen::Welcome) || via_logout == Some(Screen::Welcome);
            let expected = matches!(
                screen,
                Screen::Login | Screen::TermsOfUse | Screen::PrivacyPolicy | Screen::Profile
            );
            assert_eq!(reaches_welcome, expected, "screen {screen}");
        }
    }

    #[test]
    fn test_wizard_back_chain() {
        assert_eq!(route(Screen::PracticeTime, NavAction::Back), Some(Screen::DailyTime));
        assert_eq!(route(Screen::DailyTime, NavAction::Back), Some(Screen::TrainingDays));
        assert_eq!(route(Screen::TrainingDays, NavAction::Back), Some(Screen::StretchLevel));
        assert_eq!(route(Screen::StretchLevel, NavAction::Back), Some(Screen::Personalize));
        assert_eq!(route(Screen::Personalize, NavAction::Back), Some(Screen::Login));
    }

    #[test]
    fn test_tab_bar_only_on_main_screens() {
        for screen in Screen::iter() {
            let routed = route(screen, NavAction::Tab(MainTab::Progress));
            if screen.shows_tab_bar() {
                assert_eq!(routed, Some(Screen::Progress));
            } else {
                assert_eq!(routed, None, "screen {screen}");
            }
        }
    }

    #[test]
    fn test_screen_names_round_trip_through_strum_and_serde() {
        assert_eq!(Screen::StretchLevel.to_string(), "stretchLevel");
        assert_eq!("termsOfUse".parse::<Screen>().unwrap(), Screen::TermsOfUse);
        assert_eq!(
            serde_json::to_string(&Screen::PrivacyPolicy).unwrap(),
            "\"privacyPolicy\""
        );
    }
}
