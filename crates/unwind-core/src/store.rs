//! Application state and the single entry point that mutates it.
//!
//! Views read from [`AppState`] and report user actions as [`Intent`]s.
//! `dispatch` handles one intent at a time, synchronously and in order.

use crate::account::{AccountDirectory, LoginMethod, SocialProvider};
use crate::calendar::{CalendarGrid, CalendarView, DisplayedMonth, MonthDirection};
use crate::credentials::{validate, CredentialInput, FieldErrors, LoginField};
use crate::navigator::Navigator;
use crate::onboarding::{
    DailyTime, PersonalizationChoices, PracticeTime, StretchLevel, TrainingDay, WizardStep,
};
use crate::screen::{NavAction, Screen};
use crate::settings::{SessionPolicy, Settings};
use std::collections::BTreeSet;
use strum::{Display, EnumIter};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum ProgressTab {
    #[default]
    Activity,
    Achievements,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectStretchLevel(StretchLevel),
    ToggleTrainingDay(TrainingDay),
    SelectDailyTime(DailyTime),
    SelectPracticeTime(PracticeTime),
    /// "Continue" on the current wizard step.
    ContinueWizard,
    /// Validate the typed credentials and sign in.
    SubmitLogin,
    SocialLogin(SocialProvider),
    EditField(LoginField, String),
    /// Jump straight to a screen.
    Navigate(Screen),
    /// Follow an affordance of the current screen.
    Nav(NavAction),
    NavigateMonth(MonthDirection),
    ToggleProgressTab(ProgressTab),
    SetCalendarView(CalendarView),
    TogglePasswordVisibility,
    OpenNotificationDialog,
    EnableNotifications,
    DismissNotificationDialog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: Screen, to: Screen },
    Updated,
    /// Nothing happened: a gate is closed or the screen has no such action.
    Refused,
    /// Login validation failed; the errors are also stored on the state.
    Rejected(FieldErrors),
}

pub struct AppState {
    navigator: Navigator,
    credentials: CredentialInput,
    errors: FieldErrors,
    choices: PersonalizationChoices,
    displayed_month: DisplayedMonth,
    active_days: BTreeSet<u32>,
    progress_tab: ProgressTab,
    calendar_view: CalendarView,
    password_visible: bool,
    notification_dialog_open: bool,
    notifications_enabled: bool,
    session_policy: SessionPolicy,
    directory: Box<dyn AccountDirectory>,
}

impl AppState {
    pub fn new(directory: Box<dyn AccountDirectory>) -> Self {
        Self {
            navigator: Navigator::new(),
            credentials: CredentialInput::default(),
            errors: FieldErrors::default(),
            choices: PersonalizationChoices::default(),
            displayed_month: DisplayedMonth::today(),
            active_days: BTreeSet::new(),
            progress_tab: ProgressTab::default(),
            calendar_view: CalendarView::default(),
            password_visible: false,
            notification_dialog_open: false,
            notifications_enabled: false,
            session_policy: SessionPolicy::default(),
            directory,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Box::new(settings.account_directory()))
            .with_session_policy(settings.session_policy)
            .with_displayed_month(settings.initial_month())
            .with_active_days(settings.active_day_set())
    }

    pub fn with_session_policy(mut self, policy: SessionPolicy) -> Self {
        self.session_policy = policy;
        self
    }

    pub fn with_displayed_month(mut self, month: DisplayedMonth) -> Self {
        self.displayed_month = month;
        self
    }

    pub fn with_active_days(mut self, days: BTreeSet<u32>) -> Self {
        self.active_days = days;
        self
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn choices(&self) -> &PersonalizationChoices {
        &self.choices
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn credentials(&self) -> &CredentialInput {
        &self.credentials
    }

    pub fn displayed_month(&self) -> DisplayedMonth {
        self.displayed_month
    }

    pub fn active_days(&self) -> &BTreeSet<u32> {
        &self.active_days
    }

    /// A fresh grid for the displayed month.
    pub fn calendar(&self) -> CalendarGrid {
        CalendarGrid::generate(self.displayed_month, &self.active_days)
    }

    pub fn progress_tab(&self) -> ProgressTab {
        self.progress_tab
    }

    pub fn calendar_view(&self) -> CalendarView {
        self.calendar_view
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn notification_dialog_open(&self) -> bool {
        self.notification_dialog_open
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    /// Whether "Continue" on the current wizard step would go through.
    pub fn can_continue(&self) -> bool {
        WizardStep::from_screen(self.screen())
            .is_some_and(|step| step.is_complete(&self.choices))
    }

    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        debug!(screen = %self.screen(), ?intent, "dispatch");
        match intent {
            Intent::SelectStretchLevel(level) => {
                self.choices.select_stretch_level(level);
                Outcome::Updated
            }
            Intent::ToggleTrainingDay(day) => {
                self.choices.toggle_training_day(day);
                Outcome::Updated
            }
            Intent::SelectDailyTime(time) => {
                self.choices.select_daily_time(time);
                Outcome::Updated
            }
            Intent::SelectPracticeTime(time) => {
                self.choices.select_practice_time(time);
                Outcome::Updated
            }
            Intent::ContinueWizard => self.continue_wizard(),
            Intent::SubmitLogin => self.submit_login(),
            Intent::SocialLogin(provider) => {
                if self.screen() != Screen::Login {
                    return Outcome::Refused;
                }
                self.sign_in(LoginMethod::Social(provider))
            }
            Intent::EditField(field, value) => {
                self.credentials.set(field, value);
                self.errors.clear(field.into());
                Outcome::Updated
            }
            Intent::Navigate(target) => self.move_to(target),
            Intent::Nav(action) => self.follow(action),
            Intent::NavigateMonth(direction) => {
                self.displayed_month = self.displayed_month.navigate(direction);
                Outcome::Updated
            }
            Intent::ToggleProgressTab(tab) => {
                self.progress_tab = tab;
                Outcome::Updated
            }
            Intent::SetCalendarView(view) => {
                self.calendar_view = view;
                Outcome::Updated
            }
            Intent::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
                Outcome::Updated
            }
            Intent::OpenNotificationDialog => {
                if self.screen() != Screen::DailyPlan {
                    return Outcome::Refused;
                }
                self.notification_dialog_open = true;
                Outcome::Updated
            }
            Intent::EnableNotifications => {
                if !self.notification_dialog_open {
                    return Outcome::Refused;
                }
                self.notifications_enabled = true;
                self.notification_dialog_open = false;
                Outcome::Updated
            }
            Intent::DismissNotificationDialog => {
                if !self.notification_dialog_open {
                    return Outcome::Refused;
                }
                self.notification_dialog_open = false;
                Outcome::Updated
            }
        }
    }

    fn move_to(&mut self, target: Screen) -> Outcome {
        let from = self.navigator.transition(target);
        // The dialog belongs to the daily plan only.
        self.notification_dialog_open = false;
        Outcome::Moved { from, to: target }
    }

    fn follow(&mut self, action: NavAction) -> Outcome {
        let from = self.screen();
        let Some(to) = self.navigator.apply(action) else {
            debug!(screen = %from, ?action, "no such affordance");
            return Outcome::Refused;
        };
        self.notification_dialog_open = false;
        if action == NavAction::Logout {
            self.end_session();
        }
        Outcome::Moved { from, to }
    }

    fn continue_wizard(&mut self) -> Outcome {
        let Some(step) = WizardStep::from_screen(self.screen()) else {
            return Outcome::Refused;
        };
        match step.continue_target(&self.choices) {
            Some(target) => self.move_to(target),
            None => {
                debug!(?step, "wizard step incomplete");
                Outcome::Refused
            }
        }
    }

    fn submit_login(&mut self) -> Outcome {
        if self.screen() != Screen::Login {
            return Outcome::Refused;
        }
        self.errors = validate(&self.credentials);
        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "login rejected");
            return Outcome::Rejected(self.errors.clone());
        }
        self.sign_in(LoginMethod::Email(self.credentials.email.clone()))
    }

    fn sign_in(&mut self, method: LoginMethod) -> Outcome {
        let new_user = self.directory.is_new_user(&method);
        info!(new_user, social = matches!(method, LoginMethod::Social(_)), "signed in");
        let target = if new_user {
            Screen::Personalize
        } else {
            Screen::DailyPlan
        };
        self.move_to(target)
    }

    fn end_session(&mut self) {
        match self.session_policy {
            SessionPolicy::Preserve => {}
            SessionPolicy::Clear => {
                self.credentials = CredentialInput::default();
                self.errors = FieldErrors::default();
                self.choices.clear();
                self.password_visible = false;
            }
        }
        info!(policy = ?self.session_policy, "signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::StaticDirectory;
    use crate::credentials::{ErrorField, EMAIL_INVALID, PASSWORD_REQUIRED};
    use crate::screen::MainTab;

    fn state(new_users: bool) -> AppState {
        AppState::new(Box::new(StaticDirectory::new(new_users, ["back@unwindyoga.com"])))
    }

    fn on(screen: Screen) -> AppState {
        let mut app = state(true);
        app.dispatch(Intent::Navigate(screen));
        app
    }

    fn type_login(app: &mut AppState, email: &str, password: &str) {
        app.dispatch(Intent::EditField(LoginField::Email, email.into()));
        app.dispatch(Intent::EditField(LoginField::Password, password.into()));
    }

    #[test]
    fn test_continue_refused_until_selection() {
        let mut app = on(Screen::StretchLevel);
        assert_eq!(app.dispatch(Intent::ContinueWizard), Outcome::Refused);
        assert_eq!(app.screen(), Screen::StretchLevel);
        assert!(!app.can_continue());

        app.dispatch(Intent::SelectStretchLevel(StretchLevel::Novice));
        assert!(app.can_continue());
        assert_eq!(
            app.dispatch(Intent::ContinueWizard),
            Outcome::Moved {
                from: Screen::StretchLevel,
                to: Screen::TrainingDays
            }
        );
    }

    #[test]
    fn test_continue_outside_wizard_is_refused() {
        let mut app = on(Screen::Library);
        assert_eq!(app.dispatch(Intent::ContinueWizard), Outcome::Refused);
    }

    #[test]
    fn test_back_keeps_answers() {
        let mut app = on(Screen::TrainingDays);
        app.dispatch(Intent::ToggleTrainingDay(TrainingDay::Wed));
        app.dispatch(Intent::ContinueWizard);
        app.dispatch(Intent::SelectDailyTime(DailyTime::Twenty));

        app.dispatch(Intent::Nav(NavAction::Back));
        assert_eq!(app.screen(), Screen::TrainingDays);
        assert!(app.choices().training_days.contains(&TrainingDay::Wed));
        assert_eq!(app.choices().daily_time, Some(DailyTime::Twenty));
    }

    #[test]
    fn test_invalid_login_stays_and_reports() {
        let mut app = on(Screen::Login);
        type_login(&mut app, "not-an-email", "");

        let Outcome::Rejected(errors) = app.dispatch(Intent::SubmitLogin) else {
            panic!("expected rejection");
        };
        assert_eq!(errors.get(ErrorField::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(ErrorField::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(app.errors(), &errors);
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut app = on(Screen::Login);
        app.dispatch(Intent::SubmitLogin);
        assert_eq!(app.errors().len(), 2);

        app.dispatch(Intent::EditField(LoginField::Email, "x".into()));
        assert_eq!(app.errors().get(ErrorField::Email), None);
        assert_eq!(app.errors().get(ErrorField::Password), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn test_login_routes_on_directory() {
        let mut app = on(Screen::Login);
        type_login(&mut app, "fresh@unwindyoga.com", "secret1");
        app.dispatch(Intent::SubmitLogin);
        assert_eq!(app.screen(), Screen::Personalize);

        let mut app = on(Screen::Login);
        type_login(&mut app, "back@unwindyoga.com", "secret1");
        app.dispatch(Intent::SubmitLogin);
        assert_eq!(app.screen(), Screen::DailyPlan);
        assert!(app.errors().is_empty());
    }

    #[test]
    fn test_social_login_skips_validation() {
        let mut app = state(false);
        app.dispatch(Intent::Navigate(Screen::Login));
        assert_eq!(
            app.dispatch(Intent::SocialLogin(SocialProvider::Facebook)),
            Outcome::Moved {
                from: Screen::Login,
                to: Screen::DailyPlan
            }
        );
        assert!(app.errors().is_empty());
    }

    #[test]
    fn test_submit_only_from_login_screen() {
        let mut app = state(true);
        type_login(&mut app, "a@b.com", "secret1");
        assert_eq!(app.dispatch(Intent::SubmitLogin), Outcome::Refused);
        assert_eq!(app.screen(), Screen::Welcome);
    }

    #[test]
    fn test_logout_policy() {
        for (policy, kept) in [(SessionPolicy::Preserve, true), (SessionPolicy::Clear, false)] {
            let mut app = state(true).with_session_policy(policy);
            app.dispatch(Intent::Navigate(Screen::Login));
            type_login(&mut app, "a@b.com", "secret1");
            app.dispatch(Intent::SubmitLogin);
            app.dispatch(Intent::SelectStretchLevel(StretchLevel::Familiar));
            app.dispatch(Intent::Navigate(Screen::Profile));

            app.dispatch(Intent::Nav(NavAction::Logout));
            assert_eq!(app.screen(), Screen::Welcome);
            assert_eq!(app.credentials().email == "a@b.com", kept, "{policy:?}");
            assert_eq!(app.choices().stretch_level.is_some(), kept, "{policy:?}");
        }
    }

    #[test]
    fn test_month_navigation_touches_only_month() {
        let mut app = state(true).with_displayed_month(DisplayedMonth::new(2025, 0).unwrap());
        app.dispatch(Intent::Navigate(Screen::Progress));
        app.dispatch(Intent::NavigateMonth(MonthDirection::Prev));
        assert_eq!(app.displayed_month(), DisplayedMonth::new(2024, 11).unwrap());
        assert_eq!(app.screen(), Screen::Progress);
        assert_eq!(app.progress_tab(), ProgressTab::Activity);
    }

    #[test]
    fn test_calendar_uses_active_days() {
        let app = state(true)
            .with_displayed_month(DisplayedMonth::new(2025, 8).unwrap())
            .with_active_days([18, 19, 40].into_iter().collect());
        let grid = app.calendar();
        assert_eq!(grid.cells().len(), 42);
        assert_eq!(grid.active_count(), 2);
    }

    #[test]
    fn test_notification_dialog() {
        let mut app = on(Screen::Welcome);
        assert_eq!(app.dispatch(Intent::OpenNotificationDialog), Outcome::Refused);

        app.dispatch(Intent::Navigate(Screen::DailyPlan));
        app.dispatch(Intent::OpenNotificationDialog);
        assert!(app.notification_dialog_open());
        app.dispatch(Intent::DismissNotificationDialog);
        assert!(!app.notification_dialog_open());
        assert!(!app.notifications_enabled());

        app.dispatch(Intent::OpenNotificationDialog);
        app.dispatch(Intent::EnableNotifications);
        assert!(app.notifications_enabled());
        assert!(!app.notification_dialog_open());
        assert_eq!(app.dispatch(Intent::EnableNotifications), Outcome::Refused);
    }

    #[test]
    fn test_leaving_daily_plan_closes_dialog() {
        let mut app = on(Screen::DailyPlan);
        app.dispatch(Intent::OpenNotificationDialog);
        app.dispatch(Intent::Nav(NavAction::Tab(MainTab::Library)));
        assert!(!app.notification_dialog_open());
    }
}
