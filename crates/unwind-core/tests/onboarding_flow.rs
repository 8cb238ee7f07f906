//! End-to-end flows through the application store.

use unwind_core::{
    account::StaticDirectory,
    calendar::{DisplayedMonth, MonthDirection},
    credentials::{ErrorField, LoginField, PASSWORD_TOO_SHORT},
    onboarding::{DailyTime, PracticeTime, StretchLevel, TrainingDay},
    AppState, Intent, MainTab, NavAction, Outcome, Screen,
};

fn new_user_app() -> AppState {
    AppState::new(Box::new(StaticDirectory::new(true, Vec::<String>::new())))
        .with_displayed_month(DisplayedMonth::new(2025, 8).unwrap())
        .with_active_days([18, 19, 20, 21, 26, 28].into_iter().collect())
}

#[test]
fn new_user_walks_from_welcome_to_daily_plan() {
    let mut app = new_user_app();
    assert_eq!(app.screen(), Screen::Welcome);

    app.dispatch(Intent::Nav(NavAction::GetStarted));
    assert_eq!(app.screen(), Screen::Login);

    app.dispatch(Intent::EditField(LoginField::Email, "sarah@unwindyoga.com".into()));
    app.dispatch(Intent::EditField(LoginField::Password, "12345".into()));
    let outcome = app.dispatch(Intent::SubmitLogin);
    let Outcome::Rejected(errors) = outcome else {
        panic!("short password must be rejected, got {outcome:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(ErrorField::Password), Some(PASSWORD_TOO_SHORT));

    app.dispatch(Intent::EditField(LoginField::Password, "123456".into()));
    assert!(app.errors().is_empty());
    app.dispatch(Intent::SubmitLogin);
    assert_eq!(app.screen(), Screen::Personalize);

    app.dispatch(Intent::Nav(NavAction::StartPersonalizing));
    assert_eq!(app.screen(), Screen::StretchLevel);

    // Every step refuses to advance until answered.
    let answers = [
        Intent::SelectStretchLevel(StretchLevel::Newbie),
        Intent::ToggleTrainingDay(TrainingDay::Mon),
        Intent::SelectDailyTime(DailyTime::FortyFivePlus),
        Intent::SelectPracticeTime(PracticeTime::Morning),
    ];
    let expected = [
        Screen::TrainingDays,
        Screen::DailyTime,
        Screen::PracticeTime,
        Screen::DailyPlan,
    ];
    for (answer, next) in answers.into_iter().zip(expected) {
        let here = app.screen();
        assert_eq!(app.dispatch(Intent::ContinueWizard), Outcome::Refused);
        app.dispatch(answer);
        assert_eq!(
            app.dispatch(Intent::ContinueWizard),
            Outcome::Moved { from: here, to: next }
        );
    }

    let choices = app.choices();
    assert_eq!(choices.stretch_level, Some(StretchLevel::Newbie));
    assert_eq!(choices.training_days.len(), 1);
    assert_eq!(choices.practice_time, Some(PracticeTime::Morning));
}

#[test]
fn main_tabs_and_progress_calendar() {
    let mut app = new_user_app();
    app.dispatch(Intent::Navigate(Screen::DailyPlan));

    app.dispatch(Intent::Nav(NavAction::Tab(MainTab::Progress)));
    assert_eq!(app.screen(), Screen::Progress);

    let grid = app.calendar();
    assert_eq!(grid.cells().len(), 42);
    assert_eq!(grid.leading_count(), 1);
    assert_eq!(grid.active_count(), 6);

    for _ in 0..4 {
        app.dispatch(Intent::NavigateMonth(MonthDirection::Next));
    }
    assert_eq!(app.displayed_month(), DisplayedMonth::new(2026, 0).unwrap());
    // 2026-01-01 is a Thursday.
    assert_eq!(app.calendar().leading_count(), 4);

    app.dispatch(Intent::NavigateMonth(MonthDirection::Prev));
    assert_eq!(app.displayed_month(), DisplayedMonth::new(2025, 11).unwrap());
    assert_eq!(app.screen(), Screen::Progress);
}

#[test]
fn logout_returns_to_welcome_and_keeps_answers_by_default() {
    let mut app = new_user_app();
    app.dispatch(Intent::Navigate(Screen::StretchLevel));
    app.dispatch(Intent::SelectStretchLevel(StretchLevel::Advanced));
    app.dispatch(Intent::Navigate(Screen::Profile));

    assert_eq!(
        app.dispatch(Intent::Nav(NavAction::Logout)),
        Outcome::Moved {
            from: Screen::Profile,
            to: Screen::Welcome
        }
    );
    assert_eq!(app.choices().stretch_level, Some(StretchLevel::Advanced));

    // From welcome the only way forward is login.
    assert_eq!(app.dispatch(Intent::Nav(NavAction::Back)), Outcome::Refused);
    assert_eq!(
        app.dispatch(Intent::Nav(NavAction::Tab(MainTab::Home))),
        Outcome::Refused
    );
    app.dispatch(Intent::Nav(NavAction::GetStarted));
    assert_eq!(app.screen(), Screen::Login);
}

#[test]
fn legal_pages_return_to_welcome() {
    let mut app = new_user_app();
    app.dispatch(Intent::Navigate(Screen::Profile));
    app.dispatch(Intent::Nav(NavAction::OpenPrivacy));
    assert_eq!(app.screen(), Screen::PrivacyPolicy);
    app.dispatch(Intent::Nav(NavAction::Back));
    assert_eq!(app.screen(), Screen::Welcome);
}
