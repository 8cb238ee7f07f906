use super::{
    centered_rect,
    footer::render_footer,
    header::render_header,
    home::{render_daily_plan, render_notification_dialog, render_profile},
    legal::render_legal,
    library::{render_library, POSES},
    onboarding::{
        option_intent, render_login, render_personalize, render_welcome, render_wizard,
        wizard_options,
    },
    progress::render_progress,
    ViewParams,
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Frame, Layout, Terminal},
    widgets::{Block, Borders, Clear},
};
use std::io::{self, Stdout};
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};
use unwind_core::{
    account::SocialProvider,
    calendar::{CalendarView, MonthDirection},
    credentials::{ErrorField, LoginField},
    onboarding::WizardStep,
    settings::Settings,
    theme::{Element, Theme},
    AppState, Intent, MainTab, NavAction, Outcome, ProgressTab, Screen,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    state: AppState,
    focus: LoginField,
    cursor: usize,
    scroll: u16,
    /// Last bottom offset reported by the legal view.
    scroll_limit: u16,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let state = AppState::from_settings(&settings);
        Self::with_state(settings, state)
    }

    fn with_state(settings: Settings, state: AppState) -> Self {
        Self {
            should_quit: false,
            theme: Theme::new(settings.theme),
            settings,
            state,
            focus: LoginField::Email,
            cursor: 0,
            scroll: 0,
            scroll_limit: 0,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let pump = tokio::task::spawn_blocking(move || pump_events(tx));

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            match rx.recv().await {
                Some(Ok(event)) => self.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
        }

        drop(rx);
        pump.await?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        frame.render_widget(
            Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let params = ViewParams {
            theme: &self.theme,
            state: &self.state,
            cursor: self.cursor,
            focus: self.focus,
            scroll: self.scroll,
        };

        render_header(frame, chunks[0], &params);

        let mut scroll_limit = None;
        let body = chunks[1];
        match self.state.screen() {
            Screen::Welcome => render_welcome(frame, body, &params),
            Screen::Login => render_login(frame, body, &params),
            Screen::Personalize => render_personalize(frame, body, &params),
            Screen::StretchLevel
            | Screen::TrainingDays
            | Screen::DailyTime
            | Screen::PracticeTime => {
                if let Some(step) = WizardStep::from_screen(self.state.screen()) {
                    render_wizard(frame, body, &params, step);
                }
            }
            Screen::DailyPlan => render_daily_plan(frame, body, &params),
            Screen::Library => render_library(frame, body, &params),
            Screen::TermsOfUse | Screen::PrivacyPolicy => {
                scroll_limit = Some(render_legal(frame, body, &params));
            }
            Screen::Profile => render_profile(frame, body, &params),
            Screen::Progress => render_progress(frame, body, &params),
        }

        render_footer(frame, chunks[2], &params);

        if self.state.notification_dialog_open() {
            let popup = centered_rect(60, 40, area);
            frame.render_widget(Clear, popup);
            render_notification_dialog(frame, popup, &params);
        }

        if let Some(limit) = scroll_limit {
            self.scroll_limit = limit;
            self.scroll = self.scroll.min(limit);
        }
    }

    /// Dispatch to the store and reset view-local state whenever the screen
    /// changes.
    fn apply(&mut self, intent: Intent) -> Outcome {
        let outcome = self.state.dispatch(intent);
        match &outcome {
            Outcome::Moved { from, to } => {
                debug!(%from, %to, "screen changed");
                self.cursor = 0;
                self.scroll = 0;
                self.scroll_limit = 0;
                self.focus = LoginField::Email;
            }
            Outcome::Rejected(errors) => {
                self.focus = if errors.get(ErrorField::Email).is_some() {
                    LoginField::Email
                } else {
                    LoginField::Password
                };
            }
            Outcome::Updated | Outcome::Refused => {}
        }
        outcome
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(2) => {
                self.toggle_theme();
                return;
            }
            _ => {}
        }

        if self.state.notification_dialog_open() {
            self.handle_dialog_key(key);
            return;
        }

        let screen = self.state.screen();
        if let Some(step) = WizardStep::from_screen(screen) {
            self.handle_wizard_key(step, key);
            return;
        }

        match screen {
            Screen::Welcome => match key.code {
                KeyCode::Enter => self.nav(NavAction::GetStarted),
                KeyCode::Char('t') => self.nav(NavAction::OpenTerms),
                KeyCode::Char('p') => self.nav(NavAction::OpenPrivacy),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Login => self.handle_login_key(key),
            Screen::Personalize => match key.code {
                KeyCode::Enter => self.nav(NavAction::StartPersonalizing),
                KeyCode::Esc => self.nav(NavAction::Back),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::DailyPlan => match key.code {
                KeyCode::Char('n') => {
                    self.apply(Intent::OpenNotificationDialog);
                }
                KeyCode::Char('p') => self.nav(NavAction::OpenProfile),
                KeyCode::Char('l') => self.nav(NavAction::BrowseLibrary),
                _ => self.handle_main_key(key),
            },
            Screen::Library => match key.code {
                KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
                KeyCode::Down => self.cursor = (self.cursor + 1).min(POSES.len() - 1),
                _ => self.handle_main_key(key),
            },
            Screen::Progress => self.handle_progress_key(key),
            Screen::Profile => match key.code {
                KeyCode::Char('t') => self.nav(NavAction::OpenTerms),
                KeyCode::Char('p') => self.nav(NavAction::OpenPrivacy),
                KeyCode::Char('x') => self.nav(NavAction::Logout),
                _ => self.handle_main_key(key),
            },
            Screen::TermsOfUse | Screen::PrivacyPolicy => match key.code {
                KeyCode::Esc | KeyCode::Backspace => self.nav(NavAction::Back),
                KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
                KeyCode::Down => self.scroll = (self.scroll + 1).min(self.scroll_limit),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            // Wizard screens are handled above.
            _ => {}
        }
    }

    fn nav(&mut self, action: NavAction) {
        self.apply(Intent::Nav(action));
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => {
                self.apply(Intent::TogglePasswordVisibility);
            }
            KeyCode::Char('g') if ctrl => {
                self.apply(Intent::SocialLogin(SocialProvider::Google));
            }
            KeyCode::Char('f') if ctrl => {
                self.apply(Intent::SocialLogin(SocialProvider::Facebook));
            }
            KeyCode::Char('t') if ctrl => self.nav(NavAction::OpenTerms),
            KeyCode::Char('p') if ctrl => self.nav(NavAction::OpenPrivacy),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            KeyCode::Char(c) => {
                let mut value = self.state.credentials().get(self.focus).to_string();
                value.push(c);
                self.apply(Intent::EditField(self.focus, value));
            }
            KeyCode::Backspace => {
                let mut value = self.state.credentials().get(self.focus).to_string();
                if value.pop().is_some() {
                    self.apply(Intent::EditField(self.focus, value));
                }
            }
            KeyCode::Enter => {
                self.apply(Intent::SubmitLogin);
            }
            KeyCode::Esc => self.nav(NavAction::Back),
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, step: WizardStep, key: KeyEvent) {
        let options = wizard_options(step, self.state.choices()).len();
        match key.code {
            KeyCode::Up | KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(options.saturating_sub(1))
            }
            KeyCode::Char(' ') => {
                if let Some(intent) = option_intent(step, self.cursor) {
                    self.apply(intent);
                }
            }
            KeyCode::Enter => {
                self.apply(Intent::ContinueWizard);
            }
            KeyCode::Esc => self.nav(NavAction::Back),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_progress_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.apply(Intent::NavigateMonth(MonthDirection::Prev));
            }
            KeyCode::Right => {
                self.apply(Intent::NavigateMonth(MonthDirection::Next));
            }
            KeyCode::Tab => {
                let next = match self.state.progress_tab() {
                    ProgressTab::Activity => ProgressTab::Achievements,
                    ProgressTab::Achievements => ProgressTab::Activity,
                };
                self.apply(Intent::ToggleProgressTab(next));
            }
            KeyCode::Char('w') => {
                self.apply(Intent::SetCalendarView(CalendarView::Week));
            }
            KeyCode::Char('m') => {
                self.apply(Intent::SetCalendarView(CalendarView::Month));
            }
            _ => self.handle_main_key(key),
        }
    }

    /// Keys shared by the screens behind the tab bar.
    fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = MainTab::iter().nth(index) {
                    self.nav(NavAction::Tab(tab));
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('e') => {
                self.apply(Intent::EnableNotifications);
            }
            KeyCode::Esc | KeyCode::Char('m') => {
                self.apply(Intent::DismissNotificationDialog);
            }
            _ => {}
        }
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.settings.theme = self.theme.variant();
        if let Err(e) = self.settings.save() {
            warn!(error = %e, "could not persist theme");
        }
    }
}

/// Blocking crossterm reader; stops once the receiving side is gone.
fn pump_events(tx: UnboundedSender<io::Result<Event>>) {
    loop {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {
                if tx.send(event::read()).is_err() {
                    return;
                }
            }
            Ok(false) => {
                if tx.is_closed() {
                    return;
                }
            }
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        }
    }
}
