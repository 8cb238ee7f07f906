//! Personalization wizard: the four ordered questions asked after sign-up.
//!
//! Each step has a completeness predicate that gates its "Continue". Answers
//! are never reset by moving back and forth between steps.

use crate::screen::Screen;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum StretchLevel {
    Newbie,
    Novice,
    Familiar,
    Advanced,
}

impl StretchLevel {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Newbie => "I have never done a stretch exercise.",
            Self::Novice => "I haven't practiced in a long time.",
            Self::Familiar => "I practice stretching regularly.",
            Self::Advanced => "I do advanced stretch exercises.",
        }
    }
}

/// Weekday token, ordered Sunday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TrainingDay {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum DailyTime {
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "45+")]
    FortyFivePlus,
}

impl DailyTime {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ten => "10 minutes",
            Self::Twenty => "20 minutes",
            Self::Thirty => "30 minutes",
            Self::FortyFivePlus => "45+ minutes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum PracticeTime {
    Morning,
    Evening,
    Flexible,
}

impl PracticeTime {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
            Self::Flexible => "Flexible Schedule",
        }
    }
}

/// Answers collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizationChoices {
    pub stretch_level: Option<StretchLevel>,
    pub training_days: BTreeSet<TrainingDay>,
    pub daily_time: Option<DailyTime>,
    pub practice_time: Option<PracticeTime>,
}

impl PersonalizationChoices {
    pub fn select_stretch_level(&mut self, level: StretchLevel) {
        self.stretch_level = Some(level);
    }

    /// Insert `day` if absent, remove it if present.
    pub fn toggle_training_day(&mut self, day: TrainingDay) {
        if !self.training_days.remove(&day) {
            self.training_days.insert(day);
        }
    }

    pub fn select_daily_time(&mut self, time: DailyTime) {
        self.daily_time = Some(time);
    }

    pub fn select_practice_time(&mut self, time: PracticeTime) {
        self.practice_time = Some(time);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum WizardStep {
    StretchLevel,
    TrainingDays,
    DailyTime,
    PracticeTime,
}

impl WizardStep {
    pub const COUNT: usize = 4;

    pub fn from_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::StretchLevel => Some(Self::StretchLevel),
            Screen::TrainingDays => Some(Self::TrainingDays),
            Screen::DailyTime => Some(Self::DailyTime),
            Screen::PracticeTime => Some(Self::PracticeTime),
            _ => None,
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            Self::StretchLevel => Screen::StretchLevel,
            Self::TrainingDays => Screen::TrainingDays,
            Self::DailyTime => Screen::DailyTime,
            Self::PracticeTime => Screen::PracticeTime,
        }
    }

    /// 1-based position, drives the progress bar.
    pub fn index(&self) -> usize {
        match self {
            Self::StretchLevel => 1,
            Self::TrainingDays => 2,
            Self::DailyTime => 3,
            Self::PracticeTime => 4,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::StretchLevel => Some(Self::TrainingDays),
            Self::TrainingDays => Some(Self::DailyTime),
            Self::DailyTime => Some(Self::PracticeTime),
            Self::PracticeTime => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::StretchLevel => "Select your stretch level.",
            Self::TrainingDays => "When would you like to train?",
            Self::DailyTime => "How much time can you spend daily?",
            Self::PracticeTime => "What time of day do you prefer to practice yoga?",
        }
    }

    pub fn is_complete(&self, choices: &PersonalizationChoices) -> bool {
        match self {
            Self::StretchLevel => choices.stretch_level.is_some(),
            Self::TrainingDays => !choices.training_days.is_empty(),
            Self::DailyTime => choices.daily_time.is_some(),
            Self::PracticeTime => choices.practice_time.is_some(),
        }
    }

    /// Where "Continue" leads, or `None` while the step is incomplete. The
    /// last step finishes on the daily plan.
    pub fn continue_target(&self, choices: &PersonalizationChoices) -> Option<Screen> {
        if !self.is_complete(choices) {
            return None;
        }
        Some(self.next().map_or(Screen::DailyPlan, |step| step.screen()))
    }
}
