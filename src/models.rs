use serde::{ Serialize, Deserialize };
use uuid::Uuid;
use chrono::NaiveDate;

pub const DEFAULT_CYCLE_LENGTH: i64 = 28;
pub const DEFAULT_PERIOD_LENGTH: i64 = 5;
pub const MIN_CYCLE_LENGTH: i64 = 21;
pub const MAX_CYCLE_LENGTH: i64 = 40;

/// Everything the predictor needs, stored as one JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleConfiguration {
    pub last_period_start: Option<NaiveDate>,
    pub cycle_length: i64,
    pub period_length: i64,
    pub period_dates: Vec<NaiveDate>,
}

impl Default for CycleConfiguration {
    fn default() -> Self {
        Self {
            last_period_start: None,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            period_length: DEFAULT_PERIOD_LENGTH,
            period_dates: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Sad,
    Irritable,
    Anxious,
    Tired,
    Loving,
    Emotional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Cramps,
    Headache,
    Bloating,
    Cravings,
    Fatigue,
    BreastPain,
    HotFlashes,
    Dizziness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// More symptoms logged at once reads as a rougher day.
    pub fn from_symptom_count(count: usize) -> Self {
        match count {
            n if n > 3 => Severity::Severe,
            n if n > 1 => Severity::Moderate,
            _ => Severity::Mild,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mood: Mood,
    pub energy: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub severity: Severity,
}

/// Point-in-time view of where the user sits in their cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleForecast {
    pub phase: Phase,
    pub cycle_day: Option<i64>,
    pub days_until_next_period: Option<i64>,
    pub predicted_next_period: Option<NaiveDate>,
}

/// Display name and a short tip for a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseInsight {
    pub name: &'static str,
    pub tip: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CycleSummary {
    pub today: NaiveDate,
    pub config: CycleConfiguration,
    #[serde(flatten)]
    pub forecast: CycleForecast,
    pub insight: PhaseInsight,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_period: bool,
    pub is_predicted_period: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Weekday of the 1st, counted from Sunday = 0.
    pub first_weekday: u32,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CycleStats {
    pub cycle_length: i64,
    pub logged_periods: usize,
    pub cycle_lengths: Vec<i64>,
    pub average_cycle_length: Option<f64>,
    pub mood_entries: usize,
    pub symptom_logs: usize,
}
