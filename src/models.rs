use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A calendar date without time or timezone, formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// The host's local calendar date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Absolute number of calendar days between `self` and `other`.
    pub fn days_between(self, other: CalendarDay) -> u64 {
        (other.0 - self.0).num_days().unsigned_abs()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HabitState {
    pub habit_name: String,
    pub stake_amount: u64,
    pub total_days: u32,
    pub current_day: u32,
    pub last_check_in_date: Option<CalendarDay>,
    pub is_forfeited: bool,
    pub start_date: Option<CalendarDay>,
}

impl Default for HabitState {
    fn default() -> Self {
        Self {
            habit_name: String::new(),
            stake_amount: 0,
            total_days: 0,
            current_day: 1,
            last_check_in_date: None,
            is_forfeited: false,
            start_date: None,
        }
    }
}

impl HabitState {
    /// Whether a habit has been named since the last reset. Drives the
    /// onboarding/dashboard choice and check-in.
    pub fn has_commitment(&self) -> bool {
        !self.habit_name.is_empty()
    }

    /// Whether the commitment carries a start date. Only dated commitments
    /// are evaluated for missed days.
    pub fn is_started(&self) -> bool {
        self.start_date.is_some()
    }

    /// Checks the counter invariants of a commitment. Defaults are always
    /// consistent.
    pub fn is_consistent(&self) -> bool {
        if !self.has_commitment() {
            return true;
        }
        self.total_days >= 1 && (1..=self.total_days).contains(&self.current_day)
    }
}

/// Start input from the JSON API. Missing or mistyped fields come through as
/// an empty name or zero and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub habit_name: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub stake_amount: i64,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub total_days: i64,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(number) => number.as_i64().unwrap_or(0),
        Value::String(text) => parse_integer(text),
        _ => 0,
    })
}

/// Raw onboarding form fields, kept as text until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartForm {
    #[serde(default)]
    pub habit_name: String,
    #[serde(default)]
    pub stake_amount: String,
    #[serde(default)]
    pub total_days: String,
}

impl StartForm {
    /// Reads the numeric fields the way a number input does: anything that is
    /// not an integer counts as zero and fails validation later.
    pub fn into_request(self) -> StartRequest {
        StartRequest {
            habit_name: self.habit_name,
            stake_amount: parse_integer(&self.stake_amount),
            total_days: parse_integer(&self.total_days),
        }
    }
}

fn parse_integer(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInOutcome {
    Recorded,
    AlreadyCheckedIn,
    Forfeited,
    NotStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Pending,
    Completed,
    Forfeited,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub mode: Mode,
    pub habit_name: String,
    pub current_day: String,
    pub total_days: String,
    pub money: u64,
    pub status_text: &'static str,
    pub status_tone: &'static str,
    pub status_pulse: bool,
    pub check_in_enabled: bool,
    pub button_text: &'static str,
    pub button_subtext: &'static str,
    pub ring_color: &'static str,
    pub ring_dash_offset: u32,
    pub overlay_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum View {
    Onboarding,
    Dashboard(DashboardView),
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub state: HabitState,
    pub view: View,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub outcome: CheckInOutcome,
    pub state: HabitState,
    pub view: View,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub invalid: Option<String>,
}

impl IndexQuery {
    pub fn is_invalid(&self) -> bool {
        self.invalid.is_some()
    }
}
