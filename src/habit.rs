use crate::errors::StartError;
use crate::models::{CalendarDay, CheckInOutcome, DashboardView, HabitState, Mode, StartRequest, View};

/// Circumference of the progress ring (2 * pi * 45).
pub const FULL_DASH_ARRAY: u32 = 283;

pub const COLOR_SAFE: &str = "#00FF00";
pub const COLOR_WARNING: &str = "#FFFF00";
pub const COLOR_DANGER: &str = "#FF0033";

/// Builds a fresh commitment starting on `today`.
pub fn start(request: &StartRequest, today: CalendarDay) -> Result<HabitState, StartError> {
    let habit_name = request.habit_name.trim();
    if habit_name.is_empty() {
        return Err(StartError::EmptyName);
    }
    let stake_amount = u64::try_from(request.stake_amount)
        .ok()
        .filter(|amount| *amount > 0)
        .ok_or(StartError::InvalidStake(request.stake_amount))?;
    let total_days = u32::try_from(request.total_days)
        .ok()
        .filter(|days| *days > 0)
        .ok_or(StartError::InvalidDays(request.total_days))?;

    Ok(HabitState {
        habit_name: habit_name.to_string(),
        stake_amount,
        total_days,
        current_day: 1,
        last_check_in_date: None,
        is_forfeited: false,
        start_date: Some(today),
    })
}

/// Marks the commitment forfeited when more than one calendar day separates
/// the last check-in from `today`. Returns whether the state changed.
///
/// A commitment that has never been checked into is not evaluated.
pub fn check_missed_day(state: &mut HabitState, today: CalendarDay) -> bool {
    if !state.is_started() || state.is_forfeited {
        return false;
    }
    let Some(last) = state.last_check_in_date else {
        return false;
    };

    if last.days_between(today) > 1 {
        state.is_forfeited = true;
        return true;
    }
    false
}

/// Records today's check-in. The last check-in date never moves backwards, so
/// a clock that reads earlier than it is treated as already checked in.
pub fn check_in(state: &mut HabitState, today: CalendarDay) -> CheckInOutcome {
    if !state.has_commitment() {
        return CheckInOutcome::NotStarted;
    }
    if state.is_forfeited {
        return CheckInOutcome::Forfeited;
    }
    if matches!(state.last_check_in_date, Some(last) if last >= today) {
        return CheckInOutcome::AlreadyCheckedIn;
    }

    state.last_check_in_date = Some(today);
    if state.current_day < state.total_days {
        state.current_day += 1;
    }
    CheckInOutcome::Recorded
}

pub fn reset(state: &mut HabitState) {
    *state = HabitState::default();
}

/// Derives what the page shows for `state` on `today`.
pub fn view(state: &HabitState, today: CalendarDay) -> View {
    if !state.has_commitment() {
        return View::Onboarding;
    }

    let mode = if state.is_forfeited {
        Mode::Forfeited
    } else if state.last_check_in_date == Some(today) {
        Mode::Completed
    } else {
        Mode::Pending
    };

    let base = DashboardView {
        mode,
        habit_name: state.habit_name.clone(),
        current_day: format!("{:02}", state.current_day),
        total_days: format!("{:02}", state.total_days),
        money: state.stake_amount,
        status_text: "ACTION REQUIRED",
        status_tone: "warning",
        status_pulse: true,
        check_in_enabled: true,
        button_text: "CHECK IN",
        button_subtext: "Tap to confirm",
        ring_color: COLOR_WARNING,
        ring_dash_offset: 0,
        overlay_visible: false,
    };

    let dashboard = match mode {
        Mode::Pending => base,
        Mode::Completed => DashboardView {
            status_text: "COMPLETED",
            status_tone: "safe",
            status_pulse: false,
            check_in_enabled: false,
            button_text: "DONE",
            button_subtext: "See you tomorrow",
            ring_color: COLOR_SAFE,
            ..base
        },
        Mode::Forfeited => DashboardView {
            money: 0,
            status_text: "FAILED",
            status_tone: "danger",
            status_pulse: false,
            check_in_enabled: false,
            button_text: "FORFEITED",
            button_subtext: "Stake lost",
            ring_color: COLOR_DANGER,
            ring_dash_offset: FULL_DASH_ARRAY,
            overlay_visible: true,
            ..base
        },
    };

    View::Dashboard(dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
    }

    fn after(today: CalendarDay, days: i64) -> CalendarDay {
        (today.date() + Duration::days(days)).into()
    }

    fn read_habit(today: CalendarDay) -> HabitState {
        let request = StartRequest {
            habit_name: "Read".into(),
            stake_amount: 20,
            total_days: 5,
        };
        start(&request, today).unwrap()
    }

    fn dashboard(view: View) -> DashboardView {
        match view {
            View::Dashboard(dashboard) => dashboard,
            View::Onboarding => panic!("expected dashboard"),
        }
    }

    #[test]
    fn start_initializes_fresh_commitment() {
        let today = day(2026, 1, 5);
        let state = read_habit(today);
        assert_eq!(state.current_day, 1);
        assert_eq!(state.total_days, 5);
        assert_eq!(state.stake_amount, 20);
        assert!(!state.is_forfeited);
        assert!(state.last_check_in_date.is_none());
        assert_eq!(state.start_date, Some(today));
    }

    #[test]
    fn start_rejects_missing_or_non_positive_input() {
        let today = day(2026, 1, 5);
        let mut request = StartRequest {
            habit_name: "   ".into(),
            stake_amount: 20,
            total_days: 5,
        };
        assert_eq!(start(&request, today), Err(StartError::EmptyName));

        request.habit_name = "Read".into();
        request.stake_amount = 0;
        assert_eq!(start(&request, today), Err(StartError::InvalidStake(0)));

        request.stake_amount = 20;
        request.total_days = -3;
        assert_eq!(start(&request, today), Err(StartError::InvalidDays(-3)));
    }

    #[test]
    fn check_in_advances_once_per_day() {
        let today = day(2026, 1, 5);
        let mut state = read_habit(today);

        assert_eq!(check_in(&mut state, today), CheckInOutcome::Recorded);
        assert_eq!(state.current_day, 2);
        assert_eq!(state.last_check_in_date, Some(today));

        let snapshot = state.clone();
        assert_eq!(check_in(&mut state, today), CheckInOutcome::AlreadyCheckedIn);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn check_in_clamps_at_total_days() {
        let first = day(2026, 1, 5);
        let mut state = read_habit(first);
        for offset in 0..10 {
            assert_eq!(check_in(&mut state, after(first, offset)), CheckInOutcome::Recorded);
            assert!(state.current_day <= state.total_days);
        }
        assert_eq!(state.current_day, 5);
        assert_eq!(state.last_check_in_date, Some(after(first, 9)));
    }

    #[test]
    fn check_in_without_commitment_is_noop() {
        let mut state = HabitState::default();
        assert_eq!(check_in(&mut state, day(2026, 1, 5)), CheckInOutcome::NotStarted);
        assert_eq!(state, HabitState::default());
    }

    #[test]
    fn missed_day_forfeits_and_stays_forfeited() {
        let today = day(2026, 1, 5);
        let mut state = read_habit(today);
        check_in(&mut state, today);

        assert!(!check_missed_day(&mut state, after(today, 1)));
        assert!(!state.is_forfeited);

        assert!(check_missed_day(&mut state, after(today, 3)));
        assert!(state.is_forfeited);
        assert!(!check_missed_day(&mut state, after(today, 4)));

        let snapshot = state.clone();
        assert_eq!(check_in(&mut state, after(today, 3)), CheckInOutcome::Forfeited);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn missed_day_ignores_commitment_without_check_in() {
        let today = day(2026, 1, 5);
        let mut state = read_habit(today);
        assert!(!check_missed_day(&mut state, after(today, 30)));
        assert!(!state.is_forfeited);
    }

    #[test]
    fn missed_day_counts_backwards_gaps() {
        let today = day(2026, 1, 5);
        let mut state = read_habit(today);
        check_in(&mut state, today);
        assert!(check_missed_day(&mut state, after(today, -2)));
    }

    #[test]
    fn check_in_never_moves_last_date_backwards() {
        let today = day(2026, 1, 5);
        let mut state = read_habit(today);
        check_in(&mut state, today);
        let snapshot = state.clone();

        let yesterday = after(today, -1);
        assert!(!check_missed_day(&mut state, yesterday));
        assert_eq!(check_in(&mut state, yesterday), CheckInOutcome::AlreadyCheckedIn);
        assert_eq!(state, snapshot);
        assert_eq!(state.last_check_in_date, Some(today));
        assert_eq!(state.current_day, 2);
    }

    #[test]
    fn named_habit_without_start_date_shows_dashboard() {
        let today = day(2026, 1, 5);
        let mut state = HabitState {
            habit_name: "Read".into(),
            stake_amount: 20,
            total_days: 5,
            last_check_in_date: Some(after(today, -10)),
            ..HabitState::default()
        };

        assert_eq!(dashboard(view(&state, today)).mode, Mode::Pending);
        assert!(!check_missed_day(&mut state, today));
        assert_eq!(check_in(&mut state, today), CheckInOutcome::Recorded);
        assert_eq!(state.current_day, 2);
    }

    #[test]
    fn view_without_commitment_is_onboarding() {
        assert_eq!(view(&HabitState::default(), day(2026, 1, 5)), View::Onboarding);
    }

    #[test]
    fn view_modes_follow_precedence() {
        let today = day(2026, 1, 5);
        let mut state = read_habit(today);

        let pending = dashboard(view(&state, today));
        assert_eq!(pending.mode, Mode::Pending);
        assert!(pending.check_in_enabled);
        assert!(pending.status_pulse);
        assert_eq!(pending.ring_color, COLOR_WARNING);
        assert_eq!(pending.current_day, "01");
        assert_eq!(pending.total_days, "05");
        assert_eq!(pending.money, 20);

        check_in(&mut state, today);
        let completed = dashboard(view(&state, today));
        assert_eq!(completed.mode, Mode::Completed);
        assert!(!completed.check_in_enabled);
        assert_eq!(completed.button_text, "DONE");
        assert_eq!(completed.ring_color, COLOR_SAFE);
        assert_eq!(completed.ring_dash_offset, 0);

        // Forfeiture wins even on the day of the last check-in.
        state.is_forfeited = true;
        let forfeited = dashboard(view(&state, today));
        assert_eq!(forfeited.mode, Mode::Forfeited);
        assert_eq!(forfeited.money, 0);
        assert!(forfeited.overlay_visible);
        assert_eq!(forfeited.ring_color, COLOR_DANGER);
        assert_eq!(forfeited.ring_dash_offset, FULL_DASH_ARRAY);
    }

    #[test]
    fn read_example_walkthrough() {
        let today = day(2026, 1, 5);
        let mut state = read_habit(today);
        check_in(&mut state, today);
        assert_eq!(state.current_day, 2);

        let later = after(today, 3);
        check_missed_day(&mut state, later);
        assert!(state.is_forfeited);
        assert_eq!(dashboard(view(&state, later)).money, 0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = read_habit(day(2026, 1, 5));
        reset(&mut state);
        assert_eq!(state, HabitState::default());
    }
}
