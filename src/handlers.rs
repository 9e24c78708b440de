use crate::errors::AppError;
use crate::habit;
use crate::models::{
    CalendarDay, CheckInOutcome, CheckInResponse, HabitState, IndexQuery, StartForm, StartRequest,
    StateResponse, View,
};
use crate::state::AppState;
use crate::storage::{clear_data, persist_data};
use crate::ui::render_page;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use tokio::sync::MutexGuard;
use tracing::{info, warn};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let today = CalendarDay::today();
    let current = load_current(&state, today).await?;
    Ok(Html(render_page(&habit::view(&current, today), query.is_invalid())))
}

pub async fn get_state(State(state): State<AppState>) -> Result<Json<StateResponse>, AppError> {
    let today = CalendarDay::today();
    let current = load_current(&state, today).await?;
    Ok(Json(to_response(&current, today)))
}

pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<StartRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let response = apply_start(&state, &payload).await?;
    Ok(Json(response))
}

pub async fn start_form(State(state): State<AppState>, Form(form): Form<StartForm>) -> Result<Redirect, AppError> {
    match apply_start(&state, &form.into_request()).await {
        Ok(_) => Ok(Redirect::to("/")),
        Err(err) if err.status.is_client_error() => Ok(Redirect::to("/?invalid=1")),
        Err(err) => Err(err),
    }
}

pub async fn check_in(State(state): State<AppState>) -> Result<Json<CheckInResponse>, AppError> {
    let today = CalendarDay::today();
    let (outcome, current) = apply_check_in(&state, today).await?;
    Ok(Json(CheckInResponse {
        outcome,
        view: habit::view(&current, today),
        state: current,
    }))
}

pub async fn check_in_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_check_in(&state, CalendarDay::today()).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<StateResponse>, AppError> {
    apply_reset(&state).await?;
    Ok(Json(StateResponse {
        state: HabitState::default(),
        view: View::Onboarding,
    }))
}

pub async fn reset_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_reset(&state).await?;
    Ok(Redirect::to("/"))
}

/// Locks the state and applies the missed-day check for `today`, persisting
/// the forfeiture if it just happened.
async fn load_current(state: &AppState, today: CalendarDay) -> Result<MutexGuard<'_, HabitState>, AppError> {
    let mut current = state.habit.lock().await;
    if habit::check_missed_day(&mut current, today) {
        info!(
            habit = %current.habit_name,
            stake = current.stake_amount,
            date = %today,
            "missed a day, stake forfeited"
        );
        persist_data(&state.data_path, &current).await?;
    }
    Ok(current)
}

async fn apply_start(state: &AppState, request: &StartRequest) -> Result<StateResponse, AppError> {
    let today = CalendarDay::today();
    let fresh = habit::start(request, today).map_err(|err| {
        warn!("rejected start: {err}");
        AppError::from(err)
    })?;

    let mut current = state.habit.lock().await;
    persist_data(&state.data_path, &fresh).await?;
    *current = fresh;
    info!(
        habit = %current.habit_name,
        stake = current.stake_amount,
        total_days = current.total_days,
        "commitment started"
    );

    Ok(to_response(&current, today))
}

async fn apply_check_in(state: &AppState, today: CalendarDay) -> Result<(CheckInOutcome, HabitState), AppError> {
    let mut current = load_current(state, today).await?;
    let outcome = habit::check_in(&mut current, today);
    if outcome == CheckInOutcome::Recorded {
        persist_data(&state.data_path, &current).await?;
        info!(
            date = %today,
            day = current.current_day,
            total_days = current.total_days,
            "check-in recorded"
        );
    }
    Ok((outcome, current.clone()))
}

async fn apply_reset(state: &AppState) -> Result<(), AppError> {
    let mut current = state.habit.lock().await;
    clear_data(&state.data_path).await?;
    habit::reset(&mut current);
    info!("commitment reset");
    Ok(())
}

fn to_response(current: &HabitState, today: CalendarDay) -> StateResponse {
    StateResponse {
        state: current.clone(),
        view: habit::view(current, today),
    }
}
