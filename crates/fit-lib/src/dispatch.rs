use crate::{
    error::WorkoutError,
    workout::{AnyWorkout, Running, SportsWalking, Swimming},
};
use std::{fmt, str::FromStr};

/// Short workout type code sent by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => Swimming::LABEL,
            WorkoutCode::Running => Running::LABEL,
            WorkoutCode::SportsWalking => SportsWalking::LABEL,
        }
    }

    /// Number of positional arguments the workout constructor takes.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Swimming => 5,
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swm" | "swim" => Ok(WorkoutCode::Swimming),
            "run" => Ok(WorkoutCode::Running),
            "wlk" | "walk" => Ok(WorkoutCode::SportsWalking),
            _ => Err(WorkoutError::UnknownWorkoutType(s.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the workout named by `code` from positional sensor readings.
///
/// The first argument is always the step/stroke count, followed by duration
/// (h) and weight (kg); walking adds height (cm), swimming adds pool length
/// (m) and lap count.
pub fn build_workout(code: &str, args: &[f64]) -> Result<AnyWorkout, WorkoutError> {
    let code: WorkoutCode = code.parse()?;
    let workout: AnyWorkout = match (code, args) {
        (WorkoutCode::Swimming, &[actions, duration, weight, pool_length, laps]) => {
            let actions = action_count(code, actions)?;
            Swimming::new(actions, duration, weight, pool_length, laps)?.into()
        }
        (WorkoutCode::Running, &[actions, duration, weight]) => {
            let actions = action_count(code, actions)?;
            Running::new(actions, duration, weight)?.into()
        }
        (WorkoutCode::SportsWalking, &[actions, duration, weight, height]) => {
            let actions = action_count(code, actions)?;
            SportsWalking::new(actions, duration, weight, height)?.into()
        }
        _ => {
            return Err(WorkoutError::ArgumentMismatch {
                workout: code.label(),
                reason: format!("expected {} arguments, got {}", code.arity(), args.len()),
            })
        }
    };
    log::debug!("built {} workout from {:?}", code, args);
    Ok(workout)
}

fn action_count(code: WorkoutCode, raw: f64) -> Result<u32, WorkoutError> {
    if raw.is_finite() && raw.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&raw) {
        Ok(raw as u32)
    } else {
        Err(WorkoutError::ArgumentMismatch {
            workout: code.label(),
            reason: format!("action count must be a non-negative integer, got {}", raw),
        })
    }
}
