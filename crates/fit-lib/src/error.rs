use thiserror::Error;

/// Failures raised while turning raw sensor packages into workouts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("invalid arguments for {workout}: {reason}")]
    ArgumentMismatch {
        workout: &'static str,
        reason: String,
    },
    #[error("{field} must be a positive finite number, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
}
