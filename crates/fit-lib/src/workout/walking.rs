use super::{ensure_positive, sealed, Activity, Workout, STEP_LENGTH_M};
use crate::error::WorkoutError;

const WEIGHT_MULTIPLIER: f64 = 0.035;
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    activity: Activity,
    height_cm: f64,
}

impl SportsWalking {
    pub const LABEL: &'static str = "SportsWalking";

    pub fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            activity: Activity::new(action_count, duration_h, weight_kg)?,
            height_cm: ensure_positive("height_cm", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl sealed::Sealed for SportsWalking {}

impl Workout for SportsWalking {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn activity(&self) -> &Activity {
        &self.activity
    }

    fn distance(&self) -> f64 {
        self.activity.distance_km(STEP_LENGTH_M)
    }

    fn mean_speed(&self) -> f64 {
        self.activity.mean_speed_kmh(STEP_LENGTH_M)
    }

    fn calories_burned(&self) -> f64 {
        let weight = self.activity.weight_kg;
        let speed_ratio = floor_div(self.mean_speed().powi(2), self.height_cm);
        (WEIGHT_MULTIPLIER * weight + speed_ratio * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.activity.duration_min()
    }
}

/// Floor of `a / b`, derived from the remainder so a quotient that rounds up
/// to the next integer is not over-counted.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
