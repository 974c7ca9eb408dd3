use super::{sealed, Activity, Workout, M_IN_KM, STEP_LENGTH_M};
use crate::error::WorkoutError;

const SPEED_MULTIPLIER: f64 = 18.0;
const SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    activity: Activity,
}

impl Running {
    pub const LABEL: &'static str = "Running";

    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            activity: Activity::new(action_count, duration_h, weight_kg)?,
        })
    }
}

impl sealed::Sealed for Running {}

impl Workout for Running {
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
        (SPEED_MULTIPLIER * self.mean_speed() - SPEED_SHIFT) * self.activity.weight_kg / M_IN_KM
            * self.activity.duration_min()
    }
}
