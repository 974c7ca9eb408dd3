use super::{ensure_positive, sealed, Activity, Workout, M_IN_KM};
use crate::error::WorkoutError;

/// Meters covered by one stroke.
pub const STROKE_LENGTH_M: f64 = 1.38;

const SPEED_SHIFT: f64 = 1.1;
const WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    activity: Activity,
    pool_length_m: f64,
    pool_laps: f64,
}

impl Swimming {
    pub const LABEL: &'static str = "Swimming";

    pub fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            activity: Activity::new(action_count, duration_h, weight_kg)?,
            pool_length_m: ensure_positive("pool_length_m", pool_length_m)?,
            pool_laps: ensure_positive("pool_laps", pool_laps)?,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> f64 {
        self.pool_laps
    }
}

impl sealed::Sealed for Swimming {}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Stroke-based distance; speed uses the pool model instead.
    fn distance(&self) -> f64 {
        self.activity.distance_km(STROKE_LENGTH_M)
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.activity.duration_h
    }

    fn calories_burned(&self) -> f64 {
        (self.mean_speed() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.activity.weight_kg
    }
}
