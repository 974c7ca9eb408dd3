mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::{Swimming, STROKE_LENGTH_M};
pub use walking::{floor_div, SportsWalking};

use crate::{error::WorkoutError, report::Report};

/// Meters covered by one step on land.
pub const STEP_LENGTH_M: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Raw sensor readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    /// Steps or strokes counted by the sensor.
    pub action_count: u32,
    /// Workout duration in hours.
    pub duration_h: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
}

impl Activity {
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count,
            duration_h: ensure_positive("duration_h", duration_h)?,
            weight_kg: ensure_positive("weight_kg", weight_kg)?,
        })
    }

    /// Distance in km for a given length per action.
    pub fn distance_km(&self, step_length_m: f64) -> f64 {
        self.action_count as f64 * step_length_m / M_IN_KM
    }

    /// Mean speed in km/h derived from the step-based distance.
    pub fn mean_speed_kmh(&self, step_length_m: f64) -> f64 {
        self.distance_km(step_length_m) / self.duration_h
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_H
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput { field, value })
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Distance, speed and calorie model of one workout kind.
///
/// Implemented only by the variants in this module; there is no fallback
/// calorie formula.
pub trait Workout: sealed::Sealed {
    /// Display name used in reports.
    fn label(&self) -> &'static str;
    fn activity(&self) -> &Activity;
    /// Distance in km.
    fn distance(&self) -> f64;
    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64;
    /// Spent energy in kcal.
    fn calories_burned(&self) -> f64;

    fn report(&self) -> Report {
        Report {
            label: self.label().to_string(),
            duration_h: self.activity().duration_h,
            distance_km: self.distance(),
            speed_kmh: self.mean_speed(),
            calories: self.calories_burned(),
        }
    }
}

/// Closed set of workouts produced by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyWorkout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl AnyWorkout {
    fn inner(&self) -> &dyn Workout {
        match self {
            AnyWorkout::Running(w) => w,
            AnyWorkout::SportsWalking(w) => w,
            AnyWorkout::Swimming(w) => w,
        }
    }
}

impl sealed::Sealed for AnyWorkout {}

impl Workout for AnyWorkout {
    fn label(&self) -> &'static str {
        self.inner().label()
    }
    fn activity(&self) -> &Activity {
        self.inner().activity()
    }
    fn distance(&self) -> f64 {
        self.inner().distance()
    }
    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }
    fn calories_burned(&self) -> f64 {
        self.inner().calories_burned()
    }
}

impl From<Running> for AnyWorkout {
    fn from(w: Running) -> Self {
        AnyWorkout::Running(w)
    }
}

impl From<SportsWalking> for AnyWorkout {
    fn from(w: SportsWalking) -> Self {
        AnyWorkout::SportsWalking(w)
    }
}

impl From<Swimming> for AnyWorkout {
    fn from(w: Swimming) -> Self {
        AnyWorkout::Swimming(w)
    }
}
