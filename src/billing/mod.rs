pub mod constants;
mod engine;
mod meals;

pub use constants::{ENROLLMENT_FEE, MEAL_COST};
pub use engine::{BillingEngine, FeeSchedule};
pub use meals::MealLedger;
