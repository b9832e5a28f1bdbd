/// Fixed charge per recorded meal, in BDT.
pub const MEAL_COST: f64 = 100.0;

/// Flat monthly fee while the meal plan is enabled, in BDT.
pub const ENROLLMENT_FEE: f64 = 100.0;

/// Local hour after which a gate entry counts as late.
pub const CURFEW_HOUR: u32 = 23;

/// Default serving windows as (start hour, end hour) pairs, end exclusive.
pub const SERVING_WINDOWS: [(u32, u32); 3] = [(8, 10), (12, 14), (18, 20)];
