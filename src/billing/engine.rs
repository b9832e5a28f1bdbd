use crate::billing::constants::{ENROLLMENT_FEE, MEAL_COST};
use crate::billing::MealLedger;
use crate::models::Student;

/// Fee configuration for a hall. Passed into the engine so tests can vary it.
#[derive(Debug, Clone, Copy)]
pub struct FeeSchedule {
    pub meal_cost: f64,
    pub enrollment_fee: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            meal_cost: MEAL_COST,
            enrollment_fee: ENROLLMENT_FEE,
        }
    }
}

/// Computes due balances from the meal ledger and student fields.
///
/// Every method is a pure function of its inputs; nothing is cached, so a
/// due amount is always consistent with the current ledger state. Results
/// may be negative (overpayment credit) and are never clamped.
#[derive(Debug, Default)]
pub struct BillingEngine {
    fees: FeeSchedule,
}

impl BillingEngine {
    pub fn new(fees: FeeSchedule) -> Self {
        Self { fees }
    }

    /// Flat fee charged while the meal plan is enabled.
    pub fn enrollment_fee(&self, meal_enabled: bool) -> f64 {
        if meal_enabled {
            self.fees.enrollment_fee
        } else {
            0.0
        }
    }

    /// Charge accrued from recorded meals for a roll number.
    pub fn meal_charge(&self, ledger: &MealLedger, roll_number: &str) -> f64 {
        ledger.meal_count(roll_number) as f64 * self.fees.meal_cost
    }

    /// Outstanding balance: meal charges plus enrollment fee plus the
    /// student's signed payment adjustment.
    pub fn total_due(&self, ledger: &MealLedger, student: &Student) -> f64 {
        self.meal_charge(ledger, &student.roll_number)
            + self.enrollment_fee(student.meal_enabled)
            + student.payment_adjustment
    }
}
