use assert_float_eq::assert_float_absolute_eq;
use chrono::Local;

use hall_manager_rs::billing::{BillingEngine, FeeSchedule, MealLedger};
use hall_manager_rs::error::HallError;
use hall_manager_rs::state::StudentDirectory;

fn register_n(dir: &mut StudentDirectory, n: usize) {
    for i in 0..n {
        dir.register(
            &format!("Student {}", i),
            &format!("R{}", i),
            &format!("01{:08}", i),
            &format!("B-{}", 100 + i),
        )
        .unwrap();
    }
}

#[test]
fn test_registration_count_and_order() {
    let mut dir = StudentDirectory::new();
    register_n(&mut dir, 7);

    assert_eq!(dir.len(), 7);
    for (i, student) in dir.students().iter().enumerate() {
        assert_eq!(student.roll_number, format!("R{}", i));
    }
}

#[test]
fn test_duplicate_registration_never_changes_size() {
    let mut dir = StudentDirectory::new();
    register_n(&mut dir, 3);

    for roll in ["R0", "R1", "R2"] {
        let err = dir.register("Duplicate", roll, "x", "y").unwrap_err();
        assert!(matches!(err, HallError::AlreadyExists(_)));
        assert_eq!(dir.len(), 3);
    }
}

#[test]
fn test_meal_charge_is_count_times_cost() {
    let engine = BillingEngine::default();
    let mut ledger = MealLedger::new();

    for n in 1..=10 {
        ledger.record_meal("R1", Local::now());
        assert_float_absolute_eq!(engine.meal_charge(&ledger, "R1"), n as f64 * 100.0, 1e-9);
    }
}

#[test]
fn test_due_after_fresh_registration() {
    let mut dir = StudentDirectory::new();
    register_n(&mut dir, 1);
    let engine = BillingEngine::default();
    let ledger = MealLedger::new();

    // Meal plan on by default: exactly the enrollment fee.
    let student = dir.find("R0").unwrap();
    assert_float_absolute_eq!(engine.total_due(&ledger, student), 100.0, 1e-9);

    dir.set_meal_enabled("R0", false).unwrap();
    let student = dir.find("R0").unwrap();
    assert_float_absolute_eq!(engine.total_due(&ledger, student), 0.0, 1e-9);
}

#[test]
fn test_exact_payment_zeroes_due_and_overpayment_goes_negative() {
    let mut dir = StudentDirectory::new();
    register_n(&mut dir, 1);
    let engine = BillingEngine::default();
    let mut ledger = MealLedger::new();

    ledger.record_meal("R0", Local::now());
    ledger.record_meal("R0", Local::now());

    let due = engine.total_due(&ledger, dir.find("R0").unwrap());
    assert_float_absolute_eq!(due, 300.0, 1e-9);

    dir.apply_payment("R0", due).unwrap();
    assert_float_absolute_eq!(
        engine.total_due(&ledger, dir.find("R0").unwrap()),
        0.0,
        1e-9
    );

    dir.apply_payment("R0", 75.0).unwrap();
    assert_float_absolute_eq!(
        engine.total_due(&ledger, dir.find("R0").unwrap()),
        -75.0,
        1e-9
    );
}

#[test]
fn test_due_is_recomputed_not_cached() {
    let mut dir = StudentDirectory::new();
    register_n(&mut dir, 1);
    let engine = BillingEngine::default();
    let mut ledger = MealLedger::new();

    let before = engine.total_due(&ledger, dir.find("R0").unwrap());
    ledger.record_meal("R0", Local::now());
    let after = engine.total_due(&ledger, dir.find("R0").unwrap());

    assert_float_absolute_eq!(after - before, 100.0, 1e-9);
}

#[test]
fn test_varied_fee_schedule() {
    let engine = BillingEngine::new(FeeSchedule {
        meal_cost: 55.0,
        enrollment_fee: 300.0,
    });
    let mut dir = StudentDirectory::new();
    register_n(&mut dir, 1);
    let mut ledger = MealLedger::new();
    ledger.record_meal("R0", Local::now());

    assert_float_absolute_eq!(
        engine.total_due(&ledger, dir.find("R0").unwrap()),
        55.0 + 300.0,
        1e-9
    );
}
