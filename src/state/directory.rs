use crate::error::{HallError, Result};
use crate::models::Student;

/// Owns the set of registered students in registration order.
///
/// Roll numbers are unique and immutable after registration. Lookup is a
/// linear scan; the directory must iterate in registration order for display
/// and export, and a hall roster is small.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    students: Vec<Student>,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new student with the meal plan enabled and nothing owed.
    ///
    /// Fails without mutation if the roll number is already taken.
    pub fn register(
        &mut self,
        name: &str,
        roll_number: &str,
        contact_details: &str,
        room_number: &str,
    ) -> Result<()> {
        if self.find(roll_number).is_some() {
            return Err(HallError::AlreadyExists(roll_number.to_string()));
        }
        self.students
            .push(Student::new(name, roll_number, contact_details, room_number));
        Ok(())
    }

    pub fn find(&self, roll_number: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.roll_number == roll_number)
    }

    pub fn find_mut(&mut self, roll_number: &str) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.roll_number == roll_number)
    }

    /// Toggle the meal plan flag. Does not touch the payment adjustment.
    pub fn set_meal_enabled(&mut self, roll_number: &str, enabled: bool) -> Result<()> {
        let student = self
            .find_mut(roll_number)
            .ok_or_else(|| HallError::NotFound(roll_number.to_string()))?;
        student.meal_enabled = enabled;
        Ok(())
    }

    /// Record a payment: subtracts the amount from the student's adjustment,
    /// so paying the exact due zeroes it and overpaying drives it negative.
    pub fn apply_payment(&mut self, roll_number: &str, amount: f64) -> Result<()> {
        let student = self
            .find_mut(roll_number)
            .ok_or_else(|| HallError::NotFound(roll_number.to_string()))?;
        student.payment_adjustment -= amount;
        Ok(())
    }

    /// All students in registration order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with_two() -> StudentDirectory {
        let mut dir = StudentDirectory::new();
        dir.register("Rahim Uddin", "R1", "017xxxxxxx", "B-204")
            .unwrap();
        dir.register("Karim Hossain", "R2", "018xxxxxxx", "B-205")
            .unwrap();
        dir
    }

    #[test]
    fn test_register_preserves_order() {
        let dir = directory_with_two();
        let rolls: Vec<&str> = dir
            .students()
            .iter()
            .map(|s| s.roll_number.as_str())
            .collect();
        assert_eq!(rolls, vec!["R1", "R2"]);
    }

    #[test]
    fn test_duplicate_roll_rejected_without_mutation() {
        let mut dir = directory_with_two();
        let err = dir
            .register("Impostor", "R1", "019xxxxxxx", "C-101")
            .unwrap_err();
        assert!(matches!(err, HallError::AlreadyExists(roll) if roll == "R1"));
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.find("R1").unwrap().name, "Rahim Uddin");
    }

    #[test]
    fn test_set_meal_enabled() {
        let mut dir = directory_with_two();
        dir.set_meal_enabled("R1", false).unwrap();
        assert!(!dir.find("R1").unwrap().meal_enabled);

        let err = dir.set_meal_enabled("R9", true).unwrap_err();
        assert!(matches!(err, HallError::NotFound(_)));
    }

    #[test]
    fn test_apply_payment_accumulates() {
        let mut dir = directory_with_two();
        dir.apply_payment("R1", 100.0).unwrap();
        dir.apply_payment("R1", 50.0).unwrap();
        assert_eq!(dir.find("R1").unwrap().payment_adjustment, -150.0);

        assert!(matches!(
            dir.apply_payment("R9", 10.0),
            Err(HallError::NotFound(_))
        ));
    }
}
