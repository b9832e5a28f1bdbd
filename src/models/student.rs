/// A registered hall resident.
///
/// `payment_adjustment` is a signed accumulator: each recorded payment
/// subtracts the paid amount, so a positive value is money still owed beyond
/// meal charges and a negative value is credit from overpayment.
#[derive(Debug, Clone)]
pub struct Student {
    pub name: String,
    pub roll_number: String,
    pub contact_details: String,
    pub room_number: String,
    pub meal_enabled: bool,
    pub payment_adjustment: f64,
}

impl Student {
    /// Create a freshly registered student: meal plan on, nothing owed yet.
    pub fn new(name: &str, roll_number: &str, contact_details: &str, room_number: &str) -> Self {
        Self {
            name: name.to_string(),
            roll_number: roll_number.to_string(),
            contact_details: contact_details.to_string(),
            room_number: room_number.to_string(),
            meal_enabled: true,
            payment_adjustment: 0.0,
        }
    }

    /// Human-readable meal plan status.
    pub fn meal_status(&self) -> &'static str {
        if self.meal_enabled {
            "Enabled"
        } else {
            "Disabled"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_defaults() {
        let s = Student::new("Rahim Uddin", "R1", "017xxxxxxx", "B-204");
        assert!(s.meal_enabled);
        assert_eq!(s.payment_adjustment, 0.0);
        assert_eq!(s.roll_number, "R1");
    }

    #[test]
    fn test_meal_status() {
        let mut s = Student::new("Rahim Uddin", "R1", "017xxxxxxx", "B-204");
        assert_eq!(s.meal_status(), "Enabled");
        s.meal_enabled = false;
        assert_eq!(s.meal_status(), "Disabled");
    }
}
