use crate::console::Sink;
use crate::error::LessonError;

// =============================================================================
// Gpa: bounded value object
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Gpa(f64);

impl Gpa {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 4.0;

    pub fn new(value: f64) -> Result<Self, LessonError> {
        // NaN fails both comparisons and is rejected with the rest.
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LessonError::out_of_range("GPA", value, Self::MIN, Self::MAX))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Amounts moved in or out must be finite and strictly positive.
fn positive_amount(operation: &'static str, amount: f64) -> Result<f64, LessonError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(LessonError::InvalidAmount { operation, amount })
    }
}

/// Reports a rejection to the learner and to the log, then hands it back.
fn reject(sink: &mut dyn Sink, err: LessonError) -> LessonError {
    tracing::warn!(%err, "rejected update");
    sink.emit(err.to_string());
    err
}

// =============================================================================
// Student
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: u32,
    gpa: Gpa,
    student_id: String,
    department: String,
}

impl Default for Student {
    fn default() -> Self {
        Self {
            name: "Unknown".into(),
            age: 0,
            gpa: Gpa::default(),
            student_id: "N/A".into(),
            department: "Not Assigned".into(),
        }
    }
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gpa: f64,
        student_id: impl Into<String>,
    ) -> Result<Self, LessonError> {
        Ok(Self {
            name: name.into(),
            age,
            gpa: Gpa::new(gpa)?,
            student_id: student_id.into(),
            department: "Engineering".into(),
        })
    }

    pub fn construct_default(sink: &mut dyn Sink) -> Self {
        sink.emit("Default Constructor Called".to_string());
        Self::default()
    }

    pub fn construct(
        name: impl Into<String>,
        age: u32,
        gpa: f64,
        student_id: impl Into<String>,
        sink: &mut dyn Sink,
    ) -> Result<Self, LessonError> {
        let student = Self::new(name, age, gpa, student_id).map_err(|err| reject(sink, err))?;
        sink.emit(format!("Parameterized Constructor Called for: {}", student.name));
        Ok(student)
    }

    pub fn gpa(&self) -> f64 {
        self.gpa.value()
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Commits `value` only when it is a valid GPA; otherwise the old one stays.
    pub fn set_gpa(&mut self, value: f64, sink: &mut dyn Sink) -> Result<(), LessonError> {
        self.gpa = Gpa::new(value).map_err(|err| reject(sink, err))?;
        sink.emit(format!("GPA updated to: {}", self.gpa.value()));
        Ok(())
    }

    pub fn display_info(&self, sink: &mut dyn Sink) {
        sink.blank();
        sink.emit("--- Student Information ---".to_string());
        sink.emit(format!("Name: {}", self.name));
        sink.emit(format!("Age: {}", self.age));
        sink.emit(format!("GPA: {}", self.gpa.value()));
        sink.emit(format!("ID: {}", self.student_id));
        sink.emit(format!("Department: {}", self.department));
    }

    pub fn study(&self, hours: u32, sink: &mut dyn Sink) {
        sink.emit(format!("{} is studying for {} hours.", self.name, hours));
    }
}

// =============================================================================
// BankAccount
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    balance: f64,
    account_number: String,
}

impl BankAccount {
    pub fn new(initial_balance: f64, account_number: impl Into<String>) -> Result<Self, LessonError> {
        if !initial_balance.is_finite() || initial_balance < 0.0 {
            return Err(LessonError::InvalidBalance(initial_balance));
        }
        Ok(Self {
            balance: initial_balance,
            account_number: account_number.into(),
        })
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn deposit(&mut self, amount: f64, sink: &mut dyn Sink) -> Result<f64, LessonError> {
        let amount = positive_amount("Deposit", amount).map_err(|err| reject(sink, err))?;
        self.balance += amount;
        sink.emit(format!("Deposited: ${amount}"));
        sink.emit(format!("New balance: ${}", self.balance));
        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: f64, sink: &mut dyn Sink) -> Result<f64, LessonError> {
        let amount = positive_amount("Withdrawal", amount).map_err(|err| reject(sink, err))?;
        if amount > self.balance {
            return Err(reject(
                sink,
                LessonError::InsufficientFunds {
                    requested: amount,
                    balance: self.balance,
                },
            ));
        }

        self.balance -= amount;
        sink.emit(format!("Withdrawn: ${amount}"));
        sink.emit(format!("New balance: ${}", self.balance));
        Ok(self.balance)
    }

    pub fn display_details(&self, sink: &mut dyn Sink) {
        sink.emit(format!("Account: {}", self.account_number));
        sink.emit(format!("Balance: ${}", self.balance));
    }
}

// =============================================================================
// Car
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub brand: String,
    pub color: String,
    model: String,
    year: u16,
    speed: f64,
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        color: impl Into<String>,
        model: impl Into<String>,
        year: u16,
    ) -> Self {
        Self {
            brand: brand.into(),
            color: color.into(),
            model: model.into(),
            year,
            speed: 0.0,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn accelerate(&mut self, amount: f64, sink: &mut dyn Sink) -> Result<f64, LessonError> {
        let amount = positive_amount("Acceleration", amount).map_err(|err| reject(sink, err))?;
        self.speed += amount;
        sink.emit(format!("{} {} is accelerating...", self.brand, self.model));
        sink.emit(format!("Current speed: {} km/h", self.speed));
        Ok(self.speed)
    }

    /// Speed never drops below zero; braking harder than the current speed stops the car.
    pub fn brake(&mut self, amount: f64, sink: &mut dyn Sink) -> Result<f64, LessonError> {
        let amount = positive_amount("Braking", amount).map_err(|err| reject(sink, err))?;
        self.speed = (self.speed - amount).max(0.0);
        sink.emit("Braking...".to_string());
        sink.emit(format!("Current speed: {} km/h", self.speed));
        Ok(self.speed)
    }

    pub fn display_details(&self, sink: &mut dyn Sink) {
        sink.blank();
        sink.emit("--- Car Details ---".to_string());
        sink.emit(format!("Brand: {}", self.brand));
        sink.emit(format!("Model: {}", self.model));
        sink.emit(format!("Year: {}", self.year));
        sink.emit(format!("Color: {}", self.color));
    }
}
