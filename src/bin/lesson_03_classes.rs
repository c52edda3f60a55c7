// Lesson 3: classes, constructors, encapsulation and validated setters.

use oop_lessons::records::{BankAccount, Car, Student};
use oop_lessons::{LessonError, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("OBJECT-ORIENTED PROGRAMMING TUTORIAL", |lesson| {
        lesson.section("STUDENT CLASS DEMO");
        let s1 = Student::construct_default(lesson.out);
        let mut s2 = Student::construct("Alice Johnson", 20, 3.8, "STU001", lesson.out)?;
        lesson.say(format!("First student name: {}", s1.name));
        lesson.say(format!("Second student name: {}", s2.name));

        s2.set_gpa(3.9, lesson.out)?;
        lesson.say(format!("Alice's GPA: {}", s2.gpa()));
        s2.display_info(lesson.out);
        s2.study(3, lesson.out);

        if let Err(err) = s2.set_gpa(5.0, lesson.out) {
            tracing::debug!(%err, "GPA kept at {}", s2.gpa());
        }

        lesson.section("BANK ACCOUNT DEMO");
        let mut account = BankAccount::new(1000.0, "ACC12345")?;
        account.display_details(lesson.out);
        account.deposit(500.0, lesson.out)?;
        account.withdraw(200.0, lesson.out)?;
        if let Err(err) = account.withdraw(2000.0, lesson.out) {
            tracing::debug!(%err, "balance kept at {}", account.balance());
        }
        lesson.say(format!("Final Balance: ${}", account.balance()));

        lesson.section("CAR CLASS DEMO");
        let mut car = Car::new("BMW", "Black", "X5", 2023);
        car.display_details(lesson.out);
        car.accelerate(50.0, lesson.out)?;
        car.accelerate(30.0, lesson.out)?;
        car.brake(40.0, lesson.out)?;
        Ok(())
    })
}
