// Lesson 8: an abstract bike and three brands behind one trait object.

use oop_lessons::bikes::{Bmw, Honda, Yamaha, garage, ride_the_bike};
use oop_lessons::{Capability, LessonError, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("VIRTUAL FUNCTIONS & POLYMORPHISM", |lesson| {
        lesson.section("Direct Method Calls");
        Bmw.go(lesson.out);
        Bmw.stop(lesson.out);
        lesson.out.blank();
        Honda.go(lesson.out);
        Honda.stop(lesson.out);
        lesson.out.blank();
        Yamaha.go(lesson.out);
        Yamaha.stop(lesson.out);

        lesson.section("POLYMORPHISM (Trait Objects)");
        let bikes: [&dyn Capability; 3] = [&Bmw, &Honda, &Yamaha];
        for bike in bikes {
            ride_the_bike(bike, lesson.out)?;
        }

        lesson.section("LOOKUP BY NAME");
        let garage = garage();
        lesson.say(format!("Garage: {}", garage.names().join(", ")));
        garage.dispatch_named("Honda", lesson.out)?;
        if let Err(err) = garage.dispatch_named("Ducati", lesson.out) {
            lesson.say(err.to_string());
        }
        Ok(())
    })
}
