// Lesson 7: a method on the outer type hides the one on the embedded spec.

use oop_lessons::motorbike::Yamaha;
use oop_lessons::{LessonError, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("NAME HIDING", |lesson| {
        let mut bike = Yamaha::new("BMW", 120, "Purple", 6);

        lesson.section("OUTER NAME");
        bike.name(lesson.out);

        lesson.section("EMBEDDED SPEC");
        bike.spec_mut().set_name("r15");
        let spec = bike.spec();
        lesson.say(format!("Name: {}", spec.name()));
        lesson.say(format!("Speed: {}", spec.speed()));
        lesson.say(format!("Color: {}", spec.color()));
        lesson.say(format!("Gears: {}", bike.gears()));
        Ok(())
    })
}
