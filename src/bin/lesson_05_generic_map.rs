// Lesson 5: a generic map over a vector.

use itertools::Itertools;
use oop_lessons::basics::map_vec;
use oop_lessons::{LessonError, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("GENERIC MAP", |lesson| {
        let values = vec![1, 2, 3, 4];
        lesson.section("SQUARES");
        let squares = map_vec(&values, |x| x * x);
        lesson.say(squares.iter().join(" "));

        lesson.section("LABELS");
        let labels = map_vec(&values, |x| format!("#{x}"));
        lesson.say(labels.join(", "));
        Ok(())
    })
}
