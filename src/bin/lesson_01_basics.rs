// Lesson 1: variables, console input/output and operators.

use std::io;

use oop_lessons::basics::{lesson_operators, lesson_variables};
use oop_lessons::input::read_number_and_line;
use oop_lessons::{LessonError, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("BASICS & DATA TYPES TUTORIAL", |lesson| {
        lesson.section("LESSON 1: VARIABLES & DATA TYPES");
        lesson_variables(lesson.out);

        lesson.section("LESSON 2: INPUT & OUTPUT");
        lesson.say("Hello, World!");
        lesson.say("Enter a number followed by a sentence:");
        match read_number_and_line(&mut io::stdin().lock()) {
            Ok((number, sentence)) => {
                lesson.say(format!("You entered: {number}"));
                lesson.say(format!("Sentence: {sentence}"));
            }
            // Bad input is reported and the lesson moves on.
            Err(err) => {
                tracing::warn!(%err, "could not read lesson input");
                lesson.say(format!("Could not read input: {err}"));
            }
        }

        lesson.section("LESSON 3: OPERATORS");
        lesson_operators(10, 3, lesson.out);
        Ok(())
    })
}
