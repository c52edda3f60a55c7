// Lesson 6: notes on strings, sorting, reversal and operators.

use itertools::Itertools;
use oop_lessons::basics::{bitwise, compound_assignments, countdown, grid, reversed, sorted_chars, string_walkthrough};
use oop_lessons::{LessonError, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("PROGRAMMING NOTES", |lesson| {
        lesson.section("OPERATORS");
        lesson.say(format!("Compound steps from 4: {}", compound_assignments(4).iter().join(" -> ")));
        let (and, or, xor) = bitwise(1, 0);
        lesson.say(format!("1 & 0 = {and}, 1 | 0 = {or}, 1 ^ 0 = {xor}"));

        lesson.section("LOOPS");
        lesson.say(countdown(10));

        lesson.section("ARRAYS");
        if let Some(rows) = grid(2, 2, &[1, 2, 3, 2]) {
            lesson.say(format!("arr2D[0][0] = {}", rows[0][0]));
        }

        lesson.section("STRINGS");
        string_walkthrough(lesson.out);
        lesson.say(format!("Sorted: {}", sorted_chars("clsdhgegba")));

        lesson.section("STRING REVERSAL");
        let original = "Nithwin";
        lesson.say(format!("Original: {original}"));
        lesson.say(format!("Reversed: {}", reversed(original)));
        Ok(())
    })
}
