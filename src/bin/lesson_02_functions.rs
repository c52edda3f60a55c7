// Lesson 2: functions, parameter passing, scope and control flow.

use oop_lessons::basics::{
    add, do_while, for_loop, grade_for, greet, increment_by_reference, increment_by_value, indexed,
    multiply, print_message, scope_demo, weekday, while_loop,
};
use oop_lessons::{LessonError, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("FUNCTIONS & CONTROL FLOW TUTORIAL", |lesson| {
        lesson.section("FUNCTION CALLS");
        greet(lesson.out);
        lesson.say(format!("5 + 3 = {}", add(5, 3)));
        lesson.say(format!("4 * 7 = {}", multiply(4, 7)));
        print_message(None, lesson.out);
        print_message(Some("Custom Message"), lesson.out);

        lesson.section("PASS BY VALUE vs REFERENCE");
        let mut num = 10;
        lesson.say(format!("Original value: {num}"));
        increment_by_value(num, lesson.out);
        lesson.say(format!("After pass by value: {num}"));
        increment_by_reference(&mut num, lesson.out);
        lesson.say(format!("After pass by reference: {num}"));

        lesson.section("SCOPE DEMO");
        scope_demo(lesson.config, lesson.out);

        lesson.section("IF & ELSE STATEMENT");
        lesson.say(format!("Grade: {}", grade_for(85)));

        lesson.section("SWITCH STATEMENT");
        lesson.say(weekday(3));

        lesson.section("FOR LOOP");
        for_loop(lesson.out);
        lesson.out.blank();
        lesson.say("Loop through array:");
        indexed(&[10, 20, 30, 40, 50], lesson.out);

        lesson.section("WHILE LOOP");
        while_loop(lesson.out);

        lesson.section("DO-WHILE LOOP");
        do_while(1, lesson.out);
        Ok(())
    })
}
