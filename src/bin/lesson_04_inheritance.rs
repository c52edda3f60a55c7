// Lesson 4: shared state by composition, overriding, trait objects and
// overloading through generics.

use oop_lessons::animals::{Cat, Dog, test_animal};
use oop_lessons::basics::Calculator;
use oop_lessons::shapes::{Circle, Rectangle, present};
use oop_lessons::vehicles::{Bike, Car};
use oop_lessons::{Capability, LessonError, RosterEntry, dispatch, run_lesson};

fn main() -> Result<(), LessonError> {
    run_lesson("INHERITANCE & POLYMORPHISM TUTORIAL", |lesson| {
        lesson.section("SINGLE INHERITANCE DEMO");
        let dog = Dog::construct("Buddy", lesson.out);
        dog.base().display_name(lesson.out);
        dog.eat(lesson.out);
        dog.base().sleep(lesson.out);
        dog.bark(lesson.out);
        lesson.out.blank();

        let cat = Cat::construct("Whiskers", lesson.out);
        cat.base().display_name(lesson.out);
        cat.eat(lesson.out);
        cat.base().sleep(lesson.out);
        cat.meow(lesson.out);

        lesson.section("POLYMORPHISM DEMO");
        let animals: [&dyn RosterEntry; 2] = [&dog, &cat];
        for (i, animal) in animals.into_iter().enumerate() {
            if i > 0 {
                lesson.out.blank();
            }
            test_animal(animal, lesson.out);
        }

        lesson.section("VEHICLE HIERARCHY");
        let car = Car::new("Toyota", "Red", 2023, 4);
        let bike = Bike::new("Yamaha", "Black", 2023, true);
        dispatch(Some(&car as &dyn Capability), lesson.out)?;
        lesson.out.blank();
        dispatch(Some(&bike as &dyn Capability), lesson.out)?;
        bike.wheelie(lesson.out);

        lesson.section("FUNCTION OVERLOADING");
        let calc = Calculator;
        lesson.say(format!("5 + 3 = {}", calc.add(5, 3)));
        lesson.say(format!("5.5 + 3.2 = {}", calc.add(5.5, 3.2)));
        lesson.say(format!("1 + 2 + 3 = {}", calc.add3(1, 2, 3)));

        lesson.section("ABSTRACT CLASS DEMO");
        present(&Circle::new("Blue", 5.0), lesson.out);
        lesson.out.blank();
        present(&Rectangle::new("Green", 4.0, 6.0), lesson.out);
        Ok(())
    })
}
