//! Lesson bodies for the procedural basics: values, operators, functions,
//! control flow, arrays, strings and a generic map.

use itertools::Itertools;
use std::cmp::Ordering;
use std::ops::Add;

use crate::config::LessonConfig;
use crate::console::Sink;

// =============================================================================
// Variables & operators
// =============================================================================

pub fn lesson_variables(sink: &mut dyn Sink) {
    let name = "John Doe";
    let age: i32 = 25;
    let grade = 'A';
    let is_student = true;

    sink.emit(format!("Name: {name}"));
    sink.emit(format!("Age: {age}"));
    sink.emit(format!("Grade: {grade}"));
    sink.emit(format!("Is Student: {is_student}"));
    sink.emit(format!(
        "Sizes in bytes: i16={} i32={} i64={} f32={} f64={}",
        std::mem::size_of::<i16>(),
        std::mem::size_of::<i32>(),
        std::mem::size_of::<i64>(),
        std::mem::size_of::<f32>(),
        std::mem::size_of::<f64>()
    ));
}

pub fn lesson_operators(a: i32, b: i32, sink: &mut dyn Sink) {
    sink.emit("Arithmetic Operators:".to_string());
    sink.emit(format!("a + b = {}", a + b));
    sink.emit(format!("a - b = {}", a - b));
    sink.emit(format!("a * b = {}", a * b));
    match (a.checked_div(b), a.checked_rem(b)) {
        (Some(quotient), Some(remainder)) => {
            sink.emit(format!("a / b = {quotient}"));
            sink.emit(format!("a % b = {remainder}"));
        }
        _ => sink.emit("a / b is undefined for b = 0".to_string()),
    }

    sink.blank();
    sink.emit("Comparison Operators:".to_string());
    sink.emit(format!("a > b: {}", a > b));
    sink.emit(format!("a == b: {}", a == b));
    sink.emit(format!("a != b: {}", a != b));

    sink.blank();
    sink.emit("Logical Operators:".to_string());
    sink.emit(format!("a > 5 && b < 5: {}", a > 5 && b < 5));
    sink.emit(format!("a > 15 || b < 5: {}", a > 15 || b < 5));
    sink.emit(format!("!(a > 15): {}", !(a > 15)));
}

/// Compound assignment, bitwise operators and increments, step by step.
pub fn compound_assignments(start: i32) -> Vec<i32> {
    let mut num = start;
    let mut steps = Vec::with_capacity(4);
    num += 3;
    steps.push(num);
    num *= 2;
    steps.push(num);
    num /= 1;
    steps.push(num);
    num -= 3;
    steps.push(num);
    steps
}

pub fn bitwise(a: u8, b: u8) -> (u8, u8, u8) {
    (a & b, a | b, a ^ b)
}

// =============================================================================
// Functions
// =============================================================================

pub const DEFAULT_MESSAGE: &str = "Default Message";

pub fn greet(sink: &mut dyn Sink) {
    sink.emit("Hello, Welcome!".to_string());
}

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn multiply(x: i32, y: i32) -> i32 {
    x * y
}

pub fn print_message(msg: Option<&str>, sink: &mut dyn Sink) {
    sink.emit(msg.unwrap_or(DEFAULT_MESSAGE).to_string());
}

pub fn increment_by_value(mut x: i32, sink: &mut dyn Sink) {
    x += 1;
    sink.emit(format!("Inside function (by value): {x}"));
}

pub fn increment_by_reference(x: &mut i32, sink: &mut dyn Sink) {
    *x += 1;
    sink.emit(format!("Inside function (by reference): {x}"));
}

pub fn scope_demo(config: &LessonConfig, sink: &mut dyn Sink) {
    let local = 50;
    sink.emit(format!("Global Variable: {}", config.global_value));
    sink.emit(format!("Local Variable: {local}"));
}

pub fn factorial(n: u32) -> Option<u64> {
    (1..=u64::from(n)).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

// =============================================================================
// Control flow
// =============================================================================

pub fn grade_for(score: u32) -> char {
    match score {
        90.. => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        _ => 'F',
    }
}

pub fn weekday(day: u32) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        _ => "Invalid day",
    }
}

pub fn for_loop(sink: &mut dyn Sink) {
    for i in 1..=5 {
        sink.emit(format!("i = {i}"));
    }
}

pub fn while_loop(sink: &mut dyn Sink) {
    let mut count = 1;
    while count <= 3 {
        sink.emit(format!("Count: {count}"));
        count += 1;
    }
}

/// Body runs before the condition is first checked.
pub fn do_while(start: i32, sink: &mut dyn Sink) {
    let mut num = start;
    loop {
        sink.emit(format!("Number: {num}"));
        num += 1;
        if num > 3 {
            break;
        }
    }
}

pub fn countdown(from: i32) -> String {
    (0..from).rev().join(" ")
}

// =============================================================================
// Arrays
// =============================================================================

pub fn indexed(values: &[i32], sink: &mut dyn Sink) {
    for (i, value) in values.iter().enumerate() {
        sink.emit(format!("arr[{i}] = {value}"));
    }
}

pub fn element_at(values: &[i32], index: usize) -> Option<i32> {
    values.get(index).copied()
}

/// A `rows` x `cols` grid filled row by row from `values`; `None` if the count is off.
pub fn grid(rows: usize, cols: usize, values: &[i32]) -> Option<Vec<Vec<i32>>> {
    if cols == 0 || rows.checked_mul(cols) != Some(values.len()) {
        return None;
    }
    Some(values.chunks(cols).map(<[i32]>::to_vec).collect())
}

// =============================================================================
// Overloading, the Rust way
// =============================================================================

pub struct Calculator;

impl Calculator {
    pub fn add<T: Add<Output = T>>(&self, a: T, b: T) -> T {
        a + b
    }

    pub fn add3<T: Add<Output = T>>(&self, a: T, b: T, c: T) -> T {
        a + b + c
    }
}

// =============================================================================
// Strings
// =============================================================================

/// Walks a string through the usual edits, reporting each step.
pub fn string_walkthrough(sink: &mut dyn Sink) {
    let mut s = String::from("Hello");
    s.push_str(" World");
    sink.emit(format!("After append: {s}"));
    sink.emit(format!("Length: {}", s.len()));
    if let Some(first) = s.chars().next() {
        sink.emit(format!("First character: {first}"));
    }
    sink.emit(format!("Substring(0, 6): '{}'", &s[..6]));
    match s.find("World") {
        Some(pos) => sink.emit(format!("Found 'World' at: {pos}")),
        None => sink.emit("'World' not found".to_string()),
    }

    s.truncate(6);
    s.replace_range(..1, "T");
    sink.emit(format!("After erase and replace: '{s}'"));
    s.replace_range(..5, "World");
    s.insert_str(5, "++");
    sink.emit(format!("After insert: '{s}'"));

    let verdict = match s.as_str().cmp("Hello World") {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    sink.emit(format!("Compared with 'Hello World': {verdict}"));
    sink.emit(format!("Is empty: {}", s.is_empty()));
    sink.emit(format!("Characters: {}", "Hello".chars().join(" ")));
    sink.emit(format!("Number as string: {}", 24.to_string()));
}

pub fn sorted_chars(s: &str) -> String {
    s.chars().sorted().collect()
}

pub fn reversed(s: &str) -> String {
    s.chars().rev().collect()
}

// =============================================================================
// Generic map
// =============================================================================

pub fn map_vec<T, U, F>(values: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    values.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_operators() {
        let mut out = Transcript::new();
        lesson_operators(10, 3, &mut out);
        assert_eq!(out.lines()[4], "a / b = 3");
        assert_eq!(out.lines()[5], "a % b = 1");
        assert!(out.lines().contains(&"a > 5 && b < 5: true".to_string()));
        assert!(out.lines().contains(&"a > 15 || b < 5: true".to_string()));
    }

    #[test]
    fn test_division_by_zero_is_reported() {
        let mut out = Transcript::new();
        lesson_operators(10, 0, &mut out);
        assert_eq!(out.lines()[4], "a / b is undefined for b = 0");
    }

    #[test]
    fn test_compound_and_bitwise() {
        assert_eq!(compound_assignments(4), vec![7, 14, 14, 11]);
        assert_eq!(bitwise(1, 0), (0, 1, 1));
    }

    #[test]
    fn test_pass_by_value_vs_reference() {
        let mut out = Transcript::new();
        let mut num = 10;
        increment_by_value(num, &mut out);
        assert_eq!(num, 10);
        increment_by_reference(&mut num, &mut out);
        assert_eq!(num, 11);
        assert_eq!(
            out.lines(),
            ["Inside function (by value): 11", "Inside function (by reference): 11"]
        );
    }

    #[test]
    fn test_scope_uses_passed_config() {
        let mut out = Transcript::new();
        let config = LessonConfig {
            global_value: 7,
            ..LessonConfig::default()
        };
        scope_demo(&config, &mut out);
        assert_eq!(out.lines(), ["Global Variable: 7", "Local Variable: 50"]);
    }

    #[test]
    fn test_functions() {
        let mut out = Transcript::new();
        print_message(None, &mut out);
        print_message(Some("Custom Message"), &mut out);
        assert_eq!(out.lines(), [DEFAULT_MESSAGE, "Custom Message"]);
        assert_eq!(add(5, 3), 8);
        assert_eq!(multiply(4, 7), 28);
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(30), None);
    }

    #[test]
    fn test_grades_and_days() {
        assert_eq!(grade_for(95), 'A');
        assert_eq!(grade_for(85), 'B');
        assert_eq!(grade_for(70), 'C');
        assert_eq!(grade_for(12), 'F');
        assert_eq!(weekday(3), "Wednesday");
        assert_eq!(weekday(9), "Invalid day");
    }

    #[test]
    fn test_loops() {
        let mut out = Transcript::new();
        for_loop(&mut out);
        while_loop(&mut out);
        assert_eq!(out.len(), 8);

        let mut once = Transcript::new();
        do_while(10, &mut once);
        assert_eq!(once.lines(), ["Number: 10"]);

        assert_eq!(countdown(10), "9 8 7 6 5 4 3 2 1 0");
    }

    #[test]
    fn test_arrays() {
        let values = [10, 20, 30, 40, 50];
        assert_eq!(element_at(&values, 4), Some(50));
        assert_eq!(element_at(&values, 5), None);
        assert_eq!(grid(2, 2, &[1, 2, 3, 2]), Some(vec![vec![1, 2], vec![3, 2]]));
        assert_eq!(grid(2, 2, &[1, 2, 3]), None);
        assert_eq!(grid(usize::MAX, 2, &[1, 2]), None);
        assert_eq!(grid(0, 0, &[]), None);

        let mut out = Transcript::new();
        indexed(&values[..2], &mut out);
        assert_eq!(out.lines(), ["arr[0] = 10", "arr[1] = 20"]);
    }

    #[test]
    fn test_calculator() {
        let calc = Calculator;
        assert_eq!(calc.add(5, 3), 8);
        assert!((calc.add(5.5_f64, 3.2) - 8.7).abs() < 1e-9);
        assert_eq!(calc.add3(1, 2, 3), 6);
    }

    #[test]
    fn test_string_walkthrough() {
        let mut out = Transcript::new();
        string_walkthrough(&mut out);
        assert_eq!(out.lines()[0], "After append: Hello World");
        assert_eq!(out.lines()[1], "Length: 11");
        assert_eq!(out.lines()[4], "Found 'World' at: 6");
        assert_eq!(out.lines()[5], "After erase and replace: 'Tello '");
        assert_eq!(out.lines()[6], "After insert: 'World++ '");
        assert_eq!(out.lines()[7], "Compared with 'Hello World': greater");
    }

    #[test]
    fn test_sort_and_reverse() {
        assert_eq!(sorted_chars("clsdhgegba"), "abcdegghls");
        assert_eq!(reversed("Nithwin"), "niwhtiN");
    }

    #[test]
    fn test_map_vec() {
        assert_eq!(map_vec(&[1, 2, 3, 4], |x| x * x), vec![1, 4, 9, 16]);
        assert_eq!(map_vec(&["a", "bb"], |s| s.len()), vec![1, 2]);
    }
}
