//! Single inheritance, rebuilt as composition: the shared animal state lives
//! in [`AnimalBase`] and each animal embeds one.

use crate::capability::{Capability, Named};
use crate::console::Sink;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimalBase {
    name: String,
}

impl AnimalBase {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn announce(&self, sink: &mut dyn Sink) {
        sink.emit(format!("Animal Constructor Called: {}", self.name));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sleep(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} is sleeping.", self.name));
    }

    pub fn display_name(&self, sink: &mut dyn Sink) {
        sink.emit(format!("Name: {}", self.name));
    }
}

// =============================================================================
// Dog
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    base: AnimalBase,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: AnimalBase::new(name),
        }
    }

    /// Same as [`Dog::new`], narrating both constructor steps.
    pub fn construct(name: impl Into<String>, sink: &mut dyn Sink) -> Self {
        let dog = Self::new(name);
        dog.base.announce(sink);
        sink.emit("Dog Constructor Called".to_string());
        dog
    }

    pub fn base(&self) -> &AnimalBase {
        &self.base
    }

    pub fn eat(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} is eating dog food.", self.base.name));
    }

    pub fn bark(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} is barking: Woof! Woof!", self.base.name));
    }
}

impl Capability for Dog {
    fn perform_primary(&self, sink: &mut dyn Sink) {
        self.eat(sink);
    }

    fn perform_secondary(&self, sink: &mut dyn Sink) {
        self.base.sleep(sink);
    }
}

impl Named for Dog {
    fn name(&self) -> &str {
        self.base.name()
    }
}

// =============================================================================
// Cat
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Cat {
    base: AnimalBase,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: AnimalBase::new(name),
        }
    }

    pub fn construct(name: impl Into<String>, sink: &mut dyn Sink) -> Self {
        let cat = Self::new(name);
        cat.base.announce(sink);
        sink.emit("Cat Constructor Called".to_string());
        cat
    }

    pub fn base(&self) -> &AnimalBase {
        &self.base
    }

    pub fn eat(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} is eating cat food.", self.base.name));
    }

    pub fn meow(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} is meowing: Meow! Meow!", self.base.name));
    }
}

impl Capability for Cat {
    fn perform_primary(&self, sink: &mut dyn Sink) {
        self.eat(sink);
    }

    fn perform_secondary(&self, sink: &mut dyn Sink) {
        self.base.sleep(sink);
    }
}

impl Named for Cat {
    fn name(&self) -> &str {
        self.base.name()
    }
}

/// Polymorphic client: name first, then eat and sleep through the handle.
pub fn test_animal<A>(animal: &A, sink: &mut dyn Sink)
where
    A: Capability + Named + ?Sized,
{
    sink.emit(format!("Name: {}", animal.name()));
    animal.perform_primary(sink);
    animal.perform_secondary(sink);
}
