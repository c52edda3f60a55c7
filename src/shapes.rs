use crate::capability::{Capability, Named};
use crate::console::Sink;

/// The lesson's approximation of pi, kept so areas match the printed examples.
pub const PI: f64 = 3.14159;

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBase {
    color: String,
}

impl ShapeBase {
    pub fn new(color: impl Into<String>) -> Self {
        Self { color: color.into() }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn describe(&self, sink: &mut dyn Sink) {
        sink.emit(format!("This is a shape with color: {}", self.color));
    }
}

/// Every shape has to say how it draws itself; describing is shared.
pub trait Shape: Capability + Named {
    fn base(&self) -> &ShapeBase;
    fn draw(&self, sink: &mut dyn Sink);
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    base: ShapeBase,
    radius: f64,
}

impl Circle {
    pub fn new(color: impl Into<String>, radius: f64) -> Self {
        Self {
            base: ShapeBase::new(color),
            radius,
        }
    }
}

impl Shape for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn draw(&self, sink: &mut dyn Sink) {
        sink.emit(format!("Drawing a circle with radius: {}", self.radius));
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    base: ShapeBase,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(color: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            base: ShapeBase::new(color),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn draw(&self, sink: &mut dyn Sink) {
        sink.emit(format!("Drawing a rectangle {}x{}", self.width, self.height));
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

macro_rules! shape_capability {
    ($($ty:ident),+) => {
        $(
            impl Capability for $ty {
                fn perform_primary(&self, sink: &mut dyn Sink) {
                    self.draw(sink);
                }

                fn perform_secondary(&self, sink: &mut dyn Sink) {
                    self.base.describe(sink);
                }
            }

            impl Named for $ty {
                fn name(&self) -> &str {
                    stringify!($ty)
                }
            }
        )+
    };
}

shape_capability!(Circle, Rectangle);

/// Describe, draw, then report the area to two decimals.
pub fn present(shape: &dyn Shape, sink: &mut dyn Sink) {
    shape.base().describe(sink);
    shape.draw(sink);
    sink.emit(format!("Area: {:.2}", shape.area()));
}
