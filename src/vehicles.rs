use crate::capability::{Capability, Named};
use crate::console::Sink;

/// State every vehicle carries.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleBase {
    pub brand: String,
    pub color: String,
    pub year: u16,
}

impl VehicleBase {
    pub fn new(brand: impl Into<String>, color: impl Into<String>, year: u16) -> Self {
        Self {
            brand: brand.into(),
            color: color.into(),
            year,
        }
    }

    pub fn honk(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} says: Honk! Honk!", self.brand));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    base: VehicleBase,
    doors: u8,
}

impl Car {
    pub fn new(brand: impl Into<String>, color: impl Into<String>, year: u16, doors: u8) -> Self {
        Self {
            base: VehicleBase::new(brand, color, year),
            doors,
        }
    }

    pub fn base(&self) -> &VehicleBase {
        &self.base
    }

    pub fn doors(&self) -> u8 {
        self.doors
    }

    pub fn drive(&self, sink: &mut dyn Sink) {
        sink.emit(format!(
            "{} car with {} doors is driving smoothly.",
            self.base.brand, self.doors
        ));
    }

    pub fn open_trunk(&self, sink: &mut dyn Sink) {
        sink.emit("Car trunk is opened.".to_string());
    }
}

impl Capability for Car {
    fn perform_primary(&self, sink: &mut dyn Sink) {
        self.drive(sink);
    }

    fn perform_secondary(&self, sink: &mut dyn Sink) {
        self.base.honk(sink);
    }
}

impl Named for Car {
    fn name(&self) -> &str {
        &self.base.brand
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bike {
    base: VehicleBase,
    has_storage: bool,
}

impl Bike {
    pub fn new(brand: impl Into<String>, color: impl Into<String>, year: u16, has_storage: bool) -> Self {
        Self {
            base: VehicleBase::new(brand, color, year),
            has_storage,
        }
    }

    pub fn base(&self) -> &VehicleBase {
        &self.base
    }

    pub fn has_storage(&self) -> bool {
        self.has_storage
    }

    pub fn drive(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} bike is zooming on road!", self.base.brand));
    }

    pub fn wheelie(&self, sink: &mut dyn Sink) {
        sink.emit(format!("{} is doing a wheelie!", self.base.brand));
    }
}

impl Capability for Bike {
    fn perform_primary(&self, sink: &mut dyn Sink) {
        self.drive(sink);
    }

    fn perform_secondary(&self, sink: &mut dyn Sink) {
        self.base.honk(sink);
    }
}

impl Named for Bike {
    fn name(&self) -> &str {
        &self.base.brand
    }
}
