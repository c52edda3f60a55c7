//! Name hiding. `Yamaha` embeds a [`BikeSpec`] and declares its own `name`,
//! which wins over the spec's whenever the concrete type is used.

use crate::console::Sink;

#[derive(Debug, Clone, PartialEq)]
pub struct BikeSpec {
    name: String,
    speed: u32,
    color: String,
}

impl BikeSpec {
    pub fn new(name: impl Into<String>, speed: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            speed,
            color: color.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Yamaha {
    spec: BikeSpec,
    gears: u8,
}

impl Yamaha {
    pub fn new(name: impl Into<String>, speed: u32, color: impl Into<String>, gears: u8) -> Self {
        Self {
            spec: BikeSpec::new(name, speed, color),
            gears,
        }
    }

    /// Hides the spec's name.
    pub fn name(&self, sink: &mut dyn Sink) -> &'static str {
        sink.emit("Nothing".to_string());
        "Nothing"
    }

    pub fn spec(&self) -> &BikeSpec {
        &self.spec
    }

    pub fn spec_mut(&mut self) -> &mut BikeSpec {
        &mut self.spec
    }

    pub fn gears(&self) -> u8 {
        self.gears
    }

    pub fn set_gears(&mut self, gears: u8) {
        self.gears = gears;
    }
}
