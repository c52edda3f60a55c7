//! Abstract bike, three brands. The brands share nothing but the contract.

use crate::capability::{Capability, Named, Roster, dispatch};
use crate::console::Sink;
use crate::error::LessonError;

macro_rules! brand {
    ($ty:ident, $name:literal, go = $go:literal, stop = $stop:literal) => {
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $ty;

        impl $ty {
            pub fn go(&self, sink: &mut dyn Sink) {
                sink.emit($go.to_string());
            }

            pub fn stop(&self, sink: &mut dyn Sink) {
                sink.emit($stop.to_string());
            }
        }

        impl Capability for $ty {
            fn perform_primary(&self, sink: &mut dyn Sink) {
                self.go(sink);
            }

            fn perform_secondary(&self, sink: &mut dyn Sink) {
                self.stop(sink);
            }
        }

        impl Named for $ty {
            fn name(&self) -> &str {
                $name
            }
        }
    };
}

brand!(
    Bmw,
    "BMW",
    go = "BMW is accelerating with premium engine!",
    stop = "BMW brakes applied smoothly!"
);
brand!(
    Honda,
    "Honda",
    go = "Honda is zooming efficiently!",
    stop = "Honda stopped reliably!"
);
brand!(
    Yamaha,
    "Yamaha",
    go = "Yamaha is speeding with power!",
    stop = "Yamaha emergency brake!"
);

/// The garage used by the virtual-functions lesson, in riding order.
pub fn garage() -> Roster {
    Roster::new().with(Bmw).with(Honda).with(Yamaha)
}

pub fn ride_the_bike(bike: &dyn Capability, sink: &mut dyn Sink) -> Result<(), LessonError> {
    sink.blank();
    sink.emit("--- Riding the bike ---".to_string());
    dispatch(Some(bike), sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_direct_calls_match_dispatch() {
        let mut direct = Transcript::new();
        Honda.go(&mut direct);
        Honda.stop(&mut direct);

        let mut dispatched = Transcript::new();
        garage().dispatch_named("Honda", &mut dispatched).unwrap();

        assert_eq!(direct, dispatched);
    }

    #[test]
    fn test_garage_order() {
        let mut out = Transcript::new();
        garage().dispatch_each(&mut out, Some("Riding the bike")).unwrap();

        let actions: Vec<&str> = out
            .lines()
            .iter()
            .map(String::as_str)
            .filter(|l| !l.is_empty() && !l.starts_with("---"))
            .collect();
        assert_eq!(
            actions,
            [
                "BMW is accelerating with premium engine!",
                "BMW brakes applied smoothly!",
                "Honda is zooming efficiently!",
                "Honda stopped reliably!",
                "Yamaha is speeding with power!",
                "Yamaha emergency brake!",
            ]
        );
    }

    #[test]
    fn test_ride_the_bike_header() {
        let mut out = Transcript::new();
        ride_the_bike(&Bmw, &mut out).unwrap();
        assert_eq!(out.lines()[..2], ["", "--- Riding the bike ---"]);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_idempotent_primary() {
        let mut out = Transcript::new();
        Yamaha.perform_primary(&mut out);
        Yamaha.perform_primary(&mut out);
        assert_eq!(out.lines()[0], out.lines()[1]);
    }
}
