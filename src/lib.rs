//! Object-oriented lessons - the shared machinery behind the lesson binaries.
//!
//! Every lesson under `src/bin/` is a standalone program. The pieces they have
//! in common live here: an output [`Sink`](console::Sink), the
//! [`Capability`](capability::Capability) trait with its dispatch client, the
//! concrete variant families, and the records that guard their state with
//! validated setters.
//!
//! Run any lesson with:
//! ```bash
//! cargo run --bin lesson_08_virtual_bikes
//! ```

pub mod animals;
pub mod basics;
pub mod bikes;
pub mod capability;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod logging;
pub mod motorbike;
pub mod records;
pub mod runner;
pub mod shapes;
pub mod vehicles;

pub use capability::{Capability, Named, Roster, RosterEntry, dispatch, dispatch_all};
pub use config::LessonConfig;
pub use console::{Sink, Stdout, Transcript};
pub use error::LessonError;
pub use runner::{Lesson, run_lesson};
