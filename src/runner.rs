use std::path::Path;

use crate::config::LessonConfig;
use crate::console::{self, Sink, Stdout};
use crate::error::LessonError;
use crate::logging;

/// Everything a lesson body gets: where to write, and the settings.
pub struct Lesson<'a> {
    pub out: &'a mut dyn Sink,
    pub config: &'a LessonConfig,
}

impl Lesson<'_> {
    pub fn section(&mut self, title: &str) {
        console::section(self.out, title, self.config.color);
    }

    pub fn say(&mut self, line: impl Into<String>) {
        self.out.emit(line.into());
    }
}

/// Sets up logging and config, frames `body` with the banner, and runs it on stdout.
pub fn run_lesson<F>(title: &str, body: F) -> Result<(), LessonError>
where
    F: FnOnce(&mut Lesson<'_>) -> Result<(), LessonError>,
{
    logging::init();
    let config = LessonConfig::load_or_default(Path::new(LessonConfig::FILE_NAME))?;
    run_with(title, &config, &mut Stdout, body)
}

pub fn run_with<F>(title: &str, config: &LessonConfig, out: &mut dyn Sink, body: F) -> Result<(), LessonError>
where
    F: FnOnce(&mut Lesson<'_>) -> Result<(), LessonError>,
{
    tracing::debug!(title, "starting lesson");
    console::banner(out, title, config.banner_width, config.color);
    body(&mut Lesson { out: &mut *out, config })?;
    console::complete(out, config.banner_width, config.color);
    Ok(())
}
