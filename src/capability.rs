use crate::console::Sink;
use crate::error::LessonError;

// =============================================================================
// The shared contract
// =============================================================================

/// Two actions every variant must supply. There are no default bodies, so a
/// type that leaves one out does not compile as a `Capability`.
///
/// Both actions are total: they only describe what happens, through the sink.
/// A contract whose actions can fail would return `Result` here instead.
pub trait Capability {
    fn perform_primary(&self, sink: &mut dyn Sink);
    fn perform_secondary(&self, sink: &mut dyn Sink);
}

/// Identity accessor. Not part of what the dispatch client calls.
pub trait Named {
    fn name(&self) -> &str;
}

/// What a [`Roster`] stores: something that can be dispatched and looked up.
pub trait RosterEntry: Capability + Named {
    fn as_capability(&self) -> &dyn Capability;
}

impl<T: Capability + Named> RosterEntry for T {
    fn as_capability(&self) -> &dyn Capability {
        self
    }
}

// =============================================================================
// Dispatch client
// =============================================================================

/// Runs the primary then the secondary action of whatever sits behind `handle`.
///
/// The handle is non-owning. An absent handle is an error rather than a no-op.
pub fn dispatch(handle: Option<&dyn Capability>, sink: &mut dyn Sink) -> Result<(), LessonError> {
    let variant = handle.ok_or_else(|| LessonError::missing_handle("<none>"))?;
    variant.perform_primary(sink);
    variant.perform_secondary(sink);
    Ok(())
}

/// [`dispatch`] over every handle, in slice order.
pub fn dispatch_all(handles: &[&dyn Capability], sink: &mut dyn Sink) -> Result<(), LessonError> {
    for handle in handles {
        dispatch(Some(*handle), sink)?;
    }
    tracing::debug!(count = handles.len(), "dispatched variants");
    Ok(())
}

// =============================================================================
// Roster: owned, ordered collection of variants
// =============================================================================

#[derive(Default)]
pub struct Roster {
    entries: Vec<Box<dyn RosterEntry>>,
}

impl Roster {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register(&mut self, entry: Box<dyn RosterEntry>) {
        tracing::debug!(name = entry.name(), "registered variant");
        self.entries.push(entry);
    }

    pub fn with(mut self, entry: impl RosterEntry + 'static) -> Self {
        self.register(Box::new(entry));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name()).collect()
    }

    /// First entry registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Capability> {
        self.entries
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_capability())
    }

    pub fn dispatch_named(&self, name: &str, sink: &mut dyn Sink) -> Result<(), LessonError> {
        match self.get(name) {
            Some(variant) => dispatch(Some(variant), sink),
            None => {
                tracing::warn!(name, "dispatch requested for unknown variant");
                Err(LessonError::missing_handle(name))
            }
        }
    }

    /// Every entry in registration order, each preceded by `header` when given.
    pub fn dispatch_each(&self, sink: &mut dyn Sink, header: Option<&str>) -> Result<(), LessonError> {
        for entry in &self.entries {
            if let Some(header) = header {
                sink.blank();
                sink.emit(format!("--- {header} ---"));
            }
            dispatch(Some(entry.as_capability()), sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    struct Fixed {
        name: &'static str,
    }

    impl Capability for Fixed {
        fn perform_primary(&self, sink: &mut dyn Sink) {
            sink.emit(format!("{}.primary", self.name));
        }

        fn perform_secondary(&self, sink: &mut dyn Sink) {
            sink.emit(format!("{}.secondary", self.name));
        }
    }

    impl Named for Fixed {
        fn name(&self) -> &str {
            self.name
        }
    }

    fn roster() -> Roster {
        Roster::new()
            .with(Fixed { name: "A" })
            .with(Fixed { name: "B" })
            .with(Fixed { name: "C" })
    }

    #[test]
    fn test_dispatch_order() {
        let a = Fixed { name: "A" };
        let b = Fixed { name: "B" };
        let c = Fixed { name: "C" };
        let mut out = Transcript::new();

        dispatch_all(&[&a, &b, &c], &mut out).unwrap();

        assert_eq!(
            out.lines(),
            ["A.primary", "A.secondary", "B.primary", "B.secondary", "C.primary", "C.secondary"]
        );
    }

    #[test]
    fn test_missing_handle() {
        let mut out = Transcript::new();
        let err = dispatch(None, &mut out).unwrap_err();
        assert!(matches!(err, LessonError::MissingHandle(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_roster_lookup() {
        let roster = roster();
        let mut out = Transcript::new();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.names(), ["A", "B", "C"]);

        roster.dispatch_named("B", &mut out).unwrap();
        assert_eq!(out.lines(), ["B.primary", "B.secondary"]);

        let err = roster.dispatch_named("Z", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "No variant registered under 'Z'");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_dispatch_each_with_header() {
        let roster = Roster::new().with(Fixed { name: "A" });
        let mut out = Transcript::new();
        roster.dispatch_each(&mut out, Some("Riding the bike")).unwrap();
        assert_eq!(out.lines(), ["", "--- Riding the bike ---", "A.primary", "A.secondary"]);
    }
}
