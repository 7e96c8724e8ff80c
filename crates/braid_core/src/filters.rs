use fxhash::FxHashMap;

use crate::FilterRegistry;

/// A user-extensible registry of named text filters, looked up by exact
/// name when the compiler encounters a filter node.
#[derive(Default)]
pub struct Filters {
    filters: FxHashMap<String, Box<dyn Fn(&str) -> String>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `filter` under `name`, replacing any previous filter with
    /// the same name.
    pub fn register(&mut self, name: impl Into<String>, filter: impl Fn(&str) -> String + 'static) {
        self.filters.insert(name.into(), Box::new(filter));
    }
}

impl FilterRegistry for Filters {
    fn apply(&self, name: &str, input: &str) -> Option<String> {
        self.filters.get(name).map(|filter| filter(input))
    }
}

impl std::fmt::Debug for Filters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filters")
            .field("names", &self.filters.keys().collect::<Vec<_>>())
            .finish()
    }
}
