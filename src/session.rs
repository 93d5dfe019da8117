use crate::catalog::Catalog;
use crate::config::Config;

/// Mutable state a menu command operates on.
///
/// The session owns the catalog; commands receive it by `&mut` and the
/// planner loop checks `should_exit` after every command.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub catalog: Catalog,
    pub config: Config,
    /// Set by the exit option; the interactive loop stops once it is true.
    pub should_exit: bool,
}

impl Session {
    /// Start with an empty catalog.
    pub fn new(config: Config) -> Self {
        Self {
            catalog: Catalog::new(),
            config,
            should_exit: false,
        }
    }
}
