//! Config command handlers.

use crate::executor::Executor;
use crate::{Output, Result};

/// Handle ConfigGet command: return the active configuration.
pub fn config_get(ex: &Executor) -> Result<Output> {
    Ok(Output::Config(ex.config().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;

    #[test]
    fn returns_active_config() {
        let ex = Executor::default();
        assert_eq!(
            config_get(&ex).unwrap(),
            Output::Config(ArenaConfig::default())
        );
    }
}
