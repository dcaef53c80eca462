//! Generation-token state for dependent (cascading) dropdowns.
//!
//! A dependent-options fetch may resolve after the user already changed the
//! parent selection again. Every fetch takes a token from `begin`, and
//! `resolve` ignores any token that is no longer current, so a late response
//! can never overwrite the state of a newer selection.

/// State of one cascading dropdown's option list
#[derive(Debug, Clone)]
pub struct CascadeState<T> {
    generation: u64,
    pub options: Vec<T>,
    pub loading: bool,
}

impl<T> CascadeState<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            options: Vec::new(),
            loading: false,
        }
    }

    /// Start a fetch for a newly selected parent: clears the stale options,
    /// marks loading, and returns the token the response must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.options.clear();
        self.loading = true;
        self.generation
    }

    /// Parent cleared: drop the options and invalidate any in-flight fetch.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.options.clear();
        self.loading = false;
    }

    /// Apply a fetch result. Returns `false` when the token is stale and the
    /// result was discarded. A failed fetch degrades to an empty option list.
    pub fn resolve(&mut self, token: u64, result: Result<Vec<T>, String>) -> bool {
        if token != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(options) => self.options = options,
            Err(_) => self.options.clear(),
        }
        true
    }
}

impl<T> Default for CascadeState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_populates_options() {
        let mut state = CascadeState::new();
        let token = state.begin();
        assert!(state.loading);
        assert!(state.resolve(token, Ok(vec!["Gaming", "Ultrabook"])));
        assert_eq!(state.options.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = CascadeState::new();
        let stale = state.begin();
        let current = state.begin();
        // the slow first response arrives after the second fetch started
        assert!(!state.resolve(stale, Ok(vec!["Inkjet"])));
        assert!(state.options.is_empty());
        assert!(state.loading);
        assert!(state.resolve(current, Ok(vec!["Gaming"])));
        assert_eq!(state.options, vec!["Gaming"]);
    }

    #[test]
    fn test_reset_invalidates_in_flight_fetch() {
        let mut state = CascadeState::<&str>::new();
        let token = state.begin();
        state.reset();
        assert!(!state.resolve(token, Ok(vec!["Laser"])));
        assert!(state.options.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_fetch_degrades_to_empty() {
        let mut state = CascadeState::new();
        let token = state.begin();
        assert!(state.resolve(token, Err("HTTP 500".to_string())));
        assert!(state.options.is_empty());
        assert!(!state.loading);
        // a later successful fetch still works
        let token = state.begin();
        assert!(state.resolve(token, Ok(vec!["Gaming"])));
        assert_eq!(state.options.len(), 1);
    }
}
