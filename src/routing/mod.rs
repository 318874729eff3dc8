//! Navigation state
//!
//! Components only need two capabilities from routing: navigating to a path
//! and asking whether a path is the current location. [`Router`] is that
//! seam; [`MemoryRouter`] keeps the location and history in memory.

use tracing::debug;

/// Navigation collaborator used by links and breadcrumbs
pub trait Router {
    /// Current location path
    fn location(&self) -> &str;

    /// Navigate to `path`
    fn navigate(&mut self, path: &str);

    /// Whether `path` is exactly the current location
    fn is_current(&self, path: &str) -> bool {
        self.location() == path
    }
}

/// In-memory router with a history stack
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: Vec<String>,
}

impl MemoryRouter {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
        }
    }

    /// Go back one entry; returns false when already at the first entry
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    /// Visited locations, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router for MemoryRouter {
    fn location(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }

    fn navigate(&mut self, path: &str) {
        debug!(from = self.location(), to = path, "Navigating");
        self.history.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        let mut router = MemoryRouter::default();
        assert_eq!(router.location(), "/");

        router.navigate("/rules");
        router.navigate("/1.4.3/contrast");
        assert_eq!(router.location(), "/1.4.3/contrast");
        assert_eq!(router.history().len(), 3);

        assert!(router.back());
        assert_eq!(router.location(), "/rules");
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.location(), "/");
    }

    #[test]
    fn test_is_current_is_exact() {
        let router = MemoryRouter::new("/rules");
        assert!(router.is_current("/rules"));
        assert!(!router.is_current("/rules/"));
        assert!(!router.is_current("/"));
        assert!(!router.is_current("rules"));
    }
}
