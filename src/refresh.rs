//! Post-upload refresh hooks.
//!
//! The host page refreshes several views (submissions, practitioners,
//! dashboard) after a successful bulk upload. Instead of overriding a
//! global loader function, the hooks are registered explicitly and run
//! in registration order.

use std::cell::RefCell;
use std::rc::Rc;

/// Ordered registry of named refresh callbacks.
///
/// Cloning shares the underlying list, so a clone stored in Leptos
/// context sees hooks registered elsewhere.
#[derive(Clone, Default)]
pub struct RefreshRegistry {
    hooks: Rc<RefCell<Vec<(&'static str, Rc<dyn Fn()>)>>>,
}

impl RefreshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook; hooks run in registration order.
    pub fn register(&self, name: &'static str, hook: impl Fn() + 'static) {
        self.hooks.borrow_mut().push((name, Rc::new(hook)));
    }

    /// Run every hook once, in order. Fire-and-forget: hook failures are
    /// the hooks' own business, nothing is collected.
    pub fn run_all(&self) {
        // Clone out of the RefCell so a hook may itself touch the registry.
        let hooks: Vec<_> = self.hooks.borrow().clone();
        for (name, hook) in hooks {
            log::debug!("refresh hook: {}", name);
            hook();
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_run_once_in_registration_order() {
        let registry = RefreshRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for name in ["submissions", "practitioners", "dashboard"] {
            let calls = Rc::clone(&calls);
            registry.register(name, move || calls.borrow_mut().push(name));
        }

        registry.run_all();
        assert_eq!(
            *calls.borrow(),
            vec!["submissions", "practitioners", "dashboard"]
        );
    }

    #[test]
    fn clones_share_the_hook_list() {
        let registry = RefreshRegistry::new();
        let clone = registry.clone();

        let calls = Rc::new(RefCell::new(0));
        {
            let calls = Rc::clone(&calls);
            clone.register("dashboard", move || *calls.borrow_mut() += 1);
        }

        // Registered through the clone, visible when the original runs.
        registry.run_all();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn empty_registry_runs_nothing() {
        RefreshRegistry::new().run_all();
    }
}
