//! Observer registration and dispatch for calorie notifications

use std::fmt;

use crate::models::{CaloriesExceeded, Recipe};

pub type Observer = Box<dyn Fn(&Recipe, &CaloriesExceeded) -> anyhow::Result<()>>;

/// Ordered list of registered observers
#[derive(Default)]
pub struct Observers {
    list: Vec<Observer>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Observer) {
        self.list.push(observer);
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Call every observer in registration order
    ///
    /// A failing observer is logged and skipped; the rest still run.
    /// Returns the number of observers that failed.
    pub fn dispatch(&self, recipe: &Recipe, event: &CaloriesExceeded) -> usize {
        let mut failed = 0;
        for (index, observer) in self.list.iter().enumerate() {
            if let Err(e) = observer(recipe, event) {
                failed += 1;
                tracing::warn!(recipe = %recipe.name(), observer = index, "observer failed: {:#}", e);
            }
        }
        failed
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.list.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event() -> CaloriesExceeded {
        CaloriesExceeded {
            total_calories: 500,
            threshold: 300,
        }
    }

    #[test]
    fn empty_dispatch_is_noop() {
        let observers = Observers::new();
        assert!(observers.is_empty());
        assert_eq!(observers.dispatch(&Recipe::new("Soup"), &event()), 0);
    }

    #[test]
    fn failing_observer_does_not_stop_the_rest() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let c = Rc::clone(&calls);
        observers.subscribe(Box::new(move |_, _| {
            c.borrow_mut().push("a");
            Err(anyhow!("disk full"))
        }));
        let c = Rc::clone(&calls);
        observers.subscribe(Box::new(move |_, _| {
            c.borrow_mut().push("b");
            Ok(())
        }));

        assert_eq!(observers.len(), 2);
        assert_eq!(observers.dispatch(&Recipe::new("Soup"), &event()), 1);
        assert_eq!(*calls.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn debug_shows_count() {
        let mut observers = Observers::new();
        observers.subscribe(Box::new(|_, _| Ok(())));
        assert_eq!(format!("{:?}", observers), "Observers { count: 1 }");
    }
}
