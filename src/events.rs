//! Click subscriptions for hosts without a browser event loop.
//!
//! A handler is registered against a target id and receives only the
//! document it is dispatched with, plus whatever it captured when it was
//! registered. Dispatch is synchronous: handlers run to completion in
//! registration order.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::error::ToggleError;

/// A click handler over document type `D`.
pub type ClickHandler<D> = Box<dyn FnMut(&mut D) -> Result<(), ToggleError>>;

/// Handle returned by [`ClickRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Entry<D> {
    subscription: Subscription,
    target: String,
    handler: ClickHandler<D>,
}

/// Click handlers keyed by target element id.
pub struct ClickRegistry<D> {
    next_id: u64,
    entries: Vec<Entry<D>>,
}

impl<D> Default for ClickRegistry<D> {
    fn default() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }
}

impl<D> ClickRegistry<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for clicks on `target`.
    pub fn subscribe(
        &mut self,
        target: &str,
        handler: impl FnMut(&mut D) -> Result<(), ToggleError> + 'static,
    ) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { subscription, target: target.to_owned(), handler: Box::new(handler) });
        subscription
    }

    /// Remove a handler. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.subscription != subscription);
        self.entries.len() != before
    }

    /// Number of handlers bound to `target`.
    #[must_use]
    pub fn handler_count(&self, target: &str) -> usize {
        self.entries.iter().filter(|entry| entry.target == target).count()
    }

    /// Deliver a click on `target`, returning how many handlers ran.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first handler error.
    pub fn dispatch(&mut self, target: &str, dom: &mut D) -> Result<usize, ToggleError> {
        let mut ran = 0;
        for entry in self.entries.iter_mut().filter(|entry| entry.target == target) {
            (entry.handler)(dom)?;
            ran += 1;
        }
        if ran == 0 {
            log::debug!("click on #{target}: no handlers");
        }
        Ok(ran)
    }
}
