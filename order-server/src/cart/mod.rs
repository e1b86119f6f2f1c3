//! Cart aggregator
//!
//! Session-scoped and in-memory only; cart durability across restarts is an
//! explicit non-goal. Each cart holds at most one line per item; a line's
//! name/price snapshot is frozen on first add and a quantity of zero is
//! never observable (the line is removed instead).

use crate::orders::money;
use parking_lot::RwLock;
use shared::models::{CartLine, FoodItem};
use std::collections::HashMap;

/// Cart aggregate owned by one session
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity of an item currently in the cart (0 when absent)
    pub fn quantity_of(&self, item_id: &str) -> i32 {
        self.lines
            .iter()
            .find(|line| line.item_id == item_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of an item
    ///
    /// An existing line keeps its add-time snapshot and only gains
    /// quantity; otherwise a new line is appended. No upper bound.
    pub fn add_item(&mut self, item: &FoodItem) {
        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_item(item)),
        }
    }

    /// Remove one unit of an item; the line disappears at zero
    ///
    /// No-op when the item is not in the cart.
    pub fn decrease(&mut self, item_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity -= 1;
        }
        self.lines.retain(|line| line.quantity > 0);
    }

    /// Drop a line entirely, regardless of quantity
    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|line| line.item_id != item_id);
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Cart total: Σ price × quantity
    pub fn total(&self) -> f64 {
        money::compute_total(&self.lines)
    }

    /// Owned copy of the lines, used as the checkout snapshot
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }
}

/// Session-keyed cart ownership
///
/// Replaces the original app's ambient global cart: carts are created at
/// session start, addressed per user, and destroyed at logout. Mutations
/// within one session are strictly ordered by the caller's event order.
#[derive(Debug, Default)]
pub struct CartRegistry {
    carts: RwLock<HashMap<String, Cart>>,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart for a fresh session (idempotent)
    pub fn open_session(&self, user_id: &str) {
        self.carts
            .write()
            .entry(user_id.to_string())
            .or_insert_with(Cart::new);
    }

    /// Drop the cart at logout
    pub fn close_session(&self, user_id: &str) {
        self.carts.write().remove(user_id);
    }

    /// Run a closure against the session's cart, creating it on demand
    pub fn with_cart<R>(&self, user_id: &str, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut carts = self.carts.write();
        let cart = carts.entry(user_id.to_string()).or_insert_with(Cart::new);
        f(cart)
    }

    /// Checkout snapshot of the session's cart (empty when no session)
    pub fn snapshot(&self, user_id: &str) -> Vec<CartLine> {
        self.carts
            .read()
            .get(user_id)
            .map(Cart::snapshot)
            .unwrap_or_default()
    }

    /// Empty the session's cart (post-checkout)
    pub fn clear(&self, user_id: &str) {
        if let Some(cart) = self.carts.write().get_mut(user_id) {
            cart.clear();
        }
    }
}
