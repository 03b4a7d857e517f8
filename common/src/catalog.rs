use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::user::User;

/// The whole in-memory dataset: every account and every product.
///
/// Held by exactly one session at a time; lookups are plain linear scans
/// over the flat lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub users: Vec<User>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(users: Vec<User>, products: Vec<Product>) -> Self {
        Catalog { users, products }
    }

    /// Case-sensitive exact-match login lookup; first match wins.
    /// Returns the user's index so callers can later take a `&mut`.
    pub fn find_user(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|u| u.name == name)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// The menu position that ends the session: one past the last product.
    pub fn exit_index(&self) -> usize {
        self.products.len() + 1
    }

    /// Resolve a 1-based menu selection to a product index, or None when
    /// the selection is out of range (including zero and negatives).
    pub fn resolve_selection(&self, selection: i64) -> Option<usize> {
        if selection >= 1 && (selection as usize) <= self.products.len() {
            Some(selection as usize - 1)
        } else {
            None
        }
    }
}
