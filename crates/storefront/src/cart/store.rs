//! Per-session cart storage.

use std::time::Duration;

use moka::future::Cache;
use uuid::Uuid;

use super::Cart;

/// Holds one [`Cart`] per app session, keyed by the session UUID the client
/// echoes back in the `X-Cart-Session` header.
///
/// Carts expire after a period of inactivity; an expired session simply
/// starts over with an empty cart. Mutations are read-modify-write: each
/// session has a single mutator (the phone's UI event loop), so lost updates
/// across sessions are not a concern.
#[derive(Clone)]
pub struct CartStore {
    carts: Cache<Uuid, Cart>,
}

impl CartStore {
    /// Create a store whose carts expire after `idle_ttl` of inactivity.
    #[must_use]
    pub fn new(idle_ttl: Duration) -> Self {
        let carts = Cache::builder()
            .max_capacity(100_000)
            .time_to_idle(idle_ttl)
            .build();
        Self { carts }
    }

    /// Fetch the cart for a session, or an empty one if none exists yet.
    pub async fn get(&self, session: Uuid) -> Cart {
        self.carts.get(&session).await.unwrap_or_default()
    }

    /// Mutate the session's cart and persist the result.
    ///
    /// Returns whatever the mutation closure returns.
    pub async fn with_cart<T>(&self, session: Uuid, mutate: impl FnOnce(&mut Cart) -> T) -> T {
        let mut cart = self.get(session).await;
        let result = mutate(&mut cart);
        self.carts.insert(session, cart).await;
        result
    }

    /// Drop the session's cart entirely.
    pub async fn remove(&self, session: Uuid) {
        self.carts.invalidate(&session).await;
    }
}
