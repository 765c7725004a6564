//! chained-hashmap: a fixed-capacity hash map from `i64` keys to
//! arbitrary values, resolving collisions by separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: the smallest map that is still obviously correct about chain
//!   traversal, including removal at the head, middle and tail.
//! - Layers:
//!   - `Chains<V>`: arena of entries (a `SlotMap`) plus the list
//!     algorithms: probe, append, update in place, unlink.
//!   - `ChainedHashMap<V>`: bucket array of chain heads, the hash
//!     function, and the public `put`/`get`/`remove` API.
//!
//! Constraints
//! - The bucket count is chosen once and never changes. No rehashing;
//!   chains simply grow as the load factor rises.
//! - Keys are `i64`. The bucket of `k` is `k mod capacity`, normalized
//!   into `[0, capacity)` so negative keys behave.
//! - Keys are unique per map. `put` on an existing key overwrites the
//!   value without moving the entry; new keys go to the chain tail.
//! - Zero capacity is rejected at construction with `ConfigError`.
//!
//! Why an arena?
//! - Buckets and `next` fields hold generational slot keys instead of
//!   owning pointers. Unlinking is a key rewrite followed by a slot
//!   removal, and a stale key can never resolve to a different entry.
//! - All storage is safe Rust; dropping the map drops every value.
//!
//! Removal
//! - A head match rewrites the bucket head and returns; an interior or
//!   tail match rewrites the predecessor's `next` and returns. The two
//!   paths never both run for one call.
//! - Removing an absent key returns `None` and logs at `debug` level
//!   through `tracing`; it is never an error.
//!
//! Notes and non-goals
//! - Single-threaded by construction: mutation needs `&mut self`. Wrap
//!   the map in a `Mutex` to share it across threads.
//! - No iteration API and no persistence.

mod chain;
pub mod chained_hash_map;
mod chained_hash_map_proptest;
pub mod config;
mod error;

// Public surface
pub use chained_hash_map::ChainedHashMap;
pub use config::{Capacity, MapConfig, DEFAULT_CAPACITY};
pub use error::ConfigError;
