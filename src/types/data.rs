//! Traits for data grouped by the counter.
use std::hash::Hash;

/// Keys by which events are grouped into counting buckets
#[diagnostic::on_unimplemented(
    message = "Type must be `Clone + Eq + Hash + Debug + 'static` to be used as a key"
)]
pub trait Key: Clone + Eq + Hash + std::fmt::Debug + 'static {}
impl<T: Clone + Eq + Hash + std::fmt::Debug + 'static> Key for T {}
