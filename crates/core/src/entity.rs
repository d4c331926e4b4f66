//! Entity trait: identity that outlives any particular field values.

/// Minimal interface for domain objects with identity.
///
/// Ledger entries and accounts are entities: two records with the same id are
/// the same thing, whatever else they carry.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
