//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Registries and catalogs key their storage by `Entity::id`, so two records
/// with the same identifier are the same record even if their fields differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
