//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own (a vendor address, a parsed
/// quantity). Two value objects with the same attributes are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Vendor {
///     code: String,
///     name: String,
/// }
///
/// impl ValueObject for Vendor {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
