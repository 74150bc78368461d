//! Base element capability
//!
//! Every node of the model (primitives, composite data types, backbone
//! elements, resources and extensions themselves) carries an optional `id`
//! and an ordered list of extensions. Extension order is significant and is
//! preserved for stable re-serialization.

use crate::extension::Extension;

/// A model node that may carry an identifier and extensions.
///
/// The identifier is unique only by convention; nothing here enforces it.
pub trait Element {
    /// Element identifier, if any
    fn id(&self) -> Option<&str>;

    /// Replace the element identifier
    fn set_id(&mut self, id: Option<String>);

    /// Extensions in insertion order
    fn extensions(&self) -> &[Extension];

    /// Mutable access to the extension sequence
    fn extensions_mut(&mut self) -> &mut Vec<Extension>;
}

/// Implement [`Element`] for structs with `id: Option<String>` and
/// `extension: Vec<Extension>` fields.
macro_rules! impl_element {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::element::Element for $ty {
                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn set_id(&mut self, id: Option<String>) {
                    self.id = id;
                }

                fn extensions(&self) -> &[$crate::extension::Extension] {
                    &self.extension
                }

                fn extensions_mut(&mut self) -> &mut Vec<$crate::extension::Extension> {
                    &mut self.extension
                }
            }
        )+
    };
}

pub(crate) use impl_element;
