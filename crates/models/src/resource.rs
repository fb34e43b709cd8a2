use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::id::RecordId;

/// A record type served by one resource service.
///
/// The implementing type is the view returned to callers. `Base` is what the
/// store holds besides the identifier, `Create` is the client payload for
/// create and update.
pub trait Resource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    type Base: Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static;
    type Create: DeserializeOwned + Into<Self::Base> + Send + 'static;

    /// Display name, e.g. `Product`.
    const NAME: &'static str;
    /// Collection name and URL segment, e.g. `products`.
    const COLLECTION: &'static str;
    /// Database holding the collection.
    const DATABASE: &'static str;

    /// View of a stored record.
    fn from_stored(id: RecordId, base: Self::Base) -> Self;

    fn id(&self) -> &RecordId;

    /// Base fields of this view, for comparisons against input.
    fn base(&self) -> Self::Base;
}
