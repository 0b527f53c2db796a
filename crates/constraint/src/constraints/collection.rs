//! Emptiness of collections

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::foundation::Value;
use crate::message::resources;

/// Values with a number of elements.
pub trait Collection: Value {
    /// The number of elements.
    fn count(&self) -> usize;
}

macro_rules! collection {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(impl<$($param),+> Collection for $ty<$($param),+>
        where
            $ty<$($param),+>: Value,
        {
            fn count(&self) -> usize {
                self.len()
            }
        })*
    };
}

collection!(Vec<T>, VecDeque<T>, HashSet<T>, BTreeSet<T>, HashMap<K, V>, BTreeMap<K, V>);

crate::constraint! {
    /// Accepts collections without elements.
    pub IsEmpty<C: Collection> for C;
    metadata: resources::IS_EMPTY;
    rule(input) { input.count() == 0 }
    invert(self) { IsNotEmpty::<C>::new() }
    fn is_empty();
}

crate::constraint! {
    /// Accepts collections with at least one element.
    pub IsNotEmpty<C: Collection> for C;
    metadata: resources::IS_NOT_EMPTY;
    rule(input) { input.count() > 0 }
    invert(self) { IsEmpty::<C>::new() }
    fn is_not_empty();
}
