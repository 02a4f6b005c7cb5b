use std::sync::Arc;

use std::borrow::Borrow;
use std::collections::BTreeMap;

/// An ordered index over an immutable list of values.
///
/// A [`Database`](crate::Database) keeps its series in one, keyed by title, so
/// characters can be resolved to the series they name while queries still walk
/// the series in dataset order through [`Map::values`]. When two values share
/// a key, the last one is indexed.
#[derive(Debug)]
pub struct Map<K, V> {
    positions: BTreeMap<K, usize>,
    values: Arc<[V]>,
}

impl<K, V> Map<K, V> {
    pub fn new(values: impl Into<Arc<[V]>>, to_key: impl Fn(&V) -> K) -> Self
    where
        K: Ord,
    {
        let values = values.into();

        Self {
            positions: BTreeMap::from_iter(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (to_key(value), i)),
            ),
            values,
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        Some(&self.values[*self.positions.get(key)?])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }
}

impl<K: Clone, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            positions: self.positions.clone(),
            values: self.values.clone(),
        }
    }
}
