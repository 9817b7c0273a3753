/// A small insertion-ordered map.
///
/// Header values hold a handful of terms, so a linear scan beats hashing,
/// and iteration order is the order keys were first inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct VecMap<K, V> {
    vec: Vec<(K, V)>,
}

impl<K: PartialEq, V> VecMap<K, V> {
    #[inline]
    pub fn new() -> VecMap<K, V> {
        VecMap { vec: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> VecMap<K, V> {
        VecMap {
            vec: Vec::with_capacity(cap),
        }
    }

    /// Inserts a value, replacing the value of an existing key in place.
    ///
    /// A replaced key keeps the slot of its first insertion.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) {
        // not using find_mut because of borrowck
        for entry in &mut self.vec {
            if key == entry.0 {
                entry.1 = value;
                return;
            }
        }
        self.vec.push((key, value));
    }

    #[inline]
    pub fn get<K2: PartialEq<K> + ?Sized>(&self, key: &K2) -> Option<&V> {
        self.find(key).map(|entry| &entry.1)
    }

    #[inline]
    pub fn contains_key<K2: PartialEq<K> + ?Sized>(&self, key: &K2) -> bool {
        self.find(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&(K, V)> {
        self.vec.first()
    }

    #[inline]
    pub fn iter(&self) -> ::std::slice::Iter<'_, (K, V)> {
        self.vec.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> ::std::slice::IterMut<'_, (K, V)> {
        self.vec.iter_mut()
    }

    #[inline]
    fn find<K2: PartialEq<K> + ?Sized>(&self, key: &K2) -> Option<&(K, V)> {
        self.vec.iter().find(|entry| key == &entry.0)
    }
}

impl<K: PartialEq, V> Default for VecMap<K, V> {
    fn default() -> VecMap<K, V> {
        VecMap::new()
    }
}

impl<K, V> IntoIterator for VecMap<K, V> {
    type Item = (K, V);
    type IntoIter = ::std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}
