use std::collections::HashMap;
use std::hash::Hash;

/// A two-key lookup table.
#[derive(Clone, Debug, PartialEq)]
pub struct Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    map: HashMap<R, HashMap<C, V>>,
}

impl<R, C, V> Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Set the value in the table with the given keys.
    #[inline]
    pub fn set(&mut self, row: R, col: C, val: V) -> Option<V> {
        self.map.entry(row).or_insert_with(HashMap::new).insert(col, val)
    }

    /// Set the value in the table with the given keys, or if some value
    /// already exists for those keys, execute the given callback on it.
    #[inline]
    pub fn set_or<F>(&mut self, row: R, col: C, val: V, or: F)
    where
        F: FnOnce(&mut V),
    {
        match self.get_mut(&row, &col) {
            Some(v) => or(v),
            None => {
                self.set(row, col, val);
            }
        }
    }

    /// Retrieve an immutable reference to the value in the table with the
    /// given keys.
    #[inline]
    pub fn get(&self, row: &R, col: &C) -> Option<&V> {
        self.map.get(row).and_then(|r| r.get(col))
    }

    /// Retrieve a mutable reference to the value in the table with the given
    /// keys.
    #[inline]
    pub fn get_mut(&mut self, row: &R, col: &C) -> Option<&mut V> {
        self.map.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Iterate over the entries of a single row.
    #[inline]
    pub fn row(&self, row: &R) -> impl Iterator<Item = (&C, &V)> {
        self.map.get(row).into_iter().flat_map(|r| r.iter())
    }

    /// Iterate over every entry in the table as a `(row, col, value)` triple.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, &V)> {
        self.map
            .iter()
            .flat_map(|(row, cols)| cols.iter().map(move |(col, val)| (row, col, val)))
    }
}

impl<R, C, V> Default for Table<R, C, V>
where
    R: Eq + Hash,
    C: Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C, V> IntoIterator for Table<R, C, V>
where
    R: Clone + Eq + Hash,
    C: Eq + Hash,
{
    type Item = (R, C, V);
    type IntoIter = IntoIter<R, C, V>;

    /// Consume the table, producing every entry as a `(row, col, value)`
    /// triple.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let entries: Vec<_> = self
            .map
            .into_iter()
            .flat_map(|(row, cols)| {
                cols.into_iter()
                    .map(move |(col, val)| (row.clone(), col, val))
            })
            .collect();
        IntoIter(entries.into_iter())
    }
}

/// An owning iterator over the entries of a [`Table`].
pub struct IntoIter<R, C, V>(std::vec::IntoIter<(R, C, V)>);

impl<R, C, V> Iterator for IntoIter<R, C, V> {
    type Item = (R, C, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
