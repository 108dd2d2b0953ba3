//! Frequency tables
use std::hash::Hash;
use std::iter::FromIterator;

use indexmap::IndexMap;
use log::trace;
use num_traits::ToPrimitive;

use crate::error::StatsError;
use crate::modes::{self, ModeResult};

/// A mapping from values to the number of times they occurred
///
/// Values are kept in the order they were first inserted, and every computation on the table
/// visits them in that order, so ties are always broken the same way. Values whose count is zero
/// may remain as keys, but they're treated as absent everywhere.
///
/// # Examples
///
/// ```
/// let table: freq_modes::FrequencyTable<u32> = [39, 38, 39, 40].iter().cloned().collect();
/// assert_eq!(2, table.freq(&39));
/// assert_eq!(0, table.freq(&41));
/// assert_eq!(4, table.total());
/// ```
///
/// ```
/// let table: freq_modes::FrequencyTable<&str> = vec![("a", 3), ("b", 1), ("a", 1)].into_iter().collect();
/// assert_eq!(4, table.freq(&"a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<V: Hash + Eq> {
    counts: IndexMap<V, u64>,
}

impl<V: Hash + Eq> FrequencyTable<V> {
    /// Create an empty table
    pub fn new() -> Self {
        FrequencyTable {
            counts: IndexMap::new(),
        }
    }

    /// Build a table from pre-tabulated counts of any numeric type
    ///
    /// Counts must be non-negative integers. Repeated values accumulate.
    ///
    /// # Examples
    ///
    /// ```
    /// let table = freq_modes::FrequencyTable::try_from_counts(vec![(1, 2.0), (2, 3.0)]).unwrap();
    /// assert_eq!(5, table.total());
    /// ```
    ///
    /// ```
    /// assert!(freq_modes::FrequencyTable::try_from_counts(vec![(1, -2)]).is_err());
    /// assert!(freq_modes::FrequencyTable::try_from_counts(vec![(1, 0.5)]).is_err());
    /// ```
    pub fn try_from_counts<I, C>(pairs: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = (V, C)>,
        C: ToPrimitive + std::fmt::Debug,
    {
        let mut table = FrequencyTable::new();
        for (val, count) in pairs {
            let int = match (count.to_u64(), count.to_f64()) {
                (Some(int), Some(float)) if int as f64 == float => int,
                _ => return Err(StatsError::invalid_count(count)),
            };
            table.incr_by(val, int);
        }
        Ok(table)
    }

    /// Add one occurrence of a value
    pub fn incr(&mut self, val: V) {
        self.incr_by(val, 1);
    }

    /// Add `count` occurrences of a value
    pub fn incr_by(&mut self, val: V, count: u64) {
        let val_count = self.counts.entry(val).or_insert(0);
        *val_count = val_count.saturating_add(count);
    }

    /// Overwrite the count of a value
    ///
    /// Setting a count to zero keeps the value's position but excludes it from every statistic.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut table: freq_modes::FrequencyTable<u32> = [1, 1, 2].iter().cloned().collect();
    /// table.set(1, 0);
    /// assert_eq!(1, table.len());
    /// assert_eq!(Ok(2), table.mode().map_err(|e| e.to_string()));
    /// ```
    pub fn set(&mut self, val: V, count: u64) {
        self.counts.insert(val, count);
    }

    /// Get the number of times a value occurred
    pub fn freq(&self, val: &V) -> u64 {
        self.counts.get(val).copied().unwrap_or(0)
    }

    /// Get the counts of several values
    pub fn freqs<'a, I>(&self, vals: I) -> Vec<u64>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        vals.into_iter().map(|val| self.freq(val)).collect()
    }

    /// Remove a value entirely, returning its old count
    ///
    /// The remaining values keep their relative order.
    pub fn remove(&mut self, val: &V) -> Option<u64> {
        self.counts.shift_remove(val)
    }

    /// The number of distinct values with a positive count
    pub fn len(&self) -> usize {
        self.counts.values().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sum of all counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0, |acc, &count| acc.saturating_add(count))
    }

    /// Iterate over the values with positive counts, in table order
    pub fn iter(&self) -> impl Iterator<Item = (&V, u64)> + '_ {
        self.counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(val, &count)| (val, count))
    }

    /// Iterate over the values with positive counts, in table order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(val, _)| val)
    }

    /// The most frequent value
    ///
    /// See [`mode`](crate::mode).
    pub fn mode(&self) -> Result<V, StatsError>
    where
        V: Clone,
    {
        modes::mode(self)
    }

    /// The most frequent value and its count
    ///
    /// See [`mode_entry`](crate::mode_entry).
    pub fn mode_entry(&self) -> Result<ModeResult<V>, StatsError>
    where
        V: Clone,
    {
        modes::mode_entry(self)
    }

    /// Every value and its count, most frequent first
    ///
    /// See [`all_modes`](crate::all_modes).
    pub fn all_modes(&self) -> Vec<ModeResult<V>>
    where
        V: Clone,
    {
        modes::all_modes(self)
    }

    /// The `n` largest values and their counts, largest first
    ///
    /// # Examples
    ///
    /// ```
    /// let table: freq_modes::FrequencyTable<u32> = [3, 1, 2, 3].iter().cloned().collect();
    /// assert_eq!(vec![(&3, 2), (&2, 1)], table.largest(2));
    /// ```
    pub fn largest(&self, n: usize) -> Vec<(&V, u64)>
    where
        V: Ord,
    {
        let mut items: Vec<_> = self.iter().collect();
        items.sort_by(|(a, _), (b, _)| b.cmp(a));
        items.truncate(n);
        items
    }

    /// The `n` smallest values and their counts, smallest first
    ///
    /// # Examples
    ///
    /// ```
    /// let table: freq_modes::FrequencyTable<u32> = [3, 1, 2, 3].iter().cloned().collect();
    /// assert_eq!(vec![(&1, 1), (&2, 1)], table.smallest(2));
    /// ```
    pub fn smallest(&self, n: usize) -> Vec<(&V, u64)>
    where
        V: Ord,
    {
        let mut items: Vec<_> = self.iter().collect();
        items.sort_by(|(a, _), (b, _)| a.cmp(b));
        items.truncate(n);
        items
    }
}

impl<V: Hash + Eq> Default for FrequencyTable<V> {
    fn default() -> Self {
        FrequencyTable::new()
    }
}

impl<V: Hash + Eq> Extend<V> for FrequencyTable<V> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        for val in iter {
            self.incr(val);
        }
        trace!("tabulated {} distinct values", self.counts.len());
    }
}

impl<V: Hash + Eq> FromIterator<V> for FrequencyTable<V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

impl<V: Hash + Eq> FromIterator<(V, u64)> for FrequencyTable<V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (V, u64)>,
    {
        let mut table = FrequencyTable::new();
        for (val, count) in iter {
            table.incr_by(val, count);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_are_absent() {
        let mut table = FrequencyTable::new();
        table.set("a", 0);
        table.incr("b");
        assert_eq!(table.len(), 1);
        assert_eq!(table.values().collect::<Vec<_>>(), vec![&"b"]);
        assert_eq!(table.freq(&"a"), 0);

        table.set("b", 0);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn remove_keeps_order() {
        let mut table: FrequencyTable<u32> = vec![(5, 2), (3, 2), (7, 1)].into_iter().collect();
        assert_eq!(table.remove(&5), Some(2));
        assert_eq!(table.remove(&5), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(&3, 2), (&7, 1)]);
    }

    #[test]
    fn freqs_of_several_values() {
        let table: FrequencyTable<u32> = [1, 2, 2, 4].iter().cloned().collect();
        assert_eq!(table.freqs(&[1, 2, 3]), vec![1, 2, 0]);
    }

    #[test]
    fn counts_from_other_numeric_types() {
        let table = FrequencyTable::try_from_counts(vec![("x", 3u8), ("y", 0u8)]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.total(), 3);

        let err = FrequencyTable::try_from_counts(vec![("x", f64::NAN)]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidFrequencyTable(_)));
        assert!(FrequencyTable::try_from_counts(vec![("x", f64::INFINITY)]).is_err());
        assert!(FrequencyTable::try_from_counts(vec![("x", -1i64)]).is_err());
    }

    #[test]
    fn huge_counts_saturate() {
        let mut table: FrequencyTable<u32> = vec![(1, u64::MAX), (2, 5)].into_iter().collect();
        assert_eq!(table.total(), u64::MAX);
        assert_eq!(table.mode_entry().unwrap(), ModeResult::new(1, u64::MAX));
        assert_eq!(
            table.all_modes(),
            vec![ModeResult::new(1, u64::MAX), ModeResult::new(2, 5)]
        );

        table.incr(1);
        assert_eq!(table.freq(&1), u64::MAX);
    }

    #[test]
    fn extend_accumulates() {
        let mut table: FrequencyTable<char> = "abca".chars().collect();
        table.extend("cc".chars());
        assert_eq!(table.freqs(&['a', 'b', 'c']), vec![2, 1, 3]);
        assert_eq!(table.values().collect::<String>(), "abc");
    }
}
