//! Mode extraction from frequency tables
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

use log::debug;

use crate::error::StatsError;
use crate::table::FrequencyTable;

/// A value paired with the number of times it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeResult<V> {
    pub value: V,
    pub count: u64,
}

impl<V> ModeResult<V> {
    pub fn new(value: V, count: u64) -> Self {
        ModeResult { value, count }
    }
}

impl<V> From<(V, u64)> for ModeResult<V> {
    fn from((value, count): (V, u64)) -> Self {
        ModeResult { value, count }
    }
}

impl<V: Display> Display for ModeResult<V> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}\t{}", self.value, self.count)
    }
}

/// Get the most frequent value and its count
///
/// Values are scanned in table order and a later value only replaces the current best if its
/// count is strictly larger, so the first of several tied values wins. Linear time.
///
/// # Examples
///
/// ```
/// let table: freq_modes::FrequencyTable<u32> = vec![(39, 4693), (38, 3524), (40, 1233)].into_iter().collect();
/// let mode = freq_modes::mode_entry(&table).unwrap();
/// assert_eq!(39, mode.value);
/// assert_eq!(4693, mode.count);
/// ```
///
/// ```
/// let table = freq_modes::FrequencyTable::<u32>::new();
/// assert!(freq_modes::mode_entry(&table).is_err());
/// ```
pub fn mode_entry<V>(table: &FrequencyTable<V>) -> Result<ModeResult<V>, StatsError>
where
    V: Hash + Eq + Clone,
{
    let mut best: Option<(&V, u64)> = None;
    for (val, count) in table.iter() {
        match best {
            Some((_, best_count)) if count <= best_count => (),
            _ => best = Some((val, count)),
        }
    }
    let (val, count) = best.ok_or(StatsError::EmptyInput)?;
    debug!("mode occurred {} times out of {}", count, table.total());
    Ok(ModeResult::new(val.clone(), count))
}

/// Get the most frequent value
///
/// If several values share the largest count, this returns the one that comes first in the
/// table. Values with a zero count are ignored.
///
/// # Examples
///
/// ```
/// let table: freq_modes::FrequencyTable<u32> = [2, 4, 2].iter().cloned().collect();
/// assert_eq!(2, freq_modes::mode(&table).unwrap());
/// ```
///
/// ```
/// let table: freq_modes::FrequencyTable<u32> = [4, 2, 2, 4].iter().cloned().collect();
/// assert_eq!(4, freq_modes::mode(&table).unwrap());
/// ```
pub fn mode<V>(table: &FrequencyTable<V>) -> Result<V, StatsError>
where
    V: Hash + Eq + Clone,
{
    mode_entry(table).map(|entry| entry.value)
}

/// Get every value and its count, most frequent first
///
/// Values with equal counts stay in table order. That is exactly the order produced by taking
/// the mode, removing it, and repeating until nothing is left, but this sorts once instead, in
/// log linear time. The table isn't modified, and an empty table gives an empty result.
///
/// # Examples
///
/// ```
/// use freq_modes::ModeResult;
///
/// let table: freq_modes::FrequencyTable<u32> = vec![(5, 2), (3, 2), (7, 1)].into_iter().collect();
/// let modes = freq_modes::all_modes(&table);
/// assert_eq!(modes, vec![ModeResult::new(5, 2), ModeResult::new(3, 2), ModeResult::new(7, 1)]);
/// ```
///
/// ```
/// let table = freq_modes::FrequencyTable::<u32>::new();
/// assert!(freq_modes::all_modes(&table).is_empty());
/// ```
pub fn all_modes<V>(table: &FrequencyTable<V>) -> Vec<ModeResult<V>>
where
    V: Hash + Eq + Clone,
{
    let mut ranked: Vec<ModeResult<V>> = table
        .iter()
        .map(|(val, count)| ModeResult::new(val.clone(), count))
        .collect();
    // stable, so ties keep table order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    debug!("ranked {} distinct values", ranked.len());
    ranked
}

/// Get the `n` most frequent values and their counts
///
/// This is a prefix of [`all_modes`].
///
/// # Examples
///
/// ```
/// let table: freq_modes::FrequencyTable<char> = "abracadabra".chars().collect();
/// let top: Vec<_> = freq_modes::top_modes(&table, 2).into_iter().map(|m| m.value).collect();
/// assert_eq!(vec!['a', 'b'], top);
/// ```
pub fn top_modes<V>(table: &FrequencyTable<V>, n: usize) -> Vec<ModeResult<V>>
where
    V: Hash + Eq + Clone,
{
    let mut ranked = all_modes(table);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pregnancy_lengths() -> FrequencyTable<u32> {
        vec![(38, 3524), (39, 4693), (40, 1233)].into_iter().collect()
    }

    #[test]
    fn mode_of_pregnancy_lengths() {
        let table = pregnancy_lengths();
        assert_eq!(mode(&table).unwrap(), 39);
        assert_eq!(table.mode_entry().unwrap(), ModeResult::new(39, 4693));
    }

    #[test]
    fn all_modes_of_pregnancy_lengths() {
        let modes = pregnancy_lengths().all_modes();
        let pairs: Vec<_> = modes.iter().map(|m| (m.value, m.count)).collect();
        assert_eq!(pairs, vec![(39, 4693), (38, 3524), (40, 1233)]);
    }

    #[test]
    fn first_tie_wins() {
        let table: FrequencyTable<u32> = vec![(3, 2), (5, 2), (7, 1)].into_iter().collect();
        assert_eq!(mode(&table).unwrap(), 3);
        let order: Vec<_> = all_modes(&table).into_iter().map(|m| m.value).collect();
        assert_eq!(order, vec![3, 5, 7]);
    }

    #[test]
    fn empty_tables() {
        let mut table: FrequencyTable<u32> = FrequencyTable::new();
        assert!(matches!(mode(&table), Err(StatsError::EmptyInput)));
        assert!(all_modes(&table).is_empty());

        table.set(4, 0);
        assert!(matches!(mode(&table), Err(StatsError::EmptyInput)));
        assert!(all_modes(&table).is_empty());
    }

    #[test]
    fn table_is_untouched() {
        let table = pregnancy_lengths();
        let before = table.clone();
        let first = all_modes(&table);
        let second = all_modes(&table);
        assert_eq!(first, second);
        assert_eq!(table, before);
        assert_eq!(table.iter().collect::<Vec<_>>(), before.iter().collect::<Vec<_>>());
    }

    #[test]
    fn top_modes_is_a_prefix() {
        let table = pregnancy_lengths();
        assert_eq!(top_modes(&table, 2), all_modes(&table)[..2].to_vec());
        assert_eq!(top_modes(&table, 10).len(), 3);
        assert!(top_modes(&table, 0).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(ModeResult::new(39, 4693).to_string(), "39\t4693");
    }
}
