//! Hashable floats
//!
//! Floats aren't `Hash` or `Eq`, so they can't key a frequency table directly. `FloatKey` wraps a
//! non-nan float and compares it by its bytes, which is exact equality once negative zero has
//! been folded into positive zero.
use core::borrow::{Borrow, BorrowMut};
use core::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use num_traits::Float;

// TODO num_traits might include them at some point:
// https://github.com/rust-num/num-traits/pull/103
pub trait ToBytes {
    type Bytes: Debug
        + AsRef<[u8]>
        + AsMut<[u8]>
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash
        + Borrow<[u8]>
        + BorrowMut<[u8]>
        + Default;

    fn to_bytes(&self) -> Self::Bytes;
}

impl ToBytes for f32 {
    type Bytes = [u8; 4];

    fn to_bytes(&self) -> Self::Bytes {
        self.to_ne_bytes()
    }
}

impl ToBytes for f64 {
    type Bytes = [u8; 8];

    fn to_bytes(&self) -> Self::Bytes {
        self.to_ne_bytes()
    }
}

/// A float that can key a frequency table
///
/// # Examples
///
/// ```
/// use freq_modes::FloatKey;
///
/// assert_eq!(FloatKey::new(-0.0), FloatKey::new(0.0));
/// assert!(FloatKey::new(f64::NAN).is_none());
/// ```
#[derive(Clone, Copy)]
pub struct FloatKey<F>(F);

impl<F: Float> FloatKey<F> {
    /// Wrap a float, returning None for nan
    pub fn new(val: F) -> Option<Self> {
        if val.is_nan() {
            None
        } else if val == F::zero() {
            Some(FloatKey(F::zero()))
        } else {
            Some(FloatKey(val))
        }
    }

    pub fn get(self) -> F {
        self.0
    }
}

impl<F: ToBytes> PartialEq for FloatKey<F> {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bytes() == other.0.to_bytes()
    }
}

impl<F: ToBytes> Eq for FloatKey<F> {}

impl<F: ToBytes> Hash for FloatKey<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bytes().hash(state);
    }
}

impl<F: Float + ToBytes> PartialOrd for FloatKey<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float + ToBytes> Ord for FloatKey<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // nan can't be wrapped, so every pair is comparable
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl<F: Debug> Debug for FloatKey<F> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

impl<F: Display> Display for FloatKey<F> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn float_keys_hash_by_value() {
        let keys: HashSet<_> = [1.0, 2.0, 1.0, -0.0, 0.0]
            .iter()
            .filter_map(|&v| FloatKey::new(v))
            .collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&FloatKey::new(0.0).unwrap()));
    }

    #[test]
    fn float_keys_order() {
        let mut keys: Vec<_> = [3.5f32, -1.0, 2.0]
            .iter()
            .filter_map(|&v| FloatKey::new(v))
            .collect();
        keys.sort();
        let vals: Vec<f32> = keys.into_iter().map(FloatKey::get).collect();
        assert_eq!(vals, vec![-1.0, 2.0, 3.5]);
    }
}
