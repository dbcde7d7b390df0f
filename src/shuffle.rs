use std::{error::Error, fmt::Display};

use crate::{element::Element, rand::Random};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleError {
    /// Requested more elements than the array holds
    SizeExceedsLength { size: u64, len: usize },
}

impl Display for ShuffleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShuffleError::SizeExceedsLength { size, len } => {
                write!(f, "Shuffle size {size} exceeds array length {len}")
            }
        }
    }
}

impl Error for ShuffleError {}

/// Shuffles the first `size` elements of `array` in place, drawing from `random`.
///
/// # Panics
/// When `size` is larger than `array.len()`. Use [try_shuffle_with] to get an error instead.
pub fn shuffle_with<T, R>(random: &R, array: &mut [T], size: u64)
where
    T: Element,
    R: Random + ?Sized,
{
    if let Err(error) = try_shuffle_with(random, array, size) {
        panic!("{error}")
    }
}

/// Shuffles the first `size` elements of `array` in place, drawing from `random`. The array is left untouched when
/// `size` is out of range.
pub fn try_shuffle_with<T, R>(random: &R, array: &mut [T], size: u64) -> Result<(), ShuffleError>
where
    T: Element,
    R: Random + ?Sized,
{
    let len = array.len();
    let prefix = usize::try_from(size)
        .ok()
        .and_then(|size| array.get_mut(..size))
        .ok_or(ShuffleError::SizeExceedsLength { size, len })?;
    log::trace!("Shuffling {size} of {len} elements");
    permute(random, prefix);
    Ok(())
}

/// Two elements are always swapped. Longer slices get a single forward pass where every position is swapped with a
/// partner drawn from the whole slice, redrawing while the partner is the position itself. Unlike Fisher-Yates this
/// does not give uniformly distributed permutations; the distribution is kept as is.
fn permute<T, R>(random: &R, items: &mut [T])
where
    R: Random + ?Sized,
{
    match items.len() {
        0 | 1 => {}
        2 => items.swap(0, 1),
        len => {
            for i in 0..len {
                let partner = loop {
                    let candidate = candidate_index(random, len);
                    if candidate != i {
                        break candidate;
                    }
                };
                items.swap(i, partner);
            }
        }
    }
}

/// Index in `0..len`, modulo bias included
fn candidate_index<R>(random: &R, len: usize) -> usize
where
    R: Random + ?Sized,
{
    (random.next_u64() % len as u64) as usize
}
