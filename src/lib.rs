//! In-place shuffling of arrays of primitive numeric types.
//!
//! [shuffle] and [try_shuffle] draw from a process-wide generator, seeded from the wall-clock on the first shuffle
//! and never reseeded. [shuffle_with] and [try_shuffle_with] take any [Random] instead, e.g. a
//! [SeededRandom::with_seed] for a reproducible stream.
//!
//! Two-element arrays are always swapped. Longer arrays get one forward pass in which every position is swapped with
//! a partner drawn from the whole array, never itself. The result is a permutation but not a uniformly distributed
//! one.

pub use crate::{
    clock::{Clock, SystemClock},
    element::Element,
    rand::{Random, SeededRandom},
    shuffle::{shuffle_with, try_shuffle_with, ShuffleError},
    version::{version, Version},
};

mod clock;
mod element;
mod rand;
mod shuffle;
mod version;

#[cfg(test)]
mod test_helpers;

static PROCESS_RANDOM: SeededRandom = SeededRandom::new(SystemClock);

/// Shuffles the first `size` elements of `array` in place using the process-wide generator.
///
/// # Panics
/// When `size` is larger than `array.len()`.
pub fn shuffle<T: Element>(array: &mut [T], size: u64) {
    PROCESS_RANDOM.ensure_seeded();
    shuffle_with(&PROCESS_RANDOM, array, size)
}

/// Same as [shuffle], but returns an error instead of panicking when `size` is out of range
pub fn try_shuffle<T: Element>(array: &mut [T], size: u64) -> Result<(), ShuffleError> {
    PROCESS_RANDOM.ensure_seeded();
    try_shuffle_with(&PROCESS_RANDOM, array, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_single_element_then_unchanged() {
        let mut array = [10u8];

        shuffle(&mut array, 1);

        assert_eq!(array, [10]);
    }

    #[test]
    fn when_two_elements_then_always_swapped() {
        for _ in 0..1000 {
            let mut array = [10.0f32, 20.0];

            shuffle(&mut array, 2);

            assert_eq!(array, [20.0, 10.0]);
        }
    }

    #[test]
    fn when_shuffled_then_process_random_is_seeded_once() {
        let mut array = [1i64, 2, 3, 4, 5];

        shuffle(&mut array, 0);
        let seed = PROCESS_RANDOM.seed();
        for size in 0..=5 {
            shuffle(&mut array, size);
        }

        assert!(seed.is_some());
        assert_eq!(PROCESS_RANDOM.seed(), seed);
    }

    #[test]
    fn when_size_out_of_range_then_try_shuffle_fails() {
        let mut array = [1u32, 2];

        let result = try_shuffle(&mut array, 3);

        assert_eq!(result, Err(ShuffleError::SizeExceedsLength { size: 3, len: 2 }));
    }

    #[test]
    fn every_element_type_can_be_shuffled() {
        fn check<T: Element>(values: [T; 5]) {
            let mut array = values;
            shuffle(&mut array, 5);
            for value in values {
                assert!(array.contains(&value));
            }
        }

        check([1i8, 2, 3, 4, 5]);
        check([1u8, 2, 3, 4, 5]);
        check([1i16, 2, 3, 4, 5]);
        check([1u16, 2, 3, 4, 5]);
        check([1i32, 2, 3, 4, 5]);
        check([1u32, 2, 3, 4, 5]);
        check([1i64, 2, 3, 4, 5]);
        check([1u64, 2, 3, 4, 5]);
        check([1.5f32, 2.5, 3.5, 4.5, 5.5]);
        check([1.5f64, 2.5, 3.5, 4.5, 5.5]);
    }
}
