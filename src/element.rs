//! Element types accepted by the shuffle

use core::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// Fixed-width numeric type that can be shuffled. Implemented for the 8, 16, 32 and 64 bit signed and unsigned
/// integers and for `f32` and `f64`; cannot be implemented outside this crate.
pub trait Element: Copy + Debug + PartialOrd + Send + private::Sealed {}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}
            impl Element for $t {}
        )*
    };
}

impl_element!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
