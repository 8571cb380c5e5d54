//! Leveled assertions.
//!
//! Checks which are cheap are guarded by [`TWOSAT_ASSERT_SIMPLE`] and are always active; the more
//! expensive checks (e.g. re-evaluating every clause after a flip) are only active when the
//! `debug-checks` feature raises [`TWOSAT_ASSERT_LEVEL_DEFINITION`].

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const TWOSAT_ASSERT_LEVEL_DEFINITION: u8 = TWOSAT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const TWOSAT_ASSERT_LEVEL_DEFINITION: u8 = TWOSAT_ASSERT_ADVANCED;

pub const TWOSAT_ASSERT_SIMPLE: u8 = 1;
pub const TWOSAT_ASSERT_MODERATE: u8 = 2;
pub const TWOSAT_ASSERT_ADVANCED: u8 = 3;
pub const TWOSAT_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! twosat_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TWOSAT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! twosat_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TWOSAT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! twosat_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TWOSAT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! twosat_assert_eq_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TWOSAT_ASSERT_MODERATE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! twosat_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TWOSAT_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! twosat_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::TWOSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TWOSAT_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
