pub trait FloatExt: Sized {
    /// `self != other`
    fn not_eq(self, other: Self) -> bool;

    /// Whether `self` and `other` differ by more than `tolerance`.
    fn differs(self, other: Self, tolerance: Self) -> bool;

    /// Format with at most `precision` decimals, trimming trailing zeros
    /// and a trailing decimal point.
    fn fmt_trimmed(self, precision: usize) -> String;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn not_eq(self, other: Self) -> bool {
                (self - other).abs() >= <$ty>::EPSILON
            }

            fn differs(self, other: Self, tolerance: Self) -> bool {
                (self - other).abs() > tolerance
            }

            fn fmt_trimmed(self, precision: usize) -> String {
                let value = self;
                let mut s = format!("{value:.precision$}");

                if s.contains('.') {
                    let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
                    s.truncate(trimmed);
                }

                if s == "-0" {
                    s.remove(0);
                }

                s
            }
        }
    };
}

impl_float_ext!(f64);
