use num_traits::AsPrimitive;

/// The type two operand types meet in before an arithmetic operator applies.
///
/// Identical types resolve to themselves. Mixed primitive numeric types
/// follow the usual arithmetic conversions:
///
/// - an integer with a float gives the float, and `f32` with `f64` gives `f64`
/// - two integers of at most 16 bits that neither holds the other give `i32`
/// - otherwise the wider integer wins, and at equal width the unsigned one
///   does (`i32` with `u32` gives `u32`)
/// - `isize` and `usize` count as 64 bits, and `i64`/`u64` win over them
///
/// Pairs where `std` provides a lossless `From` conversion convert through
/// it. The remaining pairs convert with `as`, so they can round (`i64` to
/// `f64`) or wrap (`-1_i32` to `u32`). Use
/// [`Sequence::map`](crate::Sequence::map) to convert some other way.
///
/// # Example
///
/// ```
/// use strand_core::CommonType;
///
/// let x = <i32 as CommonType<f64>>::lift(2);
/// let y = <i32 as CommonType<f64>>::lift_rhs(0.5);
/// assert_eq!(x + y, 2.5);
///
/// let z = <i64 as CommonType<f32>>::lift(1 << 40);
/// assert_eq!(z, 1_099_511_627_776.0_f32);
/// ```
pub trait CommonType<Rhs = Self>: Sized {
    /// The common type of `Self` and `Rhs`.
    type Output;

    /// Converts the left operand into the common type.
    fn lift(self) -> Self::Output;

    /// Converts the right operand into the common type.
    fn lift_rhs(rhs: Rhs) -> Self::Output;
}

impl<T> CommonType<T> for T {
    type Output = T;

    #[inline]
    fn lift(self) -> T {
        self
    }

    #[inline]
    fn lift_rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! widen {
    ($($narrow:ty => $($wide:ty),+;)+) => {
        $($(
            impl CommonType<$wide> for $narrow {
                type Output = $wide;

                #[inline]
                fn lift(self) -> $wide {
                    <$wide>::from(self)
                }

                #[inline]
                fn lift_rhs(rhs: $wide) -> $wide {
                    rhs
                }
            }

            impl CommonType<$narrow> for $wide {
                type Output = $wide;

                #[inline]
                fn lift(self) -> $wide {
                    self
                }

                #[inline]
                fn lift_rhs(rhs: $narrow) -> $wide {
                    <$wide>::from(rhs)
                }
            }
        )+)+
    };
}

widen! {
    i8 => i16, i32, i64, i128, isize, f32, f64;
    u8 => u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64;
    i16 => i32, i64, i128, isize, f32, f64;
    u16 => u32, u64, u128, usize, i32, i64, i128, f32, f64;
    i32 => i64, i128, f64;
    u32 => u64, u128, i64, i128, f64;
    i64 => i128;
    u64 => u128, i128;
    f32 => f64;
}

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            promote!(@impl $lhs, $rhs, $out);
            promote!(@impl $rhs, $lhs, $out);
        )+
    };
    (@impl $lhs:ty, $rhs:ty, $out:ty) => {
        impl CommonType<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn lift(self) -> $out {
                AsPrimitive::<$out>::as_(self)
            }

            #[inline]
            fn lift_rhs(rhs: $rhs) -> $out {
                AsPrimitive::<$out>::as_(rhs)
            }
        }
    };
}

promote! {
    i8, u8 => i32;
    i8, u16 => i32;
    i16, u16 => i32;

    i8, u32 => u32;
    i16, u32 => u32;
    i32, u32 => u32;
    i8, u64 => u64;
    i16, u64 => u64;
    i32, u64 => u64;
    i64, u64 => u64;
    isize, u64 => u64;
    usize, u64 => u64;
    i8, usize => usize;
    i16, usize => usize;
    i32, usize => usize;
    u32, usize => usize;
    i64, usize => usize;
    isize, usize => usize;
    i8, u128 => u128;
    i16, u128 => u128;
    i32, u128 => u128;
    i64, u128 => u128;
    isize, u128 => u128;
    usize, u128 => u128;
    i128, u128 => u128;

    u16, isize => isize;
    i32, isize => isize;
    u32, isize => isize;
    isize, i64 => i64;
    isize, i128 => i128;
    usize, i128 => i128;

    i32, f32 => f32;
    u32, f32 => f32;
    i64, f32 => f32;
    u64, f32 => f32;
    isize, f32 => f32;
    usize, f32 => f32;
    i128, f32 => f32;
    u128, f32 => f32;
    i64, f64 => f64;
    u64, f64 => f64;
    isize, f64 => f64;
    usize, f64 => f64;
    i128, f64 => f64;
    u128, f64 => f64;
}

/// The common type of every element type in a tuple.
///
/// Folds [`CommonType`] from the right: `(A, B, C)` resolves `B` with `C`
/// first, then `A` with that result. Implemented for tuples of one to eight
/// types.
pub trait CommonTuple {
    type Output;
}

macro_rules! common_tuple {
    ($last:ident) => {
        impl<$last> CommonTuple for ($last,) {
            type Output = $last;
        }
    };
    ($first:ident, $($rest:ident),+) => {
        impl<$first, $($rest),+> CommonTuple for ($first, $($rest),+)
        where
            ($($rest,)+): CommonTuple,
            $first: CommonType<<($($rest,)+) as CommonTuple>::Output>,
        {
            type Output = <$first as CommonType<<($($rest,)+) as CommonTuple>::Output>>::Output;
        }

        common_tuple!($($rest),+);
    };
}

common_tuple!(A, B, C, D, E, F, G, H);
