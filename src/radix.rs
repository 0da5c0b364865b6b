//! Scalar element types: the [`RadixKey`] trait and its implementations
//! for every supported width - 8, 16, 24, 32, 40, 48, 56, 64 bits - plus
//! the automatic {native, native-abs, native-tiered-abs} mode selection
//! per type.
//!
//! Widths with no native Rust integer (24, 40, 48, 56) are represented as
//! fixed-size byte-array newtypes - user-defined packed types read an
//! arbitrary-width field into a `[u8; N]`, little-endian.

use crate::mode::{AbsFloat, AbsSigned, FloatMode, Signed, TieredAbsFloat, TieredAbsSigned, Unsigned};

/// A scalar sortable by the radix kernels: a value of some width
/// `Self::BYTES` in `1..=8` that can be converted to and from a `u64`
/// "bit-carrier" holding its raw bit pattern zero-extended into the low
/// `BYTES * 8` bits.
///
/// `to_bits`/`from_bits` preserve the *bit pattern*, not the numeric value:
/// for a signed or floating-point type this is a `transmute`-equivalent
/// reinterpretation, never a numeric cast, since the filters in
/// [`crate::mode`] operate on the raw representation.
pub trait RadixKey: Copy {
    /// Width in bytes; one of 1,2,3,4,5,6,7,8.
    const BYTES: usize;

    /// The mode `native` resolves to for this type.
    type Native: crate::mode::Mode;
    /// The mode `native-abs` resolves to for this type.
    type NativeAbs: crate::mode::Mode;
    /// The mode `native-tiered-abs` resolves to for this type.
    type NativeTieredAbs: crate::mode::Mode;

    /// Reinterprets `self`'s bit pattern as an unsigned, zero-extended
    /// `u64`.
    fn to_bits(self) -> u64;

    /// Reconstructs a value from its low `Self::BYTES * 8` bits.
    fn from_bits(bits: u64) -> Self;

    /// Width in bits; `Self::BYTES * 8`.
    #[inline(always)]
    fn width_bits() -> u32 {
        (Self::BYTES * 8) as u32
    }
}

macro_rules! impl_radix_key_uint {
    ($t:ty, $bytes:expr) => {
        impl RadixKey for $t {
            const BYTES: usize = $bytes;
            type Native = Unsigned;
            type NativeAbs = Unsigned;
            type NativeTieredAbs = Unsigned;

            #[inline(always)]
            fn to_bits(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_bits(bits: u64) -> Self {
                bits as Self
            }
        }
    };
}

macro_rules! impl_radix_key_sint {
    ($t:ty, $u:ty, $bytes:expr) => {
        impl RadixKey for $t {
            const BYTES: usize = $bytes;
            type Native = Signed;
            type NativeAbs = AbsSigned;
            type NativeTieredAbs = TieredAbsSigned;

            #[inline(always)]
            fn to_bits(self) -> u64 {
                (self as $u) as u64
            }

            #[inline(always)]
            fn from_bits(bits: u64) -> Self {
                (bits as $u) as Self
            }
        }
    };
}

impl_radix_key_uint!(u8, 1);
impl_radix_key_uint!(u16, 2);
impl_radix_key_uint!(u32, 4);
impl_radix_key_uint!(u64, 8);

impl_radix_key_sint!(i8, u8, 1);
impl_radix_key_sint!(i16, u16, 2);
impl_radix_key_sint!(i32, u32, 4);
impl_radix_key_sint!(i64, u64, 8);

impl RadixKey for bool {
    const BYTES: usize = 1;
    type Native = Unsigned;
    type NativeAbs = Unsigned;
    type NativeTieredAbs = Unsigned;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        bits != 0
    }
}

impl RadixKey for f32 {
    const BYTES: usize = 4;
    type Native = FloatMode;
    type NativeAbs = AbsFloat;
    type NativeTieredAbs = TieredAbsFloat;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f32::to_bits(self) as u64
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl RadixKey for f64 {
    const BYTES: usize = 8;
    type Native = FloatMode;
    type NativeAbs = AbsFloat;
    type NativeTieredAbs = TieredAbsFloat;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

macro_rules! packed_uint {
    ($name:ident, $bytes:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name(pub [u8; $bytes]);

        impl RadixKey for $name {
            const BYTES: usize = $bytes;
            type Native = Unsigned;
            type NativeAbs = Unsigned;
            type NativeTieredAbs = Unsigned;

            #[inline(always)]
            fn to_bits(self) -> u64 {
                let mut buf = [0u8; 8];
                buf[..$bytes].copy_from_slice(&self.0);
                u64::from_le_bytes(buf)
            }

            #[inline(always)]
            fn from_bits(bits: u64) -> Self {
                let buf = bits.to_le_bytes();
                let mut out = [0u8; $bytes];
                out.copy_from_slice(&buf[..$bytes]);
                $name(out)
            }
        }
    };
}

macro_rules! packed_sint {
    ($name:ident, $bytes:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name(pub [u8; $bytes]);

        impl RadixKey for $name {
            const BYTES: usize = $bytes;
            type Native = Signed;
            type NativeAbs = AbsSigned;
            type NativeTieredAbs = TieredAbsSigned;

            #[inline(always)]
            fn to_bits(self) -> u64 {
                let mut buf = [0u8; 8];
                buf[..$bytes].copy_from_slice(&self.0);
                u64::from_le_bytes(buf)
            }

            #[inline(always)]
            fn from_bits(bits: u64) -> Self {
                let buf = bits.to_le_bytes();
                let mut out = [0u8; $bytes];
                out.copy_from_slice(&buf[..$bytes]);
                $name(out)
            }
        }
    };
}

packed_uint!(U24, 3, "A 24-bit unsigned packed integer, stored little-endian.");
packed_sint!(I24, 3, "A 24-bit signed (two's-complement) packed integer, stored little-endian.");
packed_uint!(U40, 5, "A 40-bit unsigned packed integer, stored little-endian.");
packed_sint!(I40, 5, "A 40-bit signed (two's-complement) packed integer, stored little-endian.");
packed_uint!(U48, 6, "A 48-bit unsigned packed integer, stored little-endian.");
packed_sint!(I48, 6, "A 48-bit signed (two's-complement) packed integer, stored little-endian.");
packed_uint!(U56, 7, "A 56-bit unsigned packed integer, stored little-endian.");
packed_sint!(I56, 7, "A 56-bit signed (two's-complement) packed integer, stored little-endian.");
