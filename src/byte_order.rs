//! Width-generic network byte-order codecs.
//!
//! Capture-device registers and control transfers carry fixed-width
//! big-endian fields of many different sizes. These helpers read and
//! write any unsigned integer through the sequential [`Buf`]/[`BufMut`]
//! contract, either at the type's natural width or truncated to a byte
//! count imposed by the surrounding field layout.

use bytes::{Buf, BufMut};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer that can cross the wire most-significant-byte first.
///
/// The trait is sealed and implemented only for the unsigned primitive
/// types. Signed integers are excluded: shift-accumulate decoding of a
/// signed intermediate has no meaningful result, so the bound turns that
/// misuse into a compile error.
pub trait WireUnsigned: sealed::Sealed + Copy {
    /// Natural encoded width in bytes.
    const WIDTH: usize;

    #[doc(hidden)]
    const ZERO: Self;

    /// Shift the accumulated value up one byte and merge `byte` in.
    #[doc(hidden)]
    fn accumulate(self, byte: u8) -> Self;

    /// The byte `index` positions above the least significant byte.
    #[doc(hidden)]
    fn byte_at(self, index: usize) -> u8;
}

impl sealed::Sealed for u8 {}

impl WireUnsigned for u8 {
    const WIDTH: usize = 1;
    const ZERO: Self = 0;

    // A one-byte value has nothing to shift; the incoming byte replaces
    // the accumulator outright.
    fn accumulate(self, byte: u8) -> Self { byte }

    fn byte_at(self, _index: usize) -> u8 { self }
}

macro_rules! impl_wire_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl WireUnsigned for $ty {
            const WIDTH: usize = size_of::<$ty>();
            const ZERO: Self = 0;

            fn accumulate(self, byte: u8) -> Self { (self << 8) | Self::from(byte) }

            #[expect(
                clippy::cast_possible_truncation,
                reason = "Only the selected byte survives the shift."
            )]
            fn byte_at(self, index: usize) -> u8 { (self >> (index * 8)) as u8 }
        }
    )*};
}

impl_wire_unsigned!(u16, u32, u64, u128);

/// Read a big-endian value of `T`'s natural width from `src`.
///
/// # Examples
///
/// ```
/// use capwire::byte_order::read_network;
///
/// let mut src = &[0x12, 0x34, 0x56, 0x78][..];
/// assert_eq!(read_network::<u32, _>(&mut src), 0x1234_5678);
/// assert!(src.is_empty());
/// ```
///
/// # Panics
///
/// Panics if `src` holds fewer than `T::WIDTH` readable bytes. The
/// buffer is caller-owned and the caller must guarantee capacity.
#[must_use]
pub fn read_network<T, B>(src: &mut B) -> T
where
    T: WireUnsigned,
    B: Buf,
{
    read_network_bounded(src, T::WIDTH)
}

/// Read a big-endian value from `src`, consuming at most `limit` bytes.
///
/// When `limit` is below `T`'s natural width only `limit` bytes are
/// consumed and they form the *complete* value: the missing high-order
/// bits are zero, never sign-extended and never shifted high.
///
/// # Examples
///
/// ```
/// use capwire::byte_order::read_network_bounded;
///
/// // A three-byte field carried in a u32 register image.
/// let mut src = &[0x01, 0x02, 0x03][..];
/// assert_eq!(read_network_bounded::<u32, _>(&mut src, 3), 0x0001_0203);
/// ```
///
/// # Panics
///
/// Panics if `src` holds fewer than `min(T::WIDTH, limit)` readable
/// bytes.
#[must_use]
pub fn read_network_bounded<T, B>(src: &mut B, limit: usize) -> T
where
    T: WireUnsigned,
    B: Buf,
{
    let count = T::WIDTH.min(limit);
    let mut value = T::ZERO;
    for _ in 0..count {
        value = value.accumulate(src.get_u8());
    }
    value
}

/// Write `value` to `dst` big-endian at `T`'s natural width.
///
/// # Examples
///
/// ```
/// use capwire::byte_order::write_network;
///
/// let mut dst = Vec::new();
/// write_network(&mut dst, 0x1234_u16);
/// assert_eq!(dst, [0x12, 0x34]);
/// ```
///
/// # Panics
///
/// Panics if `dst` cannot accept `T::WIDTH` further bytes.
pub fn write_network<T, B>(dst: &mut B, value: T)
where
    T: WireUnsigned,
    B: BufMut,
{
    write_network_bounded(dst, value, T::WIDTH);
}

/// Write at most `limit` bytes of `value` to `dst`, big-endian.
///
/// When `limit` is below `T`'s natural width only the low-order
/// `limit * 8` bits are written; any higher-order bits of `value` are
/// silently discarded.
///
/// # Examples
///
/// ```
/// use capwire::byte_order::write_network_bounded;
///
/// let mut dst = Vec::new();
/// write_network_bounded(&mut dst, 0xAABB_CCDD_u32, 2);
/// assert_eq!(dst, [0xCC, 0xDD]);
/// ```
///
/// # Panics
///
/// Panics if `dst` cannot accept `min(T::WIDTH, limit)` further bytes.
pub fn write_network_bounded<T, B>(dst: &mut B, value: T, limit: usize)
where
    T: WireUnsigned,
    B: BufMut,
{
    let mut remaining = T::WIDTH.min(limit);
    while remaining > 0 {
        remaining -= 1;
        dst.put_u8(value.byte_at(remaining));
    }
}
