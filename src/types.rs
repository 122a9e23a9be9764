//! OpenType primitive data types
//!
//! Byte widths of the fixed-size types that make up font tables,
//! used for offsets and strides when walking table records.

/// Fixed-width OpenType data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSize {
    /// 8-bit unsigned integer
    Byte,
    /// 8-bit signed integer
    Char,
    /// 16-bit unsigned integer
    UShort,
    /// 16-bit signed integer
    Short,
    /// 24-bit unsigned integer
    UInt24,
    /// 32-bit unsigned integer
    ULong,
    /// 32-bit signed integer
    Long,
    /// 32-bit signed 16.16 fixed-point number
    Fixed,
    /// 16-bit signed integer in font design units
    FUnit,
    /// 16-bit signed integer describing a quantity in font design units
    FWord,
    /// 16-bit unsigned integer describing a quantity in font design units
    UFWord,
    /// 16-bit signed 2.14 fixed-point number
    F2Dot14,
    /// Seconds since 1904-01-01T00:00:00 as a 64-bit integer
    LongDateTime,
    /// Four-byte table tag
    Tag,
    /// 16-bit glyph index
    GlyphId,
    /// 16-bit offset
    Offset,
}

impl DataSize {
    /// Width in bytes
    pub const fn size(self) -> usize {
        match self {
            DataSize::Byte | DataSize::Char => 1,
            DataSize::UShort
            | DataSize::Short
            | DataSize::FUnit
            | DataSize::FWord
            | DataSize::UFWord
            | DataSize::F2Dot14
            | DataSize::GlyphId
            | DataSize::Offset => 2,
            DataSize::UInt24 => 3,
            DataSize::ULong | DataSize::Long | DataSize::Fixed | DataSize::Tag => 4,
            DataSize::LongDateTime => 8,
        }
    }
}
