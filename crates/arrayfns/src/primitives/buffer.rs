//! Scalar kinds and dynamically-typed buffer handles.
//!
//! ## Purpose
//!
//! Host runtimes hand the kernels flat buffers whose element type is only
//! known at run time. This module models that closed set of scalar kinds,
//! host scalars tagged by their source kind, and borrowed buffer handles that
//! carry their kind as an enum tag so a kernel dispatches once per call.
//!
//! ## Design notes
//!
//! * **One conversion table**: [`Element::from_scalar`] is the only place a
//!   host value is narrowed or widened to a buffer kind. Buffer-to-buffer
//!   coercion goes through [`Element::to_scalar`] and back.
//! * **Closed set**: [`ArrayRef`] and [`ArrayMut`] cover every kind a host may
//!   supply; individual kernels decide which kinds they implement.
//!
//! ## Key concepts
//!
//! * **Character → number**: the byte value.
//! * **Float → integer**: truncation toward zero to 64 bits (saturating),
//!   then the integer rule.
//! * **Integer → narrower integer**: two's-complement wrap.
//! * **Anything → bool**: non-zero is `true`.

// External dependencies
use core::fmt::{Debug, Display, Formatter};

// ============================================================================
// Scalar Kinds
// ============================================================================

/// Element type of a numeric buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 8-bit unsigned integer.
    UByte,

    /// 8-bit signed character.
    Byte,

    /// 16-bit signed integer.
    Short,

    /// 32-bit signed integer.
    Int,

    /// Platform long (64-bit signed integer).
    Long,

    /// 32-bit float.
    Float,

    /// 64-bit float.
    Double,

    /// Boolean.
    Bool,
}

impl ScalarKind {
    /// Single-character type code used by array hosts.
    pub fn typecode(self) -> char {
        match self {
            Self::UByte => 'B',
            Self::Byte => 'b',
            Self::Short => 'h',
            Self::Int => 'i',
            Self::Long => 'l',
            Self::Float => 'f',
            Self::Double => 'd',
            Self::Bool => '?',
        }
    }

    /// Human-readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::UByte => "unsigned byte",
            Self::Byte => "character",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ('{}')", self.name(), self.typecode())
    }
}

// ============================================================================
// Host Scalars
// ============================================================================

/// A scalar value supplied by the host, tagged by its source kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// Byte value of a one-character string.
    Char(u8),

    /// Host integer.
    Int(i64),

    /// Host float.
    Float(f64),
}

impl Scalar {
    /// Build a character scalar from the first byte of `text`.
    ///
    /// Returns `None` for an empty string.
    pub fn from_text(text: &str) -> Option<Self> {
        text.as_bytes().first().map(|&b| Self::Char(b))
    }
}

impl From<char> for Scalar {
    fn from(c: char) -> Self {
        let mut utf8 = [0u8; 4];
        Self::Char(c.encode_utf8(&mut utf8).as_bytes()[0])
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

// ============================================================================
// Element Trait
// ============================================================================

/// A scalar type that can live in a numeric buffer.
pub trait Element: Copy + PartialOrd + Default + Debug + 'static {
    /// Kind tag of this element type.
    const KIND: ScalarKind;

    /// Convert a host scalar to this kind.
    fn from_scalar(value: Scalar) -> Self;

    /// Widen this value to a host scalar.
    fn to_scalar(self) -> Scalar;

    /// Wrap a slice of this type in a tagged read-only handle.
    fn wrap(slice: &[Self]) -> ArrayRef<'_>;

    /// Wrap a slice of this type in a tagged mutable handle.
    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_>;
}

#[inline]
fn truncate(value: f64) -> i64 {
    value as i64
}

impl Element for u8 {
    const KIND: ScalarKind = ScalarKind::UByte;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c,
            Scalar::Int(i) => i as u8,
            Scalar::Float(d) => truncate(d) as u8,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::UByte(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::UByte(slice)
    }
}

impl Element for i8 {
    const KIND: ScalarKind = ScalarKind::Byte;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c as i8,
            Scalar::Int(i) => i as i8,
            Scalar::Float(d) => truncate(d) as i8,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::Byte(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::Byte(slice)
    }
}

impl Element for i16 {
    const KIND: ScalarKind = ScalarKind::Short;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c as i16,
            Scalar::Int(i) => i as i16,
            Scalar::Float(d) => truncate(d) as i16,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::Short(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::Short(slice)
    }
}

impl Element for i32 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c as i32,
            Scalar::Int(i) => i as i32,
            Scalar::Float(d) => truncate(d) as i32,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::Int(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::Int(slice)
    }
}

impl Element for i64 {
    const KIND: ScalarKind = ScalarKind::Long;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c as i64,
            Scalar::Int(i) => i,
            Scalar::Float(d) => truncate(d),
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::Long(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::Long(slice)
    }
}

impl Element for f32 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c as f32,
            Scalar::Int(i) => i as f32,
            Scalar::Float(d) => d as f32,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Float(self as f64)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::Float(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::Float(slice)
    }
}

impl Element for f64 {
    const KIND: ScalarKind = ScalarKind::Double;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c as f64,
            Scalar::Int(i) => i as f64,
            Scalar::Float(d) => d,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Float(self)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::Double(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::Double(slice)
    }
}

impl Element for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn from_scalar(value: Scalar) -> Self {
        match value {
            Scalar::Char(c) => c != 0,
            Scalar::Int(i) => i != 0,
            Scalar::Float(d) => d != 0.0,
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(self as i64)
    }

    fn wrap(slice: &[Self]) -> ArrayRef<'_> {
        ArrayRef::Bool(slice)
    }

    fn wrap_mut(slice: &mut [Self]) -> ArrayMut<'_> {
        ArrayMut::Bool(slice)
    }
}

// ============================================================================
// Tagged Buffer Handles
// ============================================================================

/// Read-only buffer handle tagged with its scalar kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayRef<'a> {
    /// Unsigned bytes.
    UByte(&'a [u8]),
    /// Characters.
    Byte(&'a [i8]),
    /// 16-bit integers.
    Short(&'a [i16]),
    /// 32-bit integers.
    Int(&'a [i32]),
    /// 64-bit integers.
    Long(&'a [i64]),
    /// 32-bit floats.
    Float(&'a [f32]),
    /// 64-bit floats.
    Double(&'a [f64]),
    /// Booleans.
    Bool(&'a [bool]),
}

impl ArrayRef<'_> {
    /// Scalar kind of the buffer.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::UByte(_) => ScalarKind::UByte,
            Self::Byte(_) => ScalarKind::Byte,
            Self::Short(_) => ScalarKind::Short,
            Self::Int(_) => ScalarKind::Int,
            Self::Long(_) => ScalarKind::Long,
            Self::Float(_) => ScalarKind::Float,
            Self::Double(_) => ScalarKind::Double,
            Self::Bool(_) => ScalarKind::Bool,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::UByte(s) => s.len(),
            Self::Byte(s) => s.len(),
            Self::Short(s) => s.len(),
            Self::Int(s) => s.len(),
            Self::Long(s) => s.len(),
            Self::Float(s) => s.len(),
            Self::Double(s) => s.len(),
            Self::Bool(s) => s.len(),
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T: Element> From<&'a [T]> for ArrayRef<'a> {
    fn from(slice: &'a [T]) -> Self {
        T::wrap(slice)
    }
}

/// Mutable buffer handle tagged with its scalar kind.
#[derive(Debug, PartialEq)]
pub enum ArrayMut<'a> {
    /// Unsigned bytes.
    UByte(&'a mut [u8]),
    /// Characters.
    Byte(&'a mut [i8]),
    /// 16-bit integers.
    Short(&'a mut [i16]),
    /// 32-bit integers.
    Int(&'a mut [i32]),
    /// 64-bit integers.
    Long(&'a mut [i64]),
    /// 32-bit floats.
    Float(&'a mut [f32]),
    /// 64-bit floats.
    Double(&'a mut [f64]),
    /// Booleans.
    Bool(&'a mut [bool]),
}

impl ArrayMut<'_> {
    /// Scalar kind of the buffer.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::UByte(_) => ScalarKind::UByte,
            Self::Byte(_) => ScalarKind::Byte,
            Self::Short(_) => ScalarKind::Short,
            Self::Int(_) => ScalarKind::Int,
            Self::Long(_) => ScalarKind::Long,
            Self::Float(_) => ScalarKind::Float,
            Self::Double(_) => ScalarKind::Double,
            Self::Bool(_) => ScalarKind::Bool,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::UByte(s) => s.len(),
            Self::Byte(s) => s.len(),
            Self::Short(s) => s.len(),
            Self::Int(s) => s.len(),
            Self::Long(s) => s.len(),
            Self::Float(s) => s.len(),
            Self::Double(s) => s.len(),
            Self::Bool(s) => s.len(),
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T: Element> From<&'a mut [T]> for ArrayMut<'a> {
    fn from(slice: &'a mut [T]) -> Self {
        T::wrap_mut(slice)
    }
}
