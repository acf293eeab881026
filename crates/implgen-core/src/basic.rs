//! Basic (predeclared primitive) type kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical Go basic type kinds.
///
/// Includes the kinds a type checker can report that have no type syntax
/// (untyped constants, `unsafe.Pointer`, invalid). Those exist so reflected
/// input can be represented faithfully; rendering them is a fault.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BasicKind {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "int8")]
    Int8,
    #[serde(rename = "int16")]
    Int16,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "uint")]
    Uint,
    #[serde(rename = "uint8")]
    Uint8,
    #[serde(rename = "uint16")]
    Uint16,
    #[serde(rename = "uint32")]
    Uint32,
    #[serde(rename = "uint64")]
    Uint64,
    #[serde(rename = "uintptr")]
    Uintptr,
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "float64")]
    Float64,
    #[serde(rename = "complex64")]
    Complex64,
    #[serde(rename = "complex128")]
    Complex128,
    #[serde(rename = "string")]
    String,
    /// Alias of `uint8` that keeps its own spelling.
    #[serde(rename = "byte")]
    Byte,
    /// Alias of `int32` that keeps its own spelling.
    #[serde(rename = "rune")]
    Rune,
    #[serde(rename = "unsafe.Pointer")]
    UnsafePointer,
    #[serde(rename = "untyped bool")]
    UntypedBool,
    #[serde(rename = "untyped int")]
    UntypedInt,
    #[serde(rename = "untyped rune")]
    UntypedRune,
    #[serde(rename = "untyped float")]
    UntypedFloat,
    #[serde(rename = "untyped complex")]
    UntypedComplex,
    #[serde(rename = "untyped string")]
    UntypedString,
    #[serde(rename = "untyped nil")]
    UntypedNil,
    #[serde(rename = "invalid type")]
    Invalid,
}

impl BasicKind {
    pub const ALL: [BasicKind; 28] = [
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
        Self::Float32,
        Self::Float64,
        Self::Complex64,
        Self::Complex128,
        Self::String,
        Self::Byte,
        Self::Rune,
        Self::UnsafePointer,
        Self::UntypedBool,
        Self::UntypedInt,
        Self::UntypedRune,
        Self::UntypedFloat,
        Self::UntypedComplex,
        Self::UntypedString,
        Self::UntypedNil,
        Self::Invalid,
    ];

    /// Canonical spelling, as a type checker prints it.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::Byte => "byte",
            Self::Rune => "rune",
            Self::UnsafePointer => "unsafe.Pointer",
            Self::UntypedBool => "untyped bool",
            Self::UntypedInt => "untyped int",
            Self::UntypedRune => "untyped rune",
            Self::UntypedFloat => "untyped float",
            Self::UntypedComplex => "untyped complex",
            Self::UntypedString => "untyped string",
            Self::UntypedNil => "untyped nil",
            Self::Invalid => "invalid type",
        }
    }

    /// Whether this is the type of an untyped constant (or `nil`).
    pub fn is_untyped(self) -> bool {
        matches!(
            self,
            Self::UntypedBool
                | Self::UntypedInt
                | Self::UntypedRune
                | Self::UntypedFloat
                | Self::UntypedComplex
                | Self::UntypedString
                | Self::UntypedNil
        )
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
                | Self::Float32
                | Self::Float64
                | Self::Complex64
                | Self::Complex128
                | Self::Byte
                | Self::Rune
                | Self::UntypedInt
                | Self::UntypedRune
                | Self::UntypedFloat
                | Self::UntypedComplex
        )
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BasicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown basic type `{s}`"))
    }
}
