//! Declarative contract descriptions
//!
//! A [`Schema`] lists the fields of a payload together with the primitive
//! kind and the constraints each one must satisfy. Schemas are plain
//! `'static` data; [`crate::validation`] is the only thing that interprets
//! them.

use serde::de::DeserializeOwned;

/// Primitive JSON kind expected for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    /// RFC 3339 string, as accepted by chrono's parser: a lowercase `t`
    /// or `z`, a space in place of `T`, and leap seconds are all allowed
    Timestamp,
}

impl FieldKind {
    /// Human readable name used in validation issues
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Timestamp => "RFC 3339 timestamp",
        }
    }
}

/// Constraint applied to a field once its kind matches
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Minimum string length, in characters
    MinLength(usize),
    /// Maximum string length, in characters
    MaxLength(usize),
    /// Inclusive numeric lower bound
    Minimum(f64),
    /// Membership in a fixed set of string values
    OneOf(&'static [&'static str]),
    /// Hyphenated UUID syntax
    Uuid,
    /// Email address syntax
    Email,
}

/// A single field of a contract
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub constraints: &'static [Constraint],
}

impl Field {
    /// A field that must be present and non-null
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            constraints: &[],
        }
    }

    /// A field that may be absent or null
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            constraints: &[],
        }
    }

    pub const fn with(self, constraints: &'static [Constraint]) -> Self {
        Self {
            constraints,
            ..self
        }
    }
}

/// Named description of a payload shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// A typed record bound to the schema that describes it
///
/// Implementors must deserialize from any payload that passes
/// [`crate::validation::check`] against [`Contract::SCHEMA`].
pub trait Contract: DeserializeOwned {
    const SCHEMA: Schema;
}
