// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Binary codec shared by every clock crate.
//!
//! Serializers append to a caller-provided buffer, deserializers are `nom`
//! parsers generic over the error type so that callers can pick between a cheap
//! error and the verbose [`DeserializeError`].

use displaydoc::Display;
use nom::error::{context, ContextError, ErrorKind, ParseError};
use nom::multi::length_data;
use nom::{IResult, Parser};
use std::fmt;
use std::ops::{Bound, RangeBounds};
use thiserror::Error;
use unsigned_varint::nom as unsigned_nom;

#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum SerializeError {
    /// Number {0} is too big to be serialized
    NumberTooBig(String),
    /// String too big {0}
    StringTooBig(String),
    /// General error {0}
    GeneralError(String),
}

/// Error accumulated while walking down nested deserializers.
#[derive(Debug, Default)]
pub struct DeserializeError<'a> {
    errors: Vec<(&'a [u8], ErrorKind)>,
    contexts: Vec<(&'a [u8], &'static str)>,
}

impl<'a> ParseError<&'a [u8]> for DeserializeError<'a> {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        Self {
            errors: vec![(input, kind)],
            contexts: Vec::new(),
        }
    }

    fn append(input: &'a [u8], kind: ErrorKind, mut other: Self) -> Self {
        other.errors.push((input, kind));
        other
    }
}

impl<'a> ContextError<&'a [u8]> for DeserializeError<'a> {
    fn add_context(input: &'a [u8], ctx: &'static str, mut other: Self) -> Self {
        other.contexts.push((input, ctx));
        other
    }
}

impl<'a> fmt::Display for DeserializeError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // innermost context first, as pushed by nom
        for (input, ctx) in &self.contexts {
            writeln!(f, "{} / remaining {} bytes", ctx, input.len())?;
        }
        for (input, kind) in &self.errors {
            writeln!(f, "{} / remaining {} bytes", kind.description(), input.len())?;
        }
        Ok(())
    }
}

/// Trait implemented by every deserializer of the codec.
pub trait Deserializer<T> {
    /// Parses `T` out of `buffer`, returning the unread rest.
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], T, E>;
}

/// Trait implemented by every serializer of the codec.
pub trait Serializer<T> {
    /// Appends the encoding of `value` to `buffer`.
    fn serialize(&self, value: &T, buffer: &mut Vec<u8>) -> Result<(), SerializeError>;
}

macro_rules! gen_varint {
    ($($type:ident, $bs:ident, $ds:ident, $buf:ident, $d:expr);*) => {
        $(
            #[doc = concat!("Serializer for ", stringify!($type), " in a varint form")]
            #[derive(Clone, Default)]
            pub struct $bs;

            impl $bs {
                #[doc = concat!("Creates a new ", stringify!($bs))]
                pub const fn new() -> Self {
                    Self
                }
            }

            impl Serializer<$type> for $bs {
                fn serialize(&self, value: &$type, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
                    let mut tmp = unsigned_varint::encode::$buf();
                    buffer.extend_from_slice(unsigned_varint::encode::$type(*value, &mut tmp));
                    Ok(())
                }
            }

            #[doc = concat!("Deserializer for ", stringify!($type), " in a varint form")]
            #[derive(Clone)]
            pub struct $ds {
                range: (Bound<$type>, Bound<$type>),
            }

            impl $ds {
                #[doc = concat!("Creates a new ", stringify!($ds), " accepting values within the given bounds")]
                pub const fn new(min: Bound<$type>, max: Bound<$type>) -> Self {
                    Self { range: (min, max) }
                }
            }

            impl Deserializer<$type> for $ds {
                fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
                    &self,
                    buffer: &'a [u8],
                ) -> IResult<&'a [u8], $type, E> {
                    context($d, |input: &'a [u8]| {
                        let (rest, value) = unsigned_nom::$type(input).map_err(|_| {
                            nom::Err::Error(ParseError::from_error_kind(input, ErrorKind::Fail))
                        })?;
                        if !self.range.contains(&value) {
                            return Err(nom::Err::Error(ParseError::from_error_kind(
                                input,
                                ErrorKind::Verify,
                            )));
                        }
                        Ok((rest, value))
                    })(buffer)
                }
            }
        )*
    };
}

gen_varint! {
    u64, U64VarIntSerializer, U64VarIntDeserializer, u64_buffer, "Failed u64 deserialization"
}

/// Length-prefixed UTF-8 string serializer.
#[derive(Clone, Default)]
pub struct StringSerializer {
    length_serializer: U64VarIntSerializer,
}

impl StringSerializer {
    /// Creates a `StringSerializer`
    pub const fn new() -> Self {
        Self {
            length_serializer: U64VarIntSerializer::new(),
        }
    }
}

impl Serializer<String> for StringSerializer {
    fn serialize(&self, value: &String, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
        let len: u64 = value.len().try_into().map_err(|_| {
            SerializeError::StringTooBig("the string is too big to be serialized".to_string())
        })?;
        self.length_serializer.serialize(&len, buffer)?;
        buffer.extend(value.as_bytes());
        Ok(())
    }
}

/// Length-prefixed UTF-8 string deserializer.
#[derive(Clone)]
pub struct StringDeserializer {
    length_deserializer: U64VarIntDeserializer,
}

impl StringDeserializer {
    /// Creates a `StringDeserializer` accepting lengths within the given bounds
    pub const fn new(min_length: Bound<u64>, max_length: Bound<u64>) -> Self {
        Self {
            length_deserializer: U64VarIntDeserializer::new(min_length, max_length),
        }
    }
}

impl Deserializer<String> for StringDeserializer {
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], String, E> {
        context("Failed String deserialization", |input: &'a [u8]| {
            let (rest, data) =
                length_data(|input| self.length_deserializer.deserialize(input)).parse(input)?;
            let value = String::from_utf8(data.to_vec()).map_err(|_| {
                nom::Err::Error(ParseError::from_error_kind(data, ErrorKind::Verify))
            })?;
            Ok((rest, value))
        })(buffer)
    }
}
