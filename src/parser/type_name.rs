//! Parses the type names callers use to refer to types:
//!
//! ```text
//! TypeName ::= BaseName Dims
//! BaseName ::= Segment ( '.' Segment )*
//! Segment  ::= one or more characters other than '.', ';', '[', ']', '/', '(', ')' and whitespace
//! Dims     ::= ( '[' ']' )*
//! ```
//!
//! Segments follow the unqualified names of
//! [§4.2.2](https://docs.oracle.com/javase/specs/jvms/se11/html/jvms-4.html#jvms-4.2.2), so a
//! resolved name can always be embedded in a descriptor. Whether the base name is a primitive or a
//! class is decided by the resolver, and class names are never checked against a class path.

use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::char;
use nom::combinator::{all_consuming, map, recognize};
use nom::multi::{many0_count, separated_list1};
use nom::sequence::pair;
use nom::IResult;

use crate::error::{Error, Result};

/// A parsed type name: an element name followed by some number of `[]` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeName<'a> {
    pub base: &'a str,
    pub dimensions: usize,
}

fn is_segment_char(c: char) -> bool {
    !matches!(c, '.' | ';' | '[' | ']' | '/' | '(' | ')') && !c.is_whitespace()
}

fn base_name(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(char('.'), take_while1(is_segment_char)))(input)
}

fn dimensions(input: &str) -> IResult<&str, usize> {
    many0_count(tag("[]"))(input)
}

fn type_name(input: &str) -> IResult<&str, TypeName<'_>> {
    map(pair(base_name, dimensions), |(base, dimensions)| TypeName {
        base,
        dimensions,
    })(input)
}

/// Parses a complete type name such as `int`, `java.util.Map$Entry` or `double[][]`.
pub fn parse_type_name(input: &str) -> Result<TypeName<'_>> {
    match all_consuming(type_name)(input) {
        Ok((_, name)) => Ok(name),
        Err(_) => Err(Error::InvalidType(format!("{} is not a valid type name", input))),
    }
}
