//! Contains a parser for source-style Java type names.
//!
//! # Examples
//!
//! Basic usage:
//! ```
//! use jvm_descriptor::parser::type_name::parse_type_name;
//!
//! let name = parse_type_name("java.lang.String[]").unwrap();
//! assert_eq!(name.base, "java.lang.String");
//! assert_eq!(name.dimensions, 1);
//! ```

pub mod type_name;
