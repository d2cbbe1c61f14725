//! Maps caller-supplied type names onto `FieldType`s.
//!
//! A type name is either one of the primitive keywords or a binary class name such as
//! `java.lang.Thread`, optionally followed by `[]` pairs (see `parser::type_name`). Class names
//! are taken at face value and never looked up.

use crate::error::{Error, Result};
use crate::model::{BaseType, FieldType, ObjectType};
use crate::parser::type_name::{parse_type_name, TypeName};

/// The primitive-like keyword which names no field type, only the absence of a return value.
const VOID: &str = "void";

/// The wrapper class of `void`.
const BOXED_VOID: &str = "java.lang.Void";

fn not_primitive(name: &str) -> Error {
    Error::InvalidType(format!("{} does not represent a primitive type", name))
}

fn not_object_type() -> Error {
    Error::InvalidType(String::from("ObjectType cannot be used for array or primitive types"))
}

fn is_primitive_keyword(name: &str) -> bool {
    name == VOID || BaseType::from_name(name).is_some()
}

/// Resolves one of the eight primitive keywords, matched case-sensitively.
pub fn resolve_primitive(name: &str) -> Result<BaseType> {
    let base = BaseType::from_name(name).ok_or_else(|| not_primitive(name))?;
    trace!("resolved {} as base type {:?}", name, base);
    Ok(base)
}

/// Resolves the binary name of a class or interface. Array and primitive names are rejected,
/// including the JVM's own array form (`[I`, `[Ljava.lang.String;`).
pub fn resolve_reference(qualified_name: &str) -> Result<ObjectType> {
    if qualified_name.starts_with('[') {
        return Err(not_object_type());
    }
    let TypeName { base, dimensions } = parse_type_name(qualified_name)?;
    if dimensions > 0 || is_primitive_keyword(base) {
        return Err(not_object_type());
    }
    let object = ObjectType::from_binary_name(base);
    trace!("resolved {} as object type {}", qualified_name, object.internal_name());
    Ok(object)
}

/// Wraps `component` in one array dimension.
pub fn resolve_array_component(component: FieldType) -> FieldType {
    FieldType::array_of(component)
}

/// Resolves any type name, including array types.
///
/// If `prefer_boxed` is set and `name` is a bare primitive (or `void`), the wrapper class is used
/// in its place. Boxing never applies to array element types: `int[]` is `[I` either way.
pub fn resolve(name: &str, prefer_boxed: bool) -> Result<FieldType> {
    let TypeName { base, dimensions } = parse_type_name(name)?;
    let boxed = prefer_boxed && dimensions == 0;

    let mut ty = if base == VOID {
        if !boxed {
            return Err(not_primitive(base));
        }
        FieldType::Object(ObjectType::from_binary_name(BOXED_VOID))
    } else {
        match BaseType::from_name(base) {
            Some(primitive) if boxed =>
                FieldType::Object(ObjectType::from_binary_name(primitive.boxed_internal_name())),
            Some(primitive) => FieldType::Base(primitive),
            None => FieldType::Object(ObjectType::from_binary_name(base)),
        }
    };
    for _ in 0..dimensions {
        ty = resolve_array_component(ty);
    }

    trace!("resolved {} (prefer_boxed: {}) as {}", name, prefer_boxed, ty);
    Ok(ty)
}
