//! Field types, as defined by
//! [§4.3.2](https://docs.oracle.com/javase/specs/jvms/se11/html/jvms-4.html#jvms-4.3.2) of the
//! JVM specification.

use std::fmt;
use std::mem;

use crate::render;

/// A primitive type. Only the eight kinds below are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// `byte` - Signed byte. Represented by `B`.
    Byte,
    /// `char` - Unicode character code point in the Basic Multilingual Plane, encoded with
    /// UTF-16. Represented by `C`.
    Char,
    /// `double` - Double-precision floating-point value. Represented by `D`.
    Double,
    /// `float` - Single-precision floating-point value. Represented by `F`.
    Float,
    /// `int` - Integer. Represented by `I`.
    Int,
    /// `long` - Long integer. Represented by `J`.
    Long,
    /// `short` - Signed short. Represented by `S`.
    Short,
    /// `boolean` - `true` or `false`. Represented by `Z`.
    Boolean,
}

impl BaseType {
    /// Every base type, in the order they are listed in §4.3.2.
    pub const ALL: [BaseType; 8] = [
        BaseType::Byte,
        BaseType::Char,
        BaseType::Double,
        BaseType::Float,
        BaseType::Int,
        BaseType::Long,
        BaseType::Short,
        BaseType::Boolean,
    ];

    /// Looks up a base type by its Java keyword. The match is case-sensitive.
    pub fn from_name(name: &str) -> Option<BaseType> {
        BaseType::ALL.iter().cloned().find(|base| base.name() == name)
    }

    /// The Java keyword naming this type.
    pub fn name(self) -> &'static str {
        match self {
            BaseType::Byte => "byte",
            BaseType::Char => "char",
            BaseType::Double => "double",
            BaseType::Float => "float",
            BaseType::Int => "int",
            BaseType::Long => "long",
            BaseType::Short => "short",
            BaseType::Boolean => "boolean",
        }
    }

    /// The single-character descriptor code of this type.
    pub fn code(self) -> char {
        match self {
            BaseType::Byte => 'B',
            BaseType::Char => 'C',
            BaseType::Double => 'D',
            BaseType::Float => 'F',
            BaseType::Int => 'I',
            BaseType::Long => 'J',
            BaseType::Short => 'S',
            BaseType::Boolean => 'Z',
        }
    }

    /// The internal name of the wrapper class used when this type is boxed.
    pub fn boxed_internal_name(self) -> &'static str {
        match self {
            BaseType::Byte => "java/lang/Byte",
            BaseType::Char => "java/lang/Character",
            BaseType::Double => "java/lang/Double",
            BaseType::Float => "java/lang/Float",
            BaseType::Int => "java/lang/Integer",
            BaseType::Long => "java/lang/Long",
            BaseType::Short => "java/lang/Short",
            BaseType::Boolean => "java/lang/Boolean",
        }
    }
}

/// A reference to an instance of a class, identified by its internal name: the binary name with
/// every `.` replaced by `/`. The internal name is never empty and never contains `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectType {
    internal_name: String,
}

impl ObjectType {
    /// Creates an object type from a binary name such as `java.lang.String`. The name is not
    /// checked against any class path.
    pub(crate) fn from_binary_name(binary_name: &str) -> ObjectType {
        debug_assert!(!binary_name.is_empty());
        ObjectType { internal_name: binary_name.replace('.', "/") }
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }
}

/// The type of a class, instance, or local variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Base(BaseType),
    Object(ObjectType),
    /// One array dimension around a component type.
    Array(Box<FieldType>),
}

impl FieldType {
    /// Wraps `component` in one array dimension.
    pub fn array_of(component: FieldType) -> FieldType {
        FieldType::Array(Box::new(component))
    }

    /// The number of array dimensions around the element type. Zero for non-array types.
    pub fn dimensions(&self) -> usize {
        let mut dimensions = 0;
        let mut ty = self;
        while let FieldType::Array(ref component) = *ty {
            dimensions += 1;
            ty = component;
        }
        dimensions
    }

    /// The component type of an array, or `None` if this is not an array type.
    pub fn component_type(&self) -> Option<&FieldType> {
        match *self {
            FieldType::Array(ref component) => Some(component),
            _ => None,
        }
    }

    /// The innermost non-array type.
    pub fn element_type(&self) -> &FieldType {
        let mut ty = self;
        while let FieldType::Array(ref component) = *ty {
            ty = component;
        }
        ty
    }
}

// Unlinks nested arrays one level at a time.
impl Drop for FieldType {
    fn drop(&mut self) {
        if let FieldType::Array(ref mut component) = *self {
            let mut next = mem::replace(&mut **component, FieldType::Base(BaseType::Int));
            while let FieldType::Array(ref mut inner) = next {
                let component = mem::replace(&mut **inner, FieldType::Base(BaseType::Int));
                next = component;
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::render_field_type(self))
    }
}

/// The type of the value returned by a method, which may be `void`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ReturnType {
    #[default]
    Void,
    Type(FieldType),
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::render_return_type(self))
    }
}
