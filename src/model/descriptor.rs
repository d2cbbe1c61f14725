//! Frozen field and method descriptors. Neither exposes a mutator, so a descriptor may be shared
//! freely once built.

use std::fmt;

use crate::builder::{FieldDescriptorBuilder, MethodDescriptorBuilder};
use crate::error::Result;
use crate::model::field_type::{FieldType, ReturnType};
use crate::render;
use crate::resolver;

/// A value that can be written out as a descriptor string.
pub trait JvmDescriptor {
    fn to_descriptor_string(&self) -> String;
}

/// From [§4.3.2](https://docs.oracle.com/javase/specs/jvms/se11/html/jvms-4.html#jvms-4.3.2): a
/// _field descriptor_ represents the type of a class, instance, or local variable.
///
/// This does not verify that an array type has at most 255 dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(field_type: FieldType) -> FieldDescriptor {
        FieldDescriptor { field_type }
    }

    /// Creates a descriptor from a source-style type name such as `int`, `java.lang.Object` or
    /// `double[][]`. If `prefer_boxed` is set and the name is a bare primitive, the wrapper class
    /// is used instead.
    pub fn from_type_name(name: &str, prefer_boxed: bool) -> Result<FieldDescriptor> {
        resolver::resolve(name, prefer_boxed).map(FieldDescriptor::new)
    }

    pub fn builder() -> FieldDescriptorBuilder {
        FieldDescriptorBuilder::new()
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }
}

impl JvmDescriptor for FieldDescriptor {
    fn to_descriptor_string(&self) -> String {
        render::render_field_descriptor(self)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_descriptor_string())
    }
}

/// From [§4.3.3](https://docs.oracle.com/javase/specs/jvms/se11/html/jvms-4.html#jvms-4.3.3): a
/// _method descriptor_ contains zero or more _parameter descriptors_, representing the types of
/// parameters that the method takes, and a _return descriptor_, representing the type of the value
/// (if any) that the method returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    parameters: Vec<FieldType>,
    return_type: ReturnType,
}

impl MethodDescriptor {
    pub fn new(parameters: Vec<FieldType>, return_type: ReturnType) -> MethodDescriptor {
        MethodDescriptor {
            parameters,
            return_type,
        }
    }

    pub fn builder() -> MethodDescriptorBuilder {
        MethodDescriptorBuilder::new()
    }

    /// The parameter types, in declaration order.
    pub fn parameters(&self) -> &[FieldType] {
        &self.parameters
    }

    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }
}

impl JvmDescriptor for MethodDescriptor {
    fn to_descriptor_string(&self) -> String {
        render::render_method_descriptor(self)
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_descriptor_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::field_type::BaseType;

    #[test]
    fn test_field_descriptor_from_type_name() {
        let primitive = FieldDescriptor::from_type_name("int", false).unwrap();
        let wrapper = FieldDescriptor::from_type_name("java.lang.Integer", false).unwrap();
        assert_eq!(primitive.to_descriptor_string(), "I");
        assert_eq!(wrapper.to_descriptor_string(), "Ljava/lang/Integer;");
        assert_eq!(FieldDescriptor::from_type_name("int", true).unwrap(), wrapper);
    }

    #[test]
    fn test_field_descriptor_from_array_type_name() {
        let descriptor = FieldDescriptor::from_type_name("double[][][]", false).unwrap();
        assert_eq!(descriptor.to_string(), "[[[D");
        assert_eq!(descriptor.field_type().dimensions(), 3);
    }

    #[test]
    fn test_method_descriptor_accessors() {
        let params = vec![FieldType::Base(BaseType::Long)];
        let ret = ReturnType::Type(FieldType::Base(BaseType::Boolean));
        let descriptor = MethodDescriptor::new(params.clone(), ret.clone());
        assert_eq!(descriptor.parameters(), &params[..]);
        assert_eq!(descriptor.return_type(), &ret);
        assert_eq!(descriptor.to_string(), "(J)Z");
    }
}
