use crate::error::Result;
use crate::model::{FieldType, MethodDescriptor, ReturnType};
use crate::resolver;

/// Accumulates parameter types and a return type into a `MethodDescriptor`.
///
/// Parameters accumulate in call order. The return type does not: whichever of `set_return_type`
/// and `set_void_return_type` was called last wins. A fresh builder returns `void`.
#[derive(Debug, Clone, Default)]
pub struct MethodDescriptorBuilder {
    params: Vec<FieldType>,
    return_type: ReturnType,
}

impl MethodDescriptorBuilder {
    pub fn new() -> Self {
        MethodDescriptorBuilder {
            params: Vec::new(),
            return_type: ReturnType::Void,
        }
    }

    /// Appends a parameter. If `prefer_boxed` is set and `name` is a primitive, the wrapper class
    /// is used instead.
    pub fn add_parameter(self, name: &str, prefer_boxed: bool) -> Result<Self> {
        let param = resolver::resolve(name, prefer_boxed)?;
        Ok(self.add_parameter_type(param))
    }

    /// Appends an already resolved parameter type.
    pub fn add_parameter_type(mut self, param: FieldType) -> Self {
        self.params.push(param);
        self
    }

    /// Appends each of `names` in order, keeping primitives in their primitive form.
    pub fn add_parameters<I, S>(self, names: I) -> Result<Self>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        names.into_iter().try_fold(self, |builder, name| builder.add_parameter(name.as_ref(), false))
    }

    /// Sets the return type, replacing any earlier return type or `void`.
    ///
    /// `void` itself is not accepted here unless boxed (yielding `java/lang/Void`); use
    /// `set_void_return_type` for a method with no return value.
    pub fn set_return_type(self, name: &str, prefer_boxed: bool) -> Result<Self> {
        let return_type = resolver::resolve(name, prefer_boxed)?;
        Ok(self.set_return_field_type(return_type))
    }

    /// Sets an already resolved return type.
    pub fn set_return_field_type(mut self, return_type: FieldType) -> Self {
        self.return_type = ReturnType::Type(return_type);
        self
    }

    pub fn set_void_return_type(mut self) -> Self {
        self.return_type = ReturnType::Void;
        self
    }

    pub fn build(self) -> MethodDescriptor {
        let descriptor = MethodDescriptor::new(self.params, self.return_type);
        debug!("built method descriptor {}", descriptor);
        descriptor
    }
}
