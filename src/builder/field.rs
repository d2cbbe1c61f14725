use crate::error::{Error, Result};
use crate::model::{FieldDescriptor, FieldType};
use crate::resolver;

/// Accumulates a base type and its array dimensions into a `FieldDescriptor`.
#[derive(Debug, Clone, Default)]
pub struct FieldDescriptorBuilder {
    field_type: Option<FieldType>,
}

impl FieldDescriptorBuilder {
    /// Creates a builder with no base type. `set_base_type` must be called before `build`.
    pub fn new() -> Self {
        FieldDescriptorBuilder { field_type: None }
    }

    /// Creates a builder with `name` as the base type of the field.
    pub fn for_type(name: &str, prefer_boxed: bool) -> Result<Self> {
        Self::new().set_base_type(name, prefer_boxed)
    }

    /// Sets the base type of the field, replacing any earlier base type and array dimensions.
    ///
    /// If `prefer_boxed` is set and `name` is a primitive, the wrapper class is used instead.
    pub fn set_base_type(self, name: &str, prefer_boxed: bool) -> Result<Self> {
        let field_type = resolver::resolve(name, prefer_boxed)?;
        Ok(self.set_field_type(field_type))
    }

    /// Sets an already resolved base type.
    pub fn set_field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Wraps the current type in `count` more array dimensions. Repeated calls add up.
    pub fn increase_array_dim(mut self, count: usize) -> Result<Self> {
        let mut field_type = self.field_type
            .take()
            .ok_or(Error::Configuration("base type must be set before wrapping in arrays"))?;
        for _ in 0..count {
            field_type = resolver::resolve_array_component(field_type);
        }
        self.field_type = Some(field_type);
        Ok(self)
    }

    pub fn build(self) -> Result<FieldDescriptor> {
        match self.field_type {
            Some(field_type) => {
                let descriptor = FieldDescriptor::new(field_type);
                debug!("built field descriptor {}", descriptor);
                Ok(descriptor)
            },
            None => Err(Error::Configuration("no base type configured")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::JvmDescriptor;

    #[test]
    fn test_object() {
        let descriptor = FieldDescriptorBuilder::for_type("java.lang.Object", false).unwrap()
            .build()
            .unwrap();
        assert_eq!(descriptor.to_descriptor_string(), "Ljava/lang/Object;");
    }

    #[test]
    fn test_multi_dim_array() {
        let descriptor = FieldDescriptorBuilder::for_type("double", false).unwrap()
            .increase_array_dim(3).unwrap()
            .build()
            .unwrap();
        assert_eq!(descriptor.to_descriptor_string(), "[[[D");
    }

    #[test]
    fn test_array_dims_add_up() {
        let descriptor = FieldDescriptorBuilder::for_type("java.lang.String", false).unwrap()
            .increase_array_dim(1).unwrap()
            .increase_array_dim(0).unwrap()
            .increase_array_dim(2).unwrap()
            .build()
            .unwrap();
        assert_eq!(descriptor.to_descriptor_string(), "[[[Ljava/lang/String;");
    }

    #[test]
    fn test_deep_array_renders() {
        let descriptor = FieldDescriptorBuilder::for_type("int", false).unwrap()
            .increase_array_dim(100_000).unwrap()
            .build()
            .unwrap();
        let rendered = descriptor.to_descriptor_string();
        assert_eq!(rendered, format!("{}I", "[".repeat(100_000)));
        assert_eq!(descriptor.field_type().dimensions(), 100_000);
    }

    #[test]
    fn test_set_base_type_overwrites() {
        let descriptor = FieldDescriptorBuilder::for_type("int", false).unwrap()
            .increase_array_dim(2).unwrap()
            .set_base_type("long", true).unwrap()
            .build()
            .unwrap();
        assert_eq!(descriptor.to_descriptor_string(), "Ljava/lang/Long;");
    }

    #[test]
    fn test_build_without_base_type() {
        let err = FieldDescriptorBuilder::new().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "no base type configured");
    }

    #[test]
    fn test_array_dim_without_base_type() {
        for count in 0..3 {
            let err = FieldDescriptorBuilder::new().increase_array_dim(count).unwrap_err();
            assert_eq!(err, Error::Configuration("base type must be set before wrapping in arrays"));
        }
    }

    #[test]
    fn test_invalid_base_type() {
        let err = FieldDescriptorBuilder::new().set_base_type("void", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }
}
