//! Builders which accumulate types into frozen descriptors.
//!
//! Builders are plain owned values with no internal synchronization. Each mutator consumes the
//! builder and hands it back, and `build` consumes it for good, so a builder cannot be changed
//! after its descriptor has been produced.

mod field;
mod method;

pub use self::field::FieldDescriptorBuilder;
pub use self::method::MethodDescriptorBuilder;

use crate::error::Result;
use crate::model::{FieldDescriptor, MethodDescriptor};

/// Creates a field descriptor for `name`, wrapped in `array_dims` array dimensions.
pub fn field_descriptor(name: &str, prefer_boxed: bool, array_dims: usize)
                        -> Result<FieldDescriptor> {
    FieldDescriptorBuilder::for_type(name, prefer_boxed)?
        .increase_array_dim(array_dims)?
        .build()
}

/// Creates a method descriptor returning `void`. Primitive parameters keep their primitive form;
/// use `MethodDescriptorBuilder` to box them.
pub fn method_descriptor<I, S>(params: I) -> Result<MethodDescriptor>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Ok(MethodDescriptorBuilder::new()
        .add_parameters(params)?
        .set_void_return_type()
        .build())
}

/// Creates a method descriptor returning `return_type`.
pub fn method_descriptor_returning<I, S>(return_type: &str, params: I) -> Result<MethodDescriptor>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Ok(MethodDescriptorBuilder::new()
        .add_parameters(params)?
        .set_return_type(return_type, false)?
        .build())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::JvmDescriptor;

    #[test]
    fn test_field_descriptor() {
        assert_eq!(field_descriptor("int", false, 0).unwrap().to_descriptor_string(), "I");
        assert_eq!(field_descriptor("int", true, 0).unwrap().to_descriptor_string(),
                   "Ljava/lang/Integer;");
        assert_eq!(field_descriptor("java.lang.Object", false, 0).unwrap().to_descriptor_string(),
                   "Ljava/lang/Object;");
        assert_eq!(field_descriptor("double[]", false, 2).unwrap().to_descriptor_string(), "[[[D");
    }

    #[test]
    fn test_method_descriptor() {
        let empty: [&str; 0] = [];
        assert_eq!(method_descriptor(&empty).unwrap().to_descriptor_string(), "()V");

        let descriptor = method_descriptor_returning(
            "java.lang.Object", &["int", "double", "java.lang.Thread"]).unwrap();
        assert_eq!(descriptor.to_descriptor_string(), "(IDLjava/lang/Thread;)Ljava/lang/Object;");
    }
}
