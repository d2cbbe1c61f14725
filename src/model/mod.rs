//! Structures for [JVM descriptors](https://docs.oracle.com/javase/specs/jvms/se11/html/jvms-4.html#jvms-4.3).

pub mod descriptor;
pub mod field_type;

pub use self::descriptor::{FieldDescriptor, JvmDescriptor, MethodDescriptor};
pub use self::field_type::{BaseType, FieldType, ObjectType, ReturnType};
