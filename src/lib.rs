//! Builders and renderers for JVM [field and method
//! descriptors](https://docs.oracle.com/javase/specs/jvms/se11/html/jvms-4.html#jvms-4.3).
//!
//! Types are named the way Java source names them (`int`, `java.lang.Thread`, `double[][]`),
//! resolved into `FieldType`s, accumulated by a builder, and rendered on demand from the frozen
//! descriptor.
//!
//! # Examples
//!
//! ```
//! use jvm_descriptor::{FieldDescriptorBuilder, JvmDescriptor, MethodDescriptorBuilder};
//!
//! let field = FieldDescriptorBuilder::for_type("double", false)?
//!     .increase_array_dim(2)?
//!     .build()?;
//! assert_eq!(field.to_descriptor_string(), "[[D");
//!
//! let method = MethodDescriptorBuilder::new()
//!     .add_parameters(&["int", "double", "java.lang.Thread"])?
//!     .set_return_type("java.lang.Object", false)?
//!     .build();
//! assert_eq!(method.to_string(), "(IDLjava/lang/Thread;)Ljava/lang/Object;");
//! # Ok::<(), jvm_descriptor::Error>(())
//! ```

#[macro_use]
extern crate log;

pub mod builder;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod resolver;

pub use crate::builder::{field_descriptor, method_descriptor, method_descriptor_returning};
pub use crate::builder::{FieldDescriptorBuilder, MethodDescriptorBuilder};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::model::{BaseType, FieldDescriptor, FieldType, JvmDescriptor, MethodDescriptor,
                       ObjectType, ReturnType};
