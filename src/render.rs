//! Renders field types and descriptors into descriptor strings.
//!
//! ```text
//! FieldDescriptor   ::= BaseType | ObjectType | ArrayType
//! BaseType          ::= 'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z'
//! ObjectType        ::= 'L' ClassName ';'
//! ArrayType         ::= '[' ComponentType
//! MethodDescriptor  ::= '(' ParameterDescriptor* ')' ReturnDescriptor
//! ReturnDescriptor  ::= FieldType | 'V'
//! ```
//!
//! Every value reaching this module is valid by construction, so rendering cannot fail.

use crate::error::Error;
use crate::model::{BaseType, FieldDescriptor, FieldType, MethodDescriptor, ReturnType};

/// A production of the descriptor grammar, with zero or more slots for nested descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    Base(BaseType),
    Void,
    /// `L` _ClassName_ `;`
    Reference,
    /// `(` _ParameterDescriptor*_ `)` _ReturnDescriptor_
    Method,
}

impl Template {
    fn placeholders(self) -> usize {
        match self {
            Template::Base(_) | Template::Void => 0,
            Template::Reference => 1,
            Template::Method => 2,
        }
    }

    /// Fills the slots of this production. A mismatched number of values is a bug in this module.
    fn substitute(self, values: &[&str]) -> String {
        let expected = self.placeholders();
        if values.len() != expected {
            panic!("{}", Error::InternalArity { expected, actual: values.len() });
        }

        match self {
            Template::Base(base) => base.code().to_string(),
            Template::Void => String::from("V"),
            Template::Reference => format!("L{};", values[0]),
            Template::Method => format!("({}){}", values[0], values[1]),
        }
    }
}

/// Renders `ty`. Array dimensions are written as a run of `[` in front of the element type, so
/// the cost is linear in the number of dimensions.
pub fn render_field_type(ty: &FieldType) -> String {
    let mut rendered = String::with_capacity(ty.dimensions() + 1);
    let mut ty = ty;
    loop {
        match *ty {
            FieldType::Array(ref component) => {
                rendered.push('[');
                ty = component;
            },
            FieldType::Base(base) => {
                rendered.push_str(&Template::Base(base).substitute(&[]));
                return rendered;
            },
            FieldType::Object(ref object) => {
                rendered.push_str(&Template::Reference.substitute(&[object.internal_name()]));
                return rendered;
            },
        }
    }
}

pub fn render_return_type(ret: &ReturnType) -> String {
    match *ret {
        ReturnType::Void => Template::Void.substitute(&[]),
        ReturnType::Type(ref ty) => render_field_type(ty),
    }
}

pub fn render_field_descriptor(descriptor: &FieldDescriptor) -> String {
    render_field_type(descriptor.field_type())
}

pub fn render_method_descriptor(descriptor: &MethodDescriptor) -> String {
    let params: String = descriptor.parameters().iter().map(render_field_type).collect();
    let ret = render_return_type(descriptor.return_type());
    Template::Method.substitute(&[params.as_str(), ret.as_str()])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::resolver;

    #[test]
    fn test_base_type_codes() {
        let expected = [
            (BaseType::Byte, "B"),
            (BaseType::Char, "C"),
            (BaseType::Double, "D"),
            (BaseType::Float, "F"),
            (BaseType::Int, "I"),
            (BaseType::Long, "J"),
            (BaseType::Short, "S"),
            (BaseType::Boolean, "Z"),
        ];
        for &(base, code) in expected.iter() {
            assert_eq!(render_field_type(&FieldType::Base(base)), code);
        }
    }

    #[test]
    fn test_nested_arrays() {
        let object = resolver::resolve_reference("java.lang.String").unwrap();
        let array = FieldType::array_of(FieldType::array_of(FieldType::Object(object)));
        assert_eq!(render_field_type(&array), "[[Ljava/lang/String;");
    }

    #[test]
    fn test_return_types() {
        assert_eq!(render_return_type(&ReturnType::Void), "V");
        let long = ReturnType::Type(FieldType::Base(BaseType::Long));
        assert_eq!(render_return_type(&long), "J");
    }

    #[test]
    fn test_method_without_parameters() {
        let descriptor = MethodDescriptor::new(vec![], ReturnType::Void);
        assert_eq!(render_method_descriptor(&descriptor), "()V");
    }

    #[test]
    fn test_deep_array() {
        let mut ty = FieldType::Base(BaseType::Int);
        for _ in 0..100_000 {
            ty = FieldType::array_of(ty);
        }
        let rendered = render_field_type(&ty);
        assert_eq!(rendered.len(), 100_001);
        assert!(rendered.starts_with("[[[["));
        assert!(rendered.ends_with("[I"));
        assert_eq!(rendered.matches('[').count(), 100_000);
    }

    #[test]
    #[should_panic(expected = "expects 1 placeholder(s), got 0")]
    fn test_arity_mismatch_panics() {
        Template::Reference.substitute(&[]);
    }
}
