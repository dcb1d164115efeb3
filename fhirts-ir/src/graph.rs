use serde::Serialize;

use crate::{EnumType, InterfaceType, PrimitiveType, Type};

/// The resolver's output: root types in first-resolved order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeGraph {
    types: Vec<Type>,
}

impl TypeGraph {
    pub fn new(types: Vec<Type>) -> Self {
        Self { types }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|t| t.name() == Some(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceType> {
        self.get(name).and_then(Type::as_interface)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceType> {
        self.types.iter().filter_map(Type::as_interface)
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumType> {
        self.types.iter().filter_map(Type::as_enum)
    }

    pub fn primitives(&self) -> impl Iterator<Item = &PrimitiveType> {
        self.types.iter().filter_map(Type::as_primitive)
    }

    /// True if `name` is `base` or inherits from it.
    pub fn derives_from(&self, name: &str, base: &str) -> bool {
        let mut current = Some(name);
        let mut remaining = self.types.len() + 1;
        while let Some(n) = current {
            if n == base {
                return true;
            }
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            current = self.interface(n).and_then(|i| i.base_type.as_deref());
        }
        false
    }

    pub fn into_types(self) -> Vec<Type> {
        self.types
    }
}

impl<'a> IntoIterator for &'a TypeGraph {
    type Item = &'a Type;
    type IntoIter = std::slice::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
