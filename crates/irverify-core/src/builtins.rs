//! Class ids of the built-in types both models refer to.

use crate::ClassId;

/// Package of the built-in types.
pub const BUILTINS_PACKAGE: &str = "kotlin";

fn builtin(name: &str) -> ClassId {
    ClassId::top_level(BUILTINS_PACKAGE, name)
}

pub fn any() -> ClassId {
    builtin("Any")
}

pub fn unit() -> ClassId {
    builtin("Unit")
}

pub fn nothing() -> ClassId {
    builtin("Nothing")
}

pub fn boolean() -> ClassId {
    builtin("Boolean")
}

pub fn int() -> ClassId {
    builtin("Int")
}

pub fn long() -> ClassId {
    builtin("Long")
}

pub fn double() -> ClassId {
    builtin("Double")
}

pub fn string() -> ClassId {
    builtin("String")
}

/// `kotlin.collections.List`.
pub fn list() -> ClassId {
    ClassId::top_level("kotlin.collections", "List")
}
