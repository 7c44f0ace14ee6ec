//! Spelling-based classification of identifiers.
//!
//! The tokenizer tags `u8` and `bool` as plain identifiers. Highlighters use
//! these predicates to give primitive type names their own style.

/// Primitive type spellings other than the arbitrary-width integers.
const SIMPLE_TYPES: [&str; 26] = [
    "f16",
    "f32",
    "f64",
    "f80",
    "f128",
    "c_longdouble",
    "c_short",
    "c_ushort",
    "c_int",
    "c_uint",
    "c_long",
    "c_ulong",
    "c_longlong",
    "c_ulonglong",
    "c_char",
    "anyopaque",
    "void",
    "bool",
    "isize",
    "usize",
    "noreturn",
    "type",
    "anyerror",
    "anyframe",
    "comptime_int",
    "comptime_float",
];

/// Returns `true` if `name` is a primitive type: one of the fixed spellings
/// (`bool`, `void`, `f32`, `comptime_int`, ...) or an integer type.
pub fn is_simple_type(name: &str) -> bool {
    SIMPLE_TYPES.contains(&name) || is_int_type(name)
}

/// Returns `true` if `name` matches `^[iu][0-9]+$` (`u8`, `i32`, `u0`).
pub fn is_int_type(name: &str) -> bool {
    match name.as_bytes() {
        [b'i' | b'u', digits @ ..] => !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}
