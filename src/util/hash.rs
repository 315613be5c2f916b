use crate::object::{ObjectKind, Value};

const SEED: i32 = 1;
const PRIME: i32 = 31;

#[inline]
fn combine(hash: i32, next: i32) -> i32 {
    hash.wrapping_mul(PRIME).wrapping_add(next)
}

fn hash_number(n: f32) -> i32 {
    // Both zeros hash alike.
    if n == 0.0 {
        0
    } else {
        n.to_bits() as i32
    }
}

fn hash_text(s: &str) -> i32 {
    s.encode_utf16().fold(0, |h, unit| combine(h, i32::from(unit)))
}

fn hash_kind(kind: ObjectKind) -> i32 {
    match kind {
        ObjectKind::Mesh => 1,
        ObjectKind::Armature => 2,
        ObjectKind::Camera => 3,
        ObjectKind::Light => 4,
        ObjectKind::Speaker => 5,
        ObjectKind::Empty => 6,
    }
}

/// Deterministic 32-bit hash of an engine value.
///
/// Strings hash over their UTF-16 code units with multiplier 31, so
/// `hash_code(&"hello".into())` matches the classic string hash
/// `99162322`. Sequences fold their elements in order starting from 1.
pub fn hash_code(value: &Value) -> i32 {
    match value {
        Value::Number(n) => hash_number(*n),
        Value::Bool(true) => 1231,
        Value::Bool(false) => 1237,
        Value::Text(s) => hash_text(s),
        Value::Vector(v) => v.iter().fold(SEED, |h, n| combine(h, hash_number(*n))),
        Value::List(items) => items.iter().fold(SEED, |h, item| combine(h, hash_code(item))),
        Value::Object(obj) => combine(hash_text(&obj.name), hash_kind(obj.kind)),
    }
}
