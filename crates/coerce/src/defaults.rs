//! Zero defaults returned by the primitive (non-nullable) operations in place
//! of absence.

pub const BOOL: bool = false;
pub const I8: i8 = 0;
pub const I16: i16 = 0;
pub const I32: i32 = 0;
pub const I64: i64 = 0;
pub const F32: f32 = 0.0;
pub const F64: f64 = 0.0;
/// A single space, not NUL.
pub const CHAR: char = ' ';
