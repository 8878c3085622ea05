pub mod boolean;
pub mod character;
pub mod number;

pub use boolean::boolean;
pub use character::character;
pub use number::{NumberParser, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64};
