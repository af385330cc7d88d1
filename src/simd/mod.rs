pub mod dynamic;
pub mod slice;
pub mod traits;
pub mod vector128;

pub use dynamic::AnyVector128;
pub use traits::{SimdAdd, SimdDot, SimdMath};
pub use vector128::Vector128;
