pub use crate::catching::{async_catching, catching};
pub use crate::result::AsyncMapExt as _;
