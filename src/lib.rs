//! Asynchronous transform combinators for [`Result`].
//!
//! [`AsyncMapExt`] mirrors `Result`'s `map` / `map_err` / `and_then` /
//! `or_else` / `unwrap_or_else` with closures that return a [`Future`];
//! [`catching`] and [`async_catching`] build a `Result` out of an operation
//! that may panic. Every combinator returns a concrete future type, so
//! nothing is boxed.
//!
//! [`AsyncMapExt`]: crate::result::AsyncMapExt
//! [`Future`]: core::future::Future
//! [`catching`]: crate::catching::catching
//! [`async_catching`]: crate::catching::async_catching
//!
//! ```
//! # #[tokio::main]
//! # async fn main() {
//! use async_results::prelude::*;
//!
//! let greeting: Result<String, i32> = Ok(1)
//!     .async_map(|x| async move { format!("hello #{x}") })
//!     .await;
//!
//! assert_eq!(greeting, Ok("hello #1".to_string()));
//! # }
//! ```

mod async_util;

pub mod catching;
pub mod chain;
pub mod prelude;
pub mod result;

pub use crate::catching::{async_catching, catching};
