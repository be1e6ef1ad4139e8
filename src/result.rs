use core::future::Future;

use crate::chain::{Chain, Forward, WrapErr, WrapOk};

pub trait AsyncMapExt<T, E> {
    /// Basically same as [`Result::map`], but it accepts closure that returns [`Future`]
    ///
    /// The closure runs only when `self` is `Ok`; an `Err` is passed through
    /// untouched. A panic inside the closure is not converted into `Err` —
    /// see [`catching`] for the one place that conversion happens.
    ///
    /// [`Result::map`]: core::result::Result::map
    /// [`Future`]: core::future::Future
    /// [`catching`]: crate::catching::catching
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main]
    /// # async fn main() {
    /// use async_results::prelude::*;
    ///
    /// type R = Result<i32, i32>;
    ///
    /// assert_eq!(
    ///     R::Ok(1).async_map(|x| async move { x + 1 }).await,
    ///     Ok(2),
    /// );
    ///
    /// assert_eq!(
    ///     R::Err(4).async_map(|x| async move { x + 1 }).await,
    ///     Err(4),
    /// );
    /// # }
    /// ```
    fn async_map<TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, T, TFuture, WrapOk<TFuture::Output, E>, Result<TFuture::Output, E>>
    where
        TFn: FnOnce(T) -> TFuture,
        TFuture: Future;

    /// Basically same as [`Result::map_err`], but it accepts closure that returns [`Future`]
    ///
    /// [`Result::map_err`]: core::result::Result::map_err
    /// [`Future`]: core::future::Future
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main]
    /// # async fn main() {
    /// use async_results::prelude::*;
    ///
    /// type R = Result<i32, i32>;
    ///
    /// assert_eq!(
    ///     R::Err(4).async_map_err(|e| async move { e.to_string() }).await,
    ///     Err("4".to_string()),
    /// );
    ///
    /// assert_eq!(
    ///     R::Ok(1).async_map_err(|e| async move { e.to_string() }).await,
    ///     Ok(1),
    /// );
    /// # }
    /// ```
    fn async_map_err<TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, E, TFuture, WrapErr<T, TFuture::Output>, Result<T, TFuture::Output>>
    where
        TFn: FnOnce(E) -> TFuture,
        TFuture: Future;

    /// Basically same as [`Result::and_then`], but it accepts closure that returns [`Future`]
    ///
    /// The closure's `Result` is returned as-is: `Ok(1).async_and_then(f)`
    /// resolves to exactly `f(1).await`, never to a nested
    /// `Ok(Result<_, _>)`. Use [`async_map`] when the closure produces a
    /// plain value rather than a `Result`.
    ///
    /// [`Result::and_then`]: core::result::Result::and_then
    /// [`Future`]: core::future::Future
    /// [`async_map`]: AsyncMapExt::async_map
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main]
    /// # async fn main() {
    /// use async_results::prelude::*;
    ///
    /// type R = Result<i32, i32>;
    ///
    /// assert_eq!(
    ///     R::Ok(1).async_and_then(|x| async move { R::Ok(x + 1) }).await,
    ///     Ok(2),
    /// );
    ///
    /// assert_eq!(
    ///     R::Ok(1).async_and_then(|_| async move { R::Err(-1) }).await,
    ///     Err(-1),
    /// );
    ///
    /// assert_eq!(
    ///     R::Err(4).async_and_then(|x| async move { R::Ok(x + 1) }).await,
    ///     Err(4),
    /// );
    /// # }
    /// ```
    fn async_and_then<U, TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, T, TFuture, Forward<TFuture::Output>, TFuture::Output>
    where
        TFn: FnOnce(T) -> TFuture,
        TFuture: Future<Output = Result<U, E>>;

    /// Basically same as [`Result::or_else`], but it accepts closure that returns [`Future`]
    ///
    /// The closure can either recover the failure into an `Ok` or replace it
    /// with a failure of a different type.
    ///
    /// [`Result::or_else`]: core::result::Result::or_else
    /// [`Future`]: core::future::Future
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main]
    /// # async fn main() {
    /// use async_results::prelude::*;
    ///
    /// let recovered: Result<i32, String> = Err(4)
    ///     .async_or_else(|e: i32| async move {
    ///         if e == 4 {
    ///             Ok(0)
    ///         } else {
    ///             Err(e.to_string())
    ///         }
    ///     })
    ///     .await;
    ///
    /// assert_eq!(recovered, Ok(0));
    /// # }
    /// ```
    fn async_or_else<F, TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, E, TFuture, Forward<TFuture::Output>, TFuture::Output>
    where
        TFn: FnOnce(E) -> TFuture,
        TFuture: Future<Output = Result<T, F>>;

    /// Basically same as [`Result::unwrap_or_else`], but it accepts closure that returns [`Future`]
    ///
    /// [`Result::unwrap_or_else`]: core::result::Result::unwrap_or_else
    /// [`Future`]: core::future::Future
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main]
    /// # async fn main() {
    /// use async_results::prelude::*;
    ///
    /// type R = Result<i32, i32>;
    ///
    /// assert_eq!(R::Ok(1).async_unwrap_or_else(|e| async move { -e }).await, 1);
    /// assert_eq!(R::Err(4).async_unwrap_or_else(|e| async move { -e }).await, -4);
    /// # }
    /// ```
    fn async_unwrap_or_else<TFn, TFuture>(self, f: TFn) -> Chain<TFn, E, TFuture, Forward<T>, T>
    where
        TFn: FnOnce(E) -> TFuture,
        TFuture: Future<Output = T>;
}

impl<T, E> AsyncMapExt<T, E> for Result<T, E> {
    fn async_map<TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, T, TFuture, WrapOk<TFuture::Output, E>, Result<TFuture::Output, E>>
    where
        TFn: FnOnce(T) -> TFuture,
        TFuture: Future,
    {
        match self {
            Ok(v) => Chain::deferred(f, v),
            Err(e) => Chain::settled(Err(e)),
        }
    }

    fn async_map_err<TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, E, TFuture, WrapErr<T, TFuture::Output>, Result<T, TFuture::Output>>
    where
        TFn: FnOnce(E) -> TFuture,
        TFuture: Future,
    {
        match self {
            Ok(v) => Chain::settled(Ok(v)),
            Err(e) => Chain::deferred(f, e),
        }
    }

    fn async_and_then<U, TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, T, TFuture, Forward<TFuture::Output>, TFuture::Output>
    where
        TFn: FnOnce(T) -> TFuture,
        TFuture: Future<Output = Result<U, E>>,
    {
        match self {
            Ok(v) => Chain::deferred(f, v),
            Err(e) => Chain::settled(Err(e)),
        }
    }

    fn async_or_else<F, TFn, TFuture>(
        self,
        f: TFn,
    ) -> Chain<TFn, E, TFuture, Forward<TFuture::Output>, TFuture::Output>
    where
        TFn: FnOnce(E) -> TFuture,
        TFuture: Future<Output = Result<T, F>>,
    {
        match self {
            Ok(v) => Chain::settled(Ok(v)),
            Err(e) => Chain::deferred(f, e),
        }
    }

    fn async_unwrap_or_else<TFn, TFuture>(self, f: TFn) -> Chain<TFn, E, TFuture, Forward<T>, T>
    where
        TFn: FnOnce(E) -> TFuture,
        TFuture: Future<Output = T>,
    {
        match self {
            Ok(v) => Chain::settled(v),
            Err(e) => Chain::deferred(f, e),
        }
    }
}
