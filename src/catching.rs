use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project::pin_project;

/// Payload of a caught panic, exactly as [`std::panic::catch_unwind`]
/// produced it.
pub type Caught = Box<dyn Any + Send + 'static>;

/// Runs `f`, converting a normal return into `Ok` and a panic into `Err`.
///
/// Thin delegation to [`std::panic::catch_unwind`]; unwind safety is
/// asserted because `f` is consumed by the call. This and
/// [`async_catching`] are the only places in this crate where a panic
/// becomes data — the combinators of [`AsyncMapExt`] always let panics
/// propagate.
///
/// [`AsyncMapExt`]: crate::result::AsyncMapExt
///
/// # Examples
///
/// ```
/// use async_results::catching;
///
/// assert_eq!(catching(|| 42).unwrap(), 42);
///
/// let caught = catching(|| -> i32 { panic!("boom") }).unwrap_err();
/// assert_eq!(caught.downcast_ref::<&str>(), Some(&"boom"));
/// ```
pub fn catching<T, TFn>(f: TFn) -> Result<T, Caught>
where
    TFn: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f))
}

/// Asynchronous counterpart of [`catching`].
///
/// `f` is called on first poll; a panic while calling it, or while polling
/// the future it returns, resolves to `Err` with the payload preserved.
/// Normal completion resolves to `Ok`.
///
/// # Examples
///
/// ```
/// # #[tokio::main]
/// # async fn main() {
/// use async_results::async_catching;
///
/// assert_eq!(async_catching(|| async { 7 }).await.unwrap(), 7);
///
/// let caught = async_catching(|| async { panic!("boom") }).await.unwrap_err();
/// assert_eq!(caught.downcast_ref::<&str>(), Some(&"boom"));
/// # }
/// ```
pub fn async_catching<TFn, TFuture>(f: TFn) -> Catching<TFn, TFuture>
where
    TFn: FnOnce() -> TFuture,
    TFuture: Future,
{
    Catching {
        state: State::Deferred(Some(f)),
    }
}

#[pin_project(project = StateProj)]
enum State<TFn, TFuture> {
    Deferred(Option<TFn>),
    Awaiting(#[pin] TFuture),
}

/// Future returned by [`async_catching`].
#[pin_project]
pub struct Catching<TFn, TFuture> {
    #[pin]
    state: State<TFn, TFuture>,
}

impl<TFn, TFuture> Future for Catching<TFn, TFuture>
where
    TFn: FnOnce() -> TFuture,
    TFuture: Future,
{
    type Output = Result<TFuture::Output, Caught>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        use StateProj::*;

        let mut state = self.project().state;

        if let Deferred(f) = state.as_mut().project() {
            let f = f.take().expect("State::Deferred polled twice");
            match panic::catch_unwind(AssertUnwindSafe(f)) {
                Ok(future) => state.set(State::Awaiting(future)),
                Err(caught) => return Poll::Ready(Err(caught)),
            }
        }

        if let Awaiting(future) = state.project() {
            match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
                Ok(Poll::Ready(v)) => Poll::Ready(Ok(v)),
                Ok(Poll::Pending) => Poll::Pending,
                Err(caught) => Poll::Ready(Err(caught)),
            }
        } else {
            unreachable!()
        }
    }
}

#[cfg(test)]
mod test {
    use super::{async_catching, catching};

    #[test]
    fn sync_normal_return() {
        assert_eq!(catching(|| 42).unwrap(), 42);
    }

    #[test]
    fn sync_panic_payload_is_preserved() {
        let caught = catching(|| -> i32 { panic!("sync boom") }).unwrap_err();
        assert_eq!(caught.downcast_ref::<&str>(), Some(&"sync boom"));
    }

    #[tokio::test]
    async fn async_normal_return() {
        assert_eq!(async_catching(|| async { 7 }).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn async_panic_payload_is_preserved() {
        let caught = async_catching(|| async { panic!("boom") }).await.unwrap_err();
        assert_eq!(caught.downcast_ref::<&str>(), Some(&"boom"));
    }

    #[tokio::test]
    async fn owned_payloads_come_back_intact() {
        let caught = async_catching(|| async {
            std::panic::panic_any("save me!".to_string());
        })
        .await
        .unwrap_err();

        assert_eq!(caught.downcast_ref::<String>(), Some(&"save me!".to_string()));
    }

    #[tokio::test]
    async fn catches_a_panic_at_call_time() {
        let caught = async_catching(|| -> std::future::Ready<i32> { panic!("early") })
            .await
            .unwrap_err();

        assert_eq!(caught.downcast_ref::<&str>(), Some(&"early"));
    }

    #[tokio::test]
    async fn survives_a_real_suspension() {
        let value = async_catching(|| async {
            tokio::task::yield_now().await;
            5
        })
        .await;

        assert_eq!(value.unwrap(), 5);
    }

    #[tokio::test]
    async fn panic_after_a_suspension_is_still_caught() {
        let caught = async_catching(|| async {
            tokio::task::yield_now().await;
            panic!("late boom");
        })
        .await
        .unwrap_err();

        assert_eq!(caught.downcast_ref::<&str>(), Some(&"late boom"));
    }
}
