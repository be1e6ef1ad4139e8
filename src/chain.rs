use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::Context;
use core::task::Poll;

use pin_project::pin_project;

use crate::async_util::ready;

/// Shapes the transform future's output into the combinator's final value.
pub(crate) trait Completion {
    type Polled;
    type Output;
    fn complete(polled: Self::Polled) -> Self::Output;
}

#[pin_project(project = StateProj)]
enum State<TFn, TArg, TFuture, TOutput> {
    Settled(Option<TOutput>),
    Deferred(Option<(TFn, TArg)>),
    Awaiting(#[pin] TFuture),
}

/// Future returned by the combinators of [`AsyncMapExt`].
///
/// Starts either settled with an output known up front (the variant the
/// transform does not apply to) or holding the transform and its argument;
/// in the latter case the transform runs on first poll and its future is
/// driven to completion.
///
/// [`AsyncMapExt`]: crate::result::AsyncMapExt
#[pin_project]
pub struct Chain<TFn, TArg, TFuture, TCompletion, TOutput> {
    #[pin]
    state: State<TFn, TArg, TFuture, TOutput>,
    _completion: PhantomData<fn() -> TCompletion>,
}

impl<TFn, TArg, TFuture, TCompletion, TOutput> Chain<TFn, TArg, TFuture, TCompletion, TOutput> {
    pub(crate) fn settled(output: TOutput) -> Self {
        Self {
            state: State::Settled(Some(output)),
            _completion: PhantomData,
        }
    }

    pub(crate) fn deferred(f: TFn, arg: TArg) -> Self {
        Self {
            state: State::Deferred(Some((f, arg))),
            _completion: PhantomData,
        }
    }
}

impl<TFn, TArg, TFuture, TCompletion, TOutput> Future
    for Chain<TFn, TArg, TFuture, TCompletion, TOutput>
where
    TFn: FnOnce(TArg) -> TFuture,
    TFuture: Future,
    TCompletion: Completion<Polled = TFuture::Output, Output = TOutput>,
{
    type Output = TOutput;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        use StateProj::*;

        let mut state = self.project().state;

        match state.as_mut().project() {
            Settled(output) => {
                return Poll::Ready(output.take().expect("State::Settled polled twice"))
            }

            Deferred(payload) => {
                let (f, arg) = payload.take().expect("State::Deferred polled twice");
                state.set(State::Awaiting(f(arg)));
            }

            _ => {}
        }

        if let Awaiting(future) = state.project() {
            let polled = ready!(future.poll(cx));
            Poll::Ready(TCompletion::complete(polled))
        } else {
            unreachable!()
        }
    }
}

pub struct WrapOk<T, E>(PhantomData<fn() -> (T, E)>);

impl<T, E> Completion for WrapOk<T, E> {
    type Polled = T;
    type Output = Result<T, E>;

    #[inline(always)]
    fn complete(polled: Self::Polled) -> Self::Output {
        Ok(polled)
    }
}

pub struct WrapErr<T, F>(PhantomData<fn() -> (T, F)>);

impl<T, F> Completion for WrapErr<T, F> {
    type Polled = F;
    type Output = Result<T, F>;

    #[inline(always)]
    fn complete(polled: Self::Polled) -> Self::Output {
        Err(polled)
    }
}

pub struct Forward<T>(PhantomData<fn() -> T>);

impl<T> Completion for Forward<T> {
    type Polled = T;
    type Output = T;

    #[inline(always)]
    fn complete(polled: Self::Polled) -> Self::Output {
        polled
    }
}
