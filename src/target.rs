//! Forwarding targets and the erased surface the handles store them behind.
//!
//! A target pairs the thing to call with the argument prefix captured at
//! creation time. The handle types never see the concrete target; they hold
//! `dyn ErasedCall` / `dyn ErasedCallOnce` and forward through it.

use crate::args::{ArgList, BoundFnMut, BoundFnOnce, BoundMethod, BoundMethodMut};

pub(crate) trait ErasedCall<A> {
    type Output;

    fn call(&mut self, args: A) -> Self::Output;
}

/// Object-safe stand-in for a consuming call.
///
/// `call_once` takes `&mut self` so the trait stays usable behind a pointer;
/// the slot below upholds the at-most-once contract by moving the target out
/// on the first call.
pub(crate) trait ErasedCallOnce<A> {
    type Output;

    fn call_once(&mut self, args: A) -> Self::Output;
}

/// Free callable plus its captured argument prefix.
pub(crate) struct FnTarget<F, B> {
    pub(crate) func: F,
    pub(crate) bound: B,
}

/// Callable dispatched through a shared borrow of `recv`.
pub(crate) struct MethodTarget<'t, T: ?Sized, M, B> {
    pub(crate) recv: &'t T,
    pub(crate) method: M,
    pub(crate) bound: B,
}

/// Callable dispatched through an exclusive borrow of `recv`.
pub(crate) struct MethodTargetMut<'t, T: ?Sized, M, B> {
    pub(crate) recv: &'t mut T,
    pub(crate) method: M,
    pub(crate) bound: B,
}

impl<F, B, A> ErasedCall<A> for FnTarget<F, B>
where
    F: BoundFnMut<B, A>,
    B: ArgList + Clone,
    A: ArgList,
{
    type Output = F::Output;

    fn call(&mut self, args: A) -> Self::Output {
        // Each call forwards a fresh copy of the prefix; the stored one
        // stays intact for the next call.
        self.func.call_bound(self.bound.clone(), args)
    }
}

impl<T, M, B, A> ErasedCall<A> for MethodTarget<'_, T, M, B>
where
    T: ?Sized,
    M: BoundMethod<T, B, A>,
    B: ArgList + Clone,
    A: ArgList,
{
    type Output = M::Output;

    fn call(&mut self, args: A) -> Self::Output {
        self.method.call_bound_on(self.recv, self.bound.clone(), args)
    }
}

impl<T, M, B, A> ErasedCall<A> for MethodTargetMut<'_, T, M, B>
where
    T: ?Sized,
    M: BoundMethodMut<T, B, A>,
    B: ArgList + Clone,
    A: ArgList,
{
    type Output = M::Output;

    fn call(&mut self, args: A) -> Self::Output {
        self.method.call_bound_on_mut(self.recv, self.bound.clone(), args)
    }
}

pub(crate) trait ConsumeTarget<A> {
    type Output;

    fn consume(self, args: A) -> Self::Output;
}

impl<F, B, A> ConsumeTarget<A> for FnTarget<F, B>
where
    F: BoundFnOnce<B, A>,
    B: ArgList,
    A: ArgList,
{
    type Output = F::Output;

    fn consume(self, args: A) -> Self::Output {
        self.func.call_bound_once(self.bound, args)
    }
}

impl<T, M, B, A> ConsumeTarget<A> for MethodTarget<'_, T, M, B>
where
    T: ?Sized,
    M: BoundMethod<T, B, A>,
    B: ArgList,
    A: ArgList,
{
    type Output = M::Output;

    fn consume(mut self, args: A) -> Self::Output {
        self.method.call_bound_on(self.recv, self.bound, args)
    }
}

impl<T, M, B, A> ConsumeTarget<A> for MethodTargetMut<'_, T, M, B>
where
    T: ?Sized,
    M: BoundMethodMut<T, B, A>,
    B: ArgList,
    A: ArgList,
{
    type Output = M::Output;

    fn consume(mut self, args: A) -> Self::Output {
        self.method.call_bound_on_mut(self.recv, self.bound, args)
    }
}

/// Slot a single-use handle erases its target through.
///
/// Empty only while the consuming call is on the stack; the handle's `run`
/// takes the handle by value, so no second call can observe the empty state.
pub(crate) struct OnceSlot<T>(pub(crate) Option<T>);

impl<T, A> ErasedCallOnce<A> for OnceSlot<T>
where
    T: ConsumeTarget<A>,
{
    type Output = T::Output;

    fn call_once(&mut self, args: A) -> Self::Output {
        match self.0.take() {
            Some(target) => target.consume(args),
            None => unreachable!("single-use target taken twice"),
        }
    }
}
