//! # Bound call
//!
//! Type-safe callback objects that pair a target (a free function, a
//! closure, or a method on a borrowed receiver) with arguments captured at
//! creation time. Running the callback supplies the remaining arguments;
//! the target always receives the captured values first, then the live
//! ones, in declaration order. The concrete target never appears in the
//! handle's type, so subsystems can hand callbacks across module boundaries
//! without coupling to each other's types.
//!
//! Both the captured and the call-time argument lists are tuples of zero to
//! four values, and every generic parameter is inferred from the factory
//! arguments. [`Callback`] runs any number of times and is dropped by its
//! owner; [`CallbackOnce`] runs exactly once, releasing its storage as part
//! of that run.
//!
//! ## Examples
//!
//! Capturing an argument up front:
//!
//! ```
//! fn label(prefix: String, n: i32) -> String {
//!     format!("{prefix}{n}")
//! }
//!
//! let mut cb = bound_call::bind(label, ("job-".to_string(),));
//! assert_eq!(cb.run((7,)), "job-7");
//! assert_eq!(cb.run((8,)), "job-8");
//! ```
//!
//! Dispatching to a method through a borrowed receiver:
//!
//! ```
//! #[derive(Default)]
//! struct Tally {
//!     total: i64,
//! }
//!
//! impl Tally {
//!     fn add(&mut self, amount: i64) {
//!         self.total += amount;
//!     }
//! }
//!
//! let mut tally = Tally::default();
//! let mut record = bound_call::bind_mut(&mut tally, Tally::add, ());
//! record.run((3,));
//! record.run((4,));
//! drop(record);
//! assert_eq!(tally.total, 7);
//! ```
//!
//! One-shot callbacks release their storage as part of the single run:
//!
//! ```
//! let greeting = "hello".to_string();
//! let cb = bound_call::bind_once(move |punct: char| format!("{greeting}{punct}"), ());
//! assert_eq!(cb.run(('!',)), "hello!");
//! // `cb` is gone; running it again would not compile.
//! ```

mod args;
mod callback;
mod fused;
mod target;

pub use crate::args::{ArgList, BoundFnMut, BoundFnOnce, BoundMethod, BoundMethodMut};
pub use crate::callback::{Callback, CallbackOnce};
pub use crate::fused::{Fuse, ReuseError};

use crate::target::{FnTarget, MethodTarget, MethodTargetMut, OnceSlot};

/// Create a multi-use callback from a free function or closure.
///
/// `bound` holds the creation-time arguments; `func`'s parameter list must
/// start with them. Each run forwards a fresh clone of the bound tuple
/// ahead of the call-time arguments, so the stored values are never moved
/// out by a run.
pub fn bind<'t, F, B, A>(func: F, bound: B) -> Callback<'t, A, F::Output>
where
    F: BoundFnMut<B, A> + 't,
    B: ArgList + Clone + 't,
    A: ArgList,
{
    Callback::new(FnTarget { func, bound })
}

/// Create a single-use callback from a free function or closure.
///
/// Unlike [`bind`], the target may be a plain `FnOnce` and the bound values
/// do not need to be `Clone`: both are moved into the one run.
pub fn bind_once<'t, F, B, A>(func: F, bound: B) -> CallbackOnce<'t, A, F::Output>
where
    F: BoundFnOnce<B, A> + 't,
    B: ArgList + 't,
    A: ArgList,
{
    CallbackOnce::new(OnceSlot(Some(FnTarget { func, bound })))
}

/// Create a multi-use callback that dispatches through a shared borrow of
/// `recv`.
///
/// `method` takes `&T` first; a `T::method` fn item for a `&self` method
/// fits as-is. The handle borrows `recv` for its whole lifetime, so the
/// receiver is kept alive until the handle is dropped.
pub fn bind_ref<'t, T, M, B, A>(recv: &'t T, method: M, bound: B) -> Callback<'t, A, M::Output>
where
    T: ?Sized,
    M: BoundMethod<T, B, A> + 't,
    B: ArgList + Clone + 't,
    A: ArgList,
{
    Callback::new(MethodTarget {
        recv,
        method,
        bound,
    })
}

/// Single-use form of [`bind_ref`].
pub fn bind_ref_once<'t, T, M, B, A>(
    recv: &'t T,
    method: M,
    bound: B,
) -> CallbackOnce<'t, A, M::Output>
where
    T: ?Sized,
    M: BoundMethod<T, B, A> + 't,
    B: ArgList + 't,
    A: ArgList,
{
    CallbackOnce::new(OnceSlot(Some(MethodTarget {
        recv,
        method,
        bound,
    })))
}

/// Create a multi-use callback that dispatches through an exclusive borrow
/// of `recv`.
///
/// `method` takes `&mut T` first. State the method leaves behind in the
/// receiver is visible to the caller once the handle is dropped and the
/// borrow ends.
pub fn bind_mut<'t, T, M, B, A>(recv: &'t mut T, method: M, bound: B) -> Callback<'t, A, M::Output>
where
    T: ?Sized,
    M: BoundMethodMut<T, B, A> + 't,
    B: ArgList + Clone + 't,
    A: ArgList,
{
    Callback::new(MethodTargetMut {
        recv,
        method,
        bound,
    })
}

/// Single-use form of [`bind_mut`].
pub fn bind_mut_once<'t, T, M, B, A>(
    recv: &'t mut T,
    method: M,
    bound: B,
) -> CallbackOnce<'t, A, M::Output>
where
    T: ?Sized,
    M: BoundMethodMut<T, B, A> + 't,
    B: ArgList + 't,
    A: ArgList,
{
    CallbackOnce::new(OnceSlot(Some(MethodTargetMut {
        recv,
        method,
        bound,
    })))
}
