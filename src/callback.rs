//! The two callback handles.

use std::any;
use std::fmt;

use smallbox::space::S4;
use smallbox::{smallbox, SmallBox};

use crate::args::ArgList;
use crate::fused::Fuse;
use crate::target::{ErasedCall, ErasedCallOnce};

/// A callback that may be run any number of times.
///
/// The handle names only the call-time argument tuple `A` and the result
/// type `O`; the target and its captured prefix are erased, so the producer
/// and the consumer of a callback share nothing else. `'t` is the lifetime
/// of whatever the target borrows: `'static` for free functions and owning
/// closures, the receiver's borrow for method callbacks.
///
/// Running the callback never changes the handle's own state. It lives
/// until its owner drops it.
pub struct Callback<'t, A, O> {
    target: SmallBox<dyn ErasedCall<A, Output = O> + 't, S4>,
}

impl<'t, A, O> Callback<'t, A, O> {
    pub(crate) fn new<T>(target: T) -> Self
    where
        T: ErasedCall<A, Output = O> + 't,
    {
        Callback {
            target: smallbox!(target),
        }
    }

    /// Forward the captured prefix and `args` to the target and hand back
    /// its result. Whatever the target panics with propagates unchanged.
    pub fn run(&mut self, args: A) -> O {
        self.target.call(args)
    }
}

impl<A: ArgList, O> fmt::Debug for Callback<'_, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("args", &any::type_name::<A>())
            .field("arity", &A::LEN)
            .finish()
    }
}

/// A callback that runs exactly once.
///
/// [`run`](CallbackOnce::run) takes the handle by value: the target, its
/// captured arguments, and the handle's storage are all released before
/// control returns to the caller, and a second run is rejected by the
/// compiler rather than left undefined:
///
/// ```compile_fail
/// let cb = bound_call::bind_once(|x: i32| x + 1, ());
/// cb.run((1,));
/// cb.run((2,)); // value used after move
/// ```
///
/// Holders that cannot give the handle up by value can trade the
/// compile-time guarantee for a runtime check with
/// [`fuse`](CallbackOnce::fuse).
pub struct CallbackOnce<'t, A, O> {
    target: SmallBox<dyn ErasedCallOnce<A, Output = O> + 't, S4>,
}

impl<'t, A, O> CallbackOnce<'t, A, O> {
    pub(crate) fn new<T>(target: T) -> Self
    where
        T: ErasedCallOnce<A, Output = O> + 't,
    {
        CallbackOnce {
            target: smallbox!(target),
        }
    }

    /// Forward the captured prefix and `args` to the target, consuming the
    /// handle.
    ///
    /// Storage is released on the way out even if the target unwinds.
    pub fn run(mut self, args: A) -> O {
        self.target.call_once(args)
    }

    /// Wrap the handle so it can be run through `&mut`, with reuse reported
    /// as an error instead of rejected at compile time.
    pub fn fuse(self) -> Fuse<'t, A, O> {
        Fuse::new(self)
    }
}

impl<A: ArgList, O> fmt::Debug for CallbackOnce<'_, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackOnce")
            .field("args", &any::type_name::<A>())
            .field("arity", &A::LEN)
            .finish()
    }
}
