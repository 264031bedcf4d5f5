//! Runtime-checked single use.
//!
//! Consuming [`CallbackOnce::run`](crate::CallbackOnce::run) rejects reuse
//! at compile time, but a callback stored in a longer-lived structure can
//! only be reached through `&mut`. `Fuse` covers that case: the first run
//! consumes the underlying callback, every later run reports [`ReuseError`]
//! without invoking anything.

use std::any;
use std::error;
use std::fmt;

use crate::args::ArgList;
use crate::CallbackOnce;

/// A [`CallbackOnce`] behind a runtime once-check.
///
/// ```
/// let mut fuse = bound_call::bind_once(|| 5, ()).fuse();
/// assert_eq!(fuse.run(()), Ok(5));
/// assert!(fuse.run(()).is_err());
/// ```
pub struct Fuse<'t, A, O> {
    inner: Option<CallbackOnce<'t, A, O>>,
}

impl<'t, A, O> Fuse<'t, A, O> {
    pub(crate) fn new(callback: CallbackOnce<'t, A, O>) -> Self {
        Fuse {
            inner: Some(callback),
        }
    }

    /// Run the underlying callback, or report that it already ran.
    ///
    /// The callback is consumed even if the target unwinds, so a caller
    /// that catches the panic still cannot run the target a second time.
    pub fn run(&mut self, args: A) -> Result<O, ReuseError> {
        match self.inner.take() {
            Some(callback) => Ok(callback.run(args)),
            None => Err(ReuseError),
        }
    }

    /// Whether the underlying callback has been consumed.
    pub fn is_spent(&self) -> bool {
        self.inner.is_none()
    }
}

impl<A: ArgList, O> fmt::Debug for Fuse<'_, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fuse")
            .field("args", &any::type_name::<A>())
            .field("spent", &self.is_spent())
            .finish()
    }
}

/// The callback behind a [`Fuse`] was already consumed by an earlier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReuseError;

impl fmt::Display for ReuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("single-use callback has already been run")
    }
}

impl error::Error for ReuseError {}
