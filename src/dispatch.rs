//! One entry point per call shape.
//!
//! The call site picks the entry point matching the target function's
//! signature; nothing is resolved at runtime. Each one sequences
//! acquire argument → invoke → render result for its shape. The
//! dispatcher itself never fails and keeps no state; a panic from the
//! target function propagates unhandled.

use std::io::{BufRead, Write};

use crate::adapters::{Argument, Returnable};
use crate::console::Console;

/// `fn()` — invoke only; the dispatcher performs no I/O.
pub fn run_void(f: impl FnOnce()) {
    f();
}

/// `fn() -> R` — invoke, then render the result.
pub fn run_ret<R, In, Out>(console: &mut Console<In, Out>, f: impl FnOnce() -> R)
where
    R: Returnable,
    In: BufRead,
    Out: Write,
{
    let value = f();
    value.display_return(console);
}

/// `fn(A)` — acquire the argument, then invoke.
pub fn run_arg<A, In, Out>(console: &mut Console<In, Out>, f: impl FnOnce(A))
where
    A: Argument,
    In: BufRead,
    Out: Write,
{
    let input = A::make_argument(console);
    f(input);
}

/// `fn(A) -> R` — acquire the argument, invoke, render the result.
pub fn run_arg_ret<A, R, In, Out>(console: &mut Console<In, Out>, f: impl FnOnce(A) -> R)
where
    A: Argument,
    R: Returnable,
    In: BufRead,
    Out: Write,
{
    let input = A::make_argument(console);
    let value = f(input);
    value.display_return(console);
}
