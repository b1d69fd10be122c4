//! A tiny harness that runs one externally supplied function against the
//! console: read its argument (if it takes one) from a line of input,
//! invoke it, and print its return value (if it has one).
//!
//! The target function is opaque; only its shape matters — arity 0 or 1,
//! unit or value return. [`dispatch`] has one entry point per shape, and
//! [`adapters`] teaches each supported primitive type how to be read from
//! and shown on a [`console::Console`].

pub mod adapters;
pub mod console;
pub mod consts;
pub mod dispatch;
