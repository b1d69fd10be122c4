//! Per-type bridges between console text and typed values.
//!
//! `Argument` turns one line of input into a value; `Returnable` shows a
//! value as a completion message. Implementations exist only for the
//! closed primitive set the harness supports. Malformed or missing input
//! degrades to a sentinel plus a diagnostic line — it never aborts the
//! run.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::consts::{FLOAT_PROMPT, FLOAT_SENTINEL, INT_PROMPT, INT_SENTINEL};

/// A type that can be produced from one line of console input.
pub trait Argument: Sized {
    fn make_argument<In: BufRead, Out: Write>(console: &mut Console<In, Out>) -> Self;
}

/// A type that can be shown as a function's return value.
pub trait Returnable {
    fn display_return<In: BufRead, Out: Write>(&self, console: &mut Console<In, Out>);
}

impl Argument for i64 {
    fn make_argument<In: BufRead, Out: Write>(console: &mut Console<In, Out>) -> Self {
        console.say(INT_PROMPT);
        match console
            .read_line()
            .and_then(|line| line.trim().parse::<i64>().ok())
        {
            Some(value) => {
                console.say(&format!("read_input> Returning {} (0x{:X})", value, value));
                value
            }
            None => {
                console.say("read_input> Input format error");
                INT_SENTINEL
            }
        }
    }
}

/// Shared reader for the float types.
fn read_float<In: BufRead, Out: Write>(console: &mut Console<In, Out>) -> f64 {
    console.say(FLOAT_PROMPT);
    match console
        .read_line()
        .and_then(|line| line.trim().parse::<f64>().ok())
    {
        Some(value) => {
            console.say(&format!("read_float> Returning {}", value));
            value
        }
        None => {
            console.say("read_float> Input format error");
            FLOAT_SENTINEL
        }
    }
}

impl Argument for f64 {
    fn make_argument<In: BufRead, Out: Write>(console: &mut Console<In, Out>) -> Self {
        read_float(console)
    }
}

impl Argument for f32 {
    fn make_argument<In: BufRead, Out: Write>(console: &mut Console<In, Out>) -> Self {
        read_float(console) as f32
    }
}

impl Argument for String {
    // No prompt and no confirmation: the raw line is the value.
    fn make_argument<In: BufRead, Out: Write>(console: &mut Console<In, Out>) -> Self {
        match console.read_line() {
            Some(line) => line,
            None => {
                console.say("read_string> Input error");
                String::new()
            }
        }
    }
}

impl Returnable for i64 {
    fn display_return<In: BufRead, Out: Write>(&self, console: &mut Console<In, Out>) {
        let value = *self;
        console.say(&format!(
            "Program complete. Return {} (0x{:X})",
            value, value
        ));
    }
}

/// Completion message for any type whose `Display` form is the whole
/// story. `i64` has its own impl above so it can show hex too.
macro_rules! display_returnable {
    ($($ty:ty),+ $(,)?) => {$(
        impl Returnable for $ty {
            fn display_return<In: BufRead, Out: Write>(&self, console: &mut Console<In, Out>) {
                console.say(&format!("Program complete. Return '{}'", self));
            }
        }
    )+};
}

display_returnable!(f32, f64, String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn drain(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn int_argument_parses_and_confirms_in_decimal_and_hex() {
        let mut c = console("21\n");
        let value = i64::make_argument(&mut c);
        assert_eq!(value, 21);
        let out = drain(c);
        assert!(out.contains("Please enter an input value:"));
        assert!(out.contains("read_input> Returning 21 (0x15)"));
    }

    #[test]
    fn int_argument_trims_whitespace() {
        let mut c = console("  42 \n");
        assert_eq!(i64::make_argument(&mut c), 42);
    }

    #[test]
    fn int_argument_accepts_negative() {
        let mut c = console("-1\n");
        let value = i64::make_argument(&mut c);
        assert_eq!(value, -1);
        // Two's complement hex, as the confirmation renders it.
        assert!(drain(c).contains("read_input> Returning -1 (0xFFFFFFFFFFFFFFFF)"));
    }

    #[test]
    fn int_argument_degrades_to_sentinel_on_garbage() {
        let mut c = console("not a number\n");
        let value = i64::make_argument(&mut c);
        assert_eq!(value, INT_SENTINEL);
        assert!(drain(c).contains("read_input> Input format error"));
    }

    #[test]
    fn int_argument_degrades_to_sentinel_on_eof() {
        let mut c = console("");
        assert_eq!(i64::make_argument(&mut c), INT_SENTINEL);
        assert!(drain(c).contains("read_input> Input format error"));
    }

    #[test]
    fn float_argument_parses_and_confirms() {
        let mut c = console("3.25\n");
        let value = f64::make_argument(&mut c);
        assert_eq!(value, 3.25);
        let out = drain(c);
        assert!(out.contains("Please enter a float input value:"));
        assert!(out.contains("read_float> Returning 3.25"));
    }

    #[test]
    fn float_argument_degrades_to_sentinel_on_garbage() {
        let mut c = console("three\n");
        let value = f64::make_argument(&mut c);
        assert_eq!(value, FLOAT_SENTINEL);
        assert!(drain(c).contains("read_float> Input format error"));
    }

    #[test]
    fn f32_argument_goes_through_the_float_reader() {
        let mut c = console("1.5\n");
        let value = f32::make_argument(&mut c);
        assert_eq!(value, 1.5f32);
        assert!(drain(c).contains("Please enter a float input value:"));
    }

    #[test]
    fn string_argument_is_the_raw_line() {
        let mut c = console("  spaces kept  \n");
        assert_eq!(String::make_argument(&mut c), "  spaces kept  ");
        // No prompt, no confirmation.
        assert_eq!(drain(c), "");
    }

    #[test]
    fn string_argument_empty_line_is_returned_verbatim() {
        let mut c = console("\n");
        assert_eq!(String::make_argument(&mut c), "");
        assert_eq!(drain(c), "");
    }

    #[test]
    fn string_argument_empty_on_eof_with_diagnostic() {
        let mut c = console("");
        assert_eq!(String::make_argument(&mut c), "");
        assert!(drain(c).contains("read_string> Input error"));
    }

    #[test]
    fn int_return_shows_decimal_and_hex() {
        let mut c = console("");
        42i64.display_return(&mut c);
        assert_eq!(drain(c), "Program complete. Return 42 (0x2A)\n");
    }

    #[test]
    fn float_return_uses_display_frame() {
        let mut c = console("");
        1.5f64.display_return(&mut c);
        assert_eq!(drain(c), "Program complete. Return '1.5'\n");
    }

    #[test]
    fn string_return_uses_display_frame() {
        let mut c = console("");
        "done".to_string().display_return(&mut c);
        assert_eq!(drain(c), "Program complete. Return 'done'\n");
    }
}
