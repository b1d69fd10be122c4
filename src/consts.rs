//! Prompt text and parse-failure sentinels.

pub const INT_PROMPT: &str = "Please enter an input value:";
pub const FLOAT_PROMPT: &str = "Please enter a float input value:";

/// Returned by the integer adapter when parsing fails. Indistinguishable
/// from a legitimately entered `-1`; callers that need to tell the two
/// apart should not use `-1` as meaningful input.
pub const INT_SENTINEL: i64 = -1;

/// Float counterpart of [`INT_SENTINEL`], with the same ambiguity.
pub const FLOAT_SENTINEL: f64 = -1.0;
