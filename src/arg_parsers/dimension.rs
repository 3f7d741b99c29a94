use std::{
    ffi::OsStr,
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use crate::arg_parse_err::ArgParseErr;

/// Parses a target width or height.
///
/// Accepts anything that reads as an integer on the command line:
/// surrounding whitespace is ignored and a leading `+` is allowed.
/// Zero, negative values and values that do not fit into `u32` are rejected,
/// since no image can have such a dimension.
pub fn parse_dimension(input: &OsStr) -> Result<u32, ArgParseErr> {
    let Some(s) = input.to_str() else {
        return Err(ArgParseErr::new());
    };
    let value: i64 = strip_and_parse_number(s).map_err(|e| out_of_range_or_invalid(s, e))?;
    if value <= 0 {
        return Err(ArgParseErr::with_msg(format!(
            "image dimensions must be positive, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| ArgParseErr::with_msg(format!("image dimension {value} is too large")))
}

/// Strips leading and trailing whitespace and parses the rest as `T`.
fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    input.trim().parse::<T>()
}

fn out_of_range_or_invalid(input: &str, err: ParseIntError) -> ArgParseErr {
    match err.kind() {
        IntErrorKind::PosOverflow => {
            ArgParseErr::with_msg(format!("image dimension {} is too large", input.trim()))
        }
        IntErrorKind::NegOverflow => ArgParseErr::with_msg(format!(
            "image dimensions must be positive, got {}",
            input.trim()
        )),
        _ => err.into(),
    }
}
