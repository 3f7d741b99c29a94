//! Positional argument parsing.
//!
//! The command line is exactly `<path> <width> <height>`, with no flags,
//! so there is nothing an argument parsing library would add here.

use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use strum::{EnumCount, IntoStaticStr, VariantArray};

use crate::{
    arg_parsers::parse_dimension,
    error::{ErrorKind, ResizeError},
    plan::ResizePlan,
    rs_err,
};

#[derive(IntoStaticStr, VariantArray, EnumCount, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Positional {
    Path,
    Width,
    Height,
}

impl Positional {
    pub fn help_text(&self) -> &'static str {
        match self {
            Positional::Path => "image file to resize, overwritten with the result",
            Positional::Width => "target width in pixels",
            Positional::Height => "target height in pixels",
        }
    }
}

/// Turns `argv` (including the program name) into a plan.
///
/// The argument count is checked before anything else is looked at.
pub fn parse_args(args: Vec<OsString>) -> Result<ResizePlan, ResizeError> {
    let values: Vec<OsString> = args.into_iter().skip(1).collect(); // skip argv[0], path to our binary
    if values.len() != Positional::COUNT {
        return Err(rs_err!(
            ErrorKind::Usage,
            "expected {} arguments, got {}",
            Positional::COUNT,
            values.len()
        ));
    }

    let width = parse_positional(Positional::Width, &values[1])?;
    let height = parse_positional(Positional::Height, &values[2])?;

    Ok(ResizePlan {
        path: PathBuf::from(&values[0]),
        width,
        height,
    })
}

fn parse_positional(arg: Positional, value: &OsStr) -> Result<u32, ResizeError> {
    let arg_string: &'static str = arg.into();
    parse_dimension(value).map_err(|arg_err| {
        rs_err!(
            ErrorKind::Parse,
            "{}",
            arg_err.display_with_arg(arg_string, value)
        )
    })
}
