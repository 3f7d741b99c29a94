use std::{
    ffi::OsStr,
    fs,
    io::{self, BufWriter, Cursor, Seek, Write},
    path::Path,
};

use image::ImageFormat;
use tempfile::NamedTempFile;

use crate::{
    encoders,
    error::{ErrorKind, ResizeError},
    image::Image,
    rs_err, rs_try,
};

/// Encodes the image and replaces the file at `path` with the result.
///
/// The output is staged in a temporary file next to the destination and renamed over it
/// only once encoding succeeded, so a failure never leaves a truncated file behind.
/// Symlinks are followed: the file they point to is replaced, not the link.
pub fn encode_and_overwrite(image: &Image, path: &Path) -> Result<(), ResizeError> {
    let format = choose_encoding_format(image, path)?;
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::debug!(path = %target.display(), ?format, "encoding");

    let directory = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match NamedTempFile::new_in(directory) {
        Ok(staging) => replace_with_staged(image, format, staging, &target),
        // the file itself may still be writable even if its directory is not
        Err(error) if error.kind() == io::ErrorKind::PermissionDenied => {
            tracing::debug!(
                directory = %directory.display(),
                "directory is not writable, overwriting in place"
            );
            overwrite_in_place(image, format, &target)
        }
        Err(error) => Err(rs_err!(
            ErrorKind::Write,
            "unable to create a temporary file in `{}': {error}",
            directory.display()
        )),
    }
}

fn replace_with_staged(
    image: &Image,
    format: ImageFormat,
    staging: NamedTempFile,
    target: &Path,
) -> Result<(), ResizeError> {
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(staging);
    encode_with_format(image, format, &mut writer)?;

    // Flush explicitly: dropping the BufWriter would swallow write errors.
    let staging = rs_try!(ErrorKind::Write, writer.into_inner());
    // the staging file is created with restrictive permissions, keep whatever the original had
    if let Ok(metadata) = fs::metadata(target) {
        rs_try!(
            ErrorKind::Write,
            staging.as_file().set_permissions(metadata.permissions())
        );
    }
    staging.persist(target).map_err(|error| {
        rs_err!(
            ErrorKind::Write,
            "unable to write image `{}': {}",
            target.display(),
            error.error
        )
    })?;
    Ok(())
}

/// Encodes fully into memory before truncating, so an encoder error still leaves the file intact.
fn overwrite_in_place(
    image: &Image,
    format: ImageFormat,
    target: &Path,
) -> Result<(), ResizeError> {
    let mut buffer = Cursor::new(Vec::new());
    encode_with_format(image, format, &mut buffer)?;
    fs::write(target, buffer.into_inner()).map_err(|error| {
        rs_err!(
            ErrorKind::Write,
            "unable to write image `{}': {error}",
            target.display()
        )
    })
}

fn encode_with_format<W: Write + Seek>(
    image: &Image,
    format: ImageFormat,
    writer: &mut W,
) -> Result<(), ResizeError> {
    match format {
        #[cfg(feature = "gif")]
        ImageFormat::Gif => encoders::gif::encode(image, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, writer),
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, writer),
        #[cfg(feature = "tiff")]
        ImageFormat::Tiff => encoders::tiff::encode(image, writer),
        _ => Ok(rs_try!(
            ErrorKind::Encode,
            image.pixels.write_to(writer, format)
        )),
    }
}

/// The extension of the destination wins, like any "save as" would.
/// If it names no known format, fall back to the format the image came in.
fn choose_encoding_format(image: &Image, path: &Path) -> Result<ImageFormat, ResizeError> {
    if let Some(format) = ImageFormat::from_path(path).ok().or(image.format) {
        return Ok(format);
    }
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(rs_err!(
        ErrorKind::Encode,
        "no encode delegate for this image format `{}'",
        extension.to_string_lossy().to_ascii_uppercase()
    ))
}
