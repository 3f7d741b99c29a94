use std::{ffi::OsString, path::PathBuf};

use crate::{
    args,
    backend::ImageBackend,
    error::{ErrorKind, ResizeError},
    help,
};

/// Exit status for any failure, usage errors included
pub const EXIT_FAILURE: u8 = 1;

/// A single in-place resize, as requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizePlan {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ResizePlan {
    /// Decode, resample, overwrite. Stops at the first failure.
    pub fn execute<B: ImageBackend>(&self, backend: &B) -> Result<(), ResizeError> {
        let image = backend.decode(&self.path)?;
        let image = backend.resample(image, self.width, self.height)?;
        backend.encode_and_overwrite(&image, &self.path)?;
        tracing::info!(
            path = %self.path.display(),
            width = self.width,
            height = self.height,
            "resized"
        );
        Ok(())
    }
}

/// Runs the whole program over `argv` and returns the process exit status.
pub fn run<B: ImageBackend>(backend: &B, args: Vec<OsString>) -> u8 {
    match args::parse_args(args).and_then(|plan| plan.execute(backend)) {
        Ok(()) => 0,
        Err(error) => {
            if error.kind == ErrorKind::Usage {
                help::print_usage();
            } else {
                eprintln!("{error}");
            }
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, path::Path};

    use super::*;
    use crate::rs_err;

    /// Records every call instead of touching the filesystem.
    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<String>>,
        fail_at: Option<&'static str>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct FakeImage {
        width: u32,
        height: u32,
    }

    impl FakeBackend {
        fn failing_at(step: &'static str) -> Self {
            Self {
                fail_at: Some(step),
                ..Default::default()
            }
        }

        fn record(&self, call: String, step: &str, kind: ErrorKind) -> Result<(), ResizeError> {
            self.calls.borrow_mut().push(call);
            if self.fail_at == Some(step) {
                return Err(rs_err!(kind, "{step} failed"));
            }
            Ok(())
        }
    }

    impl ImageBackend for FakeBackend {
        type Image = FakeImage;

        fn decode(&self, path: &Path) -> Result<FakeImage, ResizeError> {
            self.record(format!("decode {}", path.display()), "decode", ErrorKind::Decode)?;
            Ok(FakeImage {
                width: 1000,
                height: 500,
            })
        }

        fn resample(
            &self,
            image: FakeImage,
            width: u32,
            height: u32,
        ) -> Result<FakeImage, ResizeError> {
            self.record(
                format!("resample {}x{} -> {width}x{height}", image.width, image.height),
                "resample",
                ErrorKind::Encode,
            )?;
            Ok(FakeImage { width, height })
        }

        fn encode_and_overwrite(&self, image: &FakeImage, path: &Path) -> Result<(), ResizeError> {
            self.record(
                format!("encode {}x{} {}", image.width, image.height, path.display()),
                "encode",
                ErrorKind::Write,
            )
        }
    }

    fn argv(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn decode_resample_overwrite_in_order() {
        let backend = FakeBackend::default();
        let code = run(&backend, argv(&["resize-image", "photo.jpg", "100", "50"]));
        assert_eq!(code, 0);
        assert_eq!(
            backend.calls.into_inner(),
            vec![
                "decode photo.jpg",
                "resample 1000x500 -> 100x50",
                "encode 100x50 photo.jpg",
            ]
        );
    }

    #[test]
    fn wrong_count_touches_nothing() {
        let backend = FakeBackend::default();
        assert_eq!(run(&backend, argv(&["resize-image", "photo.jpg", "100"])), 1);
        assert_eq!(
            run(&backend, argv(&["resize-image", "photo.jpg", "1", "2", "3"])),
            1
        );
        assert!(backend.calls.into_inner().is_empty());
    }

    #[test]
    fn bad_dimensions_fail_before_decoding() {
        let backend = FakeBackend::default();
        assert_eq!(run(&backend, argv(&["resize-image", "photo.jpg", "1.5", "2"])), 1);
        assert_eq!(run(&backend, argv(&["resize-image", "photo.jpg", "1", "-2"])), 1);
        assert!(backend.calls.into_inner().is_empty());
    }

    #[test]
    fn decode_failure_stops_before_writing() {
        let backend = FakeBackend::failing_at("decode");
        let plan = ResizePlan {
            path: PathBuf::from("missing.png"),
            width: 10,
            height: 10,
        };
        let err = plan.execute(&backend).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
        assert_eq!(backend.calls.into_inner(), vec!["decode missing.png"]);
    }

    #[test]
    fn write_failure_is_fatal() {
        let backend = FakeBackend::failing_at("encode");
        let code = run(&backend, argv(&["resize-image", "photo.jpg", "10", "10"]));
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(backend.calls.into_inner().len(), 3);
    }
}
