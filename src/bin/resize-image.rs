use std::process::ExitCode;

use resize_image::{backend::ImageRs, init::init, plan::run};

fn main() -> ExitCode {
    init();
    let arguments: Vec<_> = std::env::args_os().collect();
    ExitCode::from(run(&ImageRs, arguments))
}
