use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let paths = std::env::args().skip(1).collect::<Vec<_>>();
    if paths.is_empty() {
        eprintln!("usage: chromata <image>...");
        return ExitCode::FAILURE;
    }

    let profiler = chromata::ColorProfiler::new();
    let mut status = ExitCode::SUCCESS;

    for path in paths {
        match profiler.detect_colors(&path) {
            Ok(Some(distribution)) => println!("{path}: {:#?}", distribution.to_map()),
            Ok(None) => println!("{path}: no result"),
            Err(err) => {
                eprintln!("{path}: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
