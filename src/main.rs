//! Command-line replay tool: reads an input trace and prints one JSON camera pose per frame.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use boardcam::{
    camera::Pose, error::BoardcamError, options::Options, replay::Replay,
};

/// Replay `trace` and write one JSON pose per frame to stdout.
fn run(options_path: Option<&str>, trace: &str) -> Result<usize, BoardcamError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let reader = BufReader::new(File::open(trace)?);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut replay = Replay::new(&options, Pose::default());
    let frames = replay.run(reader, |pose| {
        serde_json::to_writer(&mut out, pose).map_err(std::io::Error::from)?;
        writeln!(out)?;
        Ok(())
    })?;
    out.flush()?;
    Ok(frames)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options_path, trace) = match args.as_slice() {
        [trace] => (None, trace.as_str()),
        [options, trace] => (Some(options.as_str()), trace.as_str()),
        _ => {
            log::error!("Usage: boardcam [options.toml] <trace.jsonl>");
            std::process::exit(2);
        }
    };

    match run(options_path, trace) {
        Ok(frames) => log::info!("replayed {frames} frames from {trace}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
