//! Deterministic replay of recorded input traces.
//!
//! A trace is JSON Lines: one [`TraceFrame`] per line holding the frame's
//! time step and the raw events that arrived during it. Replaying feeds the
//! events through an [`InputSampler`] and advances a [`CameraRig`], so a
//! trace reproduces exactly the poses a live session produced.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::camera::{CameraRig, Pose};
use crate::error::BoardcamError;
use crate::input::{InputEvent, InputSampler};
use crate::options::Options;

/// One recorded frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Time step in seconds.
    pub dt: f32,
    /// Events received during the frame, in arrival order.
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl TraceFrame {
    /// Parse one trace line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardcamError::TraceParse`] tagged with `line_number` when
    /// the line is not a valid frame.
    pub fn parse(
        line_number: usize,
        line: &str,
    ) -> Result<Option<Self>, BoardcamError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(line)
            .map(Some)
            .map_err(|e| BoardcamError::TraceParse {
                line: line_number,
                message: e.to_string(),
            })
    }
}

/// Sampler and rig pair driven frame by frame.
pub struct Replay {
    sampler: InputSampler,
    rig: CameraRig,
}

impl Replay {
    /// Replay with the given options, starting from `initial`.
    #[must_use]
    pub fn new(options: &Options, initial: Pose) -> Self {
        Self {
            sampler: InputSampler::with_key_bindings(options.keybindings.clone()),
            rig: CameraRig::new(options, initial),
        }
    }

    /// Feed one frame and return the resulting pose.
    pub fn step(&mut self, frame: &TraceFrame) -> Pose {
        for event in &frame.events {
            self.sampler.handle_event(event);
        }
        let sample = self.sampler.sample();
        self.rig.update(&sample, frame.dt)
    }

    /// Replay every frame in `reader`, handing each pose to `on_pose`.
    ///
    /// Returns the number of frames replayed.
    ///
    /// # Errors
    ///
    /// Stops at the first read failure, malformed line, or error returned
    /// by `on_pose`.
    pub fn run<R, F>(
        &mut self,
        reader: R,
        mut on_pose: F,
    ) -> Result<usize, BoardcamError>
    where
        R: BufRead,
        F: FnMut(&Pose) -> Result<(), BoardcamError>,
    {
        let mut frames = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(frame) = TraceFrame::parse(index + 1, &line)? else {
                continue;
            };
            let pose = self.step(&frame);
            on_pose(&pose)?;
            frames += 1;
        }
        log::debug!("replayed {frames} frames");
        Ok(frames)
    }

    /// The rig being driven.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parses_frames_and_skips_blank_lines() {
        let line = r#"{"dt": 0.5, "events": [{"type": "scroll", "delta": 2.0}]}"#;
        let frame = TraceFrame::parse(1, line).unwrap().unwrap();
        assert_eq!(frame.dt, 0.5);
        assert_eq!(frame.events, vec![InputEvent::Scroll { delta: 2.0 }]);

        assert!(TraceFrame::parse(2, "   ").unwrap().is_none());
        let frame = TraceFrame::parse(3, r#"{"dt": 0.1}"#).unwrap().unwrap();
        assert!(frame.events.is_empty());
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let err = TraceFrame::parse(7, "{not json").unwrap_err();
        assert!(matches!(err, BoardcamError::TraceParse { line: 7, .. }));
    }

    #[test]
    fn held_key_moves_camera_every_frame() {
        let trace = concat!(
            r#"{"dt": 0.1, "events": [{"type": "key", "code": "KeyW", "pressed": true}]}"#,
            "\n",
            r#"{"dt": 0.1}"#,
            "\n\n",
            r#"{"dt": 0.1, "events": [{"type": "key", "code": "KeyW", "pressed": false}]}"#,
            "\n",
        );
        let mut replay = Replay::new(&Options::default(), Pose::default());
        let mut poses = Vec::new();
        let frames = replay
            .run(Cursor::new(trace), |pose| {
                poses.push(*pose);
                Ok(())
            })
            .unwrap();

        assert_eq!(frames, 3);
        // Forward at 10 units/s for two frames, then released.
        assert!((poses[0].position.z - -9.0).abs() < 1e-4);
        assert!((poses[1].position.z - -8.0).abs() < 1e-4);
        assert_eq!(poses[2], poses[1]);
        assert_eq!(replay.rig().pose(), poses[2]);
    }

    #[test]
    fn replay_stops_at_bad_line() {
        let trace = "{\"dt\": 0.1}\n{\"dt\": oops}\n{\"dt\": 0.1}\n";
        let mut replay = Replay::new(&Options::default(), Pose::default());
        let mut seen = 0;
        let err = replay
            .run(Cursor::new(trace), |_| {
                seen += 1;
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, BoardcamError::TraceParse { line: 2, .. }));
        assert_eq!(seen, 1);
    }
}
