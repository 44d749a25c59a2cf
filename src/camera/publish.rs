//! Lock-free pose hand-off to a render thread.

use super::pose::Pose;

/// Writing half, owned by the [`CameraRig`](super::CameraRig).
pub struct PosePublisher {
    input: triple_buffer::Input<Pose>,
}

/// Reading half, handed to the renderer.
///
/// Only ever observes whole poses published at the end of a frame.
pub struct PoseReader {
    output: triple_buffer::Output<Pose>,
}

/// Create a connected publisher/reader pair seeded with `initial`.
#[must_use]
pub fn pose_channel(initial: &Pose) -> (PosePublisher, PoseReader) {
    let (input, output) = triple_buffer::triple_buffer(initial);
    (PosePublisher { input }, PoseReader { output })
}

impl PosePublisher {
    /// Make `pose` the latest value visible to the reader.
    pub fn publish(&mut self, pose: Pose) {
        self.input.write(pose);
    }
}

impl PoseReader {
    /// Latest published pose.
    pub fn latest(&mut self) -> Pose {
        *self.output.read()
    }

    /// Whether a pose was published since the last [`latest`](Self::latest).
    #[must_use]
    pub fn has_update(&self) -> bool {
        self.output.updated()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn reader_sees_latest_whole_pose() {
        let (mut publisher, mut reader) = pose_channel(&Pose::default());
        assert_eq!(reader.latest(), Pose::default());
        assert!(!reader.has_update());

        publisher.publish(Pose::new(Vec3::ONE, 10.0, 20.0));
        publisher.publish(Pose::new(Vec3::X, 30.0, 40.0));
        assert!(reader.has_update());
        assert_eq!(reader.latest(), Pose::new(Vec3::X, 30.0, 40.0));
        assert!(!reader.has_update());
    }

    #[test]
    fn reader_works_across_threads() {
        let (mut publisher, mut reader) = pose_channel(&Pose::default());
        let handle = std::thread::spawn(move || {
            for i in 0..100 {
                publisher.publish(Pose::new(Vec3::splat(i as f32), 0.0, 45.0));
            }
        });
        handle.join().unwrap();
        assert_eq!(reader.latest().position, Vec3::splat(99.0));
    }
}
