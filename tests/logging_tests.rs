use orient_kit::math::{Quaternion, AXIS_MZ, AXIS_Y};
use orient_kit::orientation::{quat_project, quat_project_with};
use orient_kit::OrientationConfig;
use std::io;
use std::sync::{Arc, Mutex};

/// Shared buffer the fmt layer writes formatted events into
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<F: FnOnce()>(f: F) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    log.contents()
}

#[test]
fn test_out_of_plane_reference_logs_error() {
    let output = capture_logs(|| {
        assert!(quat_project(Quaternion::IDENTITY, AXIS_MZ, AXIS_Y, AXIS_Y).is_err());
    });

    assert!(output.contains("Wrong in-plane direction"), "captured: {output}");
    assert!(output.contains("ERROR"), "captured: {output}");
    assert!(output.contains("dot=1"), "captured: {output}");
}

#[test]
fn test_successful_projection_logs_nothing() {
    let output = capture_logs(|| {
        assert!(quat_project(Quaternion::IDENTITY, AXIS_MZ, AXIS_Y, AXIS_MZ).is_ok());
    });

    assert!(!output.contains("Wrong in-plane direction"), "captured: {output}");
}

#[test]
fn test_tolerance_rejection_logs_the_tolerance() {
    let config = OrientationConfig::new().with_in_plane_tolerance(0.25);

    let output = capture_logs(|| {
        assert!(quat_project_with(&config, Quaternion::IDENTITY, AXIS_MZ, AXIS_Y, AXIS_Y).is_err());
    });

    assert!(output.contains("Wrong in-plane direction"), "captured: {output}");
    assert!(output.contains("tolerance=0.25"), "captured: {output}");
}
