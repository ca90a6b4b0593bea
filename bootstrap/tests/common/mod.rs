#![allow(dead_code)]

use fibre_bootstrap::{Diagnostics, HostConfig, HostContext, InitParams};
use parking_lot::Mutex;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;

/// Collects everything written by a test subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.buffer.lock()).into_owned()
  }
}

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.buffer.lock().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

/// A `Diagnostics` whose output, up to `level`, lands in the returned buffer.
pub fn capture(level: LevelFilter) -> (Diagnostics, CapturedLogs) {
  let logs = CapturedLogs::default();
  let buffer = Arc::clone(&logs.buffer);
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(level)
    .with_ansi(false)
    .with_writer(move || CaptureWriter {
      buffer: Arc::clone(&buffer),
    })
    .finish();
  (
    Diagnostics::from_dispatch(tracing::Dispatch::new(subscriber)),
    logs,
  )
}

pub fn host_config(params: InitParams, root: &Path) -> HostConfig {
  let context = Arc::new(HostContext::new("test server").with_resource_root(root));
  HostConfig::new("test host", params, context)
}

pub fn write_resource(root: &Path, name: &str, contents: &str) {
  std::fs::write(root.join(name), contents).unwrap();
}
