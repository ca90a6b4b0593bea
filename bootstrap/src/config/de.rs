// src/config/de.rs
// Custom deserialization helpers for serde.

use serde::Deserialize;
use std::fmt;

/// A scalar setting value. YAML authors write `debug: false` as often as
/// `debug: "false"`; both end up as the same string setting.
///
/// Unsigned integers get their own variant so values past `i64::MAX` never
/// pass through `f64`. Floats render with their fractional part (`2.0`, not
/// `2`). Non-decimal YAML integers such as `0x1F` are integers to the parser
/// and render in decimal; quote them to keep the original spelling.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum ScalarRaw {
  Bool(bool),
  Int(i64),
  UInt(u64),
  Float(f64),
  String(String),
}

impl fmt::Display for ScalarRaw {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ScalarRaw::Bool(b) => write!(f, "{}", b),
      ScalarRaw::Int(i) => write!(f, "{}", i),
      ScalarRaw::UInt(u) => write!(f, "{}", u),
      ScalarRaw::Float(x) => write!(f, "{:?}", x),
      ScalarRaw::String(s) => f.write_str(s),
    }
  }
}
