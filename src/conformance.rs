//! # Single-Step Conformance Harness
//!
//! Loads per-opcode JSON test files in the widely used "single step" format and
//! checks the CPU against them. Each file is an array of cases:
//!
//! ```json
//! [
//!   {
//!     "name": "a9 42 00",
//!     "initial": { "pc": 512, "s": 253, "a": 0, "x": 0, "y": 0, "p": 32,
//!                  "ram": [[512, 169], [513, 66]] },
//!     "final":   { "pc": 514, "s": 253, "a": 66, "x": 0, "y": 0, "p": 32,
//!                  "ram": [[512, 169], [513, 66]] },
//!     "cycles":  [[512, 169, "read"], [513, 66, "read"]]
//!   }
//! ]
//! ```
//!
//! A case passes when one `tick()` from the initial state reproduces every
//! register, every listed RAM byte, and a cycle delta equal to the number of
//! bus cycles recorded in `cycles`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Config, FlatMemory, MemoryBus, CPU};

/// Register and memory snapshot used for both sides of a case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CpuState {
    pub pc: u16,
    pub s: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub ram: Vec<(u16, u8)>,
}

/// One single-instruction test case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub initial: CpuState,
    #[serde(rename = "final")]
    pub final_state: CpuState,
    /// Bus activity per cycle: (address, value, "read" | "write").
    pub cycles: Vec<(u16, u8, String)>,
}

/// Errors raised while loading a test file.
#[derive(Debug)]
pub enum HarnessError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },

    /// The file is not valid JSON or a case is missing a field.
    Parse(serde_json::Error),

    /// The top-level JSON value is not an array of cases.
    NotAnArray,
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HarnessError::Io { path, source } => {
                write!(f, "Could not open test file {}: {}", path.display(), source)
            }
            HarnessError::Parse(err) => write!(f, "Malformed test file: {}", err),
            HarnessError::NotAnArray => {
                write!(f, "Expected an array of test cases in JSON file")
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io { source, .. } => Some(source),
            HarnessError::Parse(err) => Some(err),
            HarnessError::NotAnArray => None,
        }
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::Parse(err)
    }
}

/// Parses the contents of a test file.
///
/// # Errors
///
/// `NotAnArray` if the document is valid JSON but not an array, `Parse` for
/// anything else that does not deserialize.
pub fn parse_cases(json: &str) -> Result<Vec<TestCase>, HarnessError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(HarnessError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Reads and parses a test file from disk.
pub fn load_cases(path: impl AsRef<Path>) -> Result<Vec<TestCase>, HarnessError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cases(&json)
}

/// What differed between the expected and actual state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Pc { expected: u16, actual: u16 },
    A { expected: u8, actual: u8 },
    X { expected: u8, actual: u8 },
    Y { expected: u8, actual: u8 },
    S { expected: u8, actual: u8 },
    P { expected: u8, actual: u8 },
    Ram { addr: u16, expected: u8, actual: u8 },
    Cycles { expected: u64, actual: u64 },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Mismatch::Pc { expected, actual } => {
                write!(f, "PC: got ${:04X}, want ${:04X}", actual, expected)
            }
            Mismatch::A { expected, actual } => {
                write!(f, "A: got ${:02X}, want ${:02X}", actual, expected)
            }
            Mismatch::X { expected, actual } => {
                write!(f, "X: got ${:02X}, want ${:02X}", actual, expected)
            }
            Mismatch::Y { expected, actual } => {
                write!(f, "Y: got ${:02X}, want ${:02X}", actual, expected)
            }
            Mismatch::S { expected, actual } => {
                write!(f, "S: got ${:02X}, want ${:02X}", actual, expected)
            }
            Mismatch::P { expected, actual } => write!(
                f,
                "P: got ${:02X} ({:08b}), want ${:02X} ({:08b})",
                actual, actual, expected, expected
            ),
            Mismatch::Ram {
                addr,
                expected,
                actual,
            } => write!(
                f,
                "RAM[${:04X}]: got ${:02X}, want ${:02X}",
                addr, actual, expected
            ),
            Mismatch::Cycles { expected, actual } => {
                write!(f, "cycles: got {}, want {}", actual, expected)
            }
        }
    }
}

/// Outcome of running a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub mismatches: Vec<Mismatch>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Aggregate outcome of a test file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub passed: usize,
    pub failed: usize,

    /// Reports for the failing cases only.
    pub failures: Vec<CaseReport>,
}

impl FileReport {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Builds a CPU positioned at a case's initial state.
fn prepare(state: &CpuState, config: Config) -> CPU<FlatMemory> {
    let mut cpu = CPU::with_config(FlatMemory::new(), config);
    cpu.reset();

    for &(addr, value) in &state.ram {
        cpu.write(addr, value);
    }
    cpu.set_pc(state.pc);
    cpu.set_sp(state.s);
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_status(state.p);
    cpu
}

/// Collects every difference between `cpu` and `expected`.
fn compare<M: MemoryBus>(
    cpu: &CPU<M>,
    expected: &CpuState,
    expected_cycles: u64,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    if cpu.pc() != expected.pc {
        mismatches.push(Mismatch::Pc {
            expected: expected.pc,
            actual: cpu.pc(),
        });
    }
    if cpu.a() != expected.a {
        mismatches.push(Mismatch::A {
            expected: expected.a,
            actual: cpu.a(),
        });
    }
    if cpu.x() != expected.x {
        mismatches.push(Mismatch::X {
            expected: expected.x,
            actual: cpu.x(),
        });
    }
    if cpu.y() != expected.y {
        mismatches.push(Mismatch::Y {
            expected: expected.y,
            actual: cpu.y(),
        });
    }
    if cpu.sp() != expected.s {
        mismatches.push(Mismatch::S {
            expected: expected.s,
            actual: cpu.sp(),
        });
    }
    if cpu.status() != expected.p {
        mismatches.push(Mismatch::P {
            expected: expected.p,
            actual: cpu.status(),
        });
    }

    for &(addr, value) in &expected.ram {
        let actual = cpu.read(addr);
        if actual != value {
            mismatches.push(Mismatch::Ram {
                addr,
                expected: value,
                actual,
            });
        }
    }

    if cpu.cycles() != expected_cycles {
        mismatches.push(Mismatch::Cycles {
            expected: expected_cycles,
            actual: cpu.cycles(),
        });
    }

    mismatches
}

/// Executes one case on a fresh, default-configured CPU over flat memory.
pub fn run_case(case: &TestCase) -> CaseReport {
    run_case_with_config(case, Config::default())
}

/// Executes one case on a fresh CPU built with `config`.
///
/// Published corpora are recorded on NMOS parts, so their decimal-mode cases
/// only pass with `DecimalMode::Nmos`.
pub fn run_case_with_config(case: &TestCase, config: Config) -> CaseReport {
    let mut cpu = prepare(&case.initial, config);
    cpu.tick();

    CaseReport {
        name: case.name.clone(),
        mismatches: compare(&cpu, &case.final_state, case.cycles.len() as u64),
    }
}

/// Runs every case in a slice.
pub fn run_cases(cases: &[TestCase], config: Config) -> FileReport {
    let mut report = FileReport::default();

    for case in cases {
        let result = run_case_with_config(case, config);
        if result.passed() {
            report.passed += 1;
        } else {
            log::debug!("{}: {} mismatch(es)", result.name, result.mismatches.len());
            report.failed += 1;
            report.failures.push(result);
        }
    }

    report
}

/// Loads a test file and runs every case in it with the default configuration.
pub fn run_file(path: impl AsRef<Path>) -> Result<FileReport, HarnessError> {
    run_file_with_config(path, Config::default())
}

/// Loads a test file and runs every case in it on CPUs built with `config`.
pub fn run_file_with_config(
    path: impl AsRef<Path>,
    config: Config,
) -> Result<FileReport, HarnessError> {
    let cases = load_cases(path)?;
    Ok(run_cases(&cases, config))
}
