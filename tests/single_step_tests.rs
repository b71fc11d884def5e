//! Conformance tests in the single-step JSON format.
//!
//! The small hand-checked fixtures in `tests/json/` always run. The full
//! per-opcode corpus (10,000 cases per opcode) is expected at
//! `tests/json/v1/XX.json` and runs only with `--ignored`.

use std::path::{Path, PathBuf};

use cpu6502::conformance::{load_cases, run_case, run_file, run_file_with_config, HarnessError};
use cpu6502::{Config, DecimalMode, OPCODE_TABLE};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/json")
        .join(name)
}

fn assert_fixture_passes(name: &str, expected_cases: usize) {
    let report = run_file(fixture(name)).unwrap();

    for failure in &report.failures {
        for mismatch in &failure.mismatches {
            eprintln!("{}: {}", failure.name, mismatch);
        }
    }
    assert_eq!(report.failed, 0, "{} had failing cases", name);
    assert_eq!(report.passed, expected_cases);
}

#[test]
fn test_lda_immediate_fixture() {
    assert_fixture_passes("a9.json", 2);
}

#[test]
fn test_adc_immediate_fixture() {
    assert_fixture_passes("69.json", 2);
}

#[test]
fn test_sbc_immediate_fixture() {
    assert_fixture_passes("e9.json", 1);
}

#[test]
fn test_jmp_indirect_fixture() {
    assert_fixture_passes("6c.json", 1);
}

#[test]
fn test_lda_absolute_x_fixture() {
    assert_fixture_passes("bd.json", 2);
}

#[test]
fn test_jsr_fixture() {
    assert_fixture_passes("20.json", 1);
}

#[test]
fn test_cycle_count_comes_from_bus_log() {
    let cases = load_cases(fixture("bd.json")).unwrap();
    assert_eq!(cases[0].cycles.len(), 4);
    assert_eq!(cases[1].cycles.len(), 5);

    let mut short = cases[1].clone();
    short.cycles.pop();
    assert!(!run_case(&short).passed());
}

#[test]
fn test_non_array_file_is_rejected() {
    let err = run_file(fixture("not_an_array.json")).unwrap_err();
    assert!(matches!(err, HarnessError::NotAnArray));
}

#[test]
fn test_missing_file_is_rejected() {
    let err = run_file(fixture("missing.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
}

#[test]
#[ignore = "requires tests/json/v1 — run with --ignored"]
fn run_all() {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/json/v1");

    if !test_dir.exists() {
        eprintln!("Test data not found at {}", test_dir.display());
        eprintln!("Skipping single-step corpus.");
        return;
    }

    // The corpus was recorded on an NMOS part, BCD included
    let config = Config {
        decimal_mode: DecimalMode::Nmos,
    };

    let mut total_pass = 0usize;
    let mut total_fail = 0usize;
    let mut failed_files = Vec::new();

    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        let Some(metadata) = entry else {
            continue;
        };

        let path = test_dir.join(format!("{:02x}.json", opcode));
        if !path.exists() {
            continue;
        }

        let report = run_file_with_config(&path, config).unwrap_or_else(|e| {
            panic!("Failed to load {}: {}", path.display(), e);
        });

        total_pass += report.passed;
        total_fail += report.failed;

        if report.failed > 0 {
            eprintln!(
                "{:02x} {}: {}/{} passed",
                opcode,
                metadata.mnemonic(),
                report.passed,
                report.total()
            );
            for failure in report.failures.iter().take(3) {
                eprintln!("  {}", failure.name);
                for mismatch in &failure.mismatches {
                    eprintln!("    {}", mismatch);
                }
            }
            failed_files.push(opcode);
        }
    }

    eprintln!("single-step: {} passed, {} failed", total_pass, total_fail);
    assert!(
        failed_files.is_empty(),
        "opcodes with failures: {:02x?}",
        failed_files
    );
}
