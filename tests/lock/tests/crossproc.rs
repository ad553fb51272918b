//! Cross-process determinism for `search_fixture`.
//!
//! Spawns the binary under several environment variants and asserts that
//! stdout is byte-identical. Logging goes to stderr, so raising the log
//! level must not change stdout.

use std::path::Path;
use std::process::Command;

use waypoint_harness::verify_run_dir;

fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_search_fixture")
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)], args: &[&str]) -> String {
    let bin = binary_path();

    let mut command = Command::new(bin);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("WAYPOINT_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[], &[]);

    assert!(
        baseline.contains("grid_maze.batch.fifo.report_digest=sha256:"),
        "baseline output missing grid report digest"
    );
    assert!(baseline.contains("grid_maze.batch.fifo.cost=17"));
    assert!(baseline.contains("road_shire.incremental.fifo.cost=17"));
    assert!(baseline.contains("road_shire.batch.fifo.termination=goal_reached"));

    let tmp = std::env::temp_dir();
    let variants: [(&str, Vec<(&str, &str)>); 3] = [
        ("C locale", vec![("LC_ALL", "C")]),
        ("UTF-8 locale", vec![("LC_ALL", "en_US.UTF-8"), ("LANG", "en_US.UTF-8")]),
        ("trace logging", vec![("WAYPOINT_LOG", "trace")]),
    ];
    for (name, env) in &variants {
        let output = run_variant(&root, env, &[]);
        assert_eq!(baseline, output, "variant {name} diverged from baseline");
    }

    let from_tmp = run_variant(&tmp.to_string_lossy(), &[], &[]);
    assert_eq!(baseline, from_tmp, "working directory changed the output");
}

#[test]
fn batch_and_incremental_lines_agree_on_outcome() {
    let output = run_variant(&workspace_root(), &[], &[]);
    let value = |key: &str| {
        output
            .lines()
            .find_map(|l| l.strip_prefix(key).and_then(|r| r.strip_prefix('=')))
            .unwrap_or_else(|| panic!("missing {key}"))
            .to_string()
    };
    for world in ["grid_maze", "road_shire", "random_12_7"] {
        for field in ["cost", "termination", "path_len"] {
            assert_eq!(
                value(&format!("{world}.batch.fifo.{field}")),
                value(&format!("{world}.incremental.fifo.{field}")),
                "{world} {field}"
            );
        }
    }
}

#[test]
fn written_run_dir_verifies_in_another_process() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_string_lossy().to_string();
    let output = run_variant(&workspace_root(), &[], &[&out_dir]);

    let recorded = output
        .lines()
        .find_map(|l| l.strip_prefix("run_dir.report_digest="))
        .expect("run_dir digest printed");
    let verified = verify_run_dir(dir.path()).unwrap();
    assert_eq!(recorded, verified);
    assert!(output.contains(&format!("grid_maze.batch.fifo.report_digest={verified}")));
}
