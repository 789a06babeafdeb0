//! Scenario: Clean Broken Library Links
//!
//! Journey: some library files were moved away. The user lists the
//! libraries, sees which are missing, and cleans them up in one go.

use crate::common::*;

/// SCENARIO: missing libraries are listed, then removed with --yes
#[test]
fn scenario_clean_missing_libraries() {
    let env = scene_env();

    let groups = env.run(&["--ascii", "groups"]);
    assert!(groups.success, "{}", groups.combined_output());
    assert!(groups.stdout.contains("old.blend"));
    assert!(groups.stdout.contains("(missing)"));

    let clean = env.run(&["--ascii", "clean", "--yes"]);
    assert!(clean.success, "{}", clean.combined_output());
    assert!(
        clean
            .stdout
            .contains("Successfully cleaned up 1 broken library link(s)."),
        "{}",
        clean.combined_output()
    );

    let manifest = env.read_manifest();
    assert!(!manifest.contains("old.blend"));
    assert!(!manifest.contains("Tree"));
    assert!(manifest.contains("props.blend"));

    let again = env.run(&["--ascii", "clean", "--yes"]);
    assert!(again.success);
    assert!(again
        .stdout
        .contains("No broken library links found to clean up."));
}

/// SCENARIO: without a terminal, clean refuses to proceed unconfirmed
#[test]
fn scenario_clean_needs_confirmation() {
    let env = scene_env();

    let result = env.run(&["clean"]);
    assert!(!result.success);
    assert!(result.stderr.contains("--yes"), "{}", result.stderr);
    assert!(env.read_manifest().contains("old.blend"));
}
