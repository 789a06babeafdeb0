mod common;

use common::*;

#[test]
fn show_defaults_to_first_library() {
    let env = scene_env();

    let result = env.run(&["--ascii", "show"]);

    assert!(result.success, "{}", result.combined_output());
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [v] Collection (1)
      [C] Set
    [v] Mesh (2)
      [M] Cube
      [M] Sphere
    [v] Material (1)
      [T] Red
    ");
}

#[test]
fn show_named_library() {
    let env = scene_env();

    let result = env.run(&["--ascii", "show", "old.blend"]);

    assert!(result.success, "{}", result.combined_output());
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [v] Mesh (1)
      [M] Tree
    ");
}

#[test]
fn show_search_keeps_headers_of_matches() {
    let env = scene_env();

    let result = env.run(&["--ascii", "show", "--search", "SPH"]);

    assert!(result.success, "{}", result.combined_output());
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [v] Mesh (2)
      [M] Sphere
    ");
}

#[test]
fn show_search_without_matches_explains() {
    let env = scene_env();

    let result = env.run(&["show", "--search", "zzz"]);

    assert!(result.success);
    assert_eq!(result.stdout.trim_end(), "No linked data matches 'zzz'.");
}

#[test]
fn show_collapse_keeps_header_only() {
    let env = scene_env();

    let result = env.run(&["--ascii", "show", "--collapse", "mesh,collection"]);

    assert!(result.success, "{}", result.combined_output());
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [>] Collection (1)
    [>] Mesh (2)
    [v] Material (1)
      [T] Red
    ");
}

#[test]
fn show_collapse_all() {
    let env = scene_env();

    let result = env.run(&["--ascii", "show", "--collapse-all"]);

    assert!(result.success, "{}", result.combined_output());
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [>] Collection (1)
    [>] Mesh (2)
    [>] Material (1)
    ");
}

#[test]
fn show_collapse_absent_category_warns() {
    let env = scene_env();

    let result = env.run(&["--ascii", "show", "old.blend", "--collapse", "material"]);

    assert!(result.success);
    assert!(
        result.stderr.contains("[WARN] Category 'Material' not found."),
        "{}",
        result.stderr
    );
}

#[test]
fn show_unknown_library_fails() {
    let env = scene_env();

    let result = env.run(&["--ascii", "show", "nope.blend"]);

    assert_eq!(result.exit_code, 1);
    assert!(result
        .stderr
        .contains("[FAIL] Library data block not found: nope.blend"));
}

#[test]
fn show_takes_search_from_environment() {
    let env = scene_env();

    let result = env.run_with_env(&["--ascii", "show"], &[("LINKVIEW_SEARCH", "red")]);

    assert!(result.success);
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    [v] Material (1)
      [T] Red
    ");
}
