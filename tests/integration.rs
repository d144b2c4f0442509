//! Integration tests for whatdo


use harness::{TestRepo, run_whatdo};

fn example_repo() -> TestRepo {
    let repo = TestRepo::new();
    repo.add_file("a.txt", "hello\nTODO fix this\n");
    repo.add_file("b/c.txt", "TODO write docs\nTODO add tests\n");
    repo
}

#[test]
fn test_list_shows_addresses_and_content() {
    let repo = example_repo();

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &[]);
    assert!(success, "whatdo should succeed");
    assert!(stdout.contains("a.txt"), "should show a.txt: {}", stdout);
    assert!(stdout.contains("b/c.txt"), "should show b/c.txt: {}", stdout);
    assert!(stdout.contains("1.1      2  TODO fix this"), "{}", stdout);
    assert!(stdout.contains("2.1      1  TODO write docs"), "{}", stdout);
    assert!(stdout.contains("2.2      2  TODO add tests"), "{}", stdout);
    assert!(!stdout.contains("hello"), "non-matching lines are hidden");
}

#[test]
fn test_count_mode() {
    let repo = example_repo();

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["--count"]);
    assert!(success);
    assert!(stdout.contains("1 items in file a.txt"), "{}", stdout);
    assert!(stdout.contains("2 items in file b/c.txt"), "{}", stdout);
    assert!(
        stdout.contains("3 total todo items in 2 files"),
        "should report totals: {}",
        stdout
    );
}

#[test]
fn test_dir_flag() {
    let repo = example_repo();
    let outside = TestRepo::new();

    let dir = repo.path().join("b");
    let (stdout, _stderr, success) =
        run_whatdo(outside.path(), &["-c", "-d", dir.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("2 total todo items in 1 files"), "{}", stdout);
    // Paths are relative to the working directory, not the root
    assert!(stdout.contains("../"), "{}", stdout);
    assert!(stdout.contains("b/c.txt"), "{}", stdout);
}

#[test]
fn test_single_file_root() {
    let repo = example_repo();

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["-c", "-d", "b/c.txt"]);
    assert!(success);
    assert!(stdout.contains("2 items in file b/c.txt"), "{}", stdout);
    assert!(stdout.contains("2 total todo items in 1 files"), "{}", stdout);
}

#[test]
fn test_norecurse() {
    let repo = example_repo();

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["-n", "-c"]);
    assert!(success);
    assert!(stdout.contains("a.txt"));
    assert!(!stdout.contains("b/c.txt"), "should not descend: {}", stdout);
    assert!(stdout.contains("1 total todo items in 1 files"), "{}", stdout);
}

#[test]
fn test_hidden_flag() {
    let repo = TestRepo::new();
    repo.add_file("visible.txt", "TODO visible\n");
    repo.add_file(".hidden.txt", "TODO hidden file\n");
    repo.add_file(".config/settings.txt", "TODO hidden dir\n");

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("TODO visible"));
    assert!(!stdout.contains("hidden"), "hidden skipped: {}", stdout);

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["--hidden"]);
    assert!(success);
    assert!(stdout.contains("TODO hidden file"), "{}", stdout);
    assert!(stdout.contains("TODO hidden dir"), "{}", stdout);
}

#[test]
fn test_custom_pattern() {
    let repo = TestRepo::new();
    repo.add_file("main.rs", "fn main() {} // FIXME: leaks\n// TODO: later\n");

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["-p", "FIXME"]);
    assert!(success);
    assert!(stdout.contains("FIXME: leaks"), "{}", stdout);
    assert!(!stdout.contains("later"), "{}", stdout);
}

#[test]
fn test_custom_marker_ignore_case() {
    let repo = TestRepo::new();
    repo.add_file("notes.md", "- fixme: one\n- FIXME two\n- TODO three\n");

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["-m", "FIXME", "-i", "-c"]);
    assert!(success);
    assert!(stdout.contains("2 total todo items in 1 files"), "{}", stdout);
}

#[test]
fn test_ignore_glob() {
    let repo = example_repo();
    repo.add_file("build/out.txt", "TODO generated\n");

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["-I", "build", "-c"]);
    assert!(success);
    assert!(!stdout.contains("out.txt"), "{}", stdout);
    assert!(stdout.contains("3 total todo items in 2 files"), "{}", stdout);
}

#[test]
fn test_empty_scan() {
    let repo = TestRepo::new();
    repo.add_file("plain.txt", "nothing to do\n");

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("no todo items found"), "{}", stdout);
}

#[test]
fn test_json_list_output() {
    let repo = example_repo();

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["--json"]);
    assert!(success, "whatdo --json should succeed");

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    let groups = json.as_array().expect("top level should be an array");
    assert_eq!(groups.len(), 2);

    let c = groups
        .iter()
        .find(|g| g["path"] == "b/c.txt")
        .expect("should include b/c.txt");
    assert_eq!(c["items"].as_array().unwrap().len(), 2);
    assert_eq!(c["items"][1]["index"], 2);
    assert_eq!(c["items"][1]["line"], 2);
    assert_eq!(c["items"][1]["content"], "TODO add tests");

    let mut indices: Vec<u64> = groups.iter().map(|g| g["index"].as_u64().unwrap()).collect();
    indices.sort();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_json_count_output() {
    let repo = example_repo();

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["--count", "--json"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["total_items"], 3);
    assert_eq!(json["total_files"], 2);
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_group_indices_are_dense_across_tree() {
    let repo = TestRepo::new();
    repo.add_file("one.txt", "TODO a\n");
    repo.add_file("empty.txt", "no match\n");
    repo.add_file("x/two.txt", "TODO b\nTODO c\n");
    repo.add_file("x/y/three.txt", "TODO d\n");
    repo.add_file("z/none.txt", "still nothing\n");

    let (stdout, _stderr, success) = run_whatdo(repo.path(), &["--json"]);
    assert!(success);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let groups = json.as_array().unwrap();

    let indices: Vec<u64> = groups.iter().map(|g| g["index"].as_u64().unwrap()).collect();
    assert_eq!(indices, vec![1, 2, 3], "emission order is index order");
    for g in groups {
        let items: Vec<u64> = g["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["index"].as_u64().unwrap())
            .collect();
        let expected: Vec<u64> = (1..=items.len() as u64).collect();
        assert_eq!(items, expected);
    }
}
