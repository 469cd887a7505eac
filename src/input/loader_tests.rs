use super::*;
use std::fs;
use std::io::{Cursor, Write};
use tempfile::TempDir;

/// Helper to create a temporary text file
fn create_temp_file(content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.log");
    let mut file = fs::File::create(&file_path).unwrap();
    file.write_all(content).unwrap();
    (temp_dir, file_path)
}

/// Helper to poll until the loader thread finishes, collecting every line
fn collect_until_done(loader: &mut LineLoader, max_attempts: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for _ in 0..max_attempts {
        lines.extend(loader.poll());
        if !loader.is_loading() {
            return lines;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("loader did not finish, got {:?}", lines);
}

/// Helper to poll until at least `count` lines have arrived
fn collect_at_least(
    loader: &mut LineLoader,
    lines: &mut Vec<String>,
    count: usize,
    max_attempts: u32,
) {
    for _ in 0..max_attempts {
        lines.extend(loader.poll());
        if lines.len() >= count {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("expected {} lines, got {:?}", count, lines);
}

#[test]
fn test_loads_all_lines_from_file() {
    let (_temp_dir, file_path) = create_temp_file(b"alpha\nbravo\ncharlie\n");

    let mut loader = LineLoader::spawn_file(file_path, false);
    let lines = collect_until_done(&mut loader, 200);

    assert_eq!(lines, vec!["alpha", "bravo", "charlie"]);
    assert_eq!(loader.state(), &LoadingState::Complete);
}

#[test]
fn test_final_line_without_newline_is_kept() {
    let (_temp_dir, file_path) = create_temp_file(b"first\nlast");

    let mut loader = LineLoader::spawn_file(file_path, false);
    let lines = collect_until_done(&mut loader, 200);

    assert_eq!(lines, vec!["first", "last"]);
}

#[test]
fn test_crlf_terminators_are_stripped() {
    let (_temp_dir, file_path) = create_temp_file(b"one\r\ntwo\r\n");

    let mut loader = LineLoader::spawn_file(file_path, false);
    let lines = collect_until_done(&mut loader, 200);

    assert_eq!(lines, vec!["one", "two"]);
}

#[test]
fn test_blank_lines_are_preserved() {
    let (_temp_dir, file_path) = create_temp_file(b"a\n\n\nb\n");

    let mut loader = LineLoader::spawn_file(file_path, false);
    let lines = collect_until_done(&mut loader, 200);

    assert_eq!(lines, vec!["a", "", "", "b"]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let (_temp_dir, file_path) = create_temp_file(b"ok\nbad \xff byte\n");

    let mut loader = LineLoader::spawn_file(file_path, false);
    let lines = collect_until_done(&mut loader, 200);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ok");
    assert_eq!(lines[1], "bad \u{FFFD} byte");
    assert_eq!(loader.state(), &LoadingState::Complete);
}

#[test]
fn test_empty_file_completes_without_lines() {
    let (_temp_dir, file_path) = create_temp_file(b"");

    let mut loader = LineLoader::spawn_file(file_path, false);
    let lines = collect_until_done(&mut loader, 200);

    assert!(lines.is_empty());
    assert_eq!(loader.state(), &LoadingState::Complete);
}

#[test]
fn test_missing_file_reports_error() {
    let missing_path = PathBuf::from("/nonexistent/path/to/file.log");

    let mut loader = LineLoader::spawn_file(missing_path, false);
    let lines = collect_until_done(&mut loader, 200);

    assert!(lines.is_empty());
    assert!(matches!(
        loader.state(),
        LoadingState::Error(ViewerError::Io(_))
    ));
}

#[test]
fn test_large_input_arrives_in_order() {
    let content: String = (0..5000).map(|i| format!("line {}\n", i)).collect();

    let mut loader = LineLoader::spawn_reader(Cursor::new(content.into_bytes()));
    let lines = collect_until_done(&mut loader, 500);

    assert_eq!(lines.len(), 5000);
    assert_eq!(lines[0], "line 0");
    assert_eq!(lines[4999], "line 4999");
    assert!(lines.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn test_poll_after_completion_returns_nothing() {
    let mut loader = LineLoader::spawn_reader(Cursor::new(b"x\n".to_vec()));
    collect_until_done(&mut loader, 200);

    assert!(loader.poll().is_empty());
    assert!(!loader.is_loading());
    assert_eq!(loader.state(), &LoadingState::Complete);
}

#[test]
fn test_initial_state_is_loading() {
    let (_temp_dir, file_path) = create_temp_file(b"a\n");
    let loader = LineLoader::spawn_file(file_path, false);

    assert_eq!(loader.state(), &LoadingState::Loading);
    assert!(loader.is_loading());
}

#[test]
fn test_follow_picks_up_appended_lines() {
    let (_temp_dir, file_path) = create_temp_file(b"start\n");

    let mut loader =
        LineLoader::spawn_file_with_interval(file_path.clone(), Some(Duration::from_millis(10)));
    let mut lines = Vec::new();
    collect_at_least(&mut loader, &mut lines, 1, 200);
    assert_eq!(lines, vec!["start"]);

    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(&file_path)
        .unwrap();
    file.write_all(b"appended 1\nappended 2\n").unwrap();
    file.flush().unwrap();

    collect_at_least(&mut loader, &mut lines, 3, 300);

    assert_eq!(lines, vec!["start", "appended 1", "appended 2"]);
    assert_eq!(loader.state(), &LoadingState::Following);
    assert!(loader.is_loading());
}

#[test]
fn test_follow_waits_for_complete_line() {
    let (_temp_dir, file_path) = create_temp_file(b"");

    let mut loader =
        LineLoader::spawn_file_with_interval(file_path.clone(), Some(Duration::from_millis(10)));

    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(&file_path)
        .unwrap();
    file.write_all(b"half").unwrap();
    file.flush().unwrap();
    thread::sleep(Duration::from_millis(60));
    assert!(loader.poll().is_empty());

    file.write_all(b" done\n").unwrap();
    file.flush().unwrap();

    let mut lines = Vec::new();
    collect_at_least(&mut loader, &mut lines, 1, 300);
    assert_eq!(lines, vec!["half done"]);
}

#[test]
fn test_decode_strips_terminators() {
    assert_eq!(decode(b"text\r\n"), "text");
    assert_eq!(decode(b"text\n"), "text");
    assert_eq!(decode(b"text"), "text");
    assert_eq!(decode(b"\r\n"), "");
}
