//! Tests for the line-oriented frontend.

use marubatsu::{Config, LineFrontend, Presenter};
use std::io::Cursor;

fn run(input: &str, json: bool) -> String {
    let mut output = Vec::new();
    LineFrontend::new(
        Cursor::new(input.to_string()),
        &mut output,
        Presenter::default(),
        3,
        json,
    )
    .expect("valid size")
    .run()
    .expect("session runs");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_first_player_wins_top_row() {
    let output = run("0 0\n1 0\n0 1\n1 1\n0 2\n", false);
    assert!(output.contains("○ wins"));
    // The turn line after the winning move already names the next player.
    let tail = &output[output.rfind("turn:").expect("turn line")..];
    assert!(tail.starts_with("turn: ×"));
}

#[test]
fn test_draw() {
    let output = run("0 0\n0 1\n0 2\n1 1\n1 0\n2 0\n1 2\n2 2\n2 1\n", false);
    assert!(output.contains("draw"));
    assert!(!output.contains("wins"));
}

#[test]
fn test_occupied_cell_reported_and_turn_kept() {
    let output = run("1 1\n1 1\n", false);
    assert!(output.contains("cell (1, 1) is taken"));
    assert_eq!(output.matches("turn: ×").count(), 1);
}

#[test]
fn test_out_of_range_reported() {
    let output = run("3 0\n", false);
    assert!(output.contains("outside the 3x3 board"));
}

#[test]
fn test_moves_after_game_over_refused() {
    let output = run("0 0\n1 0\n0 1\n1 1\n0 2\n2 2\n", false);
    assert!(output.contains("game over"));
}

#[test]
fn test_new_game_resets_board() {
    let output = run("0 0\nnew\n0 0\n", false);
    assert!(!output.contains("is taken"));
}

#[test]
fn test_quit_stops_reading() {
    let output = run("quit\n0 0\n", false);
    assert!(!output.contains("turn: ×"));
}

#[test]
fn test_unknown_command() {
    let output = run("play\n", false);
    assert!(output.contains("unknown command \"play\""));
}

#[test]
fn test_json_snapshots() {
    let output = run("1 1\n", true);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    let last: serde_json::Value = serde_json::from_str(lines[1]).expect("json line");
    assert_eq!(last["turn"], "Second");
    assert_eq!(last["outcome"], "InProgress");
    assert_eq!(last["board"][1][1], "First");
}

#[test]
fn test_custom_labels() {
    let config = Config::from_toml(
        "[glyphs]\nfirst = \"O\"\nsecond = \"X\"\n[labels]\nwin = \"{mark}の勝利\"",
    )
    .expect("valid config");
    let mut output = Vec::new();
    LineFrontend::new(
        Cursor::new("0 0\n1 0\n0 1\n1 1\n0 2\n"),
        &mut output,
        Presenter::from_config(&config),
        3,
        false,
    )
    .expect("valid size")
    .run()
    .expect("session runs");
    let output = String::from_utf8(output).expect("utf-8 output");
    assert!(output.contains("Oの勝利"));
}
