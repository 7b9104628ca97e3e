//! Behavioural tests for leading comment reflow.

use commentfmt::{ReflowOptions, reflow, reflow_split};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// State for reflow scenarios.
#[derive(ScenarioState, Default)]
struct ReflowState {
    input: Slot<String>,
    delimiter: Slot<String>,
    output: Slot<String>,
    comments: Slot<String>,
    code: Slot<String>,
}

#[fixture]
fn reflow_state() -> ReflowState {
    ReflowState::default()
}

/// Strips the surrounding quotes from a step argument and expands the `\n`
/// and `\t` escapes used in the feature file.
fn unquote(raw: &str) -> String {
    raw.trim_matches('"').replace("\\n", "\n").replace("\\t", "\t")
}

fn options_for(reflow_state: &ReflowState, width: usize) -> ReflowOptions {
    ReflowOptions {
        target_width: width,
        delimiter: reflow_state.delimiter.get(),
        ..ReflowOptions::default()
    }
}

fn input_of(reflow_state: &ReflowState) -> String {
    reflow_state
        .input
        .get()
        .unwrap_or_else(|| panic!("input not set"))
}

fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|error| panic!("output is not UTF-8: {error}"))
}

// --- Given steps ---

#[given("the source text {text}")]
fn input_is(reflow_state: &ReflowState, text: String) {
    reflow_state.input.set(unquote(&text));
}

#[given("the delimiter {delimiter}")]
fn delimiter_is(reflow_state: &ReflowState, delimiter: String) {
    reflow_state.delimiter.set(unquote(&delimiter));
}

// --- When steps ---

#[when("the input is reflowed at width {width:usize}")]
fn reflow_at_width(reflow_state: &ReflowState, width: usize) {
    let input = input_of(reflow_state);
    let mut output = Vec::new();

    reflow(
        input.as_bytes(),
        &mut output,
        &options_for(reflow_state, width),
    )
    .unwrap_or_else(|error| panic!("reflow failed: {error}"));

    reflow_state.output.set(utf8(output));
}

#[when("the input is split at width {width:usize}")]
fn split_at_width(reflow_state: &ReflowState, width: usize) {
    let input = input_of(reflow_state);
    let mut comments = Vec::new();
    let mut code = Vec::new();

    reflow_split(
        input.as_bytes(),
        &mut comments,
        &mut code,
        &options_for(reflow_state, width),
    )
    .unwrap_or_else(|error| panic!("reflow failed: {error}"));

    reflow_state.comments.set(utf8(comments));
    reflow_state.code.set(utf8(code));
}

// --- Then steps ---

fn assert_slot(slot: &Slot<String>, expected: &str, what: &str) {
    let actual = slot
        .get()
        .unwrap_or_else(|| panic!("{what} not produced"));

    assert_eq!(actual, unquote(expected), "{what} mismatch");
}

#[then("the output is {expected}")]
fn output_is(reflow_state: &ReflowState, expected: String) {
    assert_slot(&reflow_state.output, &expected, "output");
}

#[then("the comment stream is {expected}")]
fn comment_stream_is(reflow_state: &ReflowState, expected: String) {
    assert_slot(&reflow_state.comments, &expected, "comment stream");
}

#[then("the code stream is {expected}")]
fn code_stream_is(reflow_state: &ReflowState, expected: String) {
    assert_slot(&reflow_state.code, &expected, "code stream");
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/reflow.feature", index = 0)]
fn consecutive_lines_merge(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 1)]
fn break_prefers_earlier_space(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 2)]
fn word_moves_to_next_line(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 3)]
fn non_comment_line_ends_block(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 4)]
fn blank_comment_line_separates_paragraphs(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 5)]
fn indented_text_kept_verbatim(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 6)]
fn sentences_get_two_spaces(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 7)]
fn tab_indent_is_part_of_prefix(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 8)]
fn exported_line_ends_block(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 9)]
fn explicit_delimiter_overrides_detection(reflow_state: ReflowState) {
    let _ = reflow_state;
}

#[scenario(path = "tests/features/reflow.feature", index = 10)]
fn streams_can_be_separated(reflow_state: ReflowState) {
    let _ = reflow_state;
}
