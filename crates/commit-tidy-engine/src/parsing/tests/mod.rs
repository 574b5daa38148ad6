//! Integration tests for the parsing module.
//!
//! Chunk lists are rendered one line per chunk and compared with inline
//! `insta` snapshots; every parse is also run through the invariant checker.

use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::parsing::{
    ParsedMessage, assemble_chunks,
    chunks::{ChunkKind, LineRange, kinds::CUT_MARKER},
    parse_message,
    rope::lines_with_spans,
    snapshot,
};

fn parse_checked(text: &str) -> (Rope, ParsedMessage) {
    let rope = Rope::from(text);
    let parsed = parse_message(&rope);
    snapshot::invariants(&rope, &parsed.lines, &parsed.chunks);
    (rope, parsed)
}

fn render(text: &str) -> String {
    let (rope, parsed) = parse_checked(text);
    snapshot::render(&rope, &parsed.chunks)
}

fn kinds(text: &str) -> Vec<ChunkKind> {
    parse_checked(text).1.chunks.iter().map(|c| c.kind).collect()
}

// Snapshot tests

#[test]
fn verbose_commit_template() {
    let text = format!(
        "Fix watcher race\n\nStart after config\nis loaded.\n\n\
         Signed-off-by: A <a@x.com>\n\n# Please enter a message.\n{CUT_MARKER}\n\
         # Do not modify the line above.\n\ndiff --git a/x b/x\n\n+new\n"
    );

    insta::assert_snapshot!(render(&text), @r"
    Subject   0..=0  Fix watcher race
    Blank     1..=1
    Paragraph 2..=3  Start after config⏎is loaded.
    Blank     4..=4
    Trailers  5..=5  Signed-off-by: A <a@x.com>
    Blank     6..=6
    Comment   7..=9  # Please enter a message.⏎# ------------...
    Blank     10..=10
    Diff      11..=13  diff --git a/x b/x⏎⏎+new
    ");
}

#[test]
fn leading_blanks_and_comments_are_not_promoted() {
    let text = "\n\n# lead comment\n\nSubject here\nsecond subject line\n\n\n\nBody\n";

    insta::assert_snapshot!(render(text), @r"
    Blank     0..=1  ⏎
    Comment   2..=2  # lead comment
    Blank     3..=3
    Subject   4..=5  Subject here⏎second subject line
    Blank     6..=8  ⏎⏎
    Paragraph 9..=9  Body
    ");
}

#[test]
fn comments_after_diff_start_are_diff() {
    let text = format!("Subject\n\n{CUT_MARKER}\n# comment\n#\nindex 1..2\n# hash in diff\n");

    insta::assert_snapshot!(render(&text), @r"
    Subject   0..=0  Subject
    Blank     1..=1
    Comment   2..=4  # ------------------------ >8 ----------...
    Diff      5..=6  index 1..2⏎# hash in diff
    ");
}

#[test]
fn prose_footer_stays_paragraph() {
    let text = "Subject\n\nFirst body para.\n\nNote: the tail is prose\nbecause this line is not a trailer.\n";

    insta::assert_snapshot!(render(text), @r"
    Subject   0..=0  Subject
    Blank     1..=1
    Paragraph 2..=2  First body para.
    Blank     3..=3
    Paragraph 4..=5  Note: the tail is prose⏎because this lin...
    ");
}

// Edge cases

#[test]
fn empty_document() {
    let (_, parsed) = parse_checked("");
    assert!(parsed.lines.is_empty());
    assert!(parsed.chunks.is_empty());
}

#[test]
fn blank_lines_only() {
    let (_, parsed) = parse_checked(" \n\t\n\n");
    assert_eq!(parsed.chunks.len(), 1);
    assert_eq!(parsed.chunks[0].kind, ChunkKind::Blank);
    assert_eq!(parsed.chunks[0].lines, LineRange { start: 0, end: 2 });
}

#[test]
fn subject_without_trailing_newline() {
    let (_, parsed) = parse_checked("Only a subject");
    assert_eq!(parsed.chunks.len(), 1);
    assert_eq!(parsed.chunks[0].kind, ChunkKind::Subject);
    assert_eq!(parsed.chunks[0].content_span.len(), "Only a subject".len());
}

#[test]
fn subject_is_never_reclassified_as_trailers() {
    assert_eq!(kinds("Signed-off-by: A <a@x.com>\n"), vec![ChunkKind::Subject]);
}

#[test]
fn only_last_paragraph_can_become_trailers() {
    let text = "Subject\n\nAcked-by: B <b@x.com>\n\nPlain prose at the end.\n";
    assert_eq!(
        kinds(text),
        vec![
            ChunkKind::Subject,
            ChunkKind::Blank,
            ChunkKind::Paragraph,
            ChunkKind::Blank,
            ChunkKind::Paragraph,
        ]
    );
}

#[test]
fn trailers_before_comments() {
    let text = "Subject\n\nBody.\n\nSigned-off-by: A <a@x.com>\nCc: C <c@x.com>\n# comment\n";
    assert_eq!(
        kinds(text),
        vec![
            ChunkKind::Subject,
            ChunkKind::Blank,
            ChunkKind::Paragraph,
            ChunkKind::Blank,
            ChunkKind::Trailers,
            ChunkKind::Comment,
        ]
    );
}

#[test]
fn scissors_without_diff_stays_comment() {
    let text = format!("Subject\n{CUT_MARKER}\n# trailing help\n\n");
    assert_eq!(
        kinds(&text),
        vec![ChunkKind::Subject, ChunkKind::Comment, ChunkKind::Blank]
    );
}

#[test]
fn diff_can_start_right_after_scissors() {
    let text = format!("{CUT_MARKER}\ndiff --git a/x b/x\n");
    assert_eq!(kinds(&text), vec![ChunkKind::Comment, ChunkKind::Diff]);
}

#[test]
fn crlf_lines_classify_like_lf() {
    assert_eq!(
        kinds("Subject\r\n\r\nBody\r\n"),
        vec![ChunkKind::Subject, ChunkKind::Blank, ChunkKind::Paragraph]
    );
}

#[test]
fn chunk_text_joins_line_contents() {
    let (_, parsed) = parse_checked("Subject\n\nline one\r\nline two\n");
    assert_eq!(parsed.chunk_text(&parsed.chunks[2]), "line one\nline two");
}

// Property tests over a small corpus

const CORPUS: &[&str] = &[
    "",
    "\n",
    "Subject",
    "Subject\n",
    "\n\n\n",
    "# only\n# comments\n",
    "Subject\nstill subject\n\nbody\n\n\nmore body\n",
    "Subject\n\n# ------------------------ >8 ------------------------\n\n\nx\n\n# y\n",
    "A\n\nB\n\nC: d\n  e\n\n",
    "  indented subject\n#\n \nbody\n",
];

#[test]
fn assembly_partitions_every_document() {
    for text in CORPUS {
        let rope = Rope::from(*text);
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        let chunks = assemble_chunks(&lines);
        snapshot::invariants(&rope, &lines, &chunks);
        assert!(
            chunks.iter().all(|c| c.kind != ChunkKind::Trailers),
            "assembly alone never yields trailers: {text:?}"
        );
    }
}

#[test]
fn subject_is_first_paragraph_like_chunk() {
    for text in CORPUS {
        let (_, parsed) = parse_checked(text);
        let first_prose = parsed.chunks.iter().find(|c| {
            matches!(
                c.kind,
                ChunkKind::Subject | ChunkKind::Paragraph | ChunkKind::Trailers
            )
        });
        if let Some(c) = first_prose {
            assert_eq!(c.kind, ChunkKind::Subject, "{text:?}");
        }
    }
}
