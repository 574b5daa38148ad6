// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_message(paragraphs: usize) -> String {
    let mut content = String::from("  Rework   the   pipeline\n\n\n");
    let body = "The pipeline used to read every input eagerly and\nkeep it in memory until the very last stage finished, which is wasteful for large inputs.\n\n\n";
    content.push_str(&body.repeat(paragraphs));
    content.push_str("Signed-off-by: A U Thor <author@example.com>\n\n");
    content.push_str("# Please enter the commit message for your changes.\n");
    content.push_str("# ------------------------ >8 ------------------------\n");
    content.push_str(&generate_diff(paragraphs));
    content
}

#[allow(dead_code)]
pub fn generate_diff(hunks: usize) -> String {
    let mut content = String::from("diff --git a/src/lib.rs b/src/lib.rs\n");
    for hunk in 0..hunks {
        content.push_str(&format!("@@ -{hunk},2 +{hunk},3 @@\n"));
        content.push_str(" unchanged\n+added\n\n");
    }
    content
}
