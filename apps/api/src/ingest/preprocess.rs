//! Cleans extracted text before it reaches the core.
//!
//! Interior spacing is preserved: runs of spaces and tabs are what the table
//! rule looks for.

const MAX_BLANK_RUN: usize = 2;

pub fn clean_text(raw: &str) -> String {
    let unified: String = raw
        .replace("\r\n", "\n")
        .chars()
        .filter_map(|c| match c {
            '\r' => Some('\n'),
            '\u{00A0}' | '\u{2007}' | '\u{202F}' => Some(' '),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => None,
            '\n' | '\t' => Some(c),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();

    let mut out: Vec<&str> = Vec::new();
    let mut blank_run = 0;
    for line in unified.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > MAX_BLANK_RUN || out.is_empty() {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
