//! Step 18: paragraph reconstruction.
//!
//! Lines are collected into a paragraph buffer until a blank line, a list
//! item, or a sentence end followed by a line that opens a new sentence.
//! Paragraphs are emitted one per line, separated by a blank line, and the
//! output always ends with exactly one newline (empty stays empty).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LIST_ITEM: Regex = Regex::new(r"^(\d+\.|[-*•])\s").unwrap();
    static ref SENTENCE_END: Regex = Regex::new(r#"[.?!:]["'”’)\]]?$"#).unwrap();
    static ref SENTENCE_START: Regex = Regex::new(r#"^[\p{Lu}\d"'“‘(\[]"#).unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r" +([.,;:!?]+)( |$)").unwrap();
}

#[derive(Debug, Default)]
struct Paragraphs {
    done: Vec<String>,
    buffer: Vec<String>,
}

impl Paragraphs {
    fn push_line(&mut self, line: String) {
        if LIST_ITEM.is_match(&line) {
            self.flush();
        } else if let Some(last) = self.buffer.last() {
            if SENTENCE_END.is_match(last) && SENTENCE_START.is_match(&line) {
                self.flush();
            }
        }
        self.buffer.push(line);
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let joined = tighten_punctuation(&self.buffer.join(" "));
        self.buffer.clear();
        if !joined.is_empty() {
            self.done.push(joined);
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        if self.done.is_empty() {
            return String::new();
        }
        let mut out = self.done.join("\n\n");
        out.push('\n');
        out
    }
}

/// `word .` becomes `word.`, repeated until stable.
fn tighten_punctuation(paragraph: &str) -> String {
    let mut current = paragraph.to_string();
    loop {
        let next = SPACE_BEFORE_PUNCT.replace_all(&current, "$1$2").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

pub fn final_cleanup(text: &str) -> String {
    let mut paragraphs = Paragraphs::default();
    for raw in text.lines() {
        let line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            paragraphs.flush();
        } else {
            paragraphs.push_line(line);
        }
    }
    paragraphs.finish()
}
