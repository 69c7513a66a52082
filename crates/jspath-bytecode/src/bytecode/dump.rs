//! Human-readable dump of an encoded path, for debugging and tests.
//!
//! One line per item in buffer order:
//!
//! ```text
//! 0008  key "a" -> 0022
//! ```
//!
//! position, type name, inline payload, operand slots as `role@position`,
//! and the next item after `->`. All positions are relative to the payload.

use std::fmt::Write as _;

use jspath_core::{AnyBounds, Colors, escape_json};

use super::cursor::{Content, Cursor};
use super::path::EncodedPath;

pub fn dump(path: &EncodedPath, colors: Colors) -> String {
    let mut out = String::new();
    let c = &colors;
    let header = path.header();

    writeln!(out, "{}[header]{}", c.dim, c.reset).unwrap();
    writeln!(out, "version = {}", header.version).unwrap();
    writeln!(
        out,
        "mode = {}",
        if header.is_lax() { "lax" } else { "strict" }
    )
    .unwrap();
    writeln!(out, "extensions = {}", header.has_extensions()).unwrap();
    out.push('\n');

    writeln!(out, "{}[items]{}", c.dim, c.reset).unwrap();
    let w = path.payload().len().to_string().len().max(4);
    for item in items_in_buffer_order(path) {
        dump_item(&mut out, &item, w, c);
    }

    out
}

fn items_in_buffer_order(path: &EncodedPath) -> Vec<Cursor<'_>> {
    let mut items = Vec::new();
    let mut stack = vec![path.root()];
    while let Some(item) = stack.pop() {
        stack.extend(item.next_item());
        stack.extend(
            item.child_slots()
                .into_iter()
                .filter_map(|slot| item.follow(slot)),
        );
        items.push(item);
    }
    items.sort_by_key(Cursor::position);
    items
}

fn dump_item(out: &mut String, item: &Cursor<'_>, w: usize, c: &Colors) {
    let pos = item.position();
    write!(
        out,
        "{}{pos:0w$}{}  {}{}{}",
        c.dim,
        c.reset,
        c.blue,
        item.item_type().name(),
        c.reset
    )
    .unwrap();

    let detail = inline_payload(item);
    if !detail.is_empty() {
        write!(out, " {}{detail}{}", c.green, c.reset).unwrap();
    }

    for slot in item.child_slots() {
        if slot.offset != 0 {
            let target = pos + slot.offset as usize;
            write!(out, " {}@{}{target:0w$}{}", slot.role, c.dim, c.reset).unwrap();
        }
    }

    if item.has_next() {
        let next = pos + item.next_offset() as usize;
        write!(out, " -> {}{next:0w$}{}", c.dim, c.reset).unwrap();
    }
    out.push('\n');
}

fn inline_payload(item: &Cursor<'_>) -> String {
    let mut s = String::new();
    match item.content() {
        Content::Text(_) => escape_json(&mut s, item.text()),
        Content::Numeric(_) => s.push_str(item.numeric_text()),
        Content::Bool(v) => s.push_str(if v { "true" } else { "false" }),
        Content::LikeRegex { flags, .. } => {
            escape_json(&mut s, item.regex_pattern());
            if !flags.is_empty() {
                write!(s, " flag \"{}\"", flags.letters()).unwrap();
            }
        }
        Content::Any(bounds) => write_bounds(&mut s, bounds),
        Content::Slots { count, .. } => write!(s, "[{count}]").unwrap(),
        Content::None | Content::Binary { .. } | Content::Unary { .. } => {}
    }
    s
}

fn write_bounds(s: &mut String, bounds: AnyBounds) {
    let level = |v: u32| {
        if v == AnyBounds::LAST {
            "last".to_string()
        } else {
            v.to_string()
        }
    };
    if bounds.first == bounds.last {
        write!(s, "{{{}}}", level(bounds.first)).unwrap();
    } else {
        write!(s, "{{{} to {}}}", level(bounds.first), level(bounds.last)).unwrap();
    }
}
