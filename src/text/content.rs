use quick_xml::{Reader, events::BytesStart, events::Event};

use crate::{
    foundation::error::{StoryError, StoryResult},
    story::font::FontVariant,
};

/// A span of text sharing one font face.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// Decoded text.
    pub text: String,
    /// Face the run is styled with.
    pub variant: FontVariant,
}

/// Rich text content scanned into styled runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextContent {
    /// Runs in document order.
    pub runs: Vec<TextRun>,
}

impl TextContent {
    /// Concatenated text of every run.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Character count of the trimmed plain text.
    pub fn visible_len(&self) -> usize {
        self.plain_text().trim().chars().count()
    }

    /// Faces used by runs that carry visible text, deduplicated in first-use order.
    pub fn requested_variants(&self) -> Vec<FontVariant> {
        let mut out: Vec<FontVariant> = Vec::new();
        for run in &self.runs {
            if !run.text.trim().is_empty() && !out.contains(&run.variant) {
                out.push(run.variant);
            }
        }
        out
    }
}

const VOID_TAGS: &[&[u8]] = &[b"br", b"hr", b"img", b"wbr"];

/// Scan editor rich text (inline HTML) into styled runs.
///
/// Faces come from `font-weight` / `font-style` declarations in `style`
/// attributes and from `b`/`strong`/`i`/`em` tags, inherited by nested tags.
/// Unclosed void tags such as `<br>` are accepted, and so are bare `&`
/// characters. Named references outside the common set count as one
/// replacement character.
pub fn parse_content(content: &str) -> StoryResult<TextContent> {
    let wrapped = format!("<root>{content}</root>");
    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().trim_text(false);
    reader.config_mut().check_end_names = false;
    reader.config_mut().allow_dangling_amp = true;

    let mut stack: Vec<(Vec<u8>, FontVariant)> = Vec::new();
    let mut out = TextContent::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_ascii_lowercase();
                if VOID_TAGS.contains(&name.as_slice()) {
                    if name == b"br" {
                        push_text(&mut out, "\n", current(&stack));
                    }
                    continue;
                }
                let variant = apply_tag(&e, &name, current(&stack));
                stack.push((name, variant));
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref().eq_ignore_ascii_case(b"br") {
                    push_text(&mut out, "\n", current(&stack));
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name().as_ref().to_ascii_lowercase();
                if let Some(pos) = stack.iter().rposition(|(n, _)| *n == name) {
                    stack.truncate(pos);
                }
            }
            Ok(Event::Text(e)) => {
                let text = String::from_utf8_lossy(e.as_ref());
                push_text(&mut out, &text, current(&stack));
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(e.as_ref());
                push_text(&mut out, &text, current(&stack));
            }
            Ok(Event::GeneralRef(e)) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                match resolve_entity(&entity) {
                    Some(c) => push_text(&mut out, c.encode_utf8(&mut [0; 4]), current(&stack)),
                    None => push_text(&mut out, &format!("&{entity};"), current(&stack)),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(StoryError::validation(format!(
                    "malformed text content at byte {}: {e}",
                    reader.error_position()
                )));
            }
        }
    }
    Ok(out)
}

fn current(stack: &[(Vec<u8>, FontVariant)]) -> FontVariant {
    stack
        .last()
        .map(|(_, v)| *v)
        .unwrap_or(FontVariant::REGULAR)
}

fn push_text(out: &mut TextContent, text: &str, variant: FontVariant) {
    if text.is_empty() {
        return;
    }
    match out.runs.last_mut() {
        Some(last) if last.variant == variant => last.text.push_str(text),
        _ => out.runs.push(TextRun {
            text: text.to_string(),
            variant,
        }),
    }
}

fn apply_tag(e: &BytesStart<'_>, name: &[u8], inherited: FontVariant) -> FontVariant {
    let mut variant = match name {
        b"b" | b"strong" => FontVariant {
            weight: 700,
            ..inherited
        },
        b"i" | b"em" => FontVariant {
            italic: 1,
            ..inherited
        },
        _ => inherited,
    };
    for attr in e.attributes().flatten() {
        if attr.key.as_ref().eq_ignore_ascii_case(b"style") {
            let style = String::from_utf8_lossy(&attr.value);
            variant = apply_style(&style, variant);
        }
    }
    variant
}

fn apply_style(style: &str, mut variant: FontVariant) -> FontVariant {
    for decl in style.split(';') {
        let Some((prop, value)) = decl.split_once(':') else {
            continue;
        };
        let value = value.trim().to_ascii_lowercase();
        match prop.trim().to_ascii_lowercase().as_str() {
            "font-weight" => {
                let weight = match value.as_str() {
                    "normal" => Some(400),
                    "bold" => Some(700),
                    v => v.parse::<u16>().ok().filter(|w| (1..=1000).contains(w)),
                };
                if let Some(w) = weight {
                    variant.weight = w;
                }
            }
            "font-style" => match value.as_str() {
                "italic" | "oblique" => variant.italic = 1,
                "normal" => variant.italic = 0,
                _ => {}
            },
            _ => {}
        }
    }
    variant
}

/// Named references editors commonly emit.
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("hellip", '\u{2026}'),
    ("mdash", '\u{2014}'),
    ("ndash", '\u{2013}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201c}'),
    ("rdquo", '\u{201d}'),
    ("laquo", '\u{ab}'),
    ("raquo", '\u{bb}'),
    ("bull", '\u{2022}'),
    ("middot", '\u{b7}'),
    ("copy", '\u{a9}'),
    ("reg", '\u{ae}'),
    ("trade", '\u{2122}'),
    ("deg", '\u{b0}'),
    ("times", '\u{d7}'),
    ("divide", '\u{f7}'),
    ("euro", '\u{20ac}'),
    ("pound", '\u{a3}'),
    ("yen", '\u{a5}'),
    ("cent", '\u{a2}'),
    ("shy", '\u{ad}'),
];

/// Character of a reference. Unknown names that look like entity names
/// stand for one replacement character; anything else is not a reference.
fn resolve_entity(entity: &str) -> Option<char> {
    if let Some((_, c)) = NAMED_ENTITIES.iter().find(|(name, _)| *name == entity) {
        return Some(*c);
    }
    match entity.strip_prefix('#') {
        None => (!entity.is_empty() && entity.chars().all(|c| c.is_ascii_alphanumeric()))
            .then_some(char::REPLACEMENT_CHARACTER),
        Some(num) => {
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/content.rs"]
mod tests;
