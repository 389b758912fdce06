use std::collections::BTreeMap;

use crate::{
    foundation::error::StoryResult,
    story::element::{Element, TagName},
    text::content::parse_content,
};

/// Texts this short never become headings.
const MIN_HEADING_LEN: usize = 3;
const H1_MIN_FONT_SIZE: f64 = 36.0;
const H2_MIN_FONT_SIZE: f64 = 27.0;
const H3_MIN_FONT_SIZE: f64 = 21.0;

#[derive(Debug, Default)]
struct TagFold {
    tags: BTreeMap<String, TagName>,
    has_h1: bool,
}

impl TagFold {
    fn push(mut self, id: &str, tag: TagName) -> Self {
        self.has_h1 |= tag == TagName::H1;
        self.tags.insert(id.to_string(), tag);
        self
    }
}

/// Text elements of `elements` sorted top to bottom; ties keep z-order.
pub fn text_elements_by_position(elements: &[Element]) -> Vec<&Element> {
    let mut texts: Vec<&Element> = elements.iter().filter(|el| el.as_text().is_some()).collect();
    texts.sort_by(|a, b| a.geometry.y.total_cmp(&b.geometry.y));
    texts
}

/// Assign a semantic tag to each text element, in the given order.
///
/// Explicit tags are kept. Otherwise short texts are paragraphs and font size
/// picks the heading level, with at most one `h1` per page; an explicit `h1`
/// uses up that slot.
pub fn assign_text_tags(texts: &[&Element]) -> StoryResult<BTreeMap<String, TagName>> {
    let fold = texts.iter().try_fold(TagFold::default(), |acc, el| -> StoryResult<TagFold> {
        let Some(text) = el.as_text() else {
            return Ok(acc);
        };
        if text.tag_name != TagName::Auto {
            return Ok(acc.push(&el.id, text.tag_name));
        }
        let len = parse_content(&text.content)?.visible_len();
        let size = text.font_size;
        let tag = if len <= MIN_HEADING_LEN {
            TagName::P
        } else if size >= H1_MIN_FONT_SIZE && !acc.has_h1 {
            TagName::H1
        } else if size >= H2_MIN_FONT_SIZE {
            TagName::H2
        } else if size >= H3_MIN_FONT_SIZE {
            TagName::H3
        } else {
            TagName::P
        };
        Ok(acc.push(&el.id, tag))
    })?;
    Ok(fold.tags)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/text_tags.rs"]
mod tests;
