use serde::Serialize;

use crate::{
    animation::timing::total_duration_secs,
    foundation::math::fmt_num,
    story::{
        element::Element,
        media::BackgroundAudio,
        model::{Animation, Page, Story},
    },
};

/// What advances a page to the next one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advancement {
    /// Fixed timer in seconds.
    Seconds(f64),
    /// When the media element with this DOM id ends.
    Media(String),
    /// When the page background audio with this DOM id ends.
    BackgroundAudio(String),
}

impl Advancement {
    /// Value of the `auto-advance-after` page attribute.
    pub fn to_attr(&self) -> String {
        match self {
            Self::Seconds(s) => format!("{}s", fmt_num(*s)),
            Self::Media(id) | Self::BackgroundAudio(id) => id.clone(),
        }
    }
}

/// DOM id of a page's tag-based background audio.
pub fn background_audio_anchor(page_id: &str) -> String {
    format!("page-{page_id}-background-audio")
}

/// Pick the page pacer.
///
/// `elements` are the page's regular (non-background) elements. Media wins over
/// timers: the longest non-looping media at least as long as both the
/// animations (or one second) and the non-looping audio drives the page, with
/// the first one kept on equal lengths. Otherwise the page waits for the
/// longest of animations, audio and `default_duration`; when the audio is
/// that longest, the audio itself is the pacer.
pub fn resolve_advancement(
    page_id: &str,
    animations: &[Animation],
    elements: &[Element],
    background_audio: Option<&BackgroundAudio>,
    default_duration: f64,
) -> Advancement {
    let animation = total_duration_secs(animations, elements);
    let audio = background_audio.map_or(0.0, BackgroundAudio::pacing_duration_secs);
    let floor = (if animation > 0.0 { animation } else { 1.0 }).max(audio);

    let longest = elements
        .iter()
        .filter_map(|el| el.pacing_duration_secs().map(|d| (el, d)))
        .filter(|(_, d)| *d >= floor)
        .fold(None::<(&Element, f64)>, |best, (el, d)| match best {
            Some((_, best_d)) if d <= best_d => best,
            _ => Some((el, d)),
        });
    if let Some((el, _)) = longest {
        return Advancement::Media(el.media_anchor());
    }

    let non_media = animation.max(audio).max(default_duration);
    if non_media > audio {
        Advancement::Seconds(non_media)
    } else {
        Advancement::BackgroundAudio(background_audio_anchor(page_id))
    }
}

/// Advancement of `page` under the story policy; `None` when the page
/// advances manually.
///
/// `animations` is passed separately so the caller can suppress them.
pub fn page_advancement(story: &Story, page: &Page, animations: &[Animation]) -> Option<Advancement> {
    let enabled = page
        .advancement
        .map_or(story.auto_advance, |a| a.auto_advance);
    if !enabled {
        return None;
    }
    let default_duration = page
        .advancement
        .and_then(|a| a.page_duration)
        .unwrap_or(story.default_page_duration);
    let advancement = resolve_advancement(
        &page.id,
        animations,
        page.regular_elements(),
        page.background_audio.as_ref(),
        default_duration,
    );
    tracing::debug!(page = %page.id, advancement = %advancement.to_attr(), "page advancement");
    Some(advancement)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/advance.rs"]
mod tests;
