use std::collections::BTreeSet;

use crate::story::{element::Element, model::Animation};

/// Total entrance-animation time of a page, in seconds.
///
/// Only animations targeting at least one of `elements` count. The total is the
/// latest end time (`delay + duration`) among them, so overlapping animations are
/// not summed.
pub fn total_duration_secs(animations: &[Animation], elements: &[Element]) -> f64 {
    let ids: BTreeSet<&str> = elements.iter().map(|el| el.id.as_str()).collect();
    let end_ms = animations
        .iter()
        .filter(|anim| anim.targets.iter().any(|t| ids.contains(t.as_str())))
        .map(|anim| anim.delay + anim.duration)
        .fold(0.0_f64, f64::max);
    end_ms / 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
