//! Diff engine comparing two brand kits field by field.

use std::collections::HashSet;

use crate::models::{
    BrandDiff, BrandKit, BrandVoiceDiff, ColorChange, ColorDiff, FontDiff, LogoDirectionDiff,
};

/// Compare two kits. Colors are matched by hex, taglines and logo elements by
/// exact string. The social media block is not compared.
pub fn compare_brand_kits(old: &BrandKit, new: &BrandKit) -> BrandDiff {
    let colors = compare_colors(old, new);
    let fonts = compare_fonts(old, new);
    let brand_voice = compare_voice(old, new);
    let logo_direction = compare_logo(old, new);

    let has_changes = !colors.added.is_empty()
        || !colors.removed.is_empty()
        || !colors.changed.is_empty()
        || fonts.heading_changed
        || fonts.body_changed
        || brand_voice.tone_changed
        || !brand_voice.taglines_added.is_empty()
        || !brand_voice.taglines_removed.is_empty()
        || logo_direction.concept_changed
        || !logo_direction.elements_added.is_empty()
        || !logo_direction.elements_removed.is_empty();

    BrandDiff {
        colors,
        fonts,
        brand_voice,
        logo_direction,
        has_changes,
    }
}

fn compare_colors(old: &BrandKit, new: &BrandKit) -> ColorDiff {
    let old_hexes: HashSet<&str> = old.colors.iter().map(|c| c.hex.as_str()).collect();
    let new_hexes: HashSet<&str> = new.colors.iter().map(|c| c.hex.as_str()).collect();

    let added = new
        .colors
        .iter()
        .filter(|c| !old_hexes.contains(c.hex.as_str()))
        .cloned()
        .collect();

    let removed = old
        .colors
        .iter()
        .filter(|c| !new_hexes.contains(c.hex.as_str()))
        .cloned()
        .collect();

    let changed = old
        .colors
        .iter()
        .filter_map(|old_color| {
            let new_color = new.colors.iter().find(|c| c.hex == old_color.hex)?;
            (new_color.name != old_color.name || new_color.usage != old_color.usage).then(|| {
                ColorChange {
                    old: old_color.clone(),
                    new: new_color.clone(),
                }
            })
        })
        .collect();

    ColorDiff {
        added,
        removed,
        changed,
    }
}

fn compare_fonts(old: &BrandKit, new: &BrandKit) -> FontDiff {
    let mut diff = FontDiff::default();

    let (old_heading, new_heading) = (&old.fonts.heading.name, &new.fonts.heading.name);
    if old_heading != new_heading {
        diff.heading_changed = true;
        diff.old_heading = Some(old_heading.clone());
        diff.new_heading = Some(new_heading.clone());
    }

    let (old_body, new_body) = (&old.fonts.body.name, &new.fonts.body.name);
    if old_body != new_body {
        diff.body_changed = true;
        diff.old_body = Some(old_body.clone());
        diff.new_body = Some(new_body.clone());
    }

    diff
}

fn compare_voice(old: &BrandKit, new: &BrandKit) -> BrandVoiceDiff {
    let (old_voice, new_voice) = (&old.brand_voice, &new.brand_voice);
    let tone_changed = old_voice.tone != new_voice.tone;
    let (taglines_added, taglines_removed) = set_delta(&old_voice.taglines, &new_voice.taglines);

    BrandVoiceDiff {
        tone_changed,
        old_tone: tone_changed.then(|| old_voice.tone.clone()),
        new_tone: tone_changed.then(|| new_voice.tone.clone()),
        taglines_added,
        taglines_removed,
    }
}

fn compare_logo(old: &BrandKit, new: &BrandKit) -> LogoDirectionDiff {
    let (old_logo, new_logo) = (&old.logo_direction, &new.logo_direction);
    let concept_changed = old_logo.concept != new_logo.concept;
    let (elements_added, elements_removed) = set_delta(&old_logo.elements, &new_logo.elements);

    LogoDirectionDiff {
        concept_changed,
        old_concept: concept_changed.then(|| old_logo.concept.clone()),
        new_concept: concept_changed.then(|| new_logo.concept.clone()),
        elements_added,
        elements_removed,
    }
}

/// Exact-string set difference, returned as (added, removed) in list order.
fn set_delta(old: &[String], new: &[String]) -> (Vec<String>, Vec<String>) {
    let old_set: HashSet<&str> = old.iter().map(String::as_str).collect();
    let new_set: HashSet<&str> = new.iter().map(String::as_str).collect();

    let added = new
        .iter()
        .filter(|s| !old_set.contains(s.as_str()))
        .cloned()
        .collect();
    let removed = old
        .iter()
        .filter(|s| !new_set.contains(s.as_str()))
        .cloned()
        .collect();

    (added, removed)
}
