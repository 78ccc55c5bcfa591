use crate::{extract_text_features, PlatformProfile, FILLER_WORDS};

/// A single rewrite transformation. Returns `None` when the text already
/// carries the device this pass would add, so the pass is a no-op.
///
/// Every pass is a pure function of (text, profile, seed); the seed is a
/// stable hash of the caller's original input, which keeps template choices
/// deterministic without a random source.
pub struct RewritePass {
    pub name: &'static str,
    pub apply: fn(&str, &PlatformProfile, u64) -> Option<String>,
}

/// Fixed evaluation order. Length runs first so later additions (hook,
/// call-to-action, hashtags) survive the trim.
pub fn passes() -> [RewritePass; 5] {
    [
        RewritePass {
            name: "length",
            apply: length_pass,
        },
        RewritePass {
            name: "structure",
            apply: structure_pass,
        },
        RewritePass {
            name: "hook",
            apply: hook_pass,
        },
        RewritePass {
            name: "cta",
            apply: cta_pass,
        },
        RewritePass {
            name: "hashtags",
            apply: hashtag_pass,
        },
    ]
}

pub fn pick_template(templates: &'static [&'static str], seed: u64) -> &'static str {
    if templates.is_empty() {
        return "";
    }
    templates[(seed % templates.len() as u64) as usize]
}

fn hook_pass(text: &str, profile: &PlatformProfile, seed: u64) -> Option<String> {
    let features = extract_text_features(text);
    if features.opening_has_question || features.opening_has_numeral || features.opening_hook_word
    {
        return None;
    }
    let template = pick_template(profile.hook_templates, seed);
    if template.is_empty() {
        return None;
    }
    Some(format!("{}\n\n{}", template, text))
}

fn structure_pass(text: &str, _profile: &PlatformProfile, _seed: u64) -> Option<String> {
    let features = extract_text_features(text);
    if features.paragraph_count > 1 || features.sentence_count < 4 {
        return None;
    }
    let sentences = split_sentences(text);
    if sentences.len() < 4 {
        return None;
    }
    let paragraphs: Vec<String> = sentences
        .chunks(2)
        .map(|chunk| chunk.join(" "))
        .collect();
    Some(paragraphs.join("\n\n"))
}

fn cta_pass(text: &str, profile: &PlatformProfile, seed: u64) -> Option<String> {
    let features = extract_text_features(text);
    if features.cta_near_end {
        return None;
    }
    let template = pick_template(profile.cta_templates, seed);
    if template.is_empty() {
        return None;
    }
    Some(format!("{}\n\n{}", text, template))
}

fn length_pass(text: &str, profile: &PlatformProfile, _seed: u64) -> Option<String> {
    let features = extract_text_features(text);
    let limit = profile.ideal_chars + 2.0 * profile.length_width;
    if (features.char_count as f64) <= limit {
        return None;
    }
    let target = profile.ideal_chars + profile.length_width;
    let sentences = split_sentences(text);
    let mut kept: Vec<String> = Vec::new();
    let mut total = 0usize;
    for sentence in sentences {
        let len = sentence.chars().count();
        if !kept.is_empty() && (total + len + 1) as f64 > target {
            break;
        }
        total += len + 1;
        kept.push(sentence);
    }
    if kept.is_empty() {
        return None;
    }
    let trimmed = kept.join(" ");
    if trimmed == text {
        return None;
    }
    Some(trimmed)
}

fn hashtag_pass(text: &str, profile: &PlatformProfile, _seed: u64) -> Option<String> {
    if !profile.uses_hashtags || text.contains('#') {
        return None;
    }
    let hashtags = keyword_hashtags(text);
    if hashtags.is_empty() {
        return None;
    }
    Some(format!("{}\n\n{}", text, hashtags.join(" ")))
}

/// Longest distinctive words become hashtags; ordering is fixed so the
/// choice never wobbles between runs.
fn keyword_hashtags(text: &str) -> Vec<String> {
    let mut words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphabetic())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| word.len() >= 6 && !FILLER_WORDS.contains(&word.as_str()))
        .collect();
    words.sort();
    words.dedup();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.truncate(2);
    words.into_iter().map(|word| format!("#{}", word)).collect()
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}
