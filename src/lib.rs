pub mod config;
pub mod error;
pub mod generate;
pub mod rewrite;
pub mod scoring;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use error::EngineError;

/// Target publishing channel. Audience norms per platform adjust length
/// expectations, the engagement curve, and the rewrite strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitter,
    Linkedin,
    Facebook,
    Reddit,
    Instagram,
    Newsletter,
}

impl Platform {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "twitter" | "x" => Some(Platform::Twitter),
            "linkedin" => Some(Platform::Linkedin),
            "facebook" => Some(Platform::Facebook),
            "reddit" => Some(Platform::Reddit),
            "instagram" => Some(Platform::Instagram),
            "newsletter" | "email" => Some(Platform::Newsletter),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Reddit => "reddit",
            Platform::Instagram => "instagram",
            Platform::Newsletter => "newsletter",
        }
    }

    pub fn profile(self) -> PlatformProfile {
        match self {
            Platform::Twitter => PlatformProfile {
                ideal_chars: 180.0,
                length_width: 120.0,
                reach_factor: 1.2,
                uses_hashtags: true,
                hook_templates: &[
                    "Why does nobody talk about this?",
                    "Stop scrolling. This one matters:",
                    "How I'd explain this in 30 seconds:",
                ],
                cta_templates: &[
                    "What do you think? Reply below.",
                    "Repost this if it helped.",
                ],
            },
            Platform::Linkedin => PlatformProfile {
                ideal_chars: 900.0,
                length_width: 500.0,
                reach_factor: 1.0,
                uses_hashtags: true,
                hook_templates: &[
                    "What most teams get wrong about this:",
                    "Why this changed how I work:",
                    "The mistakes everyone makes here:",
                ],
                cta_templates: &[
                    "Agree or disagree? Share your take in the comments.",
                    "Follow for more lessons like this one.",
                ],
            },
            Platform::Facebook => PlatformProfile {
                ideal_chars: 400.0,
                length_width: 300.0,
                reach_factor: 0.9,
                uses_hashtags: false,
                hook_templates: &[
                    "Can we talk about this for a second?",
                    "What would you have done here?",
                ],
                cta_templates: &[
                    "Let me know your experience in the comments.",
                    "Share this with someone who needs it.",
                ],
            },
            Platform::Reddit => PlatformProfile {
                ideal_chars: 1200.0,
                length_width: 800.0,
                reach_factor: 0.8,
                uses_hashtags: false,
                hook_templates: &[
                    "Why I think most advice on this is wrong:",
                    "What I learned the hard way:",
                ],
                cta_templates: &[
                    "Tell me in the comments - am I off base?",
                    "Happy to answer questions in the comments.",
                ],
            },
            Platform::Instagram => PlatformProfile {
                ideal_chars: 300.0,
                length_width: 200.0,
                reach_factor: 1.1,
                uses_hashtags: true,
                hook_templates: &[
                    "How to spot this in under a minute:",
                    "Why you keep getting this wrong:",
                ],
                cta_templates: &[
                    "Save this for later and share it with a friend.",
                    "Comment below if you want part two.",
                ],
            },
            Platform::Newsletter => PlatformProfile {
                ideal_chars: 2400.0,
                length_width: 1500.0,
                reach_factor: 0.7,
                uses_hashtags: false,
                hook_templates: &[
                    "What if the common wisdom here is backwards?",
                    "How one small change compounds:",
                ],
                cta_templates: &[
                    "Reply with your take - I read every one.",
                    "Forward this to someone who would find it useful.",
                ],
            },
        }
    }
}

/// Per-platform knobs shared by both engines. A neutral profile backs the
/// platform-less path.
#[derive(Debug, Clone, Copy)]
pub struct PlatformProfile {
    pub ideal_chars: f64,
    pub length_width: f64,
    pub reach_factor: f64,
    pub uses_hashtags: bool,
    pub hook_templates: &'static [&'static str],
    pub cta_templates: &'static [&'static str],
}

impl PlatformProfile {
    pub fn neutral() -> Self {
        PlatformProfile {
            ideal_chars: 700.0,
            length_width: 600.0,
            reach_factor: 1.0,
            uses_hashtags: false,
            hook_templates: &[
                "Why this deserves a closer look:",
                "What changed my mind about this:",
            ],
            cta_templates: &["Reply and let me know what you think."],
        }
    }
}

pub fn resolve_profile(platform: Option<Platform>) -> PlatformProfile {
    platform
        .map(Platform::profile)
        .unwrap_or_else(PlatformProfile::neutral)
}

/// Lexical features extracted once per input and shared by all sub-scorers.
#[derive(Debug, Clone)]
pub struct TextFeatures {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub questions: usize,
    pub exclamations: usize,
    pub emoji_count: usize,
    pub uppercase_ratio: f64,
    pub digit_tokens: usize,
    pub list_markers: usize,
    pub capitalized_midword: usize,
    pub unique_word_ratio: f64,
    pub filler_ratio: f64,
    pub avg_sentence_len: f64,
    pub sentence_len_stddev: f64,
    pub opening_has_question: bool,
    pub opening_has_numeral: bool,
    pub opening_hook_word: bool,
    pub opening_direct_address: bool,
    pub opening_has_emphasis: bool,
    pub cta_near_end: bool,
}

const HOOK_WORDS: [&str; 15] = [
    "how", "why", "what", "stop", "new", "breaking", "secret", "tips", "guide", "learn",
    "thread", "facts", "proof", "mistakes", "warning",
];

const CTA_WORDS: [&str; 16] = [
    "subscribe",
    "follow",
    "share",
    "comment",
    "reply",
    "sign up",
    "try this",
    "read more",
    "join",
    "learn more",
    "retweet",
    "repost",
    "let me know",
    "save this",
    "forward this",
    "dm me",
];

pub(crate) const FILLER_WORDS: [&str; 12] = [
    "stuff", "things", "very", "really", "just", "some", "nice", "good", "great", "maybe",
    "basically", "actually",
];

/// Opening segment inspected for attention devices.
const OPENING_CHARS: usize = 140;

pub fn extract_text_features(text: &str) -> TextFeatures {
    let mut questions = 0usize;
    let mut exclamations = 0usize;
    let mut emoji_count = 0usize;
    let mut uppercase = 0usize;
    let mut letters = 0usize;

    for ch in text.chars() {
        match ch {
            '?' => questions += 1,
            '!' => exclamations += 1,
            _ => {
                if ch as u32 > 0x7f {
                    emoji_count += 1;
                }
            }
        }

        if ch.is_ascii_alphabetic() {
            letters += 1;
            if ch.is_ascii_uppercase() {
                uppercase += 1;
            }
        }
    }

    let uppercase_ratio = if letters == 0 {
        0.0
    } else {
        uppercase as f64 / letters as f64
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let mut digit_tokens = 0usize;
    let mut list_markers = 0usize;
    let mut filler_hits = 0usize;
    let mut unique_words: HashSet<String> = HashSet::new();

    for word in &words {
        if word.chars().any(|c| c.is_ascii_digit()) {
            digit_tokens += 1;
        }
        if is_list_marker(word) {
            list_markers += 1;
        }
        let normalized: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if !normalized.is_empty() {
            if FILLER_WORDS.contains(&normalized.as_str()) {
                filler_hits += 1;
            }
            unique_words.insert(normalized);
        }
    }

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
            list_markers += 1;
        }
    }

    let unique_word_ratio = if word_count == 0 {
        0.0
    } else {
        unique_words.len() as f64 / word_count as f64
    };
    let filler_ratio = if word_count == 0 {
        0.0
    } else {
        filler_hits as f64 / word_count as f64
    };

    let capitalized_midword = count_capitalized_midwords(&words);

    let sentence_lengths = sentence_word_counts(text);
    let sentence_count = sentence_lengths.len();
    let avg_sentence_len = if sentence_count == 0 {
        0.0
    } else {
        sentence_lengths.iter().sum::<usize>() as f64 / sentence_count as f64
    };
    let sentence_len_stddev = if sentence_count == 0 {
        0.0
    } else {
        let variance = sentence_lengths
            .iter()
            .map(|len| {
                let delta = *len as f64 - avg_sentence_len;
                delta * delta
            })
            .sum::<f64>()
            / sentence_count as f64;
        variance.sqrt()
    };

    let paragraph_count = text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();

    let opening: String = text.chars().take(OPENING_CHARS).collect();
    let opening_lower = opening.to_lowercase();
    let opening_has_question = opening.contains('?');
    let opening_has_numeral = opening.chars().any(|c| c.is_ascii_digit());
    let opening_hook_word = HOOK_WORDS.iter().any(|word| opening_lower.contains(word));
    let opening_direct_address =
        opening_lower.contains("you") || opening_lower.contains("your");
    let opening_has_emphasis =
        opening.contains('!') || opening.chars().any(|c| c as u32 > 0x7f);

    let lowercase = text.to_lowercase();
    let tail_len = (lowercase.len() / 3).max(160).min(lowercase.len());
    let tail = slice_from_boundary(&lowercase, lowercase.len() - tail_len);
    let cta_near_end = CTA_WORDS.iter().any(|word| tail.contains(word));

    TextFeatures {
        char_count: text.chars().count(),
        word_count,
        sentence_count,
        paragraph_count,
        questions,
        exclamations,
        emoji_count,
        uppercase_ratio,
        digit_tokens,
        list_markers,
        capitalized_midword,
        unique_word_ratio,
        filler_ratio,
        avg_sentence_len,
        sentence_len_stddev,
        opening_has_question,
        opening_has_numeral,
        opening_hook_word,
        opening_direct_address,
        opening_has_emphasis,
        cta_near_end,
    }
}

fn is_list_marker(word: &str) -> bool {
    let mut chars = word.chars();
    let mut saw_digit = false;
    for ch in chars.by_ref() {
        if ch.is_ascii_digit() {
            saw_digit = true;
        } else {
            return saw_digit && (ch == ')' || ch == '.') && chars.next().is_none();
        }
    }
    false
}

fn count_capitalized_midwords(words: &[&str]) -> usize {
    let mut count = 0usize;
    let mut sentence_start = true;
    for word in words {
        let mut chars = word.chars();
        let first = match chars.next() {
            Some(ch) => ch,
            None => continue,
        };
        if !sentence_start
            && first.is_ascii_uppercase()
            && word.len() > 1
            && chars.all(|c| c.is_ascii_lowercase())
        {
            count += 1;
        }
        sentence_start = word.ends_with('.') || word.ends_with('!') || word.ends_with('?');
    }
    count
}

fn sentence_word_counts(text: &str) -> Vec<usize> {
    text.split(['.', '!', '?'])
        .map(|segment| {
            segment
                .split_whitespace()
                .filter(|w| w.chars().any(|c| c.is_ascii_alphabetic()))
                .count()
        })
        .filter(|count| *count > 0)
        .collect()
}

fn slice_from_boundary(value: &str, mut start: usize) -> &str {
    while start < value.len() && !value.is_char_boundary(start) {
        start += 1;
    }
    &value[start..]
}

/// Virality estimate for a piece of text. All sub-scores and the overall
/// score are integers in [0,100]; field names match the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub hook_score: u8,
    pub structure_score: u8,
    pub niche_score: u8,
    pub overall_score: u8,
    pub predicted_engagement: f64,
    pub recommendations: Vec<String>,
}

/// Before/after comparison produced by the rewrite engine. The original
/// text is always echoed unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResult {
    pub original_text: String,
    pub rewritten_text: String,
    pub original_score: u8,
    pub improved_score: u8,
    pub improvements: Vec<String>,
}

pub fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

pub fn gaussian(x: f64, center: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    let z = (x - center) / width;
    (-z * z).exp()
}

pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(1.0)
}

pub fn bool_to_f64(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Scale a [0,1] signal to an integer score in [0,100].
pub fn scale_score(signal: f64) -> u8 {
    (clamp01(signal) * 100.0).round() as u8
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
