use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::{stable_hash64, EngineError, Platform};

/// Content generation capability. Selected once at process start and passed
/// explicitly into whatever needs it; swapping the implementation in tests
/// needs no global state.
///
/// Every implementation must be deterministic: identical inputs yield
/// identical output, with any "random-looking" flourish derived from a
/// stable hash of the input rather than a random source.
pub trait ContentGenerator: Send + Sync {
    fn generate_blog(&self, topic: &str) -> Result<BlogDraft, EngineError>;
    fn generate_newsletter(
        &self,
        subject: &str,
        topics: &[String],
        tone: &str,
    ) -> Result<NewsletterDraft, EngineError>;
    fn generate_social_posts(
        &self,
        topic: &str,
        platforms: &[Platform],
    ) -> Result<Vec<SocialPost>, EngineError>;
    fn generate_campaign(
        &self,
        goal: &str,
        steps: usize,
        audience: Option<&str>,
    ) -> Result<Campaign, EngineError>;
    fn generate_outline(&self, topic: &str, sections: usize) -> Result<Vec<String>, EngineError>;
    fn generate_hooks(
        &self,
        topic: &str,
        count: usize,
        platform: Option<Platform>,
    ) -> Result<Vec<String>, EngineError>;
    fn expand(&self, text: &str) -> Result<String, EngineError>;
    fn shorten(&self, text: &str, target_words: Option<usize>) -> Result<String, EngineError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSection {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterDraft {
    pub subject: String,
    pub preview_text: String,
    pub sections: Vec<NewsletterSection>,
    pub cta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialPost {
    pub platform: String,
    pub content: String,
    pub character_count: usize,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignStep {
    pub step_number: usize,
    pub subject: String,
    pub content: String,
    pub delay_days: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub goal: String,
    pub audience: Option<String>,
    pub steps: Vec<CampaignStep>,
    pub total_duration_days: usize,
}

/// Build the configured generator. Unknown kinds are an error rather than a
/// silent fallback.
pub fn build_generator(config: &GeneratorConfig) -> Result<Arc<dyn ContentGenerator>, String> {
    match config.kind.to_lowercase().as_str() {
        "template" => Ok(Arc::new(TemplateGenerator)),
        other => Err(format!("unknown generator kind: {}", other)),
    }
}

const HOOK_POOL: [&str; 8] = [
    "You won't believe this about {topic}",
    "The {topic} secret nobody talks about",
    "Stop doing {topic} wrong (here's how)",
    "I spent 100 hours learning {topic}. Here's what I discovered:",
    "The surprising truth about {topic}",
    "Why {topic} is about to change everything",
    "Here's what everyone gets wrong about {topic}",
    "The {topic} strategy that 10x'd my results",
];

const ACCENT_EMOJI: [&str; 4] = ["\u{1f525}", "\u{2728}", "\u{1f9e0}", "\u{1f4a1}"];

/// Deterministic, template-based generator. The only implementation that
/// ships; real model invocation is out of scope, but the trait seam leaves
/// room for one.
pub struct TemplateGenerator;

impl TemplateGenerator {
    fn accent(topic: &str) -> &'static str {
        ACCENT_EMOJI[(stable_hash64(topic) % ACCENT_EMOJI.len() as u64) as usize]
    }
}

fn require_non_empty(value: &str, what: &str) -> Result<(), EngineError> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidInput(format!(
            "{} must not be empty",
            what
        )));
    }
    Ok(())
}

fn fill_topic(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}

impl ContentGenerator for TemplateGenerator {
    fn generate_blog(&self, topic: &str) -> Result<BlogDraft, EngineError> {
        require_non_empty(topic, "topic")?;
        let title = format!("The Ultimate Guide to {}", topic);
        let content = format!(
            "# {title}\n\n\
             Introduction to {topic} and why it matters today.\n\n\
             ## Understanding {topic}\n\
             The fundamentals of {topic}, with the context you need.\n\n\
             ## Best Practices\n\
             - Focus on quality\n\
             - Stay consistent\n\
             - Measure results\n\n\
             ## Common Challenges\n\
             Where {topic} gets hard, and how to get past it.\n\n\
             ## Conclusion\n\
             {topic} rewards deliberate practice. Start with one of the steps above today.",
            title = title,
            topic = topic
        );
        let word_count = content.split_whitespace().count();
        Ok(BlogDraft {
            title,
            content,
            word_count,
        })
    }

    fn generate_newsletter(
        &self,
        subject: &str,
        topics: &[String],
        tone: &str,
    ) -> Result<NewsletterDraft, EngineError> {
        require_non_empty(subject, "subject")?;
        if topics.is_empty() {
            return Err(EngineError::InvalidInput(
                "topics must not be empty".to_string(),
            ));
        }
        let sections = topics
            .iter()
            .take(3)
            .map(|topic| NewsletterSection {
                heading: format!("Deep Dive: {}", topic),
                content: format!("A {} look at {} and what it means for you.", tone, topic),
            })
            .collect();
        let preview_topics: Vec<&str> = topics.iter().take(2).map(String::as_str).collect();
        Ok(NewsletterDraft {
            subject: subject.to_string(),
            preview_text: format!("This week's insights on {}", preview_topics.join(", ")),
            sections,
            cta: "Read more on our blog".to_string(),
        })
    }

    fn generate_social_posts(
        &self,
        topic: &str,
        platforms: &[Platform],
    ) -> Result<Vec<SocialPost>, EngineError> {
        require_non_empty(topic, "topic")?;
        if platforms.is_empty() {
            return Err(EngineError::InvalidInput(
                "platforms must not be empty".to_string(),
            ));
        }
        let accent = Self::accent(topic);
        let posts = platforms
            .iter()
            .map(|platform| {
                let content = match platform {
                    Platform::Linkedin => format!(
                        "{accent} Hot take on {topic}:\n\nKey insights that will change your approach.\n\nAgree or disagree? Share your take in the comments."
                    ),
                    Platform::Twitter => format!(
                        "Thread on {topic}:\n\n1) Here's what you need to know\n2) The insight that changes the game\n3) How to apply this today\n\nWhat do you think? Reply below."
                    ),
                    Platform::Facebook => format!(
                        "Let's talk about {topic}!\n\nI've learned a lot about this recently.\n\nWhat's your experience? Let me know in the comments."
                    ),
                    Platform::Reddit => format!(
                        "[Serious] Discussion: {topic}\n\nI wanted to share some observations and hear where this community lands."
                    ),
                    Platform::Instagram => format!(
                        "{accent} {topic} {accent}\n\nSwipe to learn more.\n\nSave this for later and share it with a friend."
                    ),
                    Platform::Newsletter => format!(
                        "In this issue: {topic}.\n\nWhy it matters, what to watch, and one thing to try this week.\n\nForward this to someone who would find it useful."
                    ),
                };
                let slug: String = topic
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_lowercase();
                SocialPost {
                    platform: platform.label().to_string(),
                    character_count: content.chars().count(),
                    content,
                    hashtags: vec!["content".to_string(), "marketing".to_string(), slug],
                }
            })
            .collect();
        Ok(posts)
    }

    fn generate_campaign(
        &self,
        goal: &str,
        steps: usize,
        audience: Option<&str>,
    ) -> Result<Campaign, EngineError> {
        require_non_empty(goal, "goal")?;
        if steps == 0 {
            return Err(EngineError::InvalidInput(
                "steps must be at least 1".to_string(),
            ));
        }
        let campaign_steps = (0..steps)
            .map(|i| CampaignStep {
                step_number: i + 1,
                subject: format!("Step {}: Moving towards {}", i + 1, goal),
                content: format!("This is step {} in your journey to {}.", i + 1, goal),
                delay_days: i * 3,
            })
            .collect();
        Ok(Campaign {
            goal: goal.to_string(),
            audience: audience.map(str::to_string),
            steps: campaign_steps,
            total_duration_days: (steps - 1) * 3,
        })
    }

    fn generate_outline(&self, topic: &str, sections: usize) -> Result<Vec<String>, EngineError> {
        require_non_empty(topic, "topic")?;
        let sections = sections.max(2);
        let mut outline = vec![format!("Introduction to {}", topic)];
        for i in 1..sections.saturating_sub(1) {
            outline.push(format!("Section {}: Key Aspect of {}", i, topic));
        }
        outline.push(format!("Conclusion: The Future of {}", topic));
        Ok(outline)
    }

    fn generate_hooks(
        &self,
        topic: &str,
        count: usize,
        platform: Option<Platform>,
    ) -> Result<Vec<String>, EngineError> {
        require_non_empty(topic, "topic")?;
        // Rotate the pool by the topic hash so different topics lead with
        // different hooks while each topic stays stable.
        let offset = (stable_hash64(topic) % HOOK_POOL.len() as u64) as usize;
        let mut hooks: Vec<String> = (0..HOOK_POOL.len())
            .map(|i| fill_topic(HOOK_POOL[(offset + i) % HOOK_POOL.len()], topic))
            .collect();
        if let Some(Platform::Twitter) = platform {
            for hook in &mut hooks {
                if hook.chars().count() > 240 {
                    *hook = hook.chars().take(240).collect();
                }
            }
        }
        hooks.truncate(count.min(HOOK_POOL.len()));
        Ok(hooks)
    }

    fn expand(&self, text: &str) -> Result<String, EngineError> {
        require_non_empty(text, "text")?;
        Ok(format!(
            "{}\n\nThe implications reach further than the surface level. \
             Examined from a few more angles, the same idea keeps paying out deeper insight.",
            text
        ))
    }

    fn shorten(&self, text: &str, target_words: Option<usize>) -> Result<String, EngineError> {
        require_non_empty(text, "text")?;
        let words: Vec<&str> = text.split_whitespace().collect();
        let target = target_words.unwrap_or(words.len() / 2).max(1);
        if target >= words.len() {
            return Ok(text.to_string());
        }
        Ok(format!("{}...", words[..target].join(" ")))
    }
}
