//! Category registry: the fixed set of prompt use-cases.
//!
//! Categories are static reference data. Each entry also carries the guidance sentence the
//! optimizer adds to the LLM request; guidance never goes over the wire.

use serde::{Deserialize, Serialize};

/// A prompt use-case as shown to clients: `{id, name, icon}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// One row of the static registry.
#[derive(Clone, Copy, Debug)]
pub struct CategorySpec {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub guidance: &'static str,
}

impl CategorySpec {
    pub fn to_category(&self) -> Category {
        Category {
            id: self.id.to_string(),
            name: self.name.to_string(),
            icon: self.icon.to_string(),
        }
    }
}

/// Guidance used when the category id is not in the registry.
pub const DEFAULT_GUIDANCE: &str = "Optimize this prompt for better AI results.";

pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        id: "text_summarization",
        name: "Text Summarization",
        icon: "📄",
        guidance: "Focus on creating a prompt that will generate clear, structured summaries with key points highlighted.",
    },
    CategorySpec {
        id: "code_generation",
        name: "Code Generation",
        icon: "💻",
        guidance: "Optimize for specific programming requirements, including language, functionality, error handling, and coding standards.",
    },
    CategorySpec {
        id: "content_creation",
        name: "Content Creation",
        icon: "✍️",
        guidance: "Enhance for engaging content with clear structure, target audience considerations, and SEO optimization.",
    },
    CategorySpec {
        id: "data_analysis",
        name: "Data Analysis",
        icon: "📊",
        guidance: "Improve for comprehensive data analysis with statistical insights, trend identification, and actionable recommendations.",
    },
    CategorySpec {
        id: "chatbot_response",
        name: "Chatbot Response",
        icon: "🤖",
        guidance: "Optimize for conversational AI with appropriate tone, context awareness, and user-friendly responses.",
    },
    CategorySpec {
        id: "creative_writing",
        name: "Creative Writing",
        icon: "🎨",
        guidance: "Enhance for storytelling with character development, plot structure, and vivid descriptive elements.",
    },
    CategorySpec {
        id: "email_templates",
        name: "Email Templates",
        icon: "📧",
        guidance: "Optimize for professional communication with clear purpose, appropriate tone, and effective call-to-action.",
    },
    CategorySpec {
        id: "social_media",
        name: "Social Media",
        icon: "🌐",
        guidance: "Improve for platform-specific engagement with hashtags, audience targeting, and shareability.",
    },
    CategorySpec {
        id: "academic_writing",
        name: "Academic Writing",
        icon: "🎓",
        guidance: "Enhance for scholarly writing with proper citations, objective tone, and research methodology.",
    },
    CategorySpec {
        id: "marketing_copy",
        name: "Marketing Copy",
        icon: "📢",
        guidance: "Optimize for persuasive content with benefit-focused messaging, customer pain points, and conversion optimization.",
    },
];

/// All categories in registry order.
pub fn categories() -> Vec<Category> {
    CATEGORIES.iter().map(CategorySpec::to_category).collect()
}

pub fn find(id: &str) -> Option<&'static CategorySpec> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Guidance for `id`, or [`DEFAULT_GUIDANCE`] for unknown ids.
pub fn guidance(id: &str) -> &'static str {
    find(id).map(|c| c.guidance).unwrap_or(DEFAULT_GUIDANCE)
}

/// Title-cased label derived from an id: `"code_generation"` → `"Code Generation"`.
///
/// Works for any id, registered or not.
pub fn title_case(id: &str) -> String {
    id.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
