//! Prompt templates and the built-in seed set.

use serde::{Deserialize, Serialize};

/// A pre-written example prompt for one category.
///
/// The text travels as `template` on the wire; `template_text` is accepted on input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub category: String,
    pub title: String,
    #[serde(rename = "template", alias = "template_text")]
    pub template_text: String,
    pub description: String,
}

impl Template {
    /// New template with a fresh UUID v4 id.
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        template_text: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category: category.into(),
            title: title.into(),
            template_text: template_text.into(),
            description: description.into(),
        }
    }
}

struct Seed {
    category: &'static str,
    title: &'static str,
    text: &'static str,
    description: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        category: "text_summarization",
        title: "Article Summarizer",
        text: "Please provide a comprehensive summary of the following text. Focus on the main points, key arguments, and important conclusions. Structure your summary with clear headings and bullet points where appropriate. Keep the summary to approximately [X] words while maintaining all critical information.\n\nText to summarize:\n[INSERT TEXT HERE]",
        description: "Template for summarizing articles, documents, or long-form content",
    },
    Seed {
        category: "code_generation",
        title: "Function Generator",
        text: "Create a [PROGRAMMING LANGUAGE] function that [SPECIFIC FUNCTIONALITY]. The function should:\n\n- Accept the following parameters: [LIST PARAMETERS]\n- Return: [EXPECTED RETURN TYPE]\n- Include proper error handling for [POTENTIAL ERRORS]\n- Follow [CODING STANDARDS] conventions\n- Include clear comments and docstrings\n\nAdditional requirements:\n[LIST ANY SPECIFIC REQUIREMENTS]",
        description: "Template for generating code functions with specific requirements",
    },
    Seed {
        category: "content_creation",
        title: "Blog Post Creator",
        text: "Write a comprehensive blog post about [TOPIC] for [TARGET AUDIENCE]. The post should:\n\n- Have an engaging headline\n- Include an introduction that hooks the reader\n- Cover these key points: [LIST KEY POINTS]\n- Be approximately [WORD COUNT] words\n- Include practical examples or case studies\n- End with a clear call-to-action\n- Use an [TONE] tone throughout\n\nSEO keywords to incorporate: [LIST KEYWORDS]",
        description: "Template for creating engaging blog posts and articles",
    },
    Seed {
        category: "data_analysis",
        title: "Data Insights Generator",
        text: "Analyze the following dataset and provide insights. Please:\n\n1. Summarize the key statistics and trends\n2. Identify any patterns or anomalies\n3. Provide actionable recommendations based on the data\n4. Highlight the most significant findings\n5. Suggest areas for further investigation\n\nData context: [DESCRIBE THE DATA]\nSpecific questions to address: [LIST QUESTIONS]\n\nDataset:\n[INSERT DATA HERE]",
        description: "Template for analyzing data and generating insights",
    },
    Seed {
        category: "chatbot_response",
        title: "Customer Service Bot",
        text: "You are a helpful customer service representative for [COMPANY NAME]. Respond to the following customer inquiry with:\n\n- A warm, professional tone\n- Clear and helpful information\n- Specific steps or solutions when applicable\n- Appropriate empathy for any concerns\n- Offer to escalate if needed\n\nCompany policies to keep in mind: [LIST RELEVANT POLICIES]\n\nCustomer inquiry:\n[INSERT CUSTOMER MESSAGE HERE]",
        description: "Template for creating customer service chatbot responses",
    },
    Seed {
        category: "creative_writing",
        title: "Story Generator",
        text: "Write a [GENRE] story that includes:\n\n- Setting: [TIME PERIOD/LOCATION]\n- Main character: [CHARACTER DESCRIPTION]\n- Central conflict: [DESCRIBE CONFLICT]\n- Tone: [TONE/MOOD]\n- Word count: Approximately [NUMBER] words\n- Must include these elements: [LIST SPECIFIC ELEMENTS]\n\nThe story should have a clear beginning, middle, and end with engaging dialogue and vivid descriptions.",
        description: "Template for generating creative stories and narratives",
    },
    Seed {
        category: "email_templates",
        title: "Professional Email",
        text: "Compose a professional email with the following details:\n\n- Purpose: [EMAIL PURPOSE]\n- Recipient: [WHO YOU'RE WRITING TO]\n- Tone: [FORMAL/CASUAL/FRIENDLY]\n- Key points to cover: [LIST MAIN POINTS]\n- Desired action from recipient: [WHAT YOU WANT THEM TO DO]\n- Context/background: [RELEVANT BACKGROUND INFO]\n\nInclude an appropriate subject line and professional closing.",
        description: "Template for creating professional email communications",
    },
    Seed {
        category: "social_media",
        title: "Social Media Post",
        text: "Create a [PLATFORM] post about [TOPIC] that:\n\n- Engages [TARGET AUDIENCE]\n- Uses an [TONE] tone\n- Includes relevant hashtags (suggest 5-10)\n- Has a clear call-to-action\n- Fits platform character limits\n- Encourages engagement (likes, shares, comments)\n\nKey message: [MAIN MESSAGE]\nHashtag strategy: [SPECIFIC HASHTAG REQUIREMENTS]",
        description: "Template for creating engaging social media content",
    },
    Seed {
        category: "academic_writing",
        title: "Research Paper Section",
        text: "Write a [SECTION TYPE] for an academic paper on [RESEARCH TOPIC]. This section should:\n\n- Follow [CITATION STYLE] format\n- Be approximately [WORD COUNT] words\n- Include relevant citations and references\n- Maintain an objective, scholarly tone\n- Address these key points: [LIST KEY POINTS]\n- Connect to the broader research question: [RESEARCH QUESTION]\n\nTarget journal/audience: [PUBLICATION TARGET]",
        description: "Template for academic writing and research papers",
    },
    Seed {
        category: "marketing_copy",
        title: "Product Launch Copy",
        text: "Create compelling marketing copy for [PRODUCT/SERVICE] that:\n\n- Highlights key benefits: [LIST BENEFITS]\n- Addresses target customer pain points: [LIST PAIN POINTS]\n- Includes social proof or testimonials\n- Has a strong call-to-action\n- Uses persuasive language appropriate for [TARGET AUDIENCE]\n- Emphasizes unique selling proposition: [USP]\n- Fits [FORMAT] format requirements\n\nBrand voice: [BRAND PERSONALITY]",
        description: "Template for creating effective marketing and sales copy",
    },
];

/// The built-in templates, one per registered category, each with a fresh id.
pub fn seed_templates() -> Vec<Template> {
    SEEDS
        .iter()
        .map(|s| Template::new(s.category, s.title, s.text, s.description))
        .collect()
}
