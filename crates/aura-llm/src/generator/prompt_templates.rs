//! Prompt template for MVP scope documents

/// Section titles of the scope document, in the order the model must emit them
pub const SCOPE_SECTIONS: [&str; 10] = [
    "Executive Summary",
    "Problem Statement & Proposed Solution",
    "Target Audience & User Personas",
    "Core MVP Features (Prioritized)",
    "Key User Stories (for P0 Features)",
    "Technology Stack Recommendation (High-Level)",
    "Monetization Strategy (Initial Thoughts)",
    "MVP Development Timeline (Estimated Phases)",
    "Key Metrics for Success (KPIs for MVP)",
    "Potential Risks & Mitigation Strategies",
];

/// Prompt template for generating an MVP scope document
pub const SCOPE_GENERATION_PROMPT: &str = r#"You are an expert startup consultant and product manager. Generate a comprehensive, actionable, and professionally formatted MVP (Minimum Viable Product) scope document for the following startup idea:

**Industry:** {industry}
**Core Idea:** {idea}

**Instructions for the Scope Document:**
Please structure the document with clear, distinct sections. Use markdown-style formatting for headers (e.g., ## Section Title) and bullet points where appropriate.

**Include the following sections in detail:**

## 1. Executive Summary
   - A concise overview of the product, its core value proposition, and target audience.

## 2. Problem Statement & Proposed Solution
   - Clearly define the problem this startup aims to solve.
   - Describe how the proposed MVP addresses this problem.

## 3. Target Audience & User Personas
   - Identify the primary target users.
   - Briefly describe 1-2 key user personas (e.g., name, role, goals, pain points relevant to the product).

## 4. Core MVP Features (Prioritized)
   - List the essential features required for the MVP.
   - For each feature, provide a brief description.
   - Prioritize features using a simple scheme (e.g., P0 - Must-have, P1 - Should-have for V1, P2 - Nice-to-have/Future).

## 5. Key User Stories (for P0 Features)
   - Write 3-5 key user stories for the P0 (Must-have) features in the format: "As a [user type/persona], I want to [perform an action] so that I can [achieve a benefit]."

## 6. Technology Stack Recommendation (High-Level)
   - Suggest a suitable technology stack for the MVP (e.g., Frontend, Backend, Database, Key Cloud Services/APIs).
   - Briefly justify choices if specific (e.g., 'Python/FastAPI for rapid backend development').

## 7. Monetization Strategy (Initial Thoughts)
   - Outline 1-2 potential revenue models for the product (e.g., subscription, freemium, one-time purchase, transactional fees).

## 8. MVP Development Timeline (Estimated Phases)
   - Provide a high-level estimated timeline for MVP development, broken into logical phases or sprints (e.g., Phase 1 (4-6 weeks): Core Feature X, Y; User Authentication).

## 9. Key Metrics for Success (KPIs for MVP)
   - Define 3-5 measurable Key Performance Indicators (KPIs) to evaluate the MVP's success post-launch (e.g., user acquisition rate, daily active users, conversion rate for a key action, user retention rate).

## 10. Potential Risks & Mitigation Strategies
    - Identify 2-3 significant potential risks for the MVP (technical, market, operational).
    - Suggest a brief mitigation strategy for each identified risk.

Ensure the output is well-organized, easy to read, and provides practical, actionable insights."#;

/// Render the scope prompt for an idea.
///
/// Both inputs are inserted verbatim. The template is filled in a single pass
/// so placeholder-like text inside `industry` is never expanded again.
pub fn build_prompt(industry: &str, idea: &str) -> String {
    let (head, rest) = SCOPE_GENERATION_PROMPT
        .split_once("{industry}")
        .unwrap_or((SCOPE_GENERATION_PROMPT, ""));
    let (middle, tail) = rest.split_once("{idea}").unwrap_or((rest, ""));

    let mut prompt =
        String::with_capacity(SCOPE_GENERATION_PROMPT.len() + industry.len() + idea.len());
    prompt.push_str(head);
    prompt.push_str(industry);
    prompt.push_str(middle);
    prompt.push_str(idea);
    prompt.push_str(tail);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDEA: &str = "A mobile application that connects local artisans with buyers.";
    const INDUSTRY: &str = "E-commerce and Local Artisan Marketplace";

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_prompt(INDUSTRY, IDEA);

        assert!(prompt.contains(&format!("**Industry:** {}\n", INDUSTRY)));
        assert!(prompt.contains(&format!("**Core Idea:** {}\n", IDEA)));
        assert!(!prompt.contains("{industry}"));
        assert!(!prompt.contains("{idea}"));
    }

    #[test]
    fn test_sections_in_order() {
        let prompt = build_prompt(INDUSTRY, IDEA);

        let mut cursor = 0;
        for (i, title) in SCOPE_SECTIONS.iter().enumerate() {
            let header = format!("## {}. {}\n", i + 1, title);
            let pos = prompt[cursor..]
                .find(&header)
                .unwrap_or_else(|| panic!("missing or out of order: {}", header));
            cursor += pos + header.len();
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(INDUSTRY, IDEA), build_prompt(INDUSTRY, IDEA));
    }

    #[test]
    fn test_placeholder_text_in_inputs_is_not_expanded() {
        let prompt = build_prompt("{idea} industry", "An idea mentioning {industry} literally");

        assert!(prompt.contains("**Industry:** {idea} industry\n"));
        assert!(prompt.contains("**Core Idea:** An idea mentioning {industry} literally\n"));
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let idea = "Use **bold** claims & <tags> in \"quotes\" for 10x growth";
        let prompt = build_prompt("Ad-Tech", idea);
        assert!(prompt.contains(idea));
    }

    #[test]
    fn test_prompt_layout() {
        let prompt = build_prompt(INDUSTRY, IDEA);

        assert!(prompt.starts_with("You are an expert startup consultant and product manager."));
        assert!(prompt.ends_with("provides practical, actionable insights."));
    }
}
