// Prompt composition for idea generation and mind-map expansion

use crate::personas::Persona;

/// Context used when the request does not supply one
pub const DEFAULT_CONTEXT: &str = "General brainstorming session";

const IDEA_FORMAT_INSTRUCTIONS: &str = "Please provide 3-5 creative ideas or solutions. For each idea, include:
1. A clear title
2. A brief description (2-3 sentences)
3. Key benefits or advantages
4. One potential challenge to consider

Format your response as a structured list with clear separation between ideas.";

/// Persona instructions, context, challenge, then the fixed output format
pub fn compose_brainstorm_prompt(persona: &Persona, context: Option<&str>, challenge: &str) -> String {
    let context = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CONTEXT);

    format!(
        "{}\n\nContext: {}\n\nChallenge/Topic: {}\n\n{}",
        persona.prompt, context, challenge, IDEA_FORMAT_INSTRUCTIONS
    )
}

pub fn compose_mindmap_prompt(topic: &str, current_branches: &[String]) -> String {
    let existing = if current_branches.is_empty() {
        "None".to_string()
    } else {
        current_branches.join(", ")
    };

    format!(
        "You are helping expand a mind map for the topic: \"{topic}\"\n\n\
         Current branches already exist: {existing}\n\n\
         Generate 5 new, unique branches/subtopics that would logically connect to this main topic.\n\
         Make sure they don't duplicate existing branches.\n\
         Format as a simple list, one per line, with just the branch name (2-4 words each)."
    )
}
