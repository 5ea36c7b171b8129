// Request orchestration
//
// Each coordinator owns one request flow end to end and talks to the store,
// the generator and the broadcaster only through their contracts.

mod generation;
mod mindmap;
mod prompt;
mod scoring;

#[cfg(test)]
pub(crate) mod testing;

pub use generation::{BrainstormOutcome, BrainstormRequest, IdeaGenerationCoordinator};
pub use mindmap::{parse_branches, MindmapExpander, MAX_BRANCHES};
pub use prompt::{compose_brainstorm_prompt, compose_mindmap_prompt, DEFAULT_CONTEXT};
pub use scoring::ScoringCoordinator;
