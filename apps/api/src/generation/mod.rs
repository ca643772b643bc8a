// Content Generation Engine
// Implements: request model, prompt construction, LLM generation, SEO analysis glue.
// All LLM calls go through llm_client — no direct Anthropic SDK calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
