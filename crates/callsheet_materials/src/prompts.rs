//! Prompt construction for the generation phases.

use crate::phases::{CoreResult, PhaseOutput, PracticeResult, RelationshipResult};
use callsheet_core::{CharacterContext, GenerationPhase};
use std::fmt::Write;

/// System prompt framing each phase.
pub fn system_prompt(phase: GenerationPhase) -> &'static str {
    match phase {
        GenerationPhase::Core => {
            "You are an experienced acting coach preparing a performer for a television role. \
             You write precise, actable character analysis grounded in the script. \
             Respond with a single JSON object and nothing else."
        }
        GenerationPhase::Relationships => {
            "You are an acting coach mapping a character's relationships for rehearsal. \
             Ground every observation in the scenes provided. \
             Respond with a single JSON object and nothing else."
        }
        GenerationPhase::Practice => {
            "You are an acting coach designing rehearsal material: monologues, key scenes and \
             a preparation checklist drawn from the character's arc. \
             Respond with a single JSON object and nothing else."
        }
    }
}

/// Builds user prompts from a character context.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    scene_excerpt_chars: usize,
}

impl PromptBuilder {
    /// Builder quoting at most `scene_excerpt_chars` characters per scene.
    pub fn new(scene_excerpt_chars: usize) -> Self {
        Self {
            scene_excerpt_chars,
        }
    }

    /// Prompt for the core phase.
    pub fn core(&self, context: &CharacterContext) -> String {
        let mut prompt = self.character_block(context);
        self.push_dialogue(&mut prompt, context);
        self.push_scenes(&mut prompt, context);
        prompt.push_str(
            "\nWrite a study guide, a breakdown of each scene listed, the character's \
             emotional beats across these episodes, and notes on voice and physicality.\n",
        );
        push_schema::<CoreResult>(&mut prompt);
        prompt
    }

    /// Prompt for the relationships phase, seeded with the core output.
    pub fn relationships(&self, context: &CharacterContext, core: &CoreResult) -> String {
        let mut prompt = self.character_block(context);

        if !context.other_character_names.is_empty() {
            let _ = writeln!(
                prompt,
                "\nCharacters sharing scenes: {}",
                context.other_character_names.join(", ")
            );
        }
        if !context.relationships.is_empty() {
            prompt.push_str("\nDeclared relationships:\n");
            for r in &context.relationships {
                let _ = writeln!(
                    prompt,
                    "- {} / {}: {}. {}",
                    r.character_a, r.character_b, r.relationship_type, r.description
                );
            }
        }

        let study = serde_json::to_string_pretty(&core.study_guide).unwrap_or_default();
        let _ = writeln!(prompt, "\nStudy guide from the previous step:\n{study}");

        self.push_scenes(&mut prompt, context);
        prompt.push_str(
            "\nMap the character's relationship with each other character: the label, the \
             dynamic between them, shared history and defining moments.\n",
        );
        push_schema::<RelationshipResult>(&mut prompt);
        prompt
    }

    /// Prompt for the practice phase.
    pub fn practice(&self, context: &CharacterContext) -> String {
        let mut prompt = self.character_block(context);
        self.push_dialogue(&mut prompt, context);
        self.push_scenes(&mut prompt, context);
        prompt.push_str(
            "\nWrite practice monologues in the character's voice, pick the key scenes to \
             rehearse first with exercises for each, and a preparation checklist.\n",
        );
        push_schema::<PracticeResult>(&mut prompt);
        prompt
    }

    fn character_block(&self, context: &CharacterContext) -> String {
        let identity = &context.identity;
        let mut block = format!("Character: {}\n", identity.name);
        if !identity.description.is_empty() {
            let _ = writeln!(block, "Description: {}", identity.description);
        }
        if !context.episode_numbers.is_empty() {
            let episodes: Vec<String> = context.episode_numbers.iter().map(u32::to_string).collect();
            let _ = writeln!(block, "Episodes: {}", episodes.join(", "));
        }
        if let Some(profile) = &context.deep_profile {
            let profile = serde_json::to_string_pretty(profile).unwrap_or_default();
            let _ = writeln!(block, "Profile:\n{profile}");
        }
        block
    }

    fn push_dialogue(&self, prompt: &mut String, context: &CharacterContext) {
        if context.dialogue_lines.is_empty() {
            prompt.push_str("\nNo dialogue was found for this character.\n");
            return;
        }
        prompt.push_str("\nSample dialogue:\n");
        for line in &context.dialogue_lines {
            let _ = writeln!(prompt, "> {line}");
        }
    }

    fn push_scenes(&self, prompt: &mut String, context: &CharacterContext) {
        if context.scenes.is_empty() {
            prompt.push_str("\nNo scenes were attributed to this character.\n");
            return;
        }
        prompt.push_str("\nScenes:\n");
        for scene in &context.scenes {
            let _ = writeln!(
                prompt,
                "\n[Episode {} Scene {}] {}",
                scene.episode_number, scene.scene_number, scene.heading
            );
            let _ = writeln!(prompt, "{}", excerpt(&scene.text, self.scene_excerpt_chars));
            if let Some(notes) = &scene.pre_prod_notes {
                let _ = writeln!(prompt, "Notes: {notes}");
            }
        }
    }
}

/// First `max_chars` characters of `text`, marked when cut.
fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn push_schema<T: PhaseOutput>(prompt: &mut String) {
    let skeleton = serde_json::to_string_pretty(&T::empty()).unwrap_or_default();
    let _ = write!(
        prompt,
        "\nRespond with ONLY a JSON object with exactly these keys:\n{skeleton}\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsheet_core::{CharacterIdentity, SceneReference};

    fn context() -> CharacterContext {
        CharacterContext {
            identity: CharacterIdentity::new("c1", "Jace Castro", "A dockhand"),
            scenes: vec![SceneReference {
                episode_number: 1,
                scene_number: 2,
                text: "x".repeat(50),
                heading: "EXT. DOCKS".to_string(),
                ..Default::default()
            }],
            dialogue_lines: vec!["You're late.".to_string()],
            other_character_names: vec!["MARISOL".to_string()],
            episode_numbers: vec![1],
            ..Default::default()
        }
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 4), "héll...");
        assert_eq!(excerpt("short", 10), "short");
    }

    #[test]
    fn test_core_prompt_includes_schema_and_dialogue() {
        let prompt = PromptBuilder::new(10).core(&context());
        assert!(prompt.contains("Character: Jace Castro"));
        assert!(prompt.contains("> You're late."));
        assert!(prompt.contains("\"studyGuide\""));
        assert!(prompt.contains("[Episode 1 Scene 2] EXT. DOCKS"));
        assert!(prompt.contains(&format!("{}...", "x".repeat(10))));
    }

    #[test]
    fn test_relationships_prompt_is_seeded_with_core() {
        let mut core = CoreResult::empty();
        core.study_guide.overview = "Never left the harbor".to_string();
        let prompt = PromptBuilder::new(1500).relationships(&context(), &core);
        assert!(prompt.contains("Never left the harbor"));
        assert!(prompt.contains("Characters sharing scenes: MARISOL"));
        assert!(prompt.contains("\"relationshipMap\""));
    }

    #[test]
    fn test_practice_prompt_requests_practice_keys() {
        let prompt = PromptBuilder::new(1500).practice(&context());
        for key in ["\"monologues\"", "\"keyScenes\"", "\"prepChecklist\""] {
            assert!(prompt.contains(key), "{key}");
        }
    }
}
