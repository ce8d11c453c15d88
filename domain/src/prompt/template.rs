//! Prompt templates for the content workflow

use crate::crew::agent::AgentProfile;
use crate::crew::task::TaskSpec;
use crate::research::Research;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt describing the agent persona
    pub fn agent_system(profile: &AgentProfile) -> String {
        format!(
            r#"You are a {}.
{}

Your personal goal is: {}

Work independently: do not ask questions back and do not delegate.
Respond in markdown."#,
            profile.role.title(),
            profile.backstory,
            profile.goal,
        )
    }

    /// User prompt for a task, with optional research and previous-stage output
    pub fn task_prompt(
        task: &TaskSpec,
        research: Option<&Research>,
        previous: Option<(&str, &str)>,
    ) -> String {
        let mut prompt = format!("Current Task: {}\n", task.description);

        if let Some(research) = research.filter(|r| !r.is_empty()) {
            prompt.push_str("\nUse the following web research where it is relevant:\n\n");
            prompt.push_str(&research.to_markdown());
        }

        if let Some((from_role, content)) = previous {
            prompt.push_str(&format!(
                "\nThis is the output of the {} you are working from:\n\n--- BEGIN {} OUTPUT ---\n{}\n--- END {} OUTPUT ---\n",
                from_role,
                from_role.to_uppercase(),
                content,
                from_role.to_uppercase(),
            ));
        }

        prompt.push_str(&format!(
            "\nThis is the expected criteria for your final answer: {}\nYou MUST return the actual complete content as the final answer, not a summary.",
            task.expected_output
        ));

        prompt
    }
}
