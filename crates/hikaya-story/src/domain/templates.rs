//! Prompt template table, one entry per story language.

use super::language::LanguageDecision;
use super::request::StoryRequest;

/// System instruction and user sentence template for one language.
///
/// The user template may reference `{name}`, `{animal}` and `{topic}`.
#[derive(Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Instruction sent with the system role.
    pub system_instruction: &'static str,
    /// User sentence with placeholders.
    pub user_template: &'static str,
}

/// The system instruction and the rendered user prompt for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    /// Instruction sent with the system role.
    pub system_instruction: String,
    /// Prompt sent with the user role.
    pub user_prompt: String,
}

/// English template.
pub const ENGLISH: PromptTemplate = PromptTemplate {
    system_instruction: "You are a children's story writer who creates engaging, educational stories with morals and values.",
    user_template: "Create a short children's story about a {animal}, featuring {name} who learns about {topic}. The story should be engaging, have a clear moral lesson, and be appropriate for children.",
};

/// Arabic template.
pub const ARABIC: PromptTemplate = PromptTemplate {
    system_instruction: "أنت كاتب قصص أطفال تكتب قصصًا تعليمية ممتعة باللغة العربية مع قيم وأخلاق.",
    user_template: "اكتب قصة قصيرة للأطفال عن {animal}، الطفل اسمه {name} الذي يتعلم عن {topic}. يجب أن تكون القصة جذابة، بها درس أخلاقي واضح ومناسبة للأطفال.",
};

/// Indexed by `LanguageDecision::is_arabic`.
static TEMPLATES: [PromptTemplate; 2] = [ENGLISH, ARABIC];

impl PromptTemplate {
    /// Looks up the template for a language decision.
    #[must_use]
    pub fn for_decision(decision: LanguageDecision) -> &'static PromptTemplate {
        &TEMPLATES[usize::from(decision.is_arabic)]
    }

    /// Renders the user template with the request's fields.
    #[must_use]
    pub fn build(&self, request: &StoryRequest) -> PromptPair {
        PromptPair {
            system_instruction: self.system_instruction.to_owned(),
            user_prompt: render(self.user_template, request),
        }
    }
}

/// Single-pass placeholder substitution. Inserted user text is never
/// scanned again, so a field containing `{topic}` is emitted verbatim.
fn render(template: &str, request: &StoryRequest) -> String {
    let mut out = String::with_capacity(
        template.len()
            + request
                .fields()
                .iter()
                .map(|field| field.len())
                .sum::<usize>(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let value = match &tail[1..close] {
            "name" => Some(request.child_name.as_str()),
            "animal" => Some(request.favorite_animal.as_str()),
            "topic" => Some(request.topic.as_str()),
            _ => None,
        };

        if let Some(value) = value {
            out.push_str(value);
            rest = &tail[close + 1..];
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
