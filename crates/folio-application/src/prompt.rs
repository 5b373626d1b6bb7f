//! Instruction messages sent to the writing agents.

use crate::request::{ChapterRequest, EditRequest, OutlineRequest, ScriptureRequest};
use folio_core::{FolioError, Result};
use minijinja::{Environment, context};

const OUTLINE_TEMPLATE: &str = "Generate a book outline for: {{ prompt }}\
{% if genre %}. Genre: {{ genre }}{% endif %}\
{% if audience %}. Target audience: {{ audience }}{% endif %}";

const CHAPTER_TEMPLATE: &str = "Write a full chapter with the following details:\
{% if title %} Chapter title: \"{{ title }}\".{% endif %}\
{% if number %} Chapter number: {{ number }}.{% endif %} \
Brief/summary: {{ summary }}\
{% if genre %}. Genre: {{ genre }}{% endif %}\
{% if style_notes %}. Style notes: {{ style_notes }}{% endif %}";

const EDIT_TEMPLATE: &str =
    "Please edit and improve the following manuscript text:\n\n{{ manuscript }}";

const SCRIPTURE_TEMPLATE: &str = "Find scripture references for the topic: \"{{ topic }}\"\
{% if context %}. Context/purpose: {{ context }}{% endif %}\
{% if translation %}. Preferred translation: {{ translation }}{% endif %}";

/// Renders request forms into agent instructions.
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl PromptBuilder {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in [
            ("outline", OUTLINE_TEMPLATE),
            ("chapter", CHAPTER_TEMPLATE),
            ("edit", EDIT_TEMPLATE),
            ("scripture", SCRIPTURE_TEMPLATE),
        ] {
            env.add_template(name, source)
                .map_err(|e| FolioError::Prompt(format!("Invalid {name} template: {e}")))?;
        }
        Ok(Self { env })
    }

    pub fn outline(&self, request: &OutlineRequest) -> Result<String> {
        self.render(
            "outline",
            context! {
                prompt => request.prompt.trim(),
                genre => optional(&request.genre),
                audience => optional(&request.audience),
            },
        )
    }

    pub fn chapter(&self, request: &ChapterRequest) -> Result<String> {
        self.render(
            "chapter",
            context! {
                title => optional(&request.title),
                number => optional(&request.number),
                summary => request.summary.trim(),
                genre => optional(&request.genre),
                style_notes => optional(&request.style_notes),
            },
        )
    }

    pub fn edit(&self, request: &EditRequest) -> Result<String> {
        self.render(
            "edit",
            context! {
                manuscript => request.manuscript.trim(),
            },
        )
    }

    pub fn scripture(&self, request: &ScriptureRequest) -> Result<String> {
        self.render(
            "scripture",
            context! {
                topic => request.topic.trim(),
                context => optional(&request.context),
                translation => optional(&request.translation),
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|e| FolioError::Prompt(format!("Failed to render {name} instruction: {e}")))
    }
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PromptBuilder {
        PromptBuilder::new().expect("templates should compile")
    }

    #[test]
    fn test_outline_with_and_without_options() {
        let mut request = OutlineRequest {
            prompt: "A city that trades memories".into(),
            ..Default::default()
        };
        assert_eq!(
            builder().outline(&request).unwrap(),
            "Generate a book outline for: A city that trades memories"
        );

        request.genre = Some("Fiction".into());
        request.audience = Some("Young adults".into());
        assert_eq!(
            builder().outline(&request).unwrap(),
            "Generate a book outline for: A city that trades memories. Genre: Fiction. Target audience: Young adults"
        );
    }

    #[test]
    fn test_chapter_instruction() {
        let request = ChapterRequest {
            title: Some("The Memory Market".into()),
            number: Some("1".into()),
            summary: "Lena starts her day".into(),
            genre: None,
            style_notes: Some("  ".into()),
        };
        assert_eq!(
            builder().chapter(&request).unwrap(),
            "Write a full chapter with the following details: Chapter title: \"The Memory Market\". Chapter number: 1. Brief/summary: Lena starts her day"
        );
    }

    #[test]
    fn test_edit_instruction_keeps_text() {
        let request = EditRequest {
            manuscript: "Line one.\n\nLine <two> & three.".into(),
        };
        assert_eq!(
            builder().edit(&request).unwrap(),
            "Please edit and improve the following manuscript text:\n\nLine one.\n\nLine <two> & three."
        );
    }

    #[test]
    fn test_scripture_instruction() {
        let request = ScriptureRequest {
            topic: "Hope".into(),
            context: None,
            translation: Some("ESV".into()),
        };
        assert_eq!(
            builder().scripture(&request).unwrap(),
            "Find scripture references for the topic: \"Hope\". Preferred translation: ESV"
        );
    }
}
