//! Prompt Building
//!
//! Maps a tool kind plus form values onto one of the fixed templates in
//! [`crate::templates`]. Substitution is literal and single-pass: a value that
//! itself contains `{tone}` is copied as-is and never expanded.

use pr_assistant_core::{slots, FormValues, MissingFieldError, PitchFormat, Prompt, ToolKind, ToolRequest};

use crate::templates;

/// A static template with `{slot}` placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    text: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.text;
        while let Some((_, slot, after)) = next_placeholder(rest) {
            if !names.contains(&slot) {
                names.push(slot);
            }
            rest = after;
        }
        names
    }

    /// Fill every placeholder from `values`.
    ///
    /// Fails on the first placeholder (in template order) whose value is
    /// absent or whitespace-only.
    pub fn render(&self, values: &FormValues) -> Result<String, MissingFieldError> {
        let mut out = String::with_capacity(self.text.len() + 256);
        let mut rest = self.text;
        while let Some((before, slot, after)) = next_placeholder(rest) {
            out.push_str(before);
            out.push_str(values.require(slot)?);
            rest = after;
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Split `text` around its next `{slot}` placeholder.
///
/// Braces that do not enclose a lowercase identifier are literal text and end
/// up in `before`.
fn next_placeholder(text: &'static str) -> Option<(&'static str, &'static str, &'static str)> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('{') {
        let open = search_from + offset;
        let inner = &text[open + 1..];
        if let Some(close) = inner.find('}') {
            let slot = &inner[..close];
            if is_slot_name(slot) {
                return Some((&text[..open], slot, &inner[close + 1..]));
            }
        }
        search_from = open + 1;
    }
    None
}

fn is_slot_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}

/// Select the template for a tool.
///
/// Pitches pick the email or WhatsApp variant from `output_format`.
pub fn template_for(kind: ToolKind, values: &FormValues) -> &'static Template {
    match kind {
        ToolKind::PressRelease => &templates::PRESS_RELEASE,
        ToolKind::Pitch => {
            let format = values
                .get(slots::OUTPUT_FORMAT)
                .map(PitchFormat::from_label)
                .unwrap_or_default();
            match format {
                PitchFormat::Email => &templates::PITCH_EMAIL,
                PitchFormat::WhatsApp => &templates::PITCH_WHATSAPP,
            }
        }
        ToolKind::TopicAnalysis => &templates::TOPIC_ANALYSIS,
    }
}

/// Build the finished prompt for `kind` from `values`
pub fn build_prompt(kind: ToolKind, values: &FormValues) -> Result<Prompt, MissingFieldError> {
    let template = template_for(kind, values);
    let text = template.render(values)?;

    tracing::debug!(
        tool = %kind,
        template = template.name(),
        prompt_chars = text.chars().count(),
        "Built prompt"
    );

    // Templates carry fixed instruction text, so a rendered prompt is never blank
    Prompt::new(text).ok_or_else(|| MissingFieldError::new(kind.required_slot()))
}

/// Build the prompt for a submitted form
pub fn build_prompt_for(request: &ToolRequest) -> Result<Prompt, MissingFieldError> {
    build_prompt(request.kind, &request.values())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_release_values() -> FormValues {
        FormValues::new()
            .with("base_information", "Acme launches Photon V2, cuts energy use 50%")
            .with("tone", "Corporativo y formal")
            .with("target_media", "Medio generalista")
    }

    fn pitch_values(format: &str) -> FormValues {
        FormValues::new()
            .with("topic", "Nueva app de fitness con IA")
            .with("tone", "Amigable e informal")
            .with("target_media", "Influencer o creador de contenido")
            .with("output_format", format)
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            templates::PRESS_RELEASE.placeholders(),
            vec!["base_information", "tone", "target_media"]
        );
        assert_eq!(
            templates::PITCH_EMAIL.placeholders(),
            vec!["topic", "tone", "target_media", "output_format"]
        );
        assert_eq!(templates::PITCH_WHATSAPP.placeholders(), templates::PITCH_EMAIL.placeholders());
        assert_eq!(templates::TOPIC_ANALYSIS.placeholders(), vec!["topic"]);
    }

    #[test]
    fn test_literal_braces_are_kept() {
        let template = Template::new("t", "{ \"a\": {value} } {Not_a_slot} {}");
        let out = template.render(&FormValues::new().with("value", "1")).unwrap();
        assert_eq!(out, "{ \"a\": 1 } {Not_a_slot} {}");
    }

    #[test]
    fn test_substitution_is_single_pass() {
        let template = Template::new("t", "{topic} / {tone}");
        let values = FormValues::new().with("topic", "{tone}").with("tone", "Formal");
        assert_eq!(template.render(&values).unwrap(), "{tone} / Formal");
    }

    #[test]
    fn test_press_release_scenario() {
        let prompt = build_prompt(ToolKind::PressRelease, &press_release_values()).unwrap();
        let text = prompt.as_str();

        assert!(text.contains("Acme launches Photon V2, cuts energy use 50%"));
        assert!(text.contains("Corporativo y formal"));
        assert!(text.contains("Medio generalista"));
        for header in ["TÍTULO", "ENTRADILLA", "ACERCA DE"] {
            assert!(text.contains(header), "missing header {header}");
        }
        assert!(!text.contains("{base_information}"));
    }

    #[test]
    fn test_press_release_accepts_target_media_type() {
        let values = FormValues::new()
            .with("base_information", "Datos")
            .with("tone", "Directo y noticioso")
            .with("target_media_type", "Blog de nicho");
        let prompt = build_prompt(ToolKind::PressRelease, &values).unwrap();
        assert!(prompt.as_str().contains("Blog de nicho"));
    }

    #[test]
    fn test_every_value_appears_verbatim() {
        let cases = [
            (ToolKind::PressRelease, press_release_values()),
            (ToolKind::Pitch, pitch_values("Email de presentación")),
            (ToolKind::Pitch, pitch_values("Mensaje de WhatsApp")),
            (ToolKind::TopicAnalysis, FormValues::new().with("topic", "  sostenibilidad en la moda rápida ")),
        ];

        for (kind, values) in cases {
            let prompt = build_prompt(kind, &values).unwrap();
            assert!(!prompt.is_empty());
            for (_, value) in values.iter() {
                assert!(prompt.as_str().contains(value), "{kind}: missing {value:?}");
            }
        }
    }

    #[test]
    fn test_pitch_whatsapp_variant() {
        let prompt = build_prompt(ToolKind::Pitch, &pitch_values("Mensaje de WhatsApp")).unwrap();
        let text = prompt.as_str();
        assert!(text.contains("WhatsApp"));
        assert!(text.contains("emojis"));
        assert!(!text.contains("Asunto"));
        assert!(!text.contains("Cuerpo del email"));
    }

    #[test]
    fn test_pitch_email_variant() {
        let prompt = build_prompt(ToolKind::Pitch, &pitch_values("Email de presentación")).unwrap();
        let text = prompt.as_str();
        assert!(text.contains("Asunto"));
        assert!(!text.contains("emojis"));
    }

    #[test]
    fn test_missing_field_names_slot() {
        let values = press_release_values().with("tone", " ");
        let err = build_prompt(ToolKind::PressRelease, &values).unwrap_err();
        assert_eq!(err.slot, "tone");

        let err = build_prompt(ToolKind::Pitch, &FormValues::new().with("topic", "x")).unwrap_err();
        assert_eq!(err.slot, "tone");

        let err = build_prompt(ToolKind::TopicAnalysis, &FormValues::new()).unwrap_err();
        assert_eq!(err.slot, "topic");
    }

    #[test]
    fn test_missing_iff_blank_or_absent() {
        for kind in ToolKind::ALL {
            let full = match kind {
                ToolKind::PressRelease => press_release_values(),
                ToolKind::Pitch => pitch_values("Email de presentación"),
                ToolKind::TopicAnalysis => FormValues::new().with("topic", "DeFi"),
            };
            assert!(build_prompt(kind, &full).is_ok());

            for slot in template_for(kind, &full).placeholders() {
                let without: FormValues = full.iter().filter(|(k, _)| *k != slot).collect();
                assert_eq!(build_prompt(kind, &without).unwrap_err().slot, slot);

                let blank = full.clone().with(slot, " \t\n");
                assert_eq!(build_prompt(kind, &blank).unwrap_err().slot, slot);
            }
        }
    }

    #[test]
    fn test_build_prompt_for_request() {
        let request = ToolRequest::new(ToolKind::TopicAnalysis).with_text("topic", "IA cuántica en logística");
        let prompt = build_prompt_for(&request).unwrap();
        assert!(prompt.as_str().contains("IA cuántica en logística"));
        assert!(prompt.as_str().contains("Glosario de Términos Clave"));
    }
}
