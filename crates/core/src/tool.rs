//! Tool kinds and their form catalogs
//!
//! Each tool is a closed variant of [`ToolKind`]. Everything a form needs to
//! render a tool view (slot names, selector labels, enumerated choices, the
//! warning shown when the free-text input is empty) hangs off the enum so that
//! adding a tool is a compile error everywhere it is not yet handled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slot names used by the prompt templates
pub mod slots {
    /// Press release source material (pasted or uploaded)
    pub const BASE_INFORMATION: &str = "base_information";
    /// Subject to pitch or analyse
    pub const TOPIC: &str = "topic";
    pub const TONE: &str = "tone";
    pub const TARGET_MEDIA: &str = "target_media";
    pub const OUTPUT_FORMAT: &str = "output_format";

    /// Alternate spelling accepted for `target_media`
    pub const TARGET_MEDIA_TYPE: &str = "target_media_type";

    /// Other names a slot may be submitted under
    pub fn aliases(slot: &str) -> &'static [&'static str] {
        match slot {
            TARGET_MEDIA => &[TARGET_MEDIA_TYPE],
            _ => &[],
        }
    }
}

/// An enumerated selector shown next to a tool's free-text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSlot {
    pub name: &'static str,
    pub label: &'static str,
    pub choices: &'static [&'static str],
}

const PRESS_RELEASE_OPTIONS: &[OptionSlot] = &[
    OptionSlot {
        name: slots::TONE,
        label: "Elige el tono:",
        choices: &[
            "Corporativo y formal",
            "Cercano y entusiasta",
            "Directo y noticioso",
            "Innovador y moderno",
        ],
    },
    OptionSlot {
        name: slots::TARGET_MEDIA,
        label: "Enfocado a:",
        choices: &[
            "Medio generalista",
            "Medio especializado (ej. tecnología, finanzas)",
            "Revista de estilo de vida",
            "Blog de nicho",
        ],
    },
];

const PITCH_OPTIONS: &[OptionSlot] = &[
    OptionSlot {
        name: slots::OUTPUT_FORMAT,
        label: "Elige el formato:",
        choices: &[PitchFormat::EMAIL_LABEL, PitchFormat::WHATSAPP_LABEL],
    },
    OptionSlot {
        name: slots::TONE,
        label: "Elige el tono:",
        choices: &["Directo y conciso", "Amigable e informal", "Formal y respetuoso"],
    },
    OptionSlot {
        name: slots::TARGET_MEDIA,
        label: "Enfocado a:",
        choices: &[
            "Periodista de medio generalista",
            "Periodista de medio especializado",
            "Influencer o creador de contenido",
        ],
    },
];

/// One of the three fixed assistant tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Draft a press release from base information
    PressRelease,
    /// Draft a short pitch to a journalist (email or WhatsApp)
    Pitch,
    /// Break a topic down into glossary, news angles and target media
    TopicAnalysis,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::PressRelease, ToolKind::Pitch, ToolKind::TopicAnalysis];

    /// Stable identifier used in URLs and logs
    pub fn id(&self) -> &'static str {
        match self {
            ToolKind::PressRelease => "press-release",
            ToolKind::Pitch => "pitch",
            ToolKind::TopicAnalysis => "topic-analysis",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::PressRelease => "Redacción de Comunicados de Prensa",
            ToolKind::Pitch => "Redacción de Pitches (Email/WhatsApp)",
            ToolKind::TopicAnalysis => "Análisis de Temáticas",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::PressRelease => {
                "Carga o pega información base y genera un comunicado de prensa profesional y listo para enviar."
            }
            ToolKind::Pitch => {
                "Crea mensajes de presentación cortos y efectivos para captar la atención de periodistas por email o WhatsApp."
            }
            ToolKind::TopicAnalysis => {
                "Introduce un tema complejo y obtén un desglose estratégico: glosario, enfoques noticiosos y medios a los que proponerlo."
            }
        }
    }

    /// The free-text slot that must be non-blank before any call is made
    pub fn required_slot(&self) -> &'static str {
        match self {
            ToolKind::PressRelease => slots::BASE_INFORMATION,
            ToolKind::Pitch | ToolKind::TopicAnalysis => slots::TOPIC,
        }
    }

    pub fn option_slots(&self) -> &'static [OptionSlot] {
        match self {
            ToolKind::PressRelease => PRESS_RELEASE_OPTIONS,
            ToolKind::Pitch => PITCH_OPTIONS,
            ToolKind::TopicAnalysis => &[],
        }
    }

    /// Whether `slot` names this tool's free-text input rather than a selector
    pub fn is_free_text_slot(&self, slot: &str) -> bool {
        slot == self.required_slot()
    }

    /// Only the press release tool accepts an uploaded text file
    pub fn accepts_upload(&self) -> bool {
        matches!(self, ToolKind::PressRelease)
    }

    /// Warning shown when the free-text input is empty
    pub fn missing_input_warning(&self) -> &'static str {
        match self {
            ToolKind::PressRelease => {
                "Por favor, proporciona la información base para generar el comunicado."
            }
            ToolKind::Pitch => "Por favor, describe el tema a presentar.",
            ToolKind::TopicAnalysis => "Por favor, introduce una temática para analizar.",
        }
    }

    /// Shown while the completion is in flight
    pub fn progress_message(&self) -> &'static str {
        match self {
            ToolKind::PressRelease => "Redactando el comunicado... ✍️",
            ToolKind::Pitch => "Creando tu pitch... 📨",
            ToolKind::TopicAnalysis => "Analizando la temática y buscando ángulos... 🧐",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tool: {0}")]
pub struct UnknownToolKind(pub String);

impl FromStr for ToolKind {
    type Err = UnknownToolKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "press-release" | "pressrelease" => Ok(ToolKind::PressRelease),
            "pitch" => Ok(ToolKind::Pitch),
            "topic-analysis" | "topicanalysis" => Ok(ToolKind::TopicAnalysis),
            _ => Err(UnknownToolKind(s.to_string())),
        }
    }
}

/// Delivery channel of a pitch, selecting its sub-template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PitchFormat {
    #[default]
    Email,
    WhatsApp,
}

impl PitchFormat {
    pub const EMAIL_LABEL: &'static str = "Email de presentación";
    pub const WHATSAPP_LABEL: &'static str = "Mensaje de WhatsApp";

    /// Any label mentioning WhatsApp selects the WhatsApp variant; everything
    /// else falls back to email.
    pub fn from_label(label: &str) -> Self {
        if label.to_lowercase().contains("whatsapp") {
            PitchFormat::WhatsApp
        } else {
            PitchFormat::Email
        }
    }
}
