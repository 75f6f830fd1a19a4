//! Annotated YAML documents for current and recommended configurations
//!
//! Each recommended value carries a trailing `# <change>` comment. Comments
//! are padded so they start in the same column on every line, then the
//! nested block is handed to `serde_yaml` for serialization.

use serde::Serialize;
use tracing::{debug, warn};

use crate::format::{FormatMode, ValueFormatter};
use crate::models::{ResourceConfig, ResourceKey, ResourceKind};
use crate::settings::BreakdownSettings;
use crate::variation::{variation, Variation};

/// Separator between a value and its change comment
pub const COMMENT_MARKER: &str = "  # ";

/// One `<kind>: <value>  # <comment>` line of a document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLine {
    pub key: ResourceKey,
    pub kind: ResourceKind,
    pub value: String,
    pub comment: String,
}

impl DocumentLine {
    /// Width of the `<kind>: <value>` part in characters
    pub fn label_width(&self) -> usize {
        self.kind.as_str().chars().count() + 2 + self.value.chars().count()
    }
}

/// Append padded comments so every `#` lands in the same column
///
/// Lines with no value render empty; lines with no comment render the bare
/// value.
pub fn align_comments(lines: &[DocumentLine]) -> Vec<String> {
    let max_chars = lines.iter().map(DocumentLine::label_width).max().unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.value.is_empty() {
                return String::new();
            }
            if line.comment.is_empty() {
                return line.value.clone();
            }
            let padding = " ".repeat(max_chars - line.label_width());
            format!("{}{}{}{}", line.value, padding, COMMENT_MARKER, line.comment)
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct DocumentBlock {
    cpu: String,
    memory: String,
}

#[derive(Debug, Serialize)]
struct Document {
    limits: DocumentBlock,
    requests: DocumentBlock,
}

impl Document {
    fn from_lines(lines: Vec<DocumentLine>, values: Vec<String>) -> Self {
        let mut document = Document {
            limits: DocumentBlock {
                cpu: String::new(),
                memory: String::new(),
            },
            requests: DocumentBlock {
                cpu: String::new(),
                memory: String::new(),
            },
        };

        for (line, value) in lines.into_iter().zip(values) {
            let block = match line.key {
                ResourceKey::Limits => &mut document.limits,
                ResourceKey::Requests => &mut document.requests,
            };
            match line.kind {
                ResourceKind::Cpu => block.cpu = value,
                ResourceKind::Memory => block.memory = value,
            }
        }
        document
    }
}

/// Builds the current and recommended configuration documents
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    formatter: ValueFormatter,
}

impl DocumentBuilder {
    pub fn new(settings: BreakdownSettings) -> Self {
        Self {
            formatter: ValueFormatter::new(settings),
        }
    }

    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    /// Lines of the current document; no comments
    pub fn current_lines(&self, current: &ResourceConfig) -> Vec<DocumentLine> {
        self.lines(current, |_, _| Variation::none())
    }

    /// Lines of the recommended document, commented with the change from `current`
    pub fn recommended_lines(
        &self,
        current: &ResourceConfig,
        recommended: &ResourceConfig,
    ) -> Vec<DocumentLine> {
        self.lines(recommended, |key, kind| {
            variation(
                &self.formatter,
                kind,
                current.cell(key, kind),
                recommended.cell(key, kind),
            )
        })
    }

    /// YAML for the current configuration
    pub fn build_current(&self, current: &ResourceConfig) -> String {
        render(self.current_lines(current))
    }

    /// YAML for the recommended configuration with aligned change comments
    pub fn build_recommended(&self, current: &ResourceConfig, recommended: &ResourceConfig) -> String {
        render(self.recommended_lines(current, recommended))
    }

    fn lines<F>(&self, config: &ResourceConfig, mut change: F) -> Vec<DocumentLine>
    where
        F: FnMut(ResourceKey, ResourceKind) -> Variation,
    {
        let mut lines = Vec::with_capacity(4);
        for key in ResourceKey::ALL {
            for kind in ResourceKind::ALL {
                lines.push(DocumentLine {
                    key,
                    kind,
                    value: self
                        .formatter
                        .format(config.cell(key, kind), FormatMode::Formatted),
                    comment: change(key, kind).text,
                });
            }
        }
        lines
    }
}

/// Serialize aligned lines; a serializer failure degrades to an empty document
fn render(lines: Vec<DocumentLine>) -> String {
    let values = align_comments(&lines);
    let document = Document::from_lines(lines, values);

    match serde_yaml::to_string(&document) {
        Ok(yaml) => {
            debug!(bytes = yaml.len(), "Rendered configuration document");
            strip_quotes(&yaml)
        }
        Err(e) => {
            warn!(error = %e, "Failed to serialize configuration document");
            String::new()
        }
    }
}

/// Drop the quotes the YAML emitter puts around ambiguous plain scalars
fn strip_quotes(yaml: &str) -> String {
    yaml.replace(['"', '\''], "")
}
