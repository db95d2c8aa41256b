//! Minimal CLI: render (JSON card documents → pretty | wire) and demo
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use cardforge::{Format, Node, demo, envelope, path_de};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::debug;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// build and render Adaptive Card documents
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// more logging on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// load JSON card documents and re-render them
    Render(RenderOut),
    /// print one of the built-in reference cards
    Demo(DemoOut),
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum OutputFormat {
    /// sorted keys, two-space indent
    #[default]
    Pretty,
    /// compact, insertion order
    Wire,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum DemoCard {
    #[default]
    Readme,
    Image,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select the card in each document (e.g. /attachments/0/content)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every output is one card.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// wrap each card in a chat message envelope
    #[arg(long, default_value_t = false)]
    envelope: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct RenderOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,
}

#[derive(clap::Parser, Debug)]
struct DemoOut {
    #[arg(long, value_enum, default_value_t = DemoCard::Readme)]
    card: DemoCard,

    #[command(flatten)]
    output_settings: OutputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Pretty => Format::Pretty,
            OutputFormat::Wire => Format::Wire,
        }
    }
}

impl InputSettings {
    fn load_process(&self, mut apply: impl FnMut(Node) -> Result<()>) -> Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read source file ({source_path_str})"))?;
            for document in self.documents(&source, &source_path_str)? {
                for json_value in self.select(document, &source_path_str)? {
                    let node = path_de::from_value_with_path::<Node>(json_value)
                        .with_context(|| format!("not a card document ({source_path_str})"))?;
                    apply(node)?;
                }
            }
        }
        Ok(())
    }

    fn documents(&self, source: &str, source_path_str: &str) -> Result<Vec<Value>> {
        if !self.ndjson {
            let value = path_de::from_str_with_path::<Value>(source)
                .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))?;
            return Ok(vec![value]);
        }
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(ix, line)| {
                path_de::from_str_with_path::<Value>(line)
                    .with_context(|| format!("failed to parse line {} of {source_path_str}", ix + 1))
            })
            .collect()
    }

    /// Applies `--json-pointer` then `--jq-expr`.
    fn select(&self, document: Value, source_path_str: &str) -> Result<Vec<Value>> {
        let document = match self.json_pointer.as_deref() {
            None => document,
            Some(pointer) => match document.pointer(pointer) {
                Some(value) => value.clone(),
                None => bail!("JSON pointer {pointer} matched nothing in {source_path_str}"),
            },
        };
        match self.jq_expr.as_ref() {
            None => Ok(vec![document]),
            Some(jq_expr) => crate::jq_exec::run_jaq(jq_expr, &document).with_context(|| {
                format!("failed to apply jq expression to source file ({source_path_str})")
            }),
        }
    }
}

impl OutputSettings {
    fn render(&self, card: Node) -> Result<String> {
        let node = if self.envelope { envelope::wrap(card) } else { card };
        Ok(node.render(self.format.into())?)
    }

    fn write(&self, rendered: &[String]) -> Result<()> {
        let text = rendered.join("\n");
        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(out, format!("{text}\n"))
                    .with_context(|| format!("failed to write {}", out.display()))?;
            }
            None => println!("{text}"),
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Render(target) => {
                let mut rendered = Vec::new();
                target.input_settings.load_process(|card| {
                    rendered.push(target.output_settings.render(card)?);
                    Ok(())
                })?;
                debug!(documents = rendered.len(), "rendered input documents");
                target.output_settings.write(&rendered)
            }
            Command::Demo(target) => {
                let card = match target.card {
                    DemoCard::Readme => demo::readme_card()?,
                    DemoCard::Image => demo::image_card()?,
                };
                let rendered = target.output_settings.render(card)?;
                target.output_settings.write(&[rendered])
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInterface {
        CommandLineInterface::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn render_requires_input() {
        assert!(CommandLineInterface::try_parse_from(["cardforge", "render"]).is_err());
    }

    #[test]
    fn render_flags_parse() {
        let cli = parse(&["cardforge", "-v", "render", "-i", "a.json", "b.json", "--format", "wire", "--envelope"]);
        assert_eq!(cli.verbose, 1);
        let Command::Render(target) = cli.cmd else { panic!("expected render") };
        assert_eq!(target.input_settings.input, ["a.json", "b.json"]);
        assert!(matches!(target.output_settings.format, OutputFormat::Wire));
        assert!(target.output_settings.envelope);
    }

    #[test]
    fn pointer_then_identity_selects_the_card() {
        let settings = InputSettings {
            ndjson: false,
            json_pointer: Some("/attachments/0/content".into()),
            jq_expr: None,
            input: vec![],
        };
        let doc = serde_json::json!({"attachments": [{"content": {"type": "AdaptiveCard"}}]});
        let selected = settings.select(doc, "mem").unwrap();
        assert_eq!(selected, [serde_json::json!({"type": "AdaptiveCard"})]);
    }

    #[test]
    fn missing_pointer_is_an_error() {
        let settings = InputSettings {
            ndjson: false,
            json_pointer: Some("/nope".into()),
            jq_expr: None,
            input: vec![],
        };
        assert!(settings.select(serde_json::json!({}), "mem").is_err());
    }

    #[test]
    fn ndjson_skips_blank_lines() {
        let settings = InputSettings {
            ndjson: true,
            json_pointer: None,
            jq_expr: None,
            input: vec![],
        };
        let docs = settings.documents("{\"a\":1}\n\n{\"b\":2}\n", "mem").unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn envelope_wraps_before_rendering() {
        let settings = OutputSettings {
            format: OutputFormat::Wire,
            envelope: true,
            out: None,
        };
        let rendered = settings.render(cardforge::adaptive_card().build().unwrap()).unwrap();
        assert!(rendered.starts_with(r#"{"type":"message","attachments":[{"#));
    }
}
