use anyhow::{Context, Result};
use doccomment_config::{Config, OutputFormat};
use doccomment_engine::{CommentSummary, DocumentationComment};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str =
    "[--format <text|json> | --json | --text] [--no-strip] [--raw] [--verbose] [comment-file]";

/// Command line switches. Anything left unset falls back to the config file.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    output: Option<OutputFormat>,
    no_strip: bool,
    raw: bool,
    verbose: bool,
    path: Option<PathBuf>,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = Args::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--format" | "-f" => {
                    let value = args
                        .next()
                        .ok_or_else(|| format!("Missing value for '{arg}'"))?;
                    let format = value.parse::<OutputFormat>().map_err(|e| e.to_string())?;
                    parsed.output = Some(format);
                }
                "--json" => parsed.output = Some(OutputFormat::Json),
                "--text" => parsed.output = Some(OutputFormat::Text),
                "--no-strip" => parsed.no_strip = true,
                "--raw" => parsed.raw = true,
                "--verbose" | "-v" => parsed.verbose = true,
                "-" => parsed.path = None,
                flag if flag.starts_with('-') => return Err(format!("Unknown option '{flag}'")),
                path if parsed.path.is_none() => parsed.path = Some(PathBuf::from(path)),
                path => return Err(format!("Unexpected extra argument '{path}'")),
            }
        }
        Ok(parsed)
    }

    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.no_strip {
            config.strip_comment_syntax = false;
        }
        if self.raw {
            config.include_raw = true;
        }
        config
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read comment file '{}'", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read comment from stdin")?;
            Ok(input)
        }
    }
}

fn extract(input: &str, config: &Config) -> DocumentationComment {
    if config.strip_comment_syntax {
        DocumentationComment::parse(input)
    } else {
        DocumentationComment::from_markdown(input)
    }
}

fn render(summary: &CommentSummary, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => Ok(render_text(summary)),
    }
}

fn render_text(summary: &CommentSummary) -> String {
    let mut sections = Vec::new();

    if let Some(summary_line) = &summary.r#abstract {
        sections.push(format!("Abstract: {summary_line}"));
    }
    if let Some(description) = &summary.description {
        sections.push(format!("Description:\n{}", indent(description)));
    }
    if !summary.parameters.is_empty() {
        let lines = summary
            .parameters
            .iter()
            .map(|parameter| format!("  {}: {}", parameter.name, parameter.description))
            .collect::<Vec<_>>();
        sections.push(format!("Parameters:\n{}", lines.join("\n")));
    }
    for returns in &summary.returns {
        sections.push(format!("Returns: {returns}"));
    }
    for throws in &summary.throws {
        sections.push(format!("Throws: {throws}"));
    }
    for extension in &summary.field_extensions {
        sections.push(format!("{}: {}", capitalize(&extension.name), extension.description));
    }
    if let Some(raw) = &summary.raw {
        sections.push(format!("Raw:\n{}", indent(raw)));
    }

    sections.join("\n")
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| match line {
            "" => String::new(),
            line => format!("  {line}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("doccomment");

    let cli = match Args::parse(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };
    let config = cli.apply_to(config);
    log::debug!("output format: {}", config.output);

    let input = read_input(cli.path.as_ref())?;
    let comment = extract(&input, &config);
    let output = render(&comment.summary(config.include_raw), config.output)?;
    println!("{output}");

    Ok(())
}
