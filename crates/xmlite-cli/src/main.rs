use std::fmt::{self, Write as _};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use xmlite::{Config, Document, Node};

#[derive(Debug, Parser)]
#[command(name = "xmlite", version, about = "Parse XML and print the element tree")]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,
    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
    /// Maximum element nesting depth (0 means unlimited)
    #[arg(long, default_value_t = Config::default().max_depth)]
    max_depth: usize,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Tree,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config {
        max_depth: args.max_depth,
        ..Config::default()
    };

    let doc = match &args.input {
        Some(path) => xmlite::parse_file_with_config(path, config)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        None => {
            let bytes = read_stdin()?;
            xmlite::from_bytes_with_config(&bytes, config).context("failed to parse stdin")?
        }
    };
    debug!(empty = doc.is_empty(), "document parsed");

    let mut rendered = match args.format {
        FormatArg::Json if args.compact => serde_json::to_string(&doc)?,
        FormatArg::Json => serde_json::to_string_pretty(&doc)?,
        FormatArg::Tree => render_tree(&doc)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    write_output(&args.output, rendered.as_bytes())
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("failed to read stdin")?;
    if buffer.iter().all(u8::is_ascii_whitespace) {
        bail!("no input provided on stdin");
    }
    Ok(buffer)
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

fn render_tree(doc: &Document) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if let Some(declaration) = &doc.declaration {
        out.push_str("?xml");
        for (key, value) in &declaration.attributes {
            write!(out, " {key}={value:?}")?;
        }
        out.push('\n');
    }
    if let Some(root) = &doc.root {
        render_node(&mut out, root, 0)?;
    }
    Ok(out)
}

fn render_node(out: &mut String, node: &Node, depth: usize) -> fmt::Result {
    write!(out, "{:indent$}{}", "", node.name, indent = depth * 2)?;
    for (key, value) in &node.attributes {
        write!(out, " {key}={value:?}")?;
    }
    match node.content.as_deref() {
        None => out.push_str(" /"),
        Some("") => {}
        Some(content) => write!(out, ": {content:?}")?,
    }
    out.push('\n');
    for child in &node.children {
        render_node(out, child, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tree() -> fmt::Result {
        let doc = xmlite::parse(r#"<?xml version="1.0"?><a id="x">hi<b/><c>line
two</c></a>"#);
        assert_eq!(
            render_tree(&doc)?,
            "?xml version=\"1.0\"\na id=\"x\": \"hi\"\n  b /\n  c: \"line\\ntwo\"\n"
        );
        Ok(())
    }

    #[test]
    fn test_render_empty() -> fmt::Result {
        assert_eq!(render_tree(&Document::default())?, "");
        Ok(())
    }

    #[test]
    fn test_render_nested_attributes() -> fmt::Result {
        let doc = xmlite::parse("<r><i k='1' j=\"two\"/><i>x</i></r>");
        assert_eq!(
            render_tree(&doc)?,
            "r\n  i k=\"1\" j=\"two\" /\n  i: \"x\"\n"
        );
        Ok(())
    }
}
