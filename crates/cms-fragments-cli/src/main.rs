//! cms-fragments - render CMS documents to HTML

use std::{
    io::Read,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use cms_fragments_config::Config;
use cms_fragments_engine::{
    ContentNode, Document, LinkResolver, TemplateLinkResolver, WithFragments,
};

#[derive(Parser)]
#[command(name = "cms-fragments")]
#[command(version, about = "Render CMS documents to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    cms-fragments doc.json                        Render every field of a document
    cms-fragments page.json -f article.title -t   Print one field as plain text
    curl -s $API/search | cms-fragments -         Read a results page from stdin")]
struct Cli {
    /// Document or API results page (JSON); `-` reads stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Render only this field, as `type.field`
    #[arg(short, long, value_name = "FIELD")]
    field: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Document URL template, overriding the config file
    #[arg(short, long, value_name = "TEMPLATE")]
    url_template: Option<String>,

    /// Print plain text instead of HTML (needs --field)
    #[arg(short, long, requires = "field")]
    text: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let resolver = resolver(cli)?;
    let json = read_input(&cli.input)?;
    let documents = parse_documents(&json)?;
    log::info!("Rendering {} document(s)", documents.len());

    for output in render_documents(&documents, cli.field.as_deref(), cli.text, &resolver)? {
        println!("{output}");
    }
    Ok(())
}

/// Renders each document, or just `field` of each one. Documents without a
/// usable field are skipped with a warning; it is an error only when none
/// of them has it.
fn render_documents(
    documents: &[Document],
    field: Option<&str>,
    text: bool,
    resolver: &dyn LinkResolver,
) -> Result<Vec<String>> {
    let Some(field) = field else {
        return Ok(documents.iter().map(|doc| doc.as_html(resolver)).collect());
    };

    let mut outputs = Vec::with_capacity(documents.len());
    let mut last_error = None;
    for doc in documents {
        match render_field(doc, field, text, resolver) {
            Ok(output) => outputs.push(output),
            Err(e) => {
                log::warn!("Skipping document {}: {e:#}", doc.id);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if outputs.is_empty() => Err(e),
        _ => Ok(outputs),
    }
}

fn resolver(cli: &Cli) -> Result<TemplateLinkResolver> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    if let Some(template) = &cli.url_template {
        config.resolver.document_url = template.clone();
    }
    Ok(config.link_resolver())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("reading stdin")?;
        return Ok(json);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// A single document, or every entry of a `{"results": [...]}` page.
/// Results that fail to parse are skipped with a warning.
fn parse_documents(json: &str) -> Result<Vec<Document>> {
    let node = ContentNode::from_json_str(json).context("input is not valid JSON")?;

    let Some(results) = node.get("results") else {
        return Ok(vec![Document::parse(&node)?]);
    };
    let Some(results) = results.as_array() else {
        bail!("`results` is not an array");
    };

    Ok(results
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            Document::parse(item)
                .inspect_err(|e| log::warn!("Skipping result {i}: {e}"))
                .ok()
        })
        .collect())
}

fn render_field(
    doc: &Document,
    field: &str,
    text: bool,
    resolver: &dyn LinkResolver,
) -> Result<String> {
    let Some(fragment) = doc.get(field) else {
        bail!("document {} has no field `{field}`", doc.id);
    };
    if text {
        return fragment
            .as_text()
            .with_context(|| format!("`{field}` is a {} and has no plain text", fragment.kind()));
    }
    Ok(fragment.as_html(resolver))
}
