//! boxsvg CLI
//!
//! Usage:
//!   boxsvg [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Render configuration (TOML format)
//!   -d, --debug          Draw the debug outline of the box
//!   --fragment           Print the bare fragment instead of an SVG document
//!   --embed-images       Inline local image files as data URIs
//!   -v, --verbose        Log to stderr (repeat for more detail)
//!   -h, --help           Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use base64::Engine;
use clap::Parser;
use serde::Deserialize;
use tracing::{debug, Level};

use boxsvg::style::BackgroundSource;
use boxsvg::{wrap_document, BoxGeometry, BoxRenderer, InheritedContext, RenderConfig, Style};

#[derive(Parser)]
#[command(name = "boxsvg")]
#[command(about = "Render a laid-out CSS box as SVG")]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Draw the debug outline of the box
    #[arg(short, long)]
    debug: bool,

    /// Print the bare fragment instead of a standalone document
    #[arg(long)]
    fragment: bool,

    /// Inline local image files as base64 data URIs
    #[arg(long)]
    embed_images: bool,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// One box to render, as produced by a layout engine
#[derive(Deserialize)]
struct BoxDocument {
    geometry: BoxGeometry,
    #[serde(default)]
    style: Style,
    #[serde(default)]
    inherited: InheritedContext,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut doc: BoxDocument = match serde_json::from_str(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error parsing input: {}", e);
            std::process::exit(1);
        }
    };

    if cli.debug {
        doc.geometry.debug = true;
    }

    if cli.embed_images {
        // Relative paths resolve against the input file
        let base = cli
            .input
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        if let Err(e) = embed_images(&mut doc, base) {
            eprintln!("Error embedding image: {}", e);
            std::process::exit(1);
        }
    }

    let document = config.document.clone();
    let renderer = BoxRenderer::new(config);
    let rendered = futures::executor::block_on(renderer.render(
        &doc.geometry,
        &doc.style,
        &doc.inherited,
    ));

    match rendered {
        Ok(fragment) if cli.fragment => println!("{}", fragment),
        Ok(fragment) => println!("{}", wrap_document(&fragment, &doc.geometry, &document)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Replace local image references with data URIs
fn embed_images(doc: &mut BoxDocument, base: &Path) -> io::Result<()> {
    if let Some(src) = doc.geometry.src.as_mut() {
        *src = data_uri(src, base)?;
    }
    for layer in doc.style.background_image.iter_mut().flatten() {
        if let BackgroundSource::Url { src } = &mut layer.image {
            *src = data_uri(src, base)?;
        }
    }
    Ok(())
}

fn data_uri(src: &str, base: &Path) -> io::Result<String> {
    if src.is_empty() || src.starts_with("data:") || src.contains("://") {
        return Ok(src.to_string());
    }
    let path = base.join(src);
    debug!(path = %path.display(), "embedding image");
    let bytes = fs::read(&path)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime_type(&path), encoded))
}

fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(src: Option<&str>, layer_src: &str) -> BoxDocument {
        let json = format!(
            r#"{{
                "geometry": {{"id": "a", "left": 0, "top": 0, "width": 10, "height": 10, "src": {}}},
                "style": {{"backgroundImage": [{{"image": {{"type": "url", "src": "{}"}}}}]}}
            }}"#,
            src.map(|s| format!("\"{}\"", s))
                .unwrap_or_else(|| "null".to_string()),
            layer_src
        );
        serde_json::from_str(&json).unwrap()
    }

    fn layer_src(doc: &BoxDocument) -> &str {
        match &doc.style.background_image.as_ref().unwrap()[0].image {
            BackgroundSource::Url { src } => src,
            other => panic!("unexpected layer {:?}", other),
        }
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(mime_type(Path::new("a.png")), "image/png");
        assert_eq!(mime_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type(Path::new("icons/a.svg")), "image/svg+xml");
        assert_eq!(mime_type(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_type(Path::new("a")), "application/octet-stream");
    }

    #[test]
    fn test_data_uri_passes_through_non_local_sources() {
        let base = Path::new("/nonexistent");
        for src in ["", "data:image/png;base64,AAAA", "https://example.com/a.png"] {
            assert_eq!(data_uri(src, base).unwrap(), src);
        }
    }

    #[test]
    fn test_data_uri_reads_relative_to_base() {
        let dir = std::env::temp_dir().join(format!("boxsvg-embed-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("dot.png"), b"abc").unwrap();

        assert_eq!(
            data_uri("dot.png", &dir).unwrap(),
            "data:image/png;base64,YWJj"
        );
        assert!(data_uri("missing.png", &dir).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_embed_images_rewrites_box_and_layers() {
        let dir = std::env::temp_dir().join(format!("boxsvg-doc-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("photo.gif"), b"abc").unwrap();

        let mut doc = doc_with(Some("photo.gif"), "photo.gif");
        embed_images(&mut doc, &dir).unwrap();
        assert_eq!(doc.geometry.src.as_deref(), Some("data:image/gif;base64,YWJj"));
        assert_eq!(layer_src(&doc), "data:image/gif;base64,YWJj");

        let mut remote = doc_with(None, "https://example.com/bg.png");
        embed_images(&mut remote, &dir).unwrap();
        assert_eq!(remote.geometry.src, None);
        assert_eq!(layer_src(&remote), "https://example.com/bg.png");

        fs::remove_dir_all(&dir).unwrap();
    }
}
