//! Local harness for the generation pipeline
//!
//! Runs the Lambda-shaped handler against an in-process store: seeds the
//! template, feeds it an invocation event from disk, prints the
//! convention-shaped response.

use anyhow::Context;
use clap::{value_parser, Arg, Command};
use plangen_render::PlaceholderRenderer;
use plangen_service::{Generator, Response, ServiceConfig};
use plangen_store::{MemoryStore, UrlPolicy};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Command::new("plangen")
        .version("0.1.0")
        .about("Weekly-plan document generator")
        .subcommand_required(true)
        .subcommand(
            Command::new("invoke")
                .about("Run one invocation against an in-process store")
                .arg(
                    Arg::new("event")
                        .long("event")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the invocation event JSON"),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the template package to seed"),
                )
                .arg(
                    Arg::new("bucket")
                        .long("bucket")
                        .default_value("plangen-local")
                        .help("Bucket name for the in-process store"),
                )
                .arg(
                    Arg::new("template-key")
                        .long("template-key")
                        .default_value("templates/plan.docx")
                        .help("Key the template is seeded under"),
                )
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .default_value("signed")
                        .value_parser(["signed", "public"])
                        .help("URL policy for the returned locator"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("invoke", args)) => {
            let event_path = args.get_one::<PathBuf>("event").unwrap();
            let template_path = args.get_one::<PathBuf>("template").unwrap();
            let bucket = args.get_one::<String>("bucket").unwrap();
            let template_key = args.get_one::<String>("template-key").unwrap();

            let mut config = ServiceConfig::new(bucket, template_key);
            if args.get_one::<String>("policy").map(String::as_str) == Some("public") {
                config.url_policy = UrlPolicy::PublicStatic;
            }

            let event_raw = std::fs::read_to_string(event_path)
                .with_context(|| format!("reading event {}", event_path.display()))?;
            let event = serde_json::from_str(&event_raw)
                .with_context(|| format!("parsing event {}", event_path.display()))?;
            let template = std::fs::read(template_path)
                .with_context(|| format!("reading template {}", template_path.display()))?;

            let store = Arc::new(MemoryStore::new(&config.bucket));
            store.seed(&config.template_key, template, "application/octet-stream");
            let generator =
                Generator::new(&config, store, Arc::new(PlaceholderRenderer::strict()));

            match generator.handle(event).await {
                Ok(Response::Typed(body)) => println!("{body}"),
                Ok(Response::Gateway(envelope)) => {
                    println!("{}", serde_json::to_string_pretty(&envelope)?);
                }
                Err(error) => {
                    eprintln!("error: {}", error.caller_message());
                    std::process::exit(1);
                }
            }
        }
        _ => unreachable!("subcommand required"),
    }

    Ok(())
}
