//! Command line tool over the JSON-RPC documentation catalogue: integrity
//! checks, method listing, Markdown rendering and JSON export.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use clap::{Parser, Subcommand};
use ethdoc_registry::{ApiModule, ApiNamespace, Registry};
use std::{fs, path::PathBuf};
use tracing::{info, warn};

mod render;

#[derive(Debug, Parser)]
#[command(author, version, about = "JSON-RPC documentation catalogue tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs the schema-integrity checks over the catalogue.
    Check,
    /// Lists qualified method names.
    List {
        /// Restrict the listing to one namespace.
        #[arg(long)]
        namespace: Option<ApiNamespace>,
    },
    /// Renders the catalogue to Markdown.
    Render {
        /// Restrict rendering to one namespace.
        #[arg(long)]
        namespace: Option<ApiNamespace>,
        /// Directory to write the Markdown files to; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Dumps the catalogue as JSON.
    Dump,
}

fn main() -> eyre::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let registry = Registry::new()?;
    match cli.command {
        Command::Check => check(&registry),
        Command::List { namespace } => {
            list(&registry, namespace);
            Ok(())
        }
        Command::Render { namespace, out } => render_markdown(&registry, namespace, out),
        Command::Dump => dump(&registry),
    }
}

fn init_tracing() {
    use tracing_subscriber::{
        filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    };
    let filter =
        EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy();
    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).with(filter).init();
}

fn check(registry: &Registry) -> eyre::Result<()> {
    let report = ethdoc_lint::check(registry);
    if report.is_clean() {
        info!(methods = registry.methods().count(), "catalogue is clean");
        return Ok(())
    }
    for violation in report.violations() {
        warn!(%violation, "integrity violation");
    }
    Err(eyre::eyre!("{} integrity violation(s)", report.violations().len()))
}

fn list(registry: &Registry, namespace: Option<ApiNamespace>) {
    for module in selected(registry, namespace) {
        for method in &module.methods {
            let mut line = module.namespace.qualify(method.name);
            if method.pubsub {
                line.push_str(" (pubsub)");
            }
            if method.nodoc.is_some() {
                line.push_str(" (nodoc)");
            }
            println!("{line}");
        }
    }
}

fn render_markdown(
    registry: &Registry,
    namespace: Option<ApiNamespace>,
    out: Option<PathBuf>,
) -> eyre::Result<()> {
    if let Some(dir) = &out {
        fs::create_dir_all(dir)?;
    }
    for module in selected(registry, namespace) {
        let rendered = render::render_module(module);
        let mut documents = vec![(format!("{}.md", module.namespace), rendered.main)];
        for (subdoc, content) in rendered.subdocs {
            documents.push((format!("{}-{subdoc}.md", module.namespace), content));
        }
        for (name, content) in documents {
            match &out {
                Some(dir) => {
                    let path = dir.join(&name);
                    fs::write(&path, &content)?;
                    info!(path = %path.display(), "wrote document");
                }
                None => println!("{content}"),
            }
        }
    }
    Ok(())
}

fn dump(registry: &Registry) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(registry)?);
    Ok(())
}

fn selected<'a>(
    registry: &'a Registry,
    namespace: Option<ApiNamespace>,
) -> impl Iterator<Item = &'a ApiModule> {
    registry.modules().iter().filter(move |module| namespace.map_or(true, |ns| ns == module.namespace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn namespace_argument_parses() {
        let cli = Cli::parse_from(["ethdoc", "list", "--namespace", "secretstore"]);
        match cli.command {
            Command::List { namespace } => assert_eq!(namespace, Some(ApiNamespace::SecretStore)),
            _ => panic!("wrong subcommand"),
        }
    }
}
