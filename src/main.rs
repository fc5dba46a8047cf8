mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use kernel_select::{KernelSelector, MatchKind, SelectorConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).context("invalid --log filter")?)
        .with_writer(std::io::stderr)
        .init();

    let registry = tbe_ops::global().context("building op-info registry")?;
    debug!(ops = registry.len(), "registry ready");

    match cli.command {
        Command::List => {
            for name in registry.names() {
                if let Some(info) = registry.get(name) {
                    println!("{name}\t{} signatures\t{}", info.dtype_formats.len(), info.binfile_name);
                }
            }
        }
        Command::Show { op, pretty } => {
            let info = registry
                .get(&op)
                .with_context(|| format!("op `{op}` is not registered"))?;
            let json = if pretty {
                tbe_ops::json::to_json_pretty(info)?
            } else {
                tbe_ops::json::to_json(info)?
            };
            println!("{json}");
        }
        Command::Dump => {
            println!("{}", tbe_ops::json::registry_to_json(registry)?);
        }
        Command::Select { op, inputs, outputs, config } => {
            let config = match config {
                Some(path) => SelectorConfig::from_yaml_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SelectorConfig::default(),
            };
            let selector = KernelSelector::new(registry, config);
            let kernel = selector
                .select(&op, &inputs, &outputs)
                .with_context(|| format!("selecting a kernel for `{op}`"))?;

            println!("kernel:    {}", kernel.kernel_name);
            println!("binary:    {}", kernel.binfile.display());
            println!("signature: #{}", kernel.signature_index);
            match &kernel.match_kind {
                MatchKind::Exact => println!("match:     exact"),
                MatchKind::FormatTransform { ports } => {
                    println!("match:     needs layout conversion on ports {ports:?}")
                }
            }
            for df in &kernel.inputs {
                println!("  in  {df}");
            }
            for df in &kernel.outputs {
                println!("  out {df}");
            }
        }
    }
    Ok(())
}
