/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! protodefaults - inspect and verify the compiled-in message registry

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use protodefaults::core::logging::init_tracing;
use protodefaults::registry::CapabilityObject;
use protodefaults::{
    full_registry, lite_registry, Capability, Config, ConfigSource, DefaultInstanceRegistry,
};

#[derive(Parser)]
#[command(name = "protodefaults")]
#[command(about = "Verify compiled protobuf bindings and their default instances")]
struct Cli {
    #[arg(short, long, default_value = "protodefaults.toml")]
    config: PathBuf,

    /// Capability surface to use (lite or full); overrides the config file
    #[arg(long)]
    capability: Option<Capability>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered message types in registry order
    List {
        /// Print the registry report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Instantiate every message and check count and default state
    Check {
        /// Expected number of message types
        #[arg(short, long)]
        expect: Option<usize>,
    },
    /// Instantiate a single message by fully-qualified name
    Inspect {
        full_name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = Config::load_with_source(&cli.config)
        .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
    if let Some(capability) = cli.capability {
        config.registry.capability = capability;
    }

    init_tracing(&config.logging.log_level);
    if source == ConfigSource::Defaults {
        info!("Configuration file {:?} not found, using defaults", cli.config);
    }
    info!(
        "Using {} registry, expecting {} message types",
        config.registry.capability, config.registry.expected_count
    );

    let result = match config.registry.capability {
        Capability::Lite => run(lite_registry(), &cli.command, &config),
        Capability::Full => run(full_registry(), &cli.command, &config),
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

fn run<C>(registry: &DefaultInstanceRegistry<C>, command: &Commands, config: &Config) -> Result<()>
where
    C: ?Sized + CapabilityObject,
{
    match command {
        Commands::List { json } => {
            if *json {
                let report = serde_json::to_string_pretty(&registry.report())?;
                println!("{}", report);
            } else {
                for (index, descriptor) in registry.descriptors().iter().enumerate() {
                    println!("{:>3}  {:<45} {}", index, descriptor.full_name(), descriptor.source_file());
                }
            }
        }
        Commands::Check { expect } => {
            let expected = expect.unwrap_or(config.registry.expected_count);
            let instances = registry
                .check(expected)
                .context("default-instance check failed")?;
            info!("Checked {} default instances", instances.len());
            println!(
                "ok: {} default instances ({} capability, {} source files)",
                instances.len(),
                registry.capability(),
                registry.source_files().len()
            );
        }
        Commands::Inspect { full_name } => {
            let descriptor = registry
                .find(full_name)
                .with_context(|| format!("unknown message type {}", full_name))?;
            let instance = descriptor.instantiate();
            let info = descriptor.info();
            println!("name:        {}", info.full_name);
            println!("package:     {}", info.package);
            println!("source file: {}", info.source_file);
            println!("encoded len: {}", instance.lite_view().encoded_size());
            println!("default:     {}", instance.lite_view().is_default());
        }
    }
    Ok(())
}
