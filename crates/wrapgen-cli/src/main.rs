//! wrapgen CLI - Wrapper-class generator
//!
//! Commands:
//! - `wrapgen generate` - Generate wrapper classes from a class model
//! - `wrapgen render` - Render one type descriptor and list its imports
//! - `wrapgen check` - Validate a class model file

use clap::{Parser, Subcommand};
use wrapgen_core::LogLevel;

mod check;
mod generate;
mod render;

#[derive(Parser)]
#[command(name = "wrapgen")]
#[command(author, version, about = "Wrapper-class generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate wrapper classes from a class model
    Generate {
        /// Path to the class model (.toml or .json)
        #[arg(short, long)]
        input: String,

        /// Output directory for generated sources
        #[arg(short, long)]
        output: String,

        /// Generator option as key=value (repeatable)
        #[arg(short = 'O', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,

        /// Emit debug notes while processing
        #[arg(long)]
        debug: bool,

        /// Resource path override, handed to the generator (unused by the
        /// built-in wrapper generator)
        #[arg(long)]
        resource_path: Option<String>,

        /// Namespace whose superclasses take part in generation
        #[arg(long, value_name = "NAMESPACE")]
        super_namespace: Option<String>,

        /// What to do with matching superclasses
        #[arg(long, value_enum, default_value = "fold")]
        super_action: generate::SuperAction,
    },

    /// Render a type descriptor for a namespace
    Render {
        /// Descriptor, e.g. "java.util.Map<java.lang.String, a.b.Item>"
        descriptor: String,

        /// Namespace of the file the type is rendered into
        #[arg(short, long, default_value = "")]
        namespace: String,

        /// Additional always-available namespace (repeatable)
        #[arg(long = "implicit", value_name = "NAMESPACE")]
        implicit: Vec<String>,
    },

    /// Validate a class model file
    Check {
        /// Path to the class model (.toml or .json)
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    wrapgen_logging::init_logging(LogLevel::Info);

    match cli.command {
        Commands::Generate {
            input,
            output,
            options,
            debug,
            resource_path,
            super_namespace,
            super_action,
        } => {
            let request = generate::Request {
                input,
                output,
                options,
                debug,
                resource_path,
                super_namespace,
                super_action,
            };
            generate::run(&request)?;
        }
        Commands::Render {
            descriptor,
            namespace,
            implicit,
        } => {
            render::run(&descriptor, &namespace, &implicit)?;
        }
        Commands::Check { input } => {
            check::run(&input)?;
        }
    }

    Ok(())
}
