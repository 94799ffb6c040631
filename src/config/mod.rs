pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, GeoCommand};

#[cfg(feature = "cli")]
mod cli {
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "extkit")]
    #[command(about = "Convert coordinates, IPv4 addresses and enum descriptions")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Path to a TOML configuration file")]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(long, global = true, help = "Print results as JSON")]
        pub json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Convert between decimal and degrees/minutes/seconds
        Geo {
            #[command(subcommand)]
            action: GeoCommand,
        },
        /// Normalise an IPv4 address
        Ip { address: String },
        /// List a built-in enum or parse a separated list of its names
        Enum {
            /// direction | unit
            kind: String,
            input: Option<String>,
        },
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum GeoCommand {
        FromDecimal {
            #[arg(allow_negative_numbers = true)]
            value: f64,
            /// latitude | longitude (defaults to the configured unit)
            #[arg(long)]
            unit: Option<String>,
        },
        FromDms {
            degrees: f64,
            minutes: f64,
            seconds: f64,
            /// N, S, E, W or the full direction name
            direction: String,
        },
    }
}
