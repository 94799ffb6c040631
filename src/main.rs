use anyhow::{anyhow, Context};
use clap::Parser;
use extkit::codec::EnumCodec;
use extkit::config::{Command, GeoCommand};
use extkit::utils::logger::{self, LogFormat};
use extkit::utils::validation::Validate;
use extkit::{CliConfig, CoordinateUnit, Direction, ExtkitConfig, ExtkitError, GeoLocation, IpAddress};

fn main() {
    let cli = CliConfig::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌，命令列參數優先於設定檔
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        config.log_format()
    };
    logger::init_logger(format, config.log_level(), cli.verbose || config.verbose());

    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(&cli, &config) {
        tracing::error!("❌ {:#}", e);
        let exit_code = e
            .downcast_ref::<ExtkitError>()
            .map(ExtkitError::exit_code)
            .unwrap_or(1);
        eprintln!("❌ {:#}", e);
        std::process::exit(exit_code);
    }
}

fn load_config(path: Option<&str>) -> extkit::Result<ExtkitConfig> {
    let Some(path) = path else {
        return Ok(ExtkitConfig::default());
    };
    let config = ExtkitConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig, config: &ExtkitConfig) -> anyhow::Result<()> {
    match &cli.command {
        Command::Geo { action } => {
            let location = match action {
                GeoCommand::FromDecimal { value, unit } => {
                    let unit = match unit {
                        Some(name) => CoordinateUnit::try_from_name(name, None)
                            .ok_or_else(|| anyhow!("'{}' is not a coordinate unit", name))?,
                        None => config.default_unit(),
                    };
                    GeoLocation::from_coordinate_with_unit(Some(*value), unit)
                }
                GeoCommand::FromDms {
                    degrees,
                    minutes,
                    seconds,
                    direction,
                } => {
                    let direction = Direction::parse_lenient(direction)
                        .ok_or_else(|| anyhow!("'{}' is not a compass direction", direction))?;
                    GeoLocation::from_components(*degrees, *minutes, *seconds, direction)
                }
            };
            print_location(&location, cli.json, config.precision())
        }
        Command::Ip { address } => {
            let ip = IpAddress::parse(address)?;
            if cli.json {
                println!("{}", serde_json::to_string(&ip)?);
            } else {
                println!("{}", ip);
                println!("valid: {}", ip.is_valid());
            }
            Ok(())
        }
        Command::Enum { kind, input } => {
            let separators = config.separators();
            match kind.to_ascii_lowercase().as_str() {
                "direction" => describe_enum::<Direction>(input.as_deref(), &separators),
                "unit" => describe_enum::<CoordinateUnit>(input.as_deref(), &separators),
                other => Err(anyhow!("unknown enum '{}', expected direction or unit", other)),
            }
        }
    }
}

fn print_location(location: &GeoLocation, json: bool, precision: usize) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&location.snapshot())?);
        return Ok(());
    }

    println!("{}", location);
    match location.coordinate() {
        Some(coordinate) => println!("{:.*}", precision, coordinate),
        None => println!("(unset)"),
    }
    Ok(())
}

fn describe_enum<T: EnumCodec>(input: Option<&str>, separators: &[char]) -> anyhow::Result<()> {
    let variants: Vec<T> = match input {
        Some(text) => T::parse_to_variants_with(text, separators)
            .with_context(|| format!("parsing {} list", T::TYPE_NAME))?,
        None => T::variants().collect(),
    };

    for variant in variants {
        print_row(variant.name(), variant.to_int(), variant.description());
    }
    Ok(())
}

fn print_row(name: &str, value: i32, description: &str) {
    println!("{:<12} {:>4}  {}", name, value, description);
}
