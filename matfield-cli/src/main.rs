//! `matfield` hosts a single material text field in the terminal and prints
//! the submitted value to stdout.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};
use log::LevelFilter;

use matfield::domain::Platform;
use matfield::io::{FieldDocument, load_field_document};
use matfield::{FieldType, Playground, PlaygroundOptions};

#[derive(Debug, Parser)]
#[command(
    name = "matfield",
    version,
    about = "Try a material text field in the terminal"
)]
struct Cli {
    /// Field document (JSON, YAML or TOML) to start from
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Field type: default, email, password, number, currency or amount
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    field_type: Option<FieldType>,

    /// Floating label text
    #[arg(short = 'l', long = "label", value_name = "TEXT")]
    label: Option<String>,

    /// Helper text shown under the field
    #[arg(long = "helper", value_name = "TEXT")]
    helper: Option<String>,

    #[arg(long = "prefix", value_name = "TEXT")]
    prefix: Option<String>,

    #[arg(long = "suffix", value_name = "TEXT")]
    suffix: Option<String>,

    /// Character restriction; the underline turns red past it
    #[arg(long = "restrict", value_name = "N")]
    restrict: Option<usize>,

    /// Minimum length shown by the counter
    #[arg(long = "min", value_name = "N")]
    min: Option<usize>,

    /// Maximum length shown by the counter
    #[arg(long = "max", value_name = "N")]
    max: Option<usize>,

    /// Default value shown until the field is first focused
    #[arg(long = "default", value_name = "TEXT")]
    default_value: Option<String>,

    /// Platform whose layout quirks to emulate: ios, android or web
    #[arg(long = "platform", value_name = "NAME")]
    platform: Option<Platform>,

    /// Lay the field out right-to-left
    #[arg(long = "rtl")]
    rtl: bool,

    /// Focus the field as soon as the playground opens
    #[arg(long = "focus")]
    focus: bool,

    /// Write debug logs to this file
    #[arg(long = "log", value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log.as_ref() {
        init_file_logger(path)?;
    }

    let document = match cli.config.as_ref() {
        Some(path) => load_field_document(path).map_err(|err| Report::msg(format!("{err:#}")))?,
        None => FieldDocument::default(),
    };
    let document = apply_overrides(&cli, document);
    log::debug!("starting playground with {:?}", document.field);

    let title = format!("matfield · {}", document.field.field_type);
    let options = PlaygroundOptions::default().with_focus_on_start(cli.focus);
    let value = Playground::new(document.field)
        .with_quirks(document.quirks)
        .with_title(title)
        .with_options(options)
        .run()
        .map_err(|err| Report::msg(format!("{err:#}")))?;

    println!("{value}");
    Ok(())
}

/// Command-line flags win over the loaded document.
fn apply_overrides(cli: &Cli, mut document: FieldDocument) -> FieldDocument {
    let field = &mut document.field;
    if let Some(field_type) = cli.field_type {
        field.field_type = field_type;
    }
    if let Some(label) = &cli.label {
        field.label.clone_from(label);
    }
    if field.label.is_empty() {
        field.label = "Label".to_string();
    }
    let text_overrides = [
        (&mut field.helper, &cli.helper),
        (&mut field.prefix, &cli.prefix),
        (&mut field.suffix, &cli.suffix),
        (&mut field.default_value, &cli.default_value),
    ];
    for (slot, flag) in text_overrides {
        if flag.is_some() {
            slot.clone_from(flag);
        }
    }
    if cli.restrict.is_some() {
        field.character_restriction = cli.restrict;
    }
    if cli.min.is_some() {
        field.min = cli.min;
    }
    if cli.max.is_some() {
        field.max = cli.max;
    }

    let quirks = &mut document.quirks;
    if let Some(platform) = cli.platform {
        quirks.platform = platform;
    }
    if cli.rtl {
        quirks.rtl = true;
    }
    document
}

fn init_file_logger(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .filter_module("matfield", LevelFilter::Trace)
        .try_init()
        .wrap_err("failed to initialize logging")?;
    Ok(())
}
