use crate::cli::{NamesArgs, TyperKind};
use crate::error::{CliError, Result};
use atomtype::config::{TyperConfig, TyperConfigBuilder, TyperSettings};
use atomtype::typers::element::DEFAULT_MAX_ELEMENT;
use std::io::Write;
use tracing::{debug, info};

pub fn run(args: NamesArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let stdout = std::io::stdout();
    write_names(&config, &mut stdout.lock())
}

/// Merges the optional configuration file with the command-line overrides.
/// Without either, the docking-radius Gnina typer is used.
fn resolve_config(args: &NamesArgs) -> Result<TyperConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading typer configuration from {}", path.display());
            TyperConfig::load(path)?
        }
        None => TyperConfigBuilder::new().gnina(false).build()?,
    };

    config.typer = resolve_typer(args, &config.typer)?;

    let mut builder = TyperConfigBuilder::new();
    builder = match config.typer {
        TyperSettings::Gnina {
            use_covalent_radius,
        } => builder.gnina(use_covalent_radius),
        TyperSettings::Element { max_element } => builder.element(max_element),
    };
    if let Some(path) = &args.map {
        builder = builder.mapping_file(path.clone());
    } else if let Some(types) = &args.subset {
        builder = builder.subset(types.clone(), !args.no_catch_all);
    } else if let Some(mapping) = config.mapping {
        let mut merged = builder.build()?;
        merged.mapping = Some(mapping);
        debug!(config = ?merged, "Resolved typer configuration.");
        return Ok(merged);
    }

    let merged = builder.build()?;
    debug!(config = ?merged, "Resolved typer configuration.");
    Ok(merged)
}

/// Applies the typer flags on top of the configured typer. A flag only
/// replaces the setting it names; other settings keep their configured value
/// when the typer kind is unchanged.
fn resolve_typer(args: &NamesArgs, configured: &TyperSettings) -> Result<TyperSettings> {
    let kind = args.typer.unwrap_or(match configured {
        TyperSettings::Gnina { .. } => TyperKind::Gnina,
        TyperSettings::Element { .. } => TyperKind::Element,
    });

    match kind {
        TyperKind::Gnina => {
            if args.max_element.is_some() {
                return Err(CliError::Argument(
                    "--max-element only applies to the element typer".to_string(),
                ));
            }
            let configured_covalent = match configured {
                TyperSettings::Gnina {
                    use_covalent_radius,
                } => *use_covalent_radius,
                TyperSettings::Element { .. } => false,
            };
            Ok(TyperSettings::Gnina {
                use_covalent_radius: args.covalent || configured_covalent,
            })
        }
        TyperKind::Element => {
            if args.covalent {
                return Err(CliError::Argument(
                    "--covalent only applies to the gnina typer".to_string(),
                ));
            }
            let configured_max = match configured {
                TyperSettings::Element { max_element } => *max_element,
                TyperSettings::Gnina { .. } => DEFAULT_MAX_ELEMENT,
            };
            Ok(TyperSettings::Element {
                max_element: args.max_element.unwrap_or(configured_max),
            })
        }
    }
}

fn write_names(config: &TyperConfig, out: &mut impl Write) -> Result<()> {
    let typer = config.build_index_typer()?;
    for (index, name) in typer.get_type_names().iter().enumerate() {
        writeln!(out, "{}\t{}", index, name)?;
    }
    Ok(())
}
