use crate::mappers::AtomIndexTypeMapper;
use crate::mappers::error::MappingError;
use crate::mappers::file::FileAtomMapper;
use crate::mappers::subset::SubsetAtomMapper;
use crate::typers::AtomIndexTyper;
use crate::typers::element::{DEFAULT_MAX_ELEMENT, ElementIndexTyper};
use crate::typers::gnina::GninaIndexTyper;
use crate::typers::mapped::MappedAtomIndexTyper;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

fn default_max_element() -> usize {
    DEFAULT_MAX_ELEMENT
}

fn default_catch_all() -> bool {
    true
}

/// Which index typer to build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TyperSettings {
    Gnina {
        #[serde(default)]
        use_covalent_radius: bool,
    },
    Element {
        #[serde(default = "default_max_element")]
        max_element: usize,
    },
}

/// How to remap the typer's output, if at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MappingSettings {
    File {
        path: PathBuf,
    },
    Subset {
        types: Vec<usize>,
        #[serde(default = "default_catch_all")]
        catch_all: bool,
    },
    Groups {
        groups: Vec<Vec<usize>>,
        #[serde(default = "default_catch_all")]
        catch_all: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TyperConfig {
    pub typer: TyperSettings,
    #[serde(default)]
    pub mapping: Option<MappingSettings>,
}

impl TyperConfig {
    /// Loads a configuration file. A relative mapping file path is resolved
    /// against the directory containing the configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut config: TyperConfig = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        if let Some(MappingSettings::File { path: map_path }) = &mut config.mapping {
            if map_path.is_relative() {
                if let Some(dir) = path.parent() {
                    *map_path = dir.join(&*map_path);
                }
            }
        }
        debug!(path = %path.display(), config = ?config, "Loaded typer configuration.");
        Ok(config)
    }

    fn build_base_typer(&self) -> Box<dyn AtomIndexTyper> {
        match self.typer {
            TyperSettings::Gnina {
                use_covalent_radius,
            } => Box::new(GninaIndexTyper::new(use_covalent_radius)),
            TyperSettings::Element { max_element } => Box::new(ElementIndexTyper::new(max_element)),
        }
    }

    fn build_mapper(
        &self,
        original_names: &[String],
    ) -> Result<Option<Box<dyn AtomIndexTypeMapper>>, ConfigError> {
        let mapper: Box<dyn AtomIndexTypeMapper> = match &self.mapping {
            None => return Ok(None),
            Some(MappingSettings::File { path }) => {
                Box::new(FileAtomMapper::from_path(path, original_names)?)
            }
            Some(MappingSettings::Subset { types, catch_all }) => Box::new(
                SubsetAtomMapper::new(types, *catch_all).with_type_names(original_names)?,
            ),
            Some(MappingSettings::Groups { groups, catch_all }) => Box::new(
                SubsetAtomMapper::grouped(groups, *catch_all).with_type_names(original_names)?,
            ),
        };
        Ok(Some(mapper))
    }

    /// Builds the configured index typer, wrapped with its mapper when one is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mapping`] when the mapping file cannot be read
    /// or names unknown types, or when a subset lists ids outside the typer's
    /// category space.
    pub fn build_index_typer(&self) -> Result<Box<dyn AtomIndexTyper>, ConfigError> {
        let typer = self.build_base_typer();
        let original_names = typer.get_type_names();

        let built: Box<dyn AtomIndexTyper> = match self.build_mapper(&original_names)? {
            Some(mapper) => Box::new(MappedAtomIndexTyper::new(mapper, typer)),
            None => typer,
        };
        info!(
            typer = ?self.typer,
            mapped = self.mapping.is_some(),
            num_types = built.num_types(),
            "Built atom index typer."
        );
        Ok(built)
    }
}

#[derive(Default)]
pub struct TyperConfigBuilder {
    typer: Option<TyperSettings>,
    mapping: Option<MappingSettings>,
}

impl TyperConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gnina(mut self, use_covalent_radius: bool) -> Self {
        self.typer = Some(TyperSettings::Gnina {
            use_covalent_radius,
        });
        self
    }
    pub fn element(mut self, max_element: usize) -> Self {
        self.typer = Some(TyperSettings::Element { max_element });
        self
    }
    pub fn mapping_file(mut self, path: PathBuf) -> Self {
        self.mapping = Some(MappingSettings::File { path });
        self
    }
    pub fn subset(mut self, types: Vec<usize>, catch_all: bool) -> Self {
        self.mapping = Some(MappingSettings::Subset { types, catch_all });
        self
    }
    pub fn groups(mut self, groups: Vec<Vec<usize>>, catch_all: bool) -> Self {
        self.mapping = Some(MappingSettings::Groups { groups, catch_all });
        self
    }

    pub fn build(self) -> Result<TyperConfig, ConfigError> {
        Ok(TyperConfig {
            typer: self.typer.ok_or(ConfigError::MissingParameter("typer"))?,
            mapping: self.mapping,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRecord;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_parses_gnina_typer_without_mapping() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("typer.toml");
        fs::write(
            &file_path,
            r#"
            [typer]
            kind = "gnina"
            use_covalent_radius = true
            "#,
        )
        .unwrap();

        let config = TyperConfig::load(&file_path).unwrap();
        assert_eq!(
            config.typer,
            TyperSettings::Gnina {
                use_covalent_radius: true
            }
        );
        assert_eq!(config.mapping, None);

        let typer = config.build_index_typer().unwrap();
        assert_eq!(typer.num_types(), 28);
        assert_eq!(typer.get_type(&AtomRecord::new(6)).unwrap().radius, 0.77);
    }

    #[test]
    fn element_typer_defaults_its_cutoff() {
        let config: TyperConfig = toml::from_str("[typer]\nkind = \"element\"\n").unwrap();
        assert_eq!(
            config.typer,
            TyperSettings::Element {
                max_element: DEFAULT_MAX_ELEMENT
            }
        );
        assert_eq!(config.build_index_typer().unwrap().num_types(), 84);
    }

    #[test]
    fn subset_mapping_defaults_to_catch_all() {
        let config: TyperConfig = toml::from_str(
            r#"
            [typer]
            kind = "element"
            [mapping]
            kind = "subset"
            types = [1, 6, 7, 8]
            "#,
        )
        .unwrap();

        let typer = config.build_index_typer().unwrap();
        assert_eq!(typer.num_types(), 5);
        assert_eq!(typer.get_type_names(), vec!["H", "C", "N", "O", "Other"]);
        assert_eq!(typer.get_type(&AtomRecord::new(16)).unwrap().index, Some(4));
    }

    #[test]
    fn groups_mapping_builds_surjective_typer() {
        let config: TyperConfig = toml::from_str(
            r#"
            [typer]
            kind = "gnina"
            [mapping]
            kind = "groups"
            groups = [[0, 1], [2, 3, 4, 5]]
            catch_all = false
            "#,
        )
        .unwrap();

        let typer = config.build_index_typer().unwrap();
        assert_eq!(typer.num_types(), 2);
        assert_eq!(typer.get_type(&AtomRecord::new(6).aromatic(true)).unwrap().index, Some(1));
        assert_eq!(typer.get_type(&AtomRecord::new(8)).unwrap().index, None);
    }

    #[test]
    fn relative_mapping_file_is_resolved_against_config_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("map.txt"), "Hydrogen PolarHydrogen\nZinc\n").unwrap();
        let file_path = dir.path().join("typer.toml");
        fs::write(
            &file_path,
            "[typer]\nkind = \"gnina\"\n[mapping]\nkind = \"file\"\npath = \"map.txt\"\n",
        )
        .unwrap();

        let config = TyperConfig::load(&file_path).unwrap();
        assert_eq!(
            config.mapping,
            Some(MappingSettings::File {
                path: dir.path().join("map.txt")
            })
        );

        let typer = config.build_index_typer().unwrap();
        assert_eq!(typer.get_type_names(), vec!["Hydrogen_PolarHydrogen", "Zinc"]);
        assert_eq!(typer.get_type(&AtomRecord::new(30)).unwrap().index, Some(1));
    }

    #[test]
    fn subset_outside_typer_space_is_rejected() {
        let config = TyperConfigBuilder::new()
            .gnina(false)
            .subset(vec![3, 40], true)
            .build()
            .unwrap();
        let result = config.build_index_typer();
        assert!(matches!(
            result,
            Err(ConfigError::Mapping(MappingError::IndexOutOfRange { index: 40, len: 28 }))
        ));
    }

    #[test]
    fn unknown_names_in_mapping_file_fail_the_build() {
        let dir = tempdir().unwrap();
        let map_path = dir.path().join("bad.txt");
        fs::write(&map_path, "Hydrogen Carbon\n").unwrap();

        let config = TyperConfigBuilder::new()
            .gnina(false)
            .mapping_file(map_path)
            .build()
            .unwrap();
        assert!(matches!(
            config.build_index_typer(),
            Err(ConfigError::Mapping(MappingError::UnknownTypeName { .. }))
        ));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = TyperConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.toml");
        fs::write(&file_path, "[typer]\nkind = \"voxel\"\n").unwrap();
        let result = TyperConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn builder_requires_a_typer() {
        let result = TyperConfigBuilder::new().subset(vec![1], false).build();
        assert!(matches!(result, Err(ConfigError::MissingParameter("typer"))));
    }

    #[test]
    fn builder_last_setter_wins() {
        let config = TyperConfigBuilder::new()
            .gnina(true)
            .element(20)
            .groups(vec![vec![6]], false)
            .build()
            .unwrap();
        assert_eq!(config.typer, TyperSettings::Element { max_element: 20 });
        assert_eq!(
            config.mapping,
            Some(MappingSettings::Groups {
                groups: vec![vec![6]],
                catch_all: false
            })
        );
    }
}
