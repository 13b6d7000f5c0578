use super::AtomIndexTypeMapper;
use super::error::MappingError;
use itertools::Itertools;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Maps atom types according to a mapping file.
///
/// Each non-blank line of the file defines one new category, listing the
/// original type names it absorbs separated by whitespace. Blank lines are
/// skipped before indices are assigned, so the n-th non-blank line is new
/// category `n - 1`. There is no comment syntax: every token must name an
/// original type. The new category is named by joining its tokens with `_`.
/// Original types absent from the file map to no category. A name listed on
/// more than one line takes the index of the last such line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAtomMapper {
    old_type_names: Vec<String>,
    old_to_new: Vec<Option<usize>>,
    new_type_names: Vec<String>,
}

impl FileAtomMapper {
    /// Loads a mapping file.
    ///
    /// `type_names` must be the original typer's names in index order, as
    /// returned by its `get_type_names()`.
    pub fn from_path(path: &Path, type_names: &[String]) -> Result<Self, MappingError> {
        let content = std::fs::read_to_string(path).map_err(|e| MappingError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mapper = Self::parse(&content, type_names)?;
        debug!(
            path = %path.display(),
            num_types = mapper.new_type_names.len(),
            "Loaded atom type mapping file."
        );
        Ok(mapper)
    }

    pub fn from_reader(mut reader: impl Read, type_names: &[String]) -> Result<Self, MappingError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| MappingError::Io {
                path: "<stream>".to_string(),
                source: e,
            })?;
        Self::parse(&content, type_names)
    }

    pub fn parse(content: &str, type_names: &[String]) -> Result<Self, MappingError> {
        let mut name_to_old: HashMap<&str, usize> = HashMap::with_capacity(type_names.len());
        for (i, name) in type_names.iter().enumerate() {
            name_to_old.entry(name.as_str()).or_insert(i);
        }

        let mut old_to_new = vec![None; type_names.len()];
        let mut new_type_names = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            let new_index = new_type_names.len();
            for token in &tokens {
                let old = name_to_old
                    .get(token)
                    .ok_or_else(|| MappingError::UnknownTypeName {
                        name: token.to_string(),
                        line: line_num + 1,
                    })?;
                old_to_new[*old] = Some(new_index);
            }
            new_type_names.push(tokens.iter().join("_"));
        }

        Ok(Self {
            old_type_names: type_names.to_vec(),
            old_to_new,
            new_type_names,
        })
    }

    pub fn original_type_names(&self) -> &[String] {
        &self.old_type_names
    }
}

impl AtomIndexTypeMapper for FileAtomMapper {
    fn num_types(&self) -> usize {
        self.new_type_names.len()
    }

    fn get_type(&self, original: usize) -> Result<Option<usize>, MappingError> {
        self.old_to_new
            .get(original)
            .copied()
            .ok_or(MappingError::IndexOutOfRange {
                index: original,
                len: self.old_to_new.len(),
            })
    }

    fn get_type_names(&self) -> Vec<String> {
        self.new_type_names.clone()
    }
}
