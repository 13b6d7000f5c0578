use super::AtomIndexTypeMapper;
use super::error::MappingError;
use itertools::Itertools;
use std::collections::HashMap;

const CATCH_ALL_NAME: &str = "Other";

/// Maps atom types onto an explicit subset, or onto groups of types.
///
/// New category `i` receives the original ids listed at position `i`. When the
/// catch-all is enabled one extra category is appended and every other
/// original id maps to it; otherwise other ids map to no category.
///
/// Groups need not be disjoint. An id listed in several groups takes the
/// index of the last group that lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetAtomMapper {
    old_to_new: HashMap<usize, usize>,
    groups: Vec<Vec<usize>>,
    default_type: Option<usize>,
    new_type_names: Vec<String>,
}

impl SubsetAtomMapper {
    /// One new category per listed original id.
    pub fn new(subset: &[usize], include_catchall: bool) -> Self {
        let groups = subset.iter().map(|&id| vec![id]).collect();
        Self::from_groups(groups, include_catchall)
    }

    /// Surjective mapping: every id in group `i` maps to new category `i`.
    pub fn grouped(groups: &[Vec<usize>], include_catchall: bool) -> Self {
        Self::from_groups(groups.to_vec(), include_catchall)
    }

    fn from_groups(groups: Vec<Vec<usize>>, include_catchall: bool) -> Self {
        let mut old_to_new = HashMap::new();
        for (new_index, group) in groups.iter().enumerate() {
            for &old in group {
                old_to_new.insert(old, new_index);
            }
        }

        let mut new_type_names: Vec<String> =
            groups.iter().map(|group| group.iter().join("_")).collect();
        let default_type = if include_catchall {
            new_type_names.push(CATCH_ALL_NAME.to_string());
            Some(groups.len())
        } else {
            None
        };

        Self {
            old_to_new,
            groups,
            default_type,
            new_type_names,
        }
    }

    /// Relabels the new categories with the original type names they absorb.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::IndexOutOfRange`] if any listed id has no
    /// entry in `original_names`.
    pub fn with_type_names(mut self, original_names: &[String]) -> Result<Self, MappingError> {
        let mut relabeled = Vec::with_capacity(self.new_type_names.len());
        for group in &self.groups {
            let names: Vec<&str> = group
                .iter()
                .map(|&id| {
                    original_names
                        .get(id)
                        .map(String::as_str)
                        .ok_or(MappingError::IndexOutOfRange {
                            index: id,
                            len: original_names.len(),
                        })
                })
                .collect::<Result<_, _>>()?;
            relabeled.push(names.join("_"));
        }
        if self.default_type.is_some() {
            relabeled.push(CATCH_ALL_NAME.to_string());
        }
        self.new_type_names = relabeled;
        Ok(self)
    }

    pub fn has_catchall(&self) -> bool {
        self.default_type.is_some()
    }
}

impl AtomIndexTypeMapper for SubsetAtomMapper {
    fn num_types(&self) -> usize {
        self.new_type_names.len()
    }

    fn get_type(&self, original: usize) -> Result<Option<usize>, MappingError> {
        Ok(self
            .old_to_new
            .get(&original)
            .copied()
            .or(self.default_type))
    }

    fn get_type_names(&self) -> Vec<String> {
        self.new_type_names.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_ordered_subset_is_the_identity() {
        let all: Vec<usize> = (0..28).collect();
        let mapper = SubsetAtomMapper::new(&all, false);

        assert_eq!(mapper.num_types(), 28);
        for i in 0..28 {
            assert_eq!(mapper.get_type(i).unwrap(), Some(i));
        }
    }

    #[test]
    fn catchall_collects_every_unlisted_id() {
        let mapper = SubsetAtomMapper::new(&[2, 5], true);

        assert_eq!(mapper.num_types(), 3);
        assert!(mapper.has_catchall());
        assert_eq!(mapper.get_type(2).unwrap(), Some(0));
        assert_eq!(mapper.get_type(5).unwrap(), Some(1));
        for i in (0..10).filter(|i| ![2, 5].contains(i)) {
            assert_eq!(mapper.get_type(i).unwrap(), Some(2), "id {}", i);
        }
    }

    #[test]
    fn without_catchall_unlisted_ids_are_unmapped() {
        let mapper = SubsetAtomMapper::new(&[2, 5], false);

        assert_eq!(mapper.num_types(), 2);
        assert_eq!(mapper.get_type(5).unwrap(), Some(1));
        assert_eq!(mapper.get_type(0).unwrap(), None);
        assert_eq!(mapper.get_type(100).unwrap(), None);
    }

    #[test]
    fn subset_may_reorder_ids() {
        let mapper = SubsetAtomMapper::new(&[3, 1, 2], false);
        assert_eq!(mapper.get_type(3).unwrap(), Some(0));
        assert_eq!(mapper.get_type(1).unwrap(), Some(1));
        assert_eq!(mapper.get_type(2).unwrap(), Some(2));
    }

    #[test]
    fn groups_map_many_to_one() {
        let mapper = SubsetAtomMapper::grouped(&[vec![0, 1], vec![2, 3, 4, 5]], false);

        assert_eq!(mapper.num_types(), 2);
        assert_eq!(mapper.get_type(0).unwrap(), Some(0));
        assert_eq!(mapper.get_type(1).unwrap(), Some(0));
        assert_eq!(mapper.get_type(4).unwrap(), Some(1));
        assert_eq!(mapper.get_type(6).unwrap(), None);
        assert_eq!(mapper.get_type_names(), vec!["0_1", "2_3_4_5"]);
    }

    #[test]
    fn grouped_catchall_is_appended_after_groups() {
        let mapper = SubsetAtomMapper::grouped(&[vec![0, 1], vec![7]], true);
        assert_eq!(mapper.num_types(), 3);
        assert_eq!(mapper.get_type(9).unwrap(), Some(2));
        assert_eq!(mapper.get_type_names().last().unwrap(), "Other");
    }

    #[test]
    fn overlapping_groups_resolve_to_the_last_group() {
        let mapper = SubsetAtomMapper::grouped(&[vec![0, 1], vec![1, 2]], false);
        assert_eq!(mapper.get_type(0).unwrap(), Some(0));
        assert_eq!(mapper.get_type(1).unwrap(), Some(1));
        assert_eq!(mapper.get_type(2).unwrap(), Some(1));
    }

    #[test]
    fn with_type_names_relabels_categories() {
        let original: Vec<String> = ["Hydrogen", "PolarHydrogen", "Carbon"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mapper = SubsetAtomMapper::grouped(&[vec![0, 1], vec![2]], true)
            .with_type_names(&original)
            .unwrap();

        assert_eq!(
            mapper.get_type_names(),
            vec!["Hydrogen_PolarHydrogen", "Carbon", "Other"]
        );
    }

    #[test]
    fn with_type_names_rejects_ids_without_names() {
        let original = vec!["Hydrogen".to_string()];
        let result = SubsetAtomMapper::new(&[0, 3], false).with_type_names(&original);
        assert!(matches!(
            result,
            Err(MappingError::IndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn empty_subset_with_catchall_maps_everything_to_zero() {
        let mapper = SubsetAtomMapper::new(&[], true);
        assert_eq!(mapper.num_types(), 1);
        assert_eq!(mapper.get_type(11).unwrap(), Some(0));
    }
}
