//! Building an [`EntityMap`] from input descriptor lines.

use crate::constants::LIST_FIELD_SEPARATOR;
use crate::entity::{EntityGroup, EntityMap, SequenceCount};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::num::NonZeroU64;
use tracing::debug;

/// Genome names already taken.
///
/// Passed into and returned from [`build_entity_map`] so that each build
/// owns its own uniqueness state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityNameSet(HashSet<String>);

impl EntityNameSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is taken.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of names taken.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no name is taken.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take `name`; false if it was already taken.
    fn insert(&mut self, name: &str) -> bool {
        self.0.insert(name.to_string())
    }
}

impl<S: Into<String>> FromIterator<S> for EntityNameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Resolve descriptor lines into an [`EntityMap`].
///
/// Each line is `path` or `path<TAB>name<TAB>count[<TAB>name<TAB>count...]`.
/// A bare path becomes a single entity named after the file and covering all
/// of its sequences. Names in `seen` are treated as already taken; the
/// returned set holds them plus every name assigned here. On error no map is
/// produced.
pub fn build_entity_map<S: AsRef<str>>(
    lines: &[S],
    mut seen: EntityNameSet,
) -> Result<(EntityMap, EntityNameSet)> {
    let mut map = EntityMap::default();

    for (file_id, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let malformed = |reason: &str| Error::MalformedListLine {
            line_number: file_id + 1,
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = line.split(LIST_FIELD_SEPARATOR).peekable();
        let file_name = fields.next().unwrap_or_default();
        if file_name.is_empty() {
            return Err(malformed("missing file name"));
        }

        let mut groups = Vec::new();
        while let Some(entity_name) = fields.next() {
            // A single trailing tab ends the line.
            if entity_name.is_empty() && fields.peek().is_none() {
                break;
            }
            let Some(count) = fields.next() else {
                return Err(malformed(&format!(
                    "genome '{entity_name}' has no sequence count"
                )));
            };
            let count = count
                .parse::<NonZeroU64>()
                .map_err(|_| malformed(&format!("'{count}' is not a positive sequence count")))?;

            if !seen.insert(entity_name) {
                return Err(Error::DuplicateEntityName {
                    name: entity_name.to_string(),
                });
            }
            groups.push(EntityGroup {
                entity_id: map.entity_names.len(),
                count: SequenceCount::Known(count),
            });
            map.entity_names.push(entity_name.to_string());
        }

        if groups.is_empty() {
            if !seen.insert(file_name) {
                return Err(Error::DuplicateFileEntityName {
                    name: file_name.to_string(),
                });
            }
            groups.push(EntityGroup {
                entity_id: map.entity_names.len(),
                count: SequenceCount::Remaining,
            });
            map.entity_names.push(file_name.to_string());
        }

        map.file_names.push(file_name.to_string());
        map.file_groups.push(groups);
    }

    debug!(
        "Resolved {} input file(s) into {} genome(s)",
        map.file_count(),
        map.entity_count()
    );
    Ok((map, seen))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn known(n: u64) -> SequenceCount {
        SequenceCount::Known(NonZeroU64::new(n).unwrap())
    }

    #[test]
    fn test_bare_file_is_one_entity() {
        let (map, seen) = build_entity_map(&["genomeA.fa"], EntityNameSet::new()).unwrap();
        assert_eq!(map.file_count(), 1);
        assert_eq!(map.entity_count(), 1);
        assert_eq!(map.entity_name(0), Some("genomeA.fa"));
        assert_eq!(
            map.groups(0).unwrap(),
            &[EntityGroup {
                entity_id: 0,
                count: SequenceCount::Remaining
            }]
        );
        assert!(seen.contains("genomeA.fa"));
    }

    #[test]
    fn test_named_groups() {
        let (map, _) =
            build_entity_map(&["multi.fa\tg1\t3\tg2\t5"], EntityNameSet::new()).unwrap();
        assert_eq!(map.file_name(0), Some("multi.fa"));
        assert_eq!(map.entity_names(), &["g1", "g2"]);
        assert_eq!(
            map.groups(0).unwrap(),
            &[
                EntityGroup {
                    entity_id: 0,
                    count: known(3)
                },
                EntityGroup {
                    entity_id: 1,
                    count: known(5)
                }
            ]
        );
    }

    #[test]
    fn test_ids_are_dense_across_files() {
        let lines = ["a.fa", "multi.fa\tg1\t3\tg2\t5", "b.fa", "c.fa\tg3\t1"];
        let (map, seen) = build_entity_map(&lines, EntityNameSet::new()).unwrap();

        assert_eq!(map.file_count(), lines.len());
        assert_eq!(map.entity_count(), 5);
        assert_eq!(seen.len(), 5);

        let mut ids: Vec<usize> = map
            .file_groups()
            .iter()
            .flatten()
            .map(|g| g.entity_id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..5).collect::<Vec<_>>());
        assert_eq!(map.entity_names(), &["a.fa", "g1", "g2", "b.fa", "g3"]);
    }

    #[test]
    fn test_duplicate_explicit_name() {
        let lines = ["x.fa\tg1\t3", "y.fa\tg1\t2"];
        let result = build_entity_map(&lines, EntityNameSet::new());
        assert!(matches!(
            result,
            Err(Error::DuplicateEntityName { ref name }) if name == "g1"
        ));
    }

    #[test]
    fn test_duplicate_within_one_line() {
        let result = build_entity_map(&["x.fa\tg1\t3\tg1\t4"], EntityNameSet::new());
        assert!(matches!(result, Err(Error::DuplicateEntityName { .. })));
    }

    #[test]
    fn test_duplicate_bare_file_name() {
        let result = build_entity_map(&["a.fa", "a.fa"], EntityNameSet::new());
        assert!(matches!(
            result,
            Err(Error::DuplicateFileEntityName { ref name }) if name == "a.fa"
        ));
    }

    #[test]
    fn test_bare_file_colliding_with_explicit_name() {
        let result = build_entity_map(&["x.fa\tb.fa\t2", "b.fa"], EntityNameSet::new());
        assert!(matches!(result, Err(Error::DuplicateFileEntityName { .. })));
    }

    #[test]
    fn test_file_name_is_free_when_entities_are_named() {
        // The file itself only becomes an entity when it names none.
        let lines = ["x.fa\tg1\t1", "y.fa\tx.fa\t1"];
        let (map, _) = build_entity_map(&lines, EntityNameSet::new()).unwrap();
        assert_eq!(map.entity_names(), &["g1", "x.fa"]);
    }

    #[test]
    fn test_malformed_counts() {
        for line in [
            "x.fa\tg1",
            "x.fa\tg1\t0",
            "x.fa\tg1\t-2",
            "x.fa\tg1\tmany",
            "x.fa\tg1\t",
            "",
            "\tg1\t3",
        ] {
            let result = build_entity_map(&[line], EntityNameSet::new());
            assert!(
                matches!(result, Err(Error::MalformedListLine { line_number: 1, .. })),
                "{line:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_trailing_tab_is_ignored() {
        let (map, _) = build_entity_map(&["x.fa\t"], EntityNameSet::new()).unwrap();
        assert_eq!(map.file_names(), &["x.fa"]);
        assert_eq!(map.entity_names(), &["x.fa"]);
        assert_eq!(map.groups(0).unwrap()[0].count, SequenceCount::Remaining);

        let (map, _) = build_entity_map(&["x.fa\tg1\t3\t"], EntityNameSet::new()).unwrap();
        assert_eq!(map.entity_names(), &["g1"]);
        assert_eq!(map.groups(0).unwrap(), &[EntityGroup {
            entity_id: 0,
            count: known(3),
        }]);
    }

    #[test]
    fn test_seen_names_carry_over() {
        let seen: EntityNameSet = ["g1"].into_iter().collect();
        let result = build_entity_map(&["x.fa\tg1\t3"], seen);
        assert!(matches!(result, Err(Error::DuplicateEntityName { .. })));

        let (_, seen) = build_entity_map(&["a.fa"], EntityNameSet::new()).unwrap();
        let (map, seen) = build_entity_map(&["b.fa"], seen).unwrap();
        assert_eq!(map.entity_count(), 1);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_separate_builds_do_not_interfere() {
        let first = build_entity_map(&["a.fa"], EntityNameSet::new());
        let second = build_entity_map(&["a.fa"], EntityNameSet::new());
        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    #[test]
    fn test_empty_input() {
        let (map, seen) = build_entity_map::<&str>(&[], EntityNameSet::new()).unwrap();
        assert_eq!(map.file_count(), 0);
        assert!(seen.is_empty());
    }
}
