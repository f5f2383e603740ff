//! Topic namespace builder.
//!
//! Builds a large flat set of unique topic names by sampling one random
//! path through the catalog per topic. Names follow the pattern
//!
//! ```text
//! umh.v1.<enterprise>.<site><1-4>.<area>.<line>.<cell>.<tagGroup>.<tag>_<6 hex>
//! ```
//!
//! The random digit appended to the site diversifies site identifiers
//! beyond the catalog's declared sites; the trailing 3-byte hex suffix
//! guarantees uniqueness even when the same logical path is sampled
//! twice. This is a one-shot, non-concurrent build executed before
//! production starts.

use crate::sample::{pick_one, EmptyLevel};
use bench_core::{Catalog, Unit, ValueType};
use rand::Rng;

/// One entry of the generated topic namespace.
///
/// Created once in bulk at startup and read-only afterward.
#[derive(Debug, Clone)]
pub struct Topic {
    /// Full dotted topic name including the uniqueness suffix
    pub name: String,
    /// Measurement unit copied from the sampled tag
    pub unit: Unit,
    /// Value type copied from the sampled tag
    pub value_type: ValueType,
}

/// Error type for topic namespace construction.
#[derive(Debug, thiserror::Error)]
pub enum TopicBuildError {
    /// A hierarchy level was empty during traversal
    #[error(transparent)]
    EmptyLevel(#[from] EmptyLevel),
}

/// Build `count` topics by uniform random sampling of the catalog.
///
/// Sampling is with replacement: the same path may be chosen for many
/// topics, and the hex suffix keeps their names distinct. Fails if any
/// traversal level is empty (a validated [`Catalog`] never is).
pub fn build_topics<R: Rng + ?Sized>(
    catalog: &Catalog,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Topic>, TopicBuildError> {
    let mut topics = Vec::with_capacity(count);
    let mut name = String::with_capacity(128);

    for _ in 0..count {
        name.clear();
        name.push_str("umh.v1.");
        name.push_str(&catalog.enterprise);
        name.push('.');

        let site = pick_one(rng, &catalog.sites, "sites")?;
        name.push_str(&site.name);
        // Random ASCII digit 1-4 appended to the site identifier
        name.push(char::from(b'1' + rng.gen_range(0..4u8)));
        name.push('.');

        let area = pick_one(rng, &site.areas, "areas")?;
        name.push_str(&area.name);
        name.push('.');

        let line = pick_one(rng, &area.production_lines, "productionLines")?;
        name.push_str(&line.name);
        name.push('.');

        let cell = pick_one(rng, &line.work_cells, "workCells")?;
        name.push_str(&cell.name);
        name.push('.');
        name.push_str(&cell.tag_group);
        name.push('.');

        let tag = pick_one(rng, &cell.tags, "tags")?;
        name.push_str(&tag.name);

        // 3 random bytes, hex-encoded, to make the name unique
        let suffix: u32 = rng.gen_range(0..0x0100_0000);
        name.push('_');
        name.push_str(&format!("{suffix:06x}"));

        topics.push(Topic {
            name: name.clone(),
            unit: tag.unit,
            value_type: tag.value_type,
        });
    }

    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn sample_catalog() -> Catalog {
        Catalog::from_yaml(
            r#"
enterprise: pripyat
sites:
  - site: reactor
    areas:
      - area: turbine-hall
        productionLines:
          - productionLine: line-a
            workCells:
              - workCell: condenser
                tagGroup: sensors
                tags:
                  - name: pressure
                    unit: "Pa"
                    type: float
                  - name: rpm
                    unit: "rpm"
                    type: int
  - site: cooling
    areas:
      - area: pump-station
        productionLines:
          - productionLine: line-b
            workCells:
              - workCell: pump
                tagGroup: actuators
                tags:
                  - name: flow
                    unit: "m3/h"
                    type: float
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_builds_exact_count() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(42);

        for count in [1, 5, 500] {
            let topics = build_topics(&catalog, count, &mut rng).unwrap();
            assert_eq!(topics.len(), count);
            assert!(topics.iter().all(|t| !t.name.is_empty()));
        }
    }

    #[test]
    fn test_name_pattern() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let topics = build_topics(&catalog, 200, &mut rng).unwrap();

        for topic in &topics {
            let segments: Vec<&str> = topic.name.split('.').collect();
            assert_eq!(segments.len(), 9, "unexpected shape: {}", topic.name);
            assert_eq!(segments[0], "umh");
            assert_eq!(segments[1], "v1");
            assert_eq!(segments[2], "pripyat");

            // Site carries a trailing digit 1-4
            let site = segments[3];
            let digit = site.chars().last().unwrap();
            assert!(('1'..='4').contains(&digit), "bad site digit in {site}");
            assert!(site.starts_with("reactor") || site.starts_with("cooling"));

            // Tag segment ends in _<6 hex chars>
            let (_, suffix) = segments[8].rsplit_once('_').unwrap();
            assert_eq!(suffix.len(), 6);
            assert!(u32::from_str_radix(suffix, 16).is_ok());
        }
    }

    #[test]
    fn test_suffixes_are_independent() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(123);
        let topics = build_topics(&catalog, 10_000, &mut rng).unwrap();

        let suffixes: HashSet<&str> = topics
            .iter()
            .filter_map(|t| t.name.rsplit_once('_').map(|(_, s)| s))
            .collect();
        // 10k draws from a 16.7M space should collide only a handful of times
        assert!(suffixes.len() > 9_900, "only {} distinct suffixes", suffixes.len());
    }

    #[test]
    fn test_empty_level_fails() {
        let mut catalog = sample_catalog();
        catalog.sites[0].areas[0].production_lines[0].work_cells[0]
            .tags
            .clear();

        let mut rng = StdRng::seed_from_u64(42);
        // Sampling with replacement will hit the empty cell eventually
        let result = build_topics(&catalog, 1000, &mut rng);
        assert!(matches!(result, Err(TopicBuildError::EmptyLevel(_))));
    }

    #[test]
    fn test_unit_and_type_copied_from_tag() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(99);
        let topics = build_topics(&catalog, 100, &mut rng).unwrap();

        for topic in &topics {
            match topic.name.split('.').nth(8).unwrap().rsplit_once('_') {
                Some(("pressure", _)) => {
                    assert_eq!(topic.unit, Unit::Pascal);
                    assert_eq!(topic.value_type, ValueType::Float);
                }
                Some(("rpm", _)) => {
                    assert_eq!(topic.unit, Unit::RotationsPerMinute);
                    assert_eq!(topic.value_type, ValueType::Int);
                }
                Some(("flow", _)) => {
                    assert_eq!(topic.unit, Unit::CubicMetersPerHour);
                    assert_eq!(topic.value_type, ValueType::Float);
                }
                other => panic!("unexpected tag segment: {other:?}"),
            }
        }
    }
}
