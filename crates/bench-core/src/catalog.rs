//! Topology catalog describing the simulated plant hierarchy.
//!
//! The catalog is a static tree of enterprise → sites → areas →
//! production lines → work cells → tags, loaded once from a YAML
//! definition. Every list in the hierarchy must be non-empty; an empty
//! level is a fatal configuration error reported at load time, never
//! during generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A hierarchy level contains no entries
    #[error("Empty {level} list under '{path}'")]
    EmptyLevel {
        /// Name of the empty hierarchy level (e.g. `areas`)
        level: &'static str,
        /// Dotted path of the parent node
        path: String,
    },

    /// A boolean tag declares a unit other than `none`
    #[error("Boolean tag '{path}' requires unit none, got {unit}")]
    BooleanUnit {
        /// Dotted path of the offending tag
        path: String,
        /// The incompatible unit
        unit: Unit,
    },
}

/// Measurement unit attached to a tag.
///
/// The serde spelling follows the catalog file format (`""`, `"°C"`,
/// `"m3/h"`, ...). Unknown unit strings are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Dimensionless value; the only unit that permits booleans
    #[serde(rename = "")]
    None,
    /// Temperature in degrees Celsius
    #[serde(rename = "°C")]
    DegreeC,
    /// Percentage
    #[serde(rename = "%")]
    Percent,
    /// Pressure in pascal
    #[serde(rename = "Pa")]
    Pascal,
    /// Volumetric flow in cubic meters per hour
    #[serde(rename = "m3/h")]
    CubicMetersPerHour,
    /// Voltage
    #[serde(rename = "V")]
    Volt,
    /// Current in ampere
    #[serde(rename = "A")]
    Ampere,
    /// Dose rate in sievert per hour
    #[serde(rename = "Sv/h")]
    SievertPerHour,
    /// Rotational speed
    #[serde(rename = "rpm")]
    RotationsPerMinute,
    /// Power in watt
    #[serde(rename = "W")]
    Watt,
    /// Linear speed in meters per second
    #[serde(rename = "m/s")]
    Speed,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::None => "none",
            Unit::DegreeC => "°C",
            Unit::Percent => "%",
            Unit::Pascal => "Pa",
            Unit::CubicMetersPerHour => "m3/h",
            Unit::Volt => "V",
            Unit::Ampere => "A",
            Unit::SievertPerHour => "Sv/h",
            Unit::RotationsPerMinute => "rpm",
            Unit::Watt => "W",
            Unit::Speed => "m/s",
        })
    }
}

/// Value type carried by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Boolean measurement (only valid for [`Unit::None`])
    Boolean,
    /// Floating point measurement
    Float,
    /// Integer measurement
    Int,
}

/// A single measurement point within a work cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name (last path segment of the topic)
    pub name: String,
    /// Measurement unit
    pub unit: Unit,
    /// Value type
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

/// A work cell groups tags under a shared tag-group label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkCell {
    /// Work cell name
    #[serde(rename = "workCell")]
    pub name: String,
    /// Tag-group label inserted between the work cell and tag segments
    #[serde(rename = "tagGroup")]
    pub tag_group: String,
    /// Tags available in this work cell
    pub tags: Vec<Tag>,
}

/// A production line within an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionLine {
    /// Production line name
    #[serde(rename = "productionLine")]
    pub name: String,
    /// Work cells on this line
    #[serde(rename = "workCells")]
    pub work_cells: Vec<WorkCell>,
}

/// An area within a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    /// Area name
    #[serde(rename = "area")]
    pub name: String,
    /// Production lines in this area
    #[serde(rename = "productionLines")]
    pub production_lines: Vec<ProductionLine>,
}

/// A site within the enterprise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Site name (a random digit is appended during topic building)
    #[serde(rename = "site")]
    pub name: String,
    /// Areas at this site
    pub areas: Vec<Area>,
}

/// The full topology catalog.
///
/// Immutable after load; construction fails if any hierarchy level is
/// empty, so a successfully loaded catalog is always traversable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Enterprise name (third segment of every topic)
    pub enterprise: String,
    /// Sites belonging to the enterprise
    pub sites: Vec<Site>,
}

impl Catalog {
    /// Parse and validate a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Verify that every hierarchy level has at least one entry and
    /// every boolean tag carries unit `none`.
    ///
    /// A catalog that passes validation can be sampled at any level
    /// without hitting an empty list, and payload generation cannot
    /// fail on a unit/type mismatch.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sites.is_empty() {
            return Err(CatalogError::EmptyLevel {
                level: "sites",
                path: self.enterprise.clone(),
            });
        }
        for site in &self.sites {
            let site_path = format!("{}.{}", self.enterprise, site.name);
            if site.areas.is_empty() {
                return Err(CatalogError::EmptyLevel {
                    level: "areas",
                    path: site_path,
                });
            }
            for area in &site.areas {
                let area_path = format!("{site_path}.{}", area.name);
                if area.production_lines.is_empty() {
                    return Err(CatalogError::EmptyLevel {
                        level: "productionLines",
                        path: area_path,
                    });
                }
                for line in &area.production_lines {
                    let line_path = format!("{area_path}.{}", line.name);
                    if line.work_cells.is_empty() {
                        return Err(CatalogError::EmptyLevel {
                            level: "workCells",
                            path: line_path,
                        });
                    }
                    for cell in &line.work_cells {
                        let cell_path = format!("{line_path}.{}", cell.name);
                        if cell.tags.is_empty() {
                            return Err(CatalogError::EmptyLevel {
                                level: "tags",
                                path: cell_path,
                            });
                        }
                        for tag in &cell.tags {
                            if tag.value_type == ValueType::Boolean && tag.unit != Unit::None {
                                return Err(CatalogError::BooleanUnit {
                                    path: format!("{cell_path}.{}", tag.name),
                                    unit: tag.unit,
                                });
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
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
                  - name: inlet-temperature
                    unit: "°C"
                    type: float
                  - name: valve-open
                    unit: ""
                    type: boolean
                  - name: flow
                    unit: "m3/h"
                    type: int
"#;

    #[test]
    fn test_parse_sample_catalog() {
        let catalog = Catalog::from_yaml(SAMPLE).unwrap();
        assert_eq!(catalog.enterprise, "pripyat");
        assert_eq!(catalog.sites.len(), 1);

        let cell = &catalog.sites[0].areas[0].production_lines[0].work_cells[0];
        assert_eq!(cell.tag_group, "sensors");
        assert_eq!(cell.tags[0].unit, Unit::DegreeC);
        assert_eq!(cell.tags[0].value_type, ValueType::Float);
        assert_eq!(cell.tags[1].unit, Unit::None);
        assert_eq!(cell.tags[1].value_type, ValueType::Boolean);
        assert_eq!(cell.tags[2].unit, Unit::CubicMetersPerHour);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let yaml = SAMPLE.replace("m3/h", "furlongs");
        let err = Catalog::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Yaml(_)));
    }

    #[test]
    fn test_unknown_value_type_rejected() {
        let yaml = SAMPLE.replace("type: int", "type: decimal");
        assert!(Catalog::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_empty_tags_rejected() {
        let yaml = r#"
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
                tags: []
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        match err {
            CatalogError::EmptyLevel { level, path } => {
                assert_eq!(level, "tags");
                assert_eq!(path, "pripyat.reactor.turbine-hall.line-a.condenser");
            }
            other => panic!("expected EmptyLevel, got {other:?}"),
        }
    }

    #[test]
    fn test_boolean_with_unit_rejected() {
        let yaml = SAMPLE.replace("type: float", "type: boolean");
        let err = Catalog::from_yaml(&yaml).unwrap_err();
        match err {
            CatalogError::BooleanUnit { path, unit } => {
                assert_eq!(
                    path,
                    "pripyat.reactor.turbine-hall.line-a.condenser.inlet-temperature"
                );
                assert_eq!(unit, Unit::DegreeC);
            }
            other => panic!("expected BooleanUnit, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sites_rejected() {
        let yaml = "enterprise: pripyat\nsites: []\n";
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptyLevel { level: "sites", .. }
        ));
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::None.to_string(), "none");
        assert_eq!(Unit::DegreeC.to_string(), "°C");
        assert_eq!(Unit::SievertPerHour.to_string(), "Sv/h");
    }
}
