//! Loading basis-set parameters from Basis Set Exchange JSON tables.
//!
//! The BSE interchange format keys elements by atomic number (as a string)
//! and stores every numeric parameter as a string to avoid precision loss
//! in transit. A table entry may also combine several angular momenta in
//! one record (sp shells and generalized contractions, one coefficient
//! column each); these are split into separate shells on ingestion.

use crate::core::error::BasisSetError;
use crate::core::models::atomic::AtomicBasisSet;
use crate::core::models::shell::Purity;
use crate::core::utils::elements;
use nalgebra::Point3;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a Basis Set Exchange table.
#[derive(Debug, Error)]
pub enum BseError {
    #[error("failed to parse basis-set JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("element with atomic number {0} is not in the table")]
    MissingElement(u32),

    #[error("malformed basis-set table: {0}")]
    Malformed(String),

    #[error(transparent)]
    Basis(#[from] BasisSetError),
}

/// A parsed Basis Set Exchange table.
#[derive(Debug, Clone, Deserialize)]
pub struct BseTable {
    #[serde(default)]
    pub name: Option<String>,
    pub elements: HashMap<String, BseElement>,
}

/// One element's entry in a table.
#[derive(Debug, Clone, Deserialize)]
pub struct BseElement {
    #[serde(default)]
    pub electron_shells: Vec<BseElectronShell>,
}

/// One electron-shell record, possibly covering several angular momenta.
#[derive(Debug, Clone, Deserialize)]
pub struct BseElectronShell {
    #[serde(default)]
    pub function_type: Option<String>,
    pub angular_momentum: Vec<u32>,
    pub exponents: Vec<String>,
    pub coefficients: Vec<Vec<String>>,
}

/// Parses a Basis Set Exchange JSON document.
///
/// # Errors
///
/// Returns [`BseError::Json`] if the document does not match the
/// interchange schema.
pub fn parse_table(json: &str) -> Result<BseTable, BseError> {
    Ok(serde_json::from_str(json)?)
}

impl BseTable {
    /// Builds one center's basis set from this table.
    ///
    /// # Arguments
    ///
    /// * `set_name` - The name recorded on the resulting basis set.
    /// * `atomic_number` - The element to look up.
    /// * `center` - Where the shells are placed.
    ///
    /// # Errors
    ///
    /// Returns [`BseError::MissingElement`] if the table has no entry for
    /// the element and [`BseError::Malformed`] for inconsistent records or
    /// unparseable numbers.
    pub fn atomic_basis_set(
        &self,
        set_name: &str,
        atomic_number: u32,
        center: Point3<f64>,
    ) -> Result<AtomicBasisSet, BseError> {
        let element = self
            .element(atomic_number)
            .ok_or(BseError::MissingElement(atomic_number))?;

        let mut abs = AtomicBasisSet::new(set_name, atomic_number, center);
        for record in &element.electron_shells {
            let purity = purity_for(record);
            let exponents = parse_numbers(&record.exponents)?;
            for (column, raw_coefficients) in record.coefficients.iter().enumerate() {
                let l = record_l(record, column)?;
                let coefficients = parse_numbers(raw_coefficients)?;
                if coefficients.len() != exponents.len() {
                    return Err(BseError::Malformed(format!(
                        "coefficient column {column} has {} entries for {} exponents",
                        coefficients.len(),
                        exponents.len()
                    )));
                }
                abs.add_shell(purity, l, &coefficients, &exponents)?;
            }
        }
        debug!(
            atomic_number,
            n_shells = abs.n_shells(),
            set_name,
            "loaded element from basis-set table"
        );
        Ok(abs)
    }

    fn element(&self, atomic_number: u32) -> Option<&BseElement> {
        if let Some(e) = self.elements.get(&atomic_number.to_string()) {
            return Some(e);
        }
        // Some tables key by symbol instead of number.
        self.elements
            .iter()
            .find(|(key, _)| elements::atomic_number(key) == Some(atomic_number))
            .map(|(_, e)| e)
    }
}

/// Angular momentum of one coefficient column of a record.
///
/// A record either lists one `l` per column (sp shells) or a single `l`
/// shared by all columns (generalized contractions).
fn record_l(record: &BseElectronShell, column: usize) -> Result<u32, BseError> {
    match record.angular_momentum.as_slice() {
        [l] => Ok(*l),
        ls if ls.len() == record.coefficients.len() => Ok(ls[column]),
        ls => Err(BseError::Malformed(format!(
            "{} angular momenta for {} coefficient columns",
            ls.len(),
            record.coefficients.len()
        ))),
    }
}

fn purity_for(record: &BseElectronShell) -> Purity {
    match &record.function_type {
        Some(t) if t.to_lowercase().contains("cartesian") => Purity::Cartesian,
        _ => Purity::Spherical,
    }
}

fn parse_numbers(raw: &[String]) -> Result<Vec<f64>, BseError> {
    raw.iter()
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|_| BseError::Malformed(format!("not a number: {s:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const STO3G_FRAGMENT: &str = r#"{
        "name": "STO-3G",
        "elements": {
            "1": {
                "electron_shells": [
                    {
                        "function_type": "gto",
                        "angular_momentum": [0],
                        "exponents": ["0.3386500000E+02", "0.5094790000E+01", "0.1158790000E+01"],
                        "coefficients": [["0.1543289673E+00", "0.5353281423E+00", "0.4446345422E+00"]]
                    }
                ]
            },
            "6": {
                "electron_shells": [
                    {
                        "function_type": "gto",
                        "angular_momentum": [0],
                        "exponents": ["71.6168370", "13.0450960", "3.5305122"],
                        "coefficients": [["0.15432897", "0.53532814", "0.44463454"]]
                    },
                    {
                        "function_type": "gto",
                        "angular_momentum": [0, 1],
                        "exponents": ["2.9412494", "0.6834831", "0.2222899"],
                        "coefficients": [
                            ["-0.09996723", "0.39951283", "0.70011547"],
                            ["0.15591627", "0.60768372", "0.39195739"]
                        ]
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn loads_a_single_shell_element() {
        let table = parse_table(STO3G_FRAGMENT).unwrap();
        assert_eq!(table.name.as_deref(), Some("STO-3G"));
        let h = table
            .atomic_basis_set("STO-3G", 1, Point3::origin())
            .unwrap();
        assert_eq!(h.n_shells(), 1);
        assert_eq!(h.n_aos(), 1);
        let shell = h.shell(0).unwrap();
        assert_eq!(*shell.l().unwrap(), 0);
        assert_eq!(*shell.pure().unwrap(), Purity::Spherical);
        assert_relative_eq!(*h.primitive(0).unwrap().exponent().unwrap(), 33.865);
        assert_relative_eq!(
            *h.primitive(0).unwrap().coefficient().unwrap(),
            0.154_328_967_3
        );
    }

    #[test]
    fn splits_sp_records_into_separate_shells() {
        let table = parse_table(STO3G_FRAGMENT).unwrap();
        let c = table
            .atomic_basis_set("STO-3G", 6, Point3::origin())
            .unwrap();
        // 1s shell plus the sp record split into one s and one p shell.
        assert_eq!(c.n_shells(), 3);
        assert_eq!(*c.shell(1).unwrap().l().unwrap(), 0);
        assert_eq!(*c.shell(2).unwrap().l().unwrap(), 1);
        // Both split shells reuse the record's exponents.
        assert_relative_eq!(*c.primitive(3).unwrap().exponent().unwrap(), 2.941_249_4);
        assert_relative_eq!(*c.primitive(6).unwrap().exponent().unwrap(), 2.941_249_4);
        assert_eq!(c.n_aos(), 1 + 1 + 3);
    }

    #[test]
    fn unknown_elements_are_reported() {
        let table = parse_table(STO3G_FRAGMENT).unwrap();
        let err = table
            .atomic_basis_set("STO-3G", 79, Point3::origin())
            .unwrap_err();
        assert!(matches!(err, BseError::MissingElement(79)));
    }

    #[test]
    fn symbol_keyed_tables_are_accepted() {
        let json = r#"{
            "elements": {
                "He": {
                    "electron_shells": [{
                        "angular_momentum": [0],
                        "exponents": ["1.0"],
                        "coefficients": [["1.0"]]
                    }]
                }
            }
        }"#;
        let table = parse_table(json).unwrap();
        let he = table
            .atomic_basis_set("mini", 2, Point3::origin())
            .unwrap();
        assert_eq!(he.n_shells(), 1);
    }

    #[test]
    fn cartesian_function_types_set_the_purity() {
        let json = r#"{
            "elements": {
                "1": {
                    "electron_shells": [{
                        "function_type": "gto_cartesian",
                        "angular_momentum": [2],
                        "exponents": ["0.8"],
                        "coefficients": [["1.0"]]
                    }]
                }
            }
        }"#;
        let table = parse_table(json).unwrap();
        let h = table.atomic_basis_set("d", 1, Point3::origin()).unwrap();
        assert_eq!(*h.shell(0).unwrap().pure().unwrap(), Purity::Cartesian);
        assert_eq!(h.n_aos(), 6);
    }

    #[test]
    fn malformed_numbers_and_shapes_are_rejected() {
        let bad_number = r#"{
            "elements": {
                "1": {
                    "electron_shells": [{
                        "angular_momentum": [0],
                        "exponents": ["abc"],
                        "coefficients": [["1.0"]]
                    }]
                }
            }
        }"#;
        let table = parse_table(bad_number).unwrap();
        assert!(matches!(
            table.atomic_basis_set("x", 1, Point3::origin()),
            Err(BseError::Malformed(_))
        ));

        let bad_shape = r#"{
            "elements": {
                "1": {
                    "electron_shells": [{
                        "angular_momentum": [0, 1, 2],
                        "exponents": ["1.0"],
                        "coefficients": [["1.0"]]
                    }]
                }
            }
        }"#;
        let table = parse_table(bad_shape).unwrap();
        assert!(matches!(
            table.atomic_basis_set("x", 1, Point3::origin()),
            Err(BseError::Malformed(_))
        ));
    }
}
