//! `serde` support for the basis-set hierarchy.
//!
//! A center serializes as one flat sequence in a fixed order: name, atomic
//! number, the AO/primitive/shell counts, the center coordinates, then per
//! shell its purity (`true` = spherical), angular momentum, primitive
//! count, and that shell's (coefficient, exponent) pairs. The counts are
//! cross-checked on deserialization, so a corrupted stream fails instead of
//! producing a silently inconsistent basis set. A multi-center basis set is
//! a sequence of centers.

use crate::core::models::ao_basis::AOBasisSet;
use crate::core::models::atomic::{AtomicBasisSet, AtomicBasisSetView};
use crate::core::models::shell::Purity;
use nalgebra::Point3;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::{self, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for AtomicBasisSetView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.name().map_err(ser::Error::custom)?;
        let center = self.center().map_err(ser::Error::custom)?;
        let mut seq = serializer.serialize_seq(None)?;
        seq.serialize_element(name)?;
        seq.serialize_element(self.atomic_number().map_err(ser::Error::custom)?)?;
        seq.serialize_element(&(self.n_aos() as u64))?;
        seq.serialize_element(&(self.n_unique_primitives() as u64))?;
        seq.serialize_element(&(self.n_shells() as u64))?;
        seq.serialize_element(&center.x)?;
        seq.serialize_element(&center.y)?;
        seq.serialize_element(&center.z)?;
        for shell in self.iter() {
            let purity = shell.pure().map_err(ser::Error::custom)?;
            seq.serialize_element(&matches!(purity, Purity::Spherical))?;
            seq.serialize_element(shell.l().map_err(ser::Error::custom)?)?;
            seq.serialize_element(&(shell.n_primitives() as u64))?;
            for primitive in shell.contracted_gaussian().map_err(ser::Error::custom)?.iter() {
                seq.serialize_element(primitive.coefficient().map_err(ser::Error::custom)?)?;
                seq.serialize_element(primitive.exponent().map_err(ser::Error::custom)?)?;
            }
        }
        seq.end()
    }
}

impl Serialize for AtomicBasisSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}

fn next<'de, A, T>(seq: &mut A, what: &'static str) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    seq.next_element::<T>()?
        .ok_or_else(|| de::Error::custom(format!("basis-set stream ended before {what}")))
}

impl<'de> Deserialize<'de> for AtomicBasisSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AbsVisitor;

        impl<'de> Visitor<'de> for AbsVisitor {
            type Value = AtomicBasisSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat atomic basis-set sequence")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let name: String = next(&mut seq, "the basis-set name")?;
                let atomic_number: u32 = next(&mut seq, "the atomic number")?;
                let n_aos: u64 = next(&mut seq, "the AO count")?;
                let n_primitives: u64 = next(&mut seq, "the primitive count")?;
                let n_shells: u64 = next(&mut seq, "the shell count")?;
                let x: f64 = next(&mut seq, "the center x coordinate")?;
                let y: f64 = next(&mut seq, "the center y coordinate")?;
                let z: f64 = next(&mut seq, "the center z coordinate")?;

                let mut abs = AtomicBasisSet::new(name, atomic_number, Point3::new(x, y, z));
                for _ in 0..n_shells {
                    let spherical: bool = next(&mut seq, "a shell purity flag")?;
                    let l: u32 = next(&mut seq, "a shell angular momentum")?;
                    let count: u64 = next(&mut seq, "a shell primitive count")?;
                    let mut coefficients = Vec::with_capacity(count as usize);
                    let mut exponents = Vec::with_capacity(count as usize);
                    for _ in 0..count {
                        coefficients.push(next(&mut seq, "a primitive coefficient")?);
                        exponents.push(next(&mut seq, "a primitive exponent")?);
                    }
                    let purity = if spherical {
                        Purity::Spherical
                    } else {
                        Purity::Cartesian
                    };
                    abs.add_shell(purity, l, &coefficients, &exponents)
                        .map_err(de::Error::custom)?;
                }

                if abs.n_aos() as u64 != n_aos {
                    return Err(de::Error::custom(format!(
                        "AO count mismatch: header says {n_aos}, shells give {}",
                        abs.n_aos()
                    )));
                }
                if abs.n_unique_primitives() as u64 != n_primitives {
                    return Err(de::Error::custom(format!(
                        "primitive count mismatch: header says {n_primitives}, shells give {}",
                        abs.n_unique_primitives()
                    )));
                }
                Ok(abs)
            }
        }

        deserializer.deserialize_seq(AbsVisitor)
    }
}

impl Serialize for AOBasisSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for center in self.iter() {
            seq.serialize_element(&center)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for AOBasisSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BasisVisitor;

        impl<'de> Visitor<'de> for BasisVisitor {
            type Value = AOBasisSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of atomic basis-set sequences")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut basis = AOBasisSet::new();
                while let Some(center) = seq.next_element::<AtomicBasisSet>()? {
                    basis
                        .add_atomic_basis_set(&center)
                        .map_err(de::Error::custom)?;
                }
                Ok(basis)
            }
        }

        deserializer.deserialize_seq(BasisVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom, Write};

    fn oxygen_like() -> AtomicBasisSet {
        let mut abs = AtomicBasisSet::new("test-set", 8, Point3::new(0.1, -0.2, 0.3));
        abs.add_shell(Purity::Spherical, 0, &[0.2, 0.8], &[10.0, 1.5])
            .unwrap();
        abs.add_shell(Purity::Cartesian, 2, &[1.0], &[0.5]).unwrap();
        abs
    }

    fn small_basis() -> AOBasisSet {
        let mut h = AtomicBasisSet::new("test-set", 1, Point3::new(1.0, 0.0, 0.0));
        h.add_shell(Purity::Spherical, 0, &[1.0], &[0.7]).unwrap();
        let mut bs = AOBasisSet::new();
        bs.add_atomic_basis_set(&oxygen_like()).unwrap();
        bs.add_atomic_basis_set(&h).unwrap();
        bs
    }

    #[test]
    fn center_round_trips_through_json() {
        let original = oxygen_like();
        let json = serde_json::to_string(&original).unwrap();
        let restored: AtomicBasisSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn the_stream_order_is_fixed() {
        let json = serde_json::to_string(&oxygen_like()).unwrap();
        // name, Z, n_aos (1 + 6), n_primitives, n_shells, x, y, z, then the
        // first shell's header and pairs.
        assert!(json.starts_with(
            r#"["test-set",8,7,3,2,0.1,-0.2,0.3,true,0,2,0.2,10.0,0.8,1.5,false,2,1,"#
        ));
    }

    #[test]
    fn full_basis_set_round_trips_through_json() {
        let original = small_basis();
        let json = serde_json::to_string(&original).unwrap();
        let restored: AOBasisSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn round_trips_through_a_file() {
        let original = small_basis();
        let mut file = tempfile::tempfile().unwrap();
        serde_json::to_writer(&mut file, &original).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        let restored: AOBasisSet = serde_json::from_reader(&mut file).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn corrupted_counts_are_rejected() {
        let mut json = serde_json::to_string(&oxygen_like()).unwrap();
        // Bump the AO count in the header.
        json = json.replacen(",8,7,", ",8,8,", 1);
        let err = serde_json::from_str::<AtomicBasisSet>(&json).unwrap_err();
        assert!(err.to_string().contains("AO count mismatch"));
    }

    #[test]
    fn truncated_streams_are_rejected() {
        let err = serde_json::from_str::<AtomicBasisSet>(r#"["test-set",8]"#).unwrap_err();
        assert!(err.to_string().contains("ended before"));
    }

    #[test]
    fn empty_center_round_trips() {
        let empty = AtomicBasisSet::new("none", 0, Point3::origin());
        let json = serde_json::to_string(&empty).unwrap();
        let restored: AtomicBasisSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, empty);
    }

    #[test]
    fn empty_basis_set_round_trips() {
        let json = serde_json::to_string(&AOBasisSet::new()).unwrap();
        assert_eq!(json, "[]");
        let restored: AOBasisSet = serde_json::from_str(&json).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn writer_and_reader_agree_through_a_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basis.json");
        let original = small_basis();
        {
            let mut f = std::fs::File::create(&path).unwrap();
            let json = serde_json::to_string(&original).unwrap();
            f.write_all(json.as_bytes()).unwrap();
        }
        let mut contents = String::new();
        std::fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        let restored: AOBasisSet = serde_json::from_str(&contents).unwrap();
        assert_eq!(restored, original);
    }
}
