//! Element symbol lookup tables.
//!
//! Covers H through Xe, which is the range common Gaussian basis sets are
//! parameterized for. Atomic number `0` (dummy centers) is deliberately
//! absent from both tables.

use phf::phf_map;

static SYMBOLS: phf::Map<u32, &'static str> = phf_map! {
    1u32 => "H", 2u32 => "He", 3u32 => "Li", 4u32 => "Be", 5u32 => "B",
    6u32 => "C", 7u32 => "N", 8u32 => "O", 9u32 => "F", 10u32 => "Ne",
    11u32 => "Na", 12u32 => "Mg", 13u32 => "Al", 14u32 => "Si", 15u32 => "P",
    16u32 => "S", 17u32 => "Cl", 18u32 => "Ar", 19u32 => "K", 20u32 => "Ca",
    21u32 => "Sc", 22u32 => "Ti", 23u32 => "V", 24u32 => "Cr", 25u32 => "Mn",
    26u32 => "Fe", 27u32 => "Co", 28u32 => "Ni", 29u32 => "Cu", 30u32 => "Zn",
    31u32 => "Ga", 32u32 => "Ge", 33u32 => "As", 34u32 => "Se", 35u32 => "Br",
    36u32 => "Kr", 37u32 => "Rb", 38u32 => "Sr", 39u32 => "Y", 40u32 => "Zr",
    41u32 => "Nb", 42u32 => "Mo", 43u32 => "Tc", 44u32 => "Ru", 45u32 => "Rh",
    46u32 => "Pd", 47u32 => "Ag", 48u32 => "Cd", 49u32 => "In", 50u32 => "Sn",
    51u32 => "Sb", 52u32 => "Te", 53u32 => "I", 54u32 => "Xe",
};

static NUMBERS: phf::Map<&'static str, u32> = phf_map! {
    "H" => 1u32, "He" => 2u32, "Li" => 3u32, "Be" => 4u32, "B" => 5u32,
    "C" => 6u32, "N" => 7u32, "O" => 8u32, "F" => 9u32, "Ne" => 10u32,
    "Na" => 11u32, "Mg" => 12u32, "Al" => 13u32, "Si" => 14u32, "P" => 15u32,
    "S" => 16u32, "Cl" => 17u32, "Ar" => 18u32, "K" => 19u32, "Ca" => 20u32,
    "Sc" => 21u32, "Ti" => 22u32, "V" => 23u32, "Cr" => 24u32, "Mn" => 25u32,
    "Fe" => 26u32, "Co" => 27u32, "Ni" => 28u32, "Cu" => 29u32, "Zn" => 30u32,
    "Ga" => 31u32, "Ge" => 32u32, "As" => 33u32, "Se" => 34u32, "Br" => 35u32,
    "Kr" => 36u32, "Rb" => 37u32, "Sr" => 38u32, "Y" => 39u32, "Zr" => 40u32,
    "Nb" => 41u32, "Mo" => 42u32, "Tc" => 43u32, "Ru" => 44u32, "Rh" => 45u32,
    "Pd" => 46u32, "Ag" => 47u32, "Cd" => 48u32, "In" => 49u32, "Sn" => 50u32,
    "Sb" => 51u32, "Te" => 52u32, "I" => 53u32, "Xe" => 54u32,
};

/// Returns the element symbol for an atomic number, if known.
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    SYMBOLS.get(&atomic_number).copied()
}

/// Returns the atomic number for an element symbol (case-sensitive), if
/// known.
pub fn atomic_number(symbol: &str) -> Option<u32> {
    NUMBERS.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_mutually_inverse() {
        for z in 1..=54u32 {
            let symbol = element_symbol(z).unwrap();
            assert_eq!(atomic_number(symbol), Some(z));
        }
    }

    #[test]
    fn dummy_and_out_of_range_numbers_have_no_symbol() {
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(55), None);
        assert_eq!(atomic_number("Xx"), None);
    }
}
