use std::{collections::HashMap, fmt::Display};

use super::AutomatonError;

// -------------------------------------------------------------------------------------------------

/// Number of distinct 3 cell neighborhoods in an elementary cellular automaton.
pub const NEIGHBORHOODS: usize = 8;

/// Lookup table of an elementary cellular automaton: the next cell value for each of the 8
/// possible `left, center, right` neighborhoods.
///
/// Neighborhoods are indexed as 3 bit numbers `left << 2 | center << 1 | right`, so the table's
/// bits match the bits of the neighborhood's Wolfram rule number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable([u8; NEIGHBORHOODS]);

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_number(110)
    }
}

impl RuleTable {
    /// Create a table from a Wolfram rule number.
    pub fn from_number(rule: u8) -> Self {
        let mut table = [0; NEIGHBORHOODS];
        for (index, value) in table.iter_mut().enumerate() {
            *value = (rule >> index) & 1;
        }
        Self(table)
    }

    /// The Wolfram rule number of this table.
    pub fn number(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0, |rule, (index, value)| rule | (*value << index))
    }

    /// Next cell value for the given neighborhood.
    pub fn lookup(&self, left: u8, center: u8, right: u8) -> u8 {
        self.0[neighborhood_index(left, center, right)]
    }

    /// Next cell value for the given neighborhood string, e.g. `"110"`.
    pub fn get(&self, neighborhood: &str) -> Option<u8> {
        parse_neighborhood(neighborhood)
            .ok()
            .map(|index| self.0[index])
    }

    /// Table values ordered from neighborhood `"111"` down to `"000"`, which is the order of the
    /// binary digits of the rule number.
    pub fn bits(&self) -> [u8; NEIGHBORHOODS] {
        let mut bits = self.0;
        bits.reverse();
        bits
    }

    /// Neighborhood strings and their values, ordered from `"111"` down to `"000"`.
    pub fn entries(&self) -> Vec<(String, u8)> {
        (0..NEIGHBORHOODS)
            .rev()
            .map(|index| (format!("{:03b}", index), self.0[index]))
            .collect()
    }

    /// Apply the given rule to a copy of this table and return it. Invalid shapes only update
    /// the neighborhoods they cover; invalid values leave the table untouched.
    pub(crate) fn applied(&self, rule: RuleInput) -> Result<Self, AutomatonError> {
        let mut table = *self;
        match rule {
            RuleInput::Number(number) => {
                let number = u8::try_from(number)
                    .map_err(|_| AutomatonError::InvalidRule(number.to_string()))?;
                table = Self::from_number(number);
            }
            RuleInput::Text(text) => {
                let number = text
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| AutomatonError::InvalidRule(text.clone()))?;
                table = Self::from_number(number);
            }
            RuleInput::Bits(bits) => {
                if bits.len() != NEIGHBORHOODS {
                    log::warn!(
                        "Automaton rule should contain {} bits, but got {}: \
                        only applying the first {} bits",
                        NEIGHBORHOODS,
                        bits.len(),
                        bits.len().min(NEIGHBORHOODS)
                    );
                }
                for (index, bit) in bits.iter().take(NEIGHBORHOODS).enumerate() {
                    table.0[NEIGHBORHOODS - 1 - index] = validated_bit(*bit)?;
                }
            }
            RuleInput::Mapping(mapping) => {
                if mapping.len() != NEIGHBORHOODS {
                    log::warn!(
                        "Automaton rule should map {} neighborhoods, but got {}: \
                        keeping all other neighborhoods",
                        NEIGHBORHOODS,
                        mapping.len()
                    );
                }
                for (neighborhood, bit) in mapping {
                    table.0[parse_neighborhood(&neighborhood)?] = validated_bit(bit)?;
                }
            }
            RuleInput::Table(rule_table) => {
                table = rule_table;
            }
        }
        Ok(table)
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl From<u8> for RuleTable {
    fn from(rule: u8) -> Self {
        Self::from_number(rule)
    }
}

// -------------------------------------------------------------------------------------------------

/// All the ways a rule can be passed to an [`Automaton`](super::Automaton):
/// - a Wolfram rule number in range `[0, 255]`, either as number or as decimal string,
/// - up to 8 bits for the neighborhoods `"111"` down to `"000"`,
/// - a mapping of neighborhood strings to bits,
/// - or an existing [`RuleTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleInput {
    Number(i64),
    Text(String),
    Bits(Vec<u8>),
    Mapping(HashMap<String, u8>),
    Table(RuleTable),
}

macro_rules! impl_rule_input_from_number {
    ($($type:ty),*) => {
        $(
            impl From<$type> for RuleInput {
                fn from(value: $type) -> Self {
                    RuleInput::Number(i64::from(value))
                }
            }
        )*
    };
}

impl_rule_input_from_number!(u8, u16, u32, i8, i16, i32, i64);

macro_rules! impl_rule_input_from_wide_number {
    ($($type:ty),*) => {
        $(
            impl From<$type> for RuleInput {
                fn from(value: $type) -> Self {
                    // values which don't fit are passed as text, which then fails to parse
                    match i64::try_from(value) {
                        Ok(value) => RuleInput::Number(value),
                        Err(_) => RuleInput::Text(value.to_string()),
                    }
                }
            }
        )*
    };
}

impl_rule_input_from_wide_number!(u64, usize, isize);

impl From<String> for RuleInput {
    fn from(text: String) -> Self {
        RuleInput::Text(text)
    }
}

impl From<&str> for RuleInput {
    fn from(text: &str) -> Self {
        RuleInput::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RuleInput {
    fn from(bits: Vec<u8>) -> Self {
        RuleInput::Bits(bits)
    }
}

impl From<&[u8]> for RuleInput {
    fn from(bits: &[u8]) -> Self {
        RuleInput::Bits(bits.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for RuleInput {
    fn from(bits: [u8; N]) -> Self {
        RuleInput::Bits(bits.to_vec())
    }
}

impl From<HashMap<String, u8>> for RuleInput {
    fn from(mapping: HashMap<String, u8>) -> Self {
        RuleInput::Mapping(mapping)
    }
}

impl<const N: usize> From<[(&str, u8); N]> for RuleInput {
    fn from(mapping: [(&str, u8); N]) -> Self {
        RuleInput::Mapping(
            mapping
                .into_iter()
                .map(|(neighborhood, bit)| (neighborhood.to_string(), bit))
                .collect(),
        )
    }
}

impl From<RuleTable> for RuleInput {
    fn from(table: RuleTable) -> Self {
        RuleInput::Table(table)
    }
}

// -------------------------------------------------------------------------------------------------

fn neighborhood_index(left: u8, center: u8, right: u8) -> usize {
    (((left & 1) << 2) | ((center & 1) << 1) | (right & 1)) as usize
}

fn parse_neighborhood(neighborhood: &str) -> Result<usize, AutomatonError> {
    if neighborhood.len() == 3 && neighborhood.chars().all(|c| c == '0' || c == '1') {
        usize::from_str_radix(neighborhood, 2)
            .map_err(|_| AutomatonError::InvalidNeighborhood(neighborhood.to_string()))
    } else {
        Err(AutomatonError::InvalidNeighborhood(neighborhood.to_string()))
    }
}

fn validated_bit(bit: u8) -> Result<u8, AutomatonError> {
    if bit > 1 {
        Err(AutomatonError::InvalidBit(bit))
    } else {
        Ok(bit)
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        let table = RuleTable::from_number(110);
        assert_eq!(table.bits(), [0, 1, 1, 0, 1, 1, 1, 0]);
        assert_eq!(table.number(), 110);
        assert_eq!(table.to_string(), "01101110");
        assert_eq!(table.get("110"), Some(1));
        assert_eq!(table.get("111"), Some(0));
        assert_eq!(table.get("11"), None);
        assert_eq!(table.lookup(0, 0, 1), 1);
        assert_eq!(table.lookup(0, 0, 0), 0);
        for rule in 0..=255 {
            assert_eq!(RuleTable::from_number(rule).number(), rule);
        }
    }

    #[test]
    fn entries() {
        let entries = RuleTable::from_number(30).entries();
        assert_eq!(entries.len(), NEIGHBORHOODS);
        assert_eq!(entries[0], ("111".to_string(), 0));
        assert_eq!(entries[3], ("100".to_string(), 1));
        assert_eq!(entries[7], ("000".to_string(), 0));
    }

    #[test]
    fn apply_rules() -> Result<(), AutomatonError> {
        let table = RuleTable::from_number(0);
        assert_eq!(table.applied(RuleInput::from(30u8))?.number(), 30);
        assert_eq!(table.applied(RuleInput::from(" 90 "))?.number(), 90);
        assert_eq!(
            table.applied(RuleInput::from([0u8, 1, 1, 0, 1, 1, 1, 0]))?,
            RuleTable::from_number(110)
        );
        let mapping = RuleTable::from_number(150)
            .entries()
            .into_iter()
            .collect::<HashMap<_, _>>();
        assert_eq!(table.applied(RuleInput::from(mapping))?.number(), 150);
        assert_eq!(
            table.applied(RuleInput::from(RuleTable::from_number(18)))?,
            RuleTable::from_number(18)
        );
        Ok(())
    }

    #[test]
    fn apply_partial_rules() -> Result<(), AutomatonError> {
        let table = RuleTable::from_number(0);
        // only "111" and "110" get set
        assert_eq!(table.applied(RuleInput::from([1u8, 1]))?.number(), 0b1100_0000);
        // extra bits are ignored
        assert_eq!(
            table
                .applied(RuleInput::from([0u8, 0, 0, 0, 0, 0, 0, 1, 1]))?
                .number(),
            1
        );
        // missing neighborhoods keep their value
        assert_eq!(
            RuleTable::from_number(255)
                .applied(RuleInput::from([("000", 0u8), ("001", 0)]))?
                .number(),
            0b1111_1100
        );
        Ok(())
    }

    #[test]
    fn wide_numbers() -> Result<(), AutomatonError> {
        let table = RuleTable::from_number(0);
        assert_eq!(table.applied(RuleInput::from(30usize))?.number(), 30);
        assert_eq!(table.applied(RuleInput::from(90u64))?.number(), 90);
        assert_eq!(
            table.applied(RuleInput::from(-1isize)),
            Err(AutomatonError::InvalidRule("-1".to_string()))
        );
        assert_eq!(RuleInput::from(u64::MAX), RuleInput::Text(u64::MAX.to_string()));
        assert_eq!(
            table.applied(RuleInput::from(u64::MAX)),
            Err(AutomatonError::InvalidRule(u64::MAX.to_string()))
        );
        Ok(())
    }

    #[test]
    fn apply_invalid_rules() {
        let table = RuleTable::from_number(0);
        assert_eq!(
            table.applied(RuleInput::from(256)),
            Err(AutomatonError::InvalidRule("256".to_string()))
        );
        assert_eq!(
            table.applied(RuleInput::from(-1)),
            Err(AutomatonError::InvalidRule("-1".to_string()))
        );
        assert_eq!(
            table.applied(RuleInput::from("wolfram")),
            Err(AutomatonError::InvalidRule("wolfram".to_string()))
        );
        assert_eq!(
            table.applied(RuleInput::from([0u8, 2])),
            Err(AutomatonError::InvalidBit(2))
        );
        assert_eq!(
            table.applied(RuleInput::from([("0a1", 1u8)])),
            Err(AutomatonError::InvalidNeighborhood("0a1".to_string()))
        );
        assert_eq!(
            table.applied(RuleInput::from([("0001", 1u8)])),
            Err(AutomatonError::InvalidNeighborhood("0001".to_string()))
        );
    }
}
