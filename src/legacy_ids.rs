use std::collections::HashMap;

/// Lookup from a legacy numeric block id plus metadata byte to a type
/// name. The game-data table itself lives outside this crate; the
/// legacy array decoder consults this seam only when the source file
/// carries no string palette.
pub trait LegacyIdTable {
    fn resolve(&self, block_id: u16, data: u8) -> Option<String>;
}

/// In-memory table for callers and tests. A `(id, data)` pair wins
/// over a `(id, 0)` wildcard entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryLegacyTable {
    entries: HashMap<(u16, u8), String>,
}

impl MemoryLegacyTable {
    pub fn new() -> Self {
        MemoryLegacyTable {
            entries: HashMap::new(),
        }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ((u16, u8), S)>,
        S: Into<String>,
    {
        MemoryLegacyTable {
            entries: pairs
                .into_iter()
                .map(|(key, name)| (key, name.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, block_id: u16, data: u8, name: impl Into<String>) {
        self.entries.insert((block_id, data), name.into());
    }
}

impl LegacyIdTable for MemoryLegacyTable {
    fn resolve(&self, block_id: u16, data: u8) -> Option<String> {
        self.entries
            .get(&(block_id, data))
            .or_else(|| self.entries.get(&(block_id, 0)))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pair_wins_over_wildcard() {
        let mut table = MemoryLegacyTable::new();
        table.insert(17, 0, "oak_log");
        table.insert(17, 1, "spruce_log");

        assert_eq!(table.resolve(17, 1), Some("spruce_log".to_string()));
        assert_eq!(table.resolve(17, 2), Some("oak_log".to_string()));
        assert_eq!(table.resolve(42, 0), None);
    }
}
