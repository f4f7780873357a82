//! Table entries

use crate::{encode, gamma};

/// One row of the table: a raw level, its corrected level and the encoded word pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub index: u8,
    pub corrected_level: u8,
    pub words: [u32; encode::WORDS],
}

impl TableEntry {
    pub fn new(index: u8) -> Self {
        let corrected_level = gamma::correct(index);
        Self {
            index,
            corrected_level,
            words: encode::words(corrected_level),
        }
    }

    /// Diagnostic comment, eg. `// 128 ->  46: 00101110`.
    pub fn comment(&self) -> String {
        format!(
            "// {:>3} -> {:>3}: {}",
            self.index,
            self.corrected_level,
            encode::bits(self.corrected_level)
        )
    }
}

/// The full, ordered set of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    entries: Vec<TableEntry>,
}

impl Table {
    pub fn generate() -> Self {
        let entries: Vec<_> = (0..=u8::MAX).map(TableEntry::new).collect();
        debug_assert_eq!(entries.len(), gamma::TABLE_SIZE);
        log::debug!(
            "generated {} entries with gamma {:.3}",
            entries.len(),
            gamma::GAMMA
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn get(&self, index: u8) -> &TableEntry {
        &self.entries[index as usize]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::generate()
    }
}
