//! Interned string table backing the name resolvers of metadata records.

use lasso::{Key, Rodeo, RodeoReader, Spur};
use modscope_api::{MetadataError, MetadataResult};
use modscope_plugin::{NameResolver, StringIndex};

/// Mutable side of a [`StringTable`], used while records are being assembled.
#[derive(Debug, Default)]
pub struct StringTableBuilder {
    rodeo: Rodeo,
}

impl StringTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s`, returning the index records should store. Equal strings share an index.
    pub fn intern(&mut self, s: &str) -> StringIndex {
        self.rodeo.get_or_intern(s).into_usize() as StringIndex
    }

    pub fn build(self) -> StringTable {
        StringTable {
            reader: self.rodeo.into_reader(),
        }
    }
}

/// Frozen string table, safe to share across resolving threads.
#[derive(Debug)]
pub struct StringTable {
    reader: RodeoReader,
}

impl StringTable {
    pub fn builder() -> StringTableBuilder {
        StringTableBuilder::new()
    }

    /// Table whose indices follow the iteration order of `strings` (duplicates collapse).
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = StringTableBuilder::new();
        for s in strings {
            builder.intern(s.as_ref());
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.reader.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    pub fn index_of(&self, s: &str) -> Option<StringIndex> {
        self.reader.get(s).map(|key| key.into_usize() as StringIndex)
    }
}

impl NameResolver for StringTable {
    fn string(&self, index: StringIndex) -> MetadataResult<&str> {
        Spur::try_from_usize(index as usize)
            .and_then(|key| self.reader.try_resolve(&key))
            .ok_or(MetadataError::StringIndexOutOfRange {
                index,
                len: self.reader.len(),
            })
    }
}
