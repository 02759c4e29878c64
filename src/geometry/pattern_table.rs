use crate::error::ConfigurationError;

/// Static list of pixel offsets relative to a panel's origin
///
/// A table describes one named spatial region of a panel (a ring of petals,
/// the edges of a facet). For rotation the table is split into equal
/// subsections that light up one at a time.
///
/// Tables are plain constants, so [`PatternTable::validate`] is a `const fn`
/// and fixtures assert their tables at compile time:
///
/// ```ignore
/// const RING: PatternTable = PatternTable::new(&[0, 1, 2, 3, 4, 5]).with_subsection_size(3);
/// const _: () = assert!(RING.is_valid_for(27));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTable {
    offsets: &'static [u8],
    subsection_size: usize,
}

impl PatternTable {
    /// Create a table where every offset is its own subsection
    pub const fn new(offsets: &'static [u8]) -> Self {
        Self {
            offsets,
            subsection_size: 1,
        }
    }

    /// Group the offsets into subsections of `size` entries
    #[must_use]
    pub const fn with_subsection_size(mut self, size: usize) -> Self {
        self.subsection_size = size;
        self
    }

    pub const fn offsets(&self) -> &'static [u8] {
        self.offsets
    }

    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub const fn subsection_size(&self) -> usize {
        self.subsection_size
    }

    /// Number of whole subsections, zero for an invalid subsection size
    pub const fn segment_count(&self) -> usize {
        if self.subsection_size == 0 {
            return 0;
        }
        self.offsets.len() / self.subsection_size
    }

    /// Offsets of the subsection at `index`
    pub fn segment(&self, index: usize) -> Option<&'static [u8]> {
        if index >= self.segment_count() {
            return None;
        }
        let start = index * self.subsection_size;
        self.offsets.get(start..start + self.subsection_size)
    }

    /// Check the subsection layout only
    pub const fn validate_subsections(&self) -> Result<(), ConfigurationError> {
        if self.offsets.is_empty() {
            return Err(ConfigurationError::EmptyTable);
        }
        if self.subsection_size == 0 {
            return Err(ConfigurationError::ZeroSubsection);
        }
        if self.offsets.len() % self.subsection_size != 0 {
            return Err(ConfigurationError::UnevenSubsections {
                len: self.offsets.len(),
                subsection_size: self.subsection_size,
            });
        }
        Ok(())
    }

    /// Check the subsection layout and that every offset fits the region
    pub const fn validate(&self, region_size: usize) -> Result<(), ConfigurationError> {
        if let Err(err) = self.validate_subsections() {
            return Err(err);
        }
        let mut position = 0;
        while position < self.offsets.len() {
            let offset = self.offsets[position];
            if offset as usize >= region_size {
                return Err(ConfigurationError::OffsetOutOfRange {
                    position,
                    offset,
                    region_size,
                });
            }
            position += 1;
        }
        Ok(())
    }

    pub const fn is_valid_for(&self, region_size: usize) -> bool {
        self.validate(region_size).is_ok()
    }
}
