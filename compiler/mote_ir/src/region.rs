//! Lazily committed bump region.
//!
//! A [`Region`] reserves its full capacity up front but commits nothing;
//! each allocation bumps an offset and, when the offset crosses the
//! committed boundary, commits enough whole pages to cover it. There is no
//! per-allocation free. Memory goes back only when the region is dropped.
//!
//! Allocations are addressed by [`Block`] offsets rather than pointers, so
//! growing the committed prefix never invalidates an earlier allocation.

use crate::ArenaError;

/// Default commit granularity.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// A range of bytes handed out by [`Region::allocate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// Byte offset from the start of the region.
    pub offset: usize,
    /// Size in bytes.
    pub size: usize,
}

/// Bump allocator over a reserved byte range with page-granular commit.
///
/// # Invariants
///
/// - `used <= committed <= capacity`
/// - `committed` is a multiple of `page_size`, except when clamped to
///   `capacity` on the final page
/// - bytes below `committed` are readable and writable; nothing else is
pub struct Region {
    /// Committed bytes. `memory.len()` is the committed boundary.
    memory: Vec<u8>,
    /// Bump offset.
    used: usize,
    /// Reserved capacity in bytes.
    capacity: usize,
    /// Commit granularity (power of two).
    page_size: usize,
}

impl Region {
    /// Reserve `capacity` bytes with the default page size.
    ///
    /// Nothing is committed until the first allocation.
    pub fn reserve(capacity: usize) -> Self {
        Self::with_page_size(capacity, DEFAULT_PAGE_SIZE)
    }

    /// Reserve `capacity` bytes committing in `page_size` steps.
    ///
    /// A page size that is not a power of two is rounded up to one.
    pub fn with_page_size(capacity: usize, page_size: usize) -> Self {
        Region {
            memory: Vec::new(),
            used: 0,
            capacity,
            page_size: page_size.max(1).next_power_of_two(),
        }
    }

    /// Bump-allocate `size` bytes aligned to `alignment`.
    ///
    /// Rounds the current offset up to `alignment`, extends it by `size`,
    /// and commits the pages the new offset needs. Fails only when the
    /// reservation is exhausted or `alignment` is not a power of two.
    pub fn allocate(&mut self, size: usize, alignment: usize) -> Result<Block, ArenaError> {
        if !alignment.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { alignment });
        }
        let exhausted = ArenaError::Exhausted {
            pool: "string bytes",
            reserved: self.capacity,
        };
        let offset = self
            .used
            .checked_add(alignment - 1)
            .map(|v| v & !(alignment - 1))
            .ok_or(exhausted)?;
        let end = offset.checked_add(size).ok_or(exhausted)?;
        if end > self.capacity {
            return Err(exhausted);
        }
        if end > self.memory.len() {
            self.commit(end);
        }
        self.used = end;
        Ok(Block { offset, size })
    }

    /// Commit whole pages until `end` is covered.
    fn commit(&mut self, end: usize) {
        let committed = self.memory.len();
        let missing = end - committed;
        let pages = missing.div_ceil(self.page_size);
        let new_committed = committed
            .saturating_add(pages.saturating_mul(self.page_size))
            .min(self.capacity);
        tracing::debug!(committed, new_committed, "region commit");
        self.memory.resize(new_committed, 0);
    }

    /// Read the bytes of a block.
    #[inline]
    pub fn bytes(&self, block: Block) -> &[u8] {
        &self.memory[block.offset..block.offset + block.size]
    }

    /// Write access to the bytes of a block.
    #[inline]
    pub fn bytes_mut(&mut self, block: Block) -> &mut [u8] {
        &mut self.memory[block.offset..block.offset + block.size]
    }

    /// Current bump offset.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Committed boundary in bytes.
    #[inline]
    pub fn committed(&self) -> usize {
        self.memory.len()
    }

    /// Reserved capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Commit granularity in bytes.
    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
