//! Bump arena owning token text.
//!
//! The arena is a chain of fixed-capacity blocks. Allocations are carved
//! sequentially from the newest block; when a request does not fit, a new
//! block sized to at least the request is appended. Blocks never grow past
//! their initial capacity, so bytes handed out are never moved, and nothing
//! is released until the whole arena is dropped.
//!
//! Allocations are addressed by copyable handles ([`Region`], [`TextRef`])
//! instead of references. This keeps the arena free of self-borrows so a
//! tokenizer session can own both the arena and the tokens pointing into it.
//!
//! Running out of memory is not a recoverable condition here: block
//! allocation goes through the global allocator, which aborts.

/// Default capacity of each arena block, in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Handle to a byte region allocated from a [`TextArena`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Region {
    block: usize,
    start: usize,
    len: usize,
}

impl Region {
    /// Size of the region in bytes.
    #[inline]
    pub fn len(self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Offset of the region within its block.
    #[inline]
    pub fn block_offset(self) -> usize {
        self.start
    }
}

/// Handle to UTF-8 text copied into a [`TextArena`].
///
/// Only [`TextArena::duplicate_text`] creates these, so the referenced
/// bytes are always valid UTF-8.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TextRef(Region);

impl TextRef {
    /// Length of the text in bytes.
    #[inline]
    pub fn len(self) -> usize {
        self.0.len
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.len == 0
    }
}

/// Chained fixed-capacity block allocator.
#[derive(Debug)]
pub struct TextArena {
    /// Each block is allocated once with its final capacity and only ever
    /// extended within that capacity.
    blocks: Vec<Vec<u8>>,
    block_size: usize,
    /// Sum of requested allocation sizes (excludes alignment padding).
    allocated: usize,
}

impl Default for TextArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArena {
    /// Create an empty arena with [`DEFAULT_BLOCK_SIZE`] blocks.
    ///
    /// No memory is reserved until the first allocation.
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Create an empty arena whose blocks hold `block_size` bytes.
    ///
    /// A block size of zero is treated as one.
    pub fn with_block_size(block_size: usize) -> Self {
        TextArena {
            blocks: Vec::new(),
            block_size: block_size.max(1),
            allocated: 0,
        }
    }

    /// Allocate `size` zeroed bytes whose offset within their block is a
    /// multiple of `align`.
    ///
    /// Only the block offset is aligned. Blocks are `Vec<u8>`, so the memory
    /// address of the region is guaranteed byte alignment and nothing more.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    pub fn allocate(&mut self, size: usize, align: usize) -> Region {
        assert!(
            align.is_power_of_two(),
            "arena alignment must be a power of two, got {align}"
        );

        if let Some(block) = self.blocks.last_mut() {
            let start = block.len().next_multiple_of(align);
            if start
                .checked_add(size)
                .is_some_and(|end| end <= block.capacity())
            {
                block.resize(start + size, 0);
                self.allocated += size;
                return Region {
                    block: self.blocks.len() - 1,
                    start,
                    len: size,
                };
            }
        }

        let mut block = Vec::with_capacity(self.block_size.max(size));
        block.resize(size, 0);
        self.blocks.push(block);
        self.allocated += size;
        Region {
            block: self.blocks.len() - 1,
            start: 0,
            len: size,
        }
    }

    /// Borrow the bytes of a region. `None` if the handle is out of range.
    ///
    /// Handles carry no arena identity: a handle from another arena that
    /// happens to fall in range resolves to this arena's bytes.
    pub fn region(&self, region: Region) -> Option<&[u8]> {
        self.blocks
            .get(region.block)?
            .get(region.start..region.start + region.len)
    }

    /// Mutably borrow the bytes of a region for in-place writes.
    pub fn region_mut(&mut self, region: Region) -> Option<&mut [u8]> {
        self.blocks
            .get_mut(region.block)?
            .get_mut(region.start..region.start + region.len)
    }

    /// Copy `text` into the arena.
    pub fn duplicate_text(&mut self, text: &str) -> TextRef {
        let region = self.allocate(text.len(), 1);
        if let Some(dst) = self.region_mut(region) {
            dst.copy_from_slice(text.as_bytes());
        }
        TextRef(region)
    }

    /// Resolve a text handle. `None` if the handle is out of range or does
    /// not cover valid UTF-8.
    pub fn text(&self, text: TextRef) -> Option<&str> {
        self.region(text.0)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Number of blocks in the chain.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total bytes handed out, excluding alignment padding.
    pub fn allocated_bytes(&self) -> usize {
        self.allocated
    }

    /// Total capacity reserved across all blocks.
    pub fn capacity_bytes(&self) -> usize {
        self.blocks.iter().map(Vec::capacity).sum()
    }

    /// Capacity used for ordinary (non-oversized) blocks.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}
