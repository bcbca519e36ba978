use bumpalo::Bump;

/// Default region size for a freshly constructed arena, matching the
/// decoder's historical default of one 4 KiB page per region.
pub const DEFAULT_REGION_SIZE: usize = 4 * 1024;

/// A bump/arena allocator: a growing chain of fixed-capacity regions handing
/// out aligned blocks monotonically. Individual blocks are never freed;
/// the entire chain is released at once when the `Arena` is dropped.
///
/// Backed by `bumpalo::Bump`, which already implements this exact region-chain
/// design — this type is a thin, purpose-named wrapper exposing only the
/// surface the lexer and parser need.
#[derive(Debug, Default)]
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Construct an arena whose first region holds at least `region_size`
    /// bytes before a second region is appended.
    pub fn with_capacity(region_size: usize) -> Self {
        Arena {
            bump: Bump::with_capacity(region_size),
        }
    }

    /// Copy a string slice into the arena, returning a reference with the
    /// arena's lifetime.
    pub fn alloc_str<'a>(&'a self, s: &str) -> &'a str {
        self.bump.alloc_str(s)
    }

    /// Copy a slice into the arena, returning a reference with the arena's
    /// lifetime. Used to freeze object-entry and array-element buffers.
    pub fn alloc_slice_copy<'a, T: Copy>(&'a self, xs: &[T]) -> &'a [T] {
        self.bump.alloc_slice_copy(xs)
    }

    /// Access to the underlying bump allocator, for building arena-backed
    /// `bumpalo::collections::Vec` sequences (object entries, array
    /// elements) that later get frozen via `alloc_slice_copy`-style framing.
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Total bytes allocated across every region so far.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}
