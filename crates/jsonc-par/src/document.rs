use crate::parser::Parser;
use crate::value::Value;
use jsonc_lex::tokenize;
use jsonc_util::{Arena, Result};

/// A parsed document borrowing a caller-supplied arena. This is the primary
/// entry point: the caller owns the arena and controls exactly when the
/// document's memory is released (by dropping the arena).
#[derive(Debug)]
pub struct Document<'arena> {
    pub root: Value<'arena>,
}

impl<'arena> Document<'arena> {
    /// Shorthand for `root.object_get(key)`, for callers whose root is
    /// expected to be an object.
    pub fn get(&self, key: &str) -> Option<&Value<'arena>> {
        self.root.object_get(key)
    }
}

/// Parse `input` into a document whose values are allocated in `arena`.
///
/// This is the lifetime-threaded counterpart of the decoder's
/// arena-or-null entry point for the case where the caller already has an
/// arena to parse into; see [`parse_owned`] for the case where one should
/// be created on the caller's behalf.
pub fn parse<'arena>(arena: &'arena Arena, input: &[u8]) -> Result<Document<'arena>> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens, input, arena);
    let root = parser.parse_document()?;
    Ok(Document { root })
}

/// A parsed document that owns its arena, for callers with no arena of
/// their own to pass in.
///
/// `Value<'arena>` borrows from the `Arena` stored in the same struct, which
/// Rust's borrow checker cannot express directly (a struct cannot borrow
/// from its own field). We route around this with one narrowly scoped
/// `unsafe` block: the root is built against a `'static`-erased view of the
/// arena reference, and every public accessor re-derives a lifetime bounded
/// by `&self`, which is sound because the arena is never mutated or moved
/// after construction (it is heap-backed and `Arena` does not expose
/// interior mutability that would invalidate existing allocations) and is
/// dropped only when `OwnedDocument` itself is dropped, after which no
/// borrowed `Value` can still be reachable through `&self`.
#[derive(Debug)]
pub struct OwnedDocument {
    arena: Arena,
    // Safety: the `'static` lifetime here is a lie, erased from the real
    // borrow of `arena` above. It must never be handed out directly;
    // `root()` re-binds it to `&self`'s lifetime before returning.
    root: Value<'static>,
}

impl OwnedDocument {
    /// Borrow the root value with a lifetime tied to `&self`, restoring the
    /// invariant erased at construction time.
    pub fn root(&self) -> &Value<'_> {
        // Safety: `Value<'static>` and `Value<'_>` have identical layout;
        // we are only shortening the lifetime, never extending it.
        unsafe { std::mem::transmute::<&Value<'static>, &Value<'_>>(&self.root) }
    }

    pub fn get(&self, key: &str) -> Option<&Value<'_>> {
        self.root().object_get(key)
    }
}

/// Parse `input` into a document that owns its own arena, created fresh for
/// this call. Use [`parse`] instead when an arena is already available, to
/// avoid the extra allocation and to keep the document lifetime-checked
/// rather than erased.
pub fn parse_owned(input: &[u8]) -> Result<OwnedDocument> {
    let arena = Arena::with_capacity(jsonc_util::DEFAULT_REGION_SIZE);
    let tokens = tokenize(input)?;
    let root = {
        // Safety: this reference is used only to build `root` below, inside
        // this block; `arena` itself moves into the returned `OwnedDocument`
        // immediately after, so the allocations `root` points into remain
        // valid for as long as `OwnedDocument` exists.
        let arena_ref: &Arena = &arena;
        let mut parser = Parser::new(&tokens, input, arena_ref);
        let value = parser.parse_document()?;
        unsafe { std::mem::transmute::<Value<'_>, Value<'static>>(value) }
    };
    Ok(OwnedDocument { arena, root })
}
