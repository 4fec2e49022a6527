//! Minimal view of the owning block consulted by row shape queries.

/// What the shape queries need to know about the block a row belongs to.
///
/// Built by the upstream layout pipeline from its block model; this crate
/// never inspects the block itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockContext {
    /// The block plugs into a value socket of another block.
    pub has_output_connection: bool,
    /// A following statement block is attached below this one.
    pub has_next_block: bool,
}

impl BlockContext {
    pub fn new(has_output_connection: bool, has_next_block: bool) -> Self {
        Self {
            has_output_connection,
            has_next_block,
        }
    }
}
