mod blocks;

pub use blocks::{begins_block, block_containing};
