//! Guide tree construction (pure).
//!
//! - [`roots`]: which entries are top-level and in what order
//! - [`builder`]: depth-first expansion of the root list into a [`GuideTree`]
//! - [`tree`]: the arena tree with its id → node index

pub mod builder;
pub mod roots;
pub mod tree;

pub use builder::{build_tree, BuildOutcome};
pub use roots::{infer_root_ids, sorted_root_entries, RootSelection};
pub use tree::{GuideTree, NodeIndex, TreeNode};
