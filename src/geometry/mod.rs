pub mod bounds;
pub mod label;
pub mod mask;
pub mod rings;

pub use bounds::{Bounds, compute_bounds};
pub use label::{default_label_position, interior_label_position, resolve_label_position};
pub use mask::{mask_rings, world_mask_feature};
pub use rings::{WORLD_RING, reverse_rings};
