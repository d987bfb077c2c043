pub mod classify;
pub mod error;
pub mod layout;
pub mod merge;
pub mod params;
pub mod project;

pub use classify::{Interval, Placement, classify, place};
pub use error::{ReconstructError, ReconstructResult};
pub use layout::PlaneLayout;
pub use merge::{MergeResult, Miss, merge, merge_with};
pub use params::MergeParams;
pub use project::{project_onto_front_plane, project_onto_side_plane};
