pub mod cache;
pub mod config;
pub mod error;
pub mod gesture;
pub mod plane;
pub mod session;
pub mod store;

pub use cache::{MergeCache, MergeCacheEntry, PassReport};
pub use config::{CachePolicy, SketchConfig};
pub use error::{SketchError, SketchResult};
pub use gesture::{GestureEvent, GestureState, GestureTracker, PointerHit, Tool};
pub use plane::{MergeKey, Plane, SegmentId};
pub use session::{Session, SessionUpdate};
pub use store::SegmentStore;
