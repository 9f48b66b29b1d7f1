//! Deterministic, self-avoiding, axis-aligned figures generated from byte
//! strings (spec.md §1).
//!
//! The hard part is [`refine`]: starting from a figure where every segment
//! has the minimum possible length, it lengthens earlier segments just
//! enough to eliminate collisions introduced by later ones, recursively.
//! Everything else here — geometry, the figure model, the coordinate cache,
//! the rasteriser, the binary format — exists because the refinement engine
//! cannot be specified without them.

pub mod collision;
pub mod encode;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod heuristic;
pub mod progress;
pub mod raster;
pub mod refine;
pub mod serialize;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use encode::{begin_figure, blank_figure};
pub use error::{SxbpError, SxbpResult};
pub use figure::Figure;
pub use raster::{render_to_bitmap, render_to_pbm, render_to_svg};
pub use refine::{refine, refine_with_defaults, RefineMethod, RefineOptions};
pub use serialize::{dump, load};

/// Release a figure's storage (spec.md §6's `free_figure`). Rust frees
/// eagerly on scope exit regardless; this is only for callers that want an
/// explicit release point matching the operation table.
pub fn free_figure(figure: Figure) {
    figure.release();
}

/// Common imports for quick use by callers of this crate.
pub mod prelude {
    pub use crate::collision::find_collision;
    pub use crate::encode::{begin_figure, blank_figure};
    pub use crate::error::{SxbpError, SxbpResult};
    pub use crate::figure::{Figure, Segment};
    pub use crate::geometry::{Direction, Rotation};
    pub use crate::progress::{NullObserver, ProgressObserver, ProgressSignal};
    pub use crate::raster::{render_to_bitmap, render_to_pbm, render_to_svg, Bitmap};
    pub use crate::refine::{refine, refine_with_defaults, RefineMethod, RefineOptions};
    pub use crate::serialize::{dump, load};
}
