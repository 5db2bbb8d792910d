//! Progress module containing progress bar functionality.
//!
//! Batch fetches show a main bar counting finished targets and one child bar
//! per remote download.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Coordination of the main and child bars
//!
//! # Examples
//!
//! ```rust
//! use filefetch::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Keep the batch counter, hide the per-download bars.
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some("[{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!         Some("█▉▊▋▌▍▎▏  ".to_string()),
//!         true,
//!         false,
//!     ),
//!     ProgressBarOpts::hidden(),
//! );
//! assert!(style_options.is_enabled());
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
