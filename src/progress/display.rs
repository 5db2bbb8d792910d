//! Progress bar coordination for batch fetches.

use super::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Owns the main bar of a batch and hands out per-download child bars.
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create the display for a batch of `total` targets.
    pub fn new(style_options: StyleOptions, total: usize) -> Self {
        let multi = if style_options.is_enabled() {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        let main = multi.add(style_options.main().to_progress_bar(total as u64));
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// A display that draws nothing, for single fetches.
    pub fn hidden() -> Self {
        Self::new(StyleOptions::hidden(), 0)
    }

    /// Add a child bar; its length is set once the response size is known.
    pub fn create_child_progress(&self) -> ProgressBar {
        self.multi.add(self.style_options.child().to_progress_bar(0))
    }

    /// Finish a child bar, clearing it if configured to.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Count one more finished target.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// The main bar's position.
    pub fn position(&self) -> u64 {
        self.main.position()
    }

    /// Finish the main bar.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}
