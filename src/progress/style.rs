//! Progress bar styling options.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Style options for batch fetches.
///
/// The main bar counts finished targets and stays on screen; the child bars
/// track the bytes of each remote download and are cleared once done.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub(crate) main: ProgressBarOpts,
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts::with_pip_style(),
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Style options with every bar hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    /// Return `false` if neither the main nor the child bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    /// The options for the main progress bar.
    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    /// The options for the per-download progress bars.
    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    template: Option<String>,
    /// At least 3 characters: "filled", "current" and "to do".
    progress_chars: Option<String>,
    pub(crate) enabled: bool,
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// `███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// `━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
    pub const TEMPLATE_PIP: &'static str =
        "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// `"█▉▊▋▌▍▎▏  "`
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// `"━╾╴─"`
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Options which look like the Python package installer pip.
    pub fn with_pip_style() -> Self {
        Self {
            template: Some(Self::TEMPLATE_PIP.into()),
            progress_chars: Some(Self::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Options which hide the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Whether the bar is drawn at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Build the [`ProgressStyle`].
    ///
    /// An invalid template is logged and replaced by indicatif's default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            match ProgressStyle::default_bar().template(template) {
                Ok(s) => style = s,
                Err(e) => warn!("Ignoring progress bar template {:?}: {}", template, e),
            }
        }
        if let Some(chars) = &self.progress_chars {
            style = style.progress_chars(chars);
        }
        style
    }

    /// Build a [`ProgressBar`] of `len` steps, hidden when disabled.
    pub fn to_progress_bar(&self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        ProgressBar::new(len).with_style(self.to_progress_style())
    }
}
