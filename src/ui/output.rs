//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show the command behind each step.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show step labels and final status only.
    Quiet,
    /// Show nothing except errors and requested data.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows secondary detail messages.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows the commands being run.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
