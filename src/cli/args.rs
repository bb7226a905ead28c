//! Command-line argument parsing for the demo harness.

/// Parsed demo command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCommand {
    /// Show version information
    Version,
    /// Run the favourite-folder list demo
    Folders,
    /// Run the fullscreen gallery demo
    Gallery,
    /// Run the sign-in form demo
    Form,
    /// Run the recommendations grid demo (default)
    Recommendations,
}

/// Parse command-line arguments and return the demo to run.
///
/// The first recognised flag wins; unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use pagegrid::cli::args::{parse_args, DemoCommand};
///
/// let args = vec!["pagegrid".to_string(), "--gallery".to_string()];
/// assert_eq!(parse_args(args.into_iter()), DemoCommand::Gallery);
/// ```
pub fn parse_args<I>(args: I) -> DemoCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return DemoCommand::Version,
            "--folders" => return DemoCommand::Folders,
            "--gallery" => return DemoCommand::Gallery,
            "--form" => return DemoCommand::Form,
            _ => {}
        }
    }
    DemoCommand::Recommendations
}
