//! Usage and help text.

use crate::cli::commands::Command;
use crate::cli::registry::Registry;

/// Header printed above the command descriptions.
pub const HELP_HEADER: &str = "Available Commands:";

/// Footer printed below the command descriptions.
pub const COMMUNITY_FOOTER: &str = "Community:
  Join our Slack if you have questions,
  need help, or want to contribute.
  http://slack.qutheory.io";

/// `Usage: <directory> [id1|id2|...]`.
pub fn render_usage<C: Command + ?Sized>(directory: &str, registry: &Registry<C>) -> String {
    format!("Usage: {} [{}]", directory, registry.usage_ids())
}

/// Full help: usage, header, every description separated by a blank line,
/// then the community footer.
pub fn render_help<C: Command + ?Sized>(directory: &str, registry: &Registry<C>) -> String {
    let descriptions: Vec<String> = registry.list_all().map(|c| c.description()).collect();

    format!(
        "{}\n\n{}\n\n{}\n{}",
        render_usage(directory, registry),
        HELP_HEADER,
        descriptions.join("\n"),
        COMMUNITY_FOOTER
    )
}
