//! Command line arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "eventsub-trigger")]
#[command(about = "Generate mock EventSub notification payloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the payload for an event trigger or topic
    Trigger(TriggerArgs),
    /// List the topics the catalog can produce
    Topics(TopicsArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerArgs {
    /// Trigger name (e.g. `subscribe`) or topic (e.g. `channel.subscribe`)
    pub event: String,

    /// Transport to generate for (webhook|websocket); defaults to EVENTSUB_TRANSPORT
    #[arg(short = 'T', long)]
    pub transport: Option<String>,

    /// Subscription version; required when the event has more than one
    #[arg(short, long, default_value = "")]
    pub version: String,

    /// User ID of the user causing the event
    #[arg(short, long)]
    pub from_user: Option<String>,

    /// User ID of the broadcaster receiving the event
    #[arg(short, long)]
    pub to_user: Option<String>,

    /// Subscription status; the event body is only included when `enabled`
    #[arg(short = 'r', long, default_value = "enabled")]
    pub subscription_status: String,

    /// Subscription ID; random when omitted
    #[arg(short = 'u', long)]
    pub subscription_id: Option<String>,

    /// Event message ID; random when omitted
    #[arg(short = 'I', long)]
    pub event_id: Option<String>,

    /// RFC 3339 event timestamp; now when omitted
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Bits, gift count or other amount the event carries
    #[arg(short, long, default_value_t = 0)]
    pub cost: i64,

    /// Subscription tier (1000|2000|3000)
    #[arg(long)]
    pub tier: Option<String>,

    /// Mark the event as anonymous
    #[arg(short, long)]
    pub anonymous: bool,

    /// Mark the subscription as a gift
    #[arg(short, long)]
    pub gift: bool,

    /// Client ID for authorization and extension events
    #[arg(long)]
    pub client_id: Option<String>,

    /// Free text: chat message, channel title or ban reason
    #[arg(short, long)]
    pub description: Option<String>,

    /// Game / category ID
    #[arg(short = 'G', long)]
    pub game_id: Option<String>,

    /// Item, reward or benefit ID
    #[arg(short, long)]
    pub item_id: Option<String>,

    /// RFC 3339 timestamp a timeout ends at; bans are permanent without it
    #[arg(long)]
    pub ban_end: Option<String>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicsArgs {
    /// List websocket command topics instead of webhook topics
    #[arg(long)]
    pub websocket: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_trigger() {
        let cli = Cli::parse_from([
            "eventsub-trigger",
            "trigger",
            "channel-update",
            "-T",
            "websocket",
            "--version",
            "2",
            "--cost",
            "5",
            "--anonymous",
        ]);

        let Command::Trigger(args) = cli.command else {
            panic!("expected trigger command");
        };
        assert_eq!(args.event, "channel-update");
        assert_eq!(args.transport.as_deref(), Some("websocket"));
        assert_eq!(args.version, "2");
        assert_eq!(args.cost, 5);
        assert!(args.anonymous);
        assert!(!args.gift);
        assert_eq!(args.subscription_status, "enabled");
    }

    #[test]
    fn test_parse_topics() {
        let cli = Cli::parse_from(["eventsub-trigger", "topics", "--websocket"]);
        assert!(matches!(cli.command, Command::Topics(TopicsArgs { websocket: true })));
    }
}
