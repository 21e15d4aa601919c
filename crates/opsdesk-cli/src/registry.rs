//! Command registry - the fixed table of recognized phrases.
//!
//! Matching is case-insensitive substring containment: a line selects the
//! first descriptor, in table order, whose phrase occurs anywhere in it.
//! Phrases must therefore not be substrings of unrelated phrases unless the
//! table order resolves the overlap.

/// Commands the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Man,
    Help,
    Exit,
    Stats,
    ListUsers,
    MoreUserInfo,
    ListMenuItems,
    ListOrders,
    MoreOrderInfo,
}

/// One recognized phrase and its help text.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub command: Command,
    /// Lowercase match key.
    pub phrase: &'static str,
    /// Label shown on the help page, including any argument hint.
    pub usage: &'static str,
    pub description: &'static str,
}

static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        command: Command::Man,
        phrase: "man",
        usage: "man",
        description: "Alias of the \"help\" command",
    },
    CommandDescriptor {
        command: Command::Help,
        phrase: "help",
        usage: "help",
        description: "Show this help page",
    },
    CommandDescriptor {
        command: Command::Exit,
        phrase: "exit",
        usage: "exit",
        description: "Kill the CLI (and the rest of the application)",
    },
    CommandDescriptor {
        command: Command::Stats,
        phrase: "stats",
        usage: "stats",
        description: "Get statistics on the underlying operating system and resource utilization",
    },
    CommandDescriptor {
        command: Command::ListUsers,
        phrase: "list users",
        usage: "list users",
        description: "Show a list of all registered (undeleted) users in the system",
    },
    CommandDescriptor {
        command: Command::MoreUserInfo,
        phrase: "more user info",
        usage: "more user info --{userId}",
        description: "Show details of a specific user",
    },
    CommandDescriptor {
        command: Command::ListMenuItems,
        phrase: "list menu items",
        usage: "list menu items",
        description: "Show a list of all menu items",
    },
    CommandDescriptor {
        command: Command::ListOrders,
        phrase: "list orders",
        usage: "list orders",
        description: "Show a list of all orders placed in the last 24 hours",
    },
    CommandDescriptor {
        command: Command::MoreOrderInfo,
        phrase: "more order info",
        usage: "more order info --{orderId}",
        description: "Show details of a specific order",
    },
];

/// All descriptors in registry order.
pub fn describe() -> &'static [CommandDescriptor] {
    COMMANDS
}

/// Match a line against the built-in registry.
pub fn match_command(line: &str) -> Option<&'static CommandDescriptor> {
    match_in(COMMANDS, line)
}

/// Match a line against `registry`; the earliest containing phrase wins.
pub fn match_in<'r>(registry: &'r [CommandDescriptor], line: &str) -> Option<&'r CommandDescriptor> {
    let normalized = line.to_lowercase();
    registry
        .iter()
        .find(|descriptor| normalized.contains(descriptor.phrase))
}
