use clap::{Command, CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "invtrack",
    bin_name = "invtrack",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Single-user inventory tracker backed by a quoted CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global inventory instead of ./save
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Help headings. Subcommands are placed by their `display_order` band:
/// below 10 is core, 10s per-item, 20s data, the rest miscellaneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Item,
    Data,
    Misc,
}

impl CommandGroup {
    const ALL: [CommandGroup; 4] = [
        CommandGroup::Core,
        CommandGroup::Item,
        CommandGroup::Data,
        CommandGroup::Misc,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Item => "Per-Item Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn of(cmd: &Command) -> Self {
        match cmd.get_display_order() {
            0..=9 => CommandGroup::Core,
            10..=19 => CommandGroup::Item,
            20..=29 => CommandGroup::Data,
            _ => CommandGroup::Misc,
        }
    }
}

/// Renders the top-level help with subcommands under group headings. The
/// usage, about text and options all come from the clap definition.
pub fn get_grouped_help() -> String {
    let mut cmd = Cli::command();
    cmd.build();

    let mut output = format!(
        "{} {}\n",
        cmd.get_name(),
        cmd.get_version().unwrap_or("unknown")
    );
    if let Some(about) = cmd.get_about() {
        output.push_str(&format!("{}\n", about));
    }
    output.push_str(&format!("\nUsage: {} [OPTIONS] [COMMAND]\n", cmd.get_name()));

    for group in CommandGroup::ALL {
        let mut members: Vec<&Command> = cmd
            .get_subcommands()
            .filter(|sc| !sc.is_hide_set() && CommandGroup::of(sc) == group)
            .collect();
        if members.is_empty() {
            continue;
        }
        members.sort_by_key(|sc| sc.get_display_order());

        output.push_str(&format!("\n{}\n", group.heading()));
        for sc in members {
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
        }
    }

    output.push_str("\nOptions:\n");
    for arg in cmd.get_arguments().filter(|a| !a.is_positional() && !a.is_hide_set()) {
        let flags = match (arg.get_short(), arg.get_long()) {
            (Some(short), Some(long)) => format!("-{}, --{}", short, long),
            (Some(short), None) => format!("-{}", short),
            (None, Some(long)) => format!("    --{}", long),
            (None, None) => continue,
        };
        let help = arg.get_help().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<16} {}\n", flags, help));
    }

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints clap's help for one subcommand, looked up by name or alias.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(name) {
        Some(sub) => print!("{}", sub.render_help()),
        None => {
            eprintln!("Unknown command: {}", name);
            eprintln!();
            print_grouped_help();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Item(ItemCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add an item
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Item name (stored lowercase)
        name: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Amount in stock
        #[arg(short, long, default_value_t = 0)]
        amount: u32,

        /// Path to an image of the item
        #[arg(short, long, default_value = "")]
        image: String,
    },

    /// List items
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show items whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one item
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Item name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Rename an item
    #[command(display_order = 10)]
    Rename {
        /// Current item name
        name: String,

        /// New name
        new_name: String,
    },

    /// Replace an item's description
    #[command(display_order = 11)]
    Describe {
        /// Item name
        name: String,

        /// New description
        description: String,
    },

    /// Replace an item's image path
    #[command(display_order = 12)]
    Image {
        /// Item name
        name: String,

        /// New image path
        path: String,
    },

    /// Increase an item's amount by one
    #[command(display_order = 13)]
    Incr {
        /// Item name
        name: String,
    },

    /// Decrease an item's amount by one (never below zero)
    #[command(display_order = 14)]
    Decr {
        /// Item name
        name: String,
    },

    /// Delete an item
    #[command(alias = "rm", display_order = 15)]
    Delete {
        /// Item name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export the inventory using the configured delimiter
    #[command(display_order = 20)]
    Export {
        /// File name inside the export directory (default: timestamped)
        name: Option<String>,
    },

    /// Append items from a delimited file
    #[command(display_order = 21)]
    Import {
        /// File to read
        path: String,

        /// Field delimiter of the file (default: the configured one)
        #[arg(short, long)]
        delimiter: Option<String>,
    },

    /// Start a new inventory with a sample item
    #[command(display_order = 22)]
    Init,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., delimiter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Run the interactive menu
    #[command(display_order = 31)]
    Session,

    /// Print help for invtrack or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
