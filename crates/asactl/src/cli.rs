//! Clap derive structures for the `asactl` CLI.
//!
//! Defines the command tree, global flags, and shared types. Only depends on
//! clap so `build.rs` can render man pages from it.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// asactl -- declarative configuration for Cisco ASA policy objects
#[derive(Debug, Parser)]
#[command(
    name = "asactl",
    version,
    about = "Converge Cisco ASA objects to a declared state",
    long_about = "Reads an object from the ASA REST API, compares it with the declared\n\
        state, and performs the single create, update or delete needed to\n\
        converge it. Prints whether anything changed.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'p', env = "ASA_PROFILE", global = true)]
    pub profile: Option<String>,

    /// ASA management address (overrides profile)
    #[arg(long, short = 'H', env = "ASA_HOST", global = true)]
    pub host: Option<String>,

    /// Username for the REST API
    #[arg(long, short = 'u', env = "ASA_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password for the REST API
    #[arg(long, env = "ASA_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Validate the device TLS certificate (yes/no)
    #[arg(
        long,
        env = "ASA_VALIDATE_CERTS",
        global = true,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub validate_certs: Option<bool>,

    /// Request timeout in seconds
    #[arg(long, env = "ASA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ASA_OUTPUT",
        default_value = "json",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the result on stdout
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// `changed`, `ok` or `failed: <msg>` (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Converge a network object (host, subnet, range, FQDN)
    #[command(alias = "obj")]
    NetworkObject(NetworkObjectArgs),

    /// Converge one member or the description of a network object-group
    #[command(alias = "group")]
    NetworkObjectGroup(NetworkObjectGroupArgs),

    /// Converge a service object (protocol and ports)
    #[command(alias = "svc")]
    ServiceObject(ServiceObjectArgs),

    /// Converge an IKEv1 policy
    #[command(alias = "ike")]
    Ikev1Policy(Ikev1PolicyArgs),

    /// Save the running configuration (write memory)
    WriteMem,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

const STATES: [&str; 2] = ["present", "absent"];

const CATEGORIES: [&str; 8] = [
    "ipv4_address",
    "ipv6_address",
    "ipv4_subnet",
    "ipv6_subnet",
    "ipv4_range",
    "ipv6_range",
    "ipv4_fqdn",
    "ipv6_fqdn",
];

const GROUP_CATEGORIES: [&str; 10] = [
    "ipv4_address",
    "ipv6_address",
    "ipv4_subnet",
    "ipv6_subnet",
    "ipv4_range",
    "ipv6_range",
    "ipv4_fqdn",
    "ipv6_fqdn",
    "object",
    "object_group",
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  OBJECTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NetworkObjectArgs {
    /// Object name
    #[arg(long)]
    pub name: String,

    /// Whether the object should exist
    #[arg(long, default_value = "present", value_parser = STATES)]
    pub state: String,

    /// Address category (required with --state present)
    #[arg(long, value_parser = CATEGORIES)]
    pub category: Option<String>,

    /// Address, subnet, range or FQDN
    #[arg(long)]
    pub value: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct NetworkObjectGroupArgs {
    /// Object-group name
    #[arg(long)]
    pub name: String,

    /// Whether the group should exist
    #[arg(long, default_value = "present", value_parser = STATES)]
    pub state: String,

    /// Member category
    #[arg(long, value_parser = GROUP_CATEGORIES)]
    pub category: Option<String>,

    /// Member address, or the referenced object/group name
    #[arg(long)]
    pub value: Option<String>,

    /// Whether the member should be in the group
    #[arg(long, value_parser = STATES)]
    pub entry_state: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Full member list (not supported yet)
    #[arg(long, value_delimiter = ',')]
    pub members: Option<Vec<String>>,
}

#[derive(Debug, Args)]
pub struct ServiceObjectArgs {
    /// Object name
    #[arg(long)]
    pub name: String,

    /// Whether the object should exist
    #[arg(long, default_value = "present", value_parser = STATES)]
    pub state: String,

    /// IP protocol keyword or number (0-255)
    #[arg(long)]
    pub protocol: Option<String>,

    /// Source port number or service name (tcp/udp only)
    #[arg(long)]
    pub src_port: Option<String>,

    /// Destination port number or service name (tcp/udp only)
    #[arg(long)]
    pub dst_port: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct Ikev1PolicyArgs {
    /// Policy priority (1-65535)
    #[arg(long)]
    pub priority: String,

    /// Whether the policy should exist
    #[arg(long, default_value = "present", value_parser = STATES)]
    pub state: String,

    #[arg(long, value_parser = ["pre-share", "rsa-sig"])]
    pub authentication: Option<String>,

    #[arg(long, value_parser = ["des", "3des", "aes-128", "aes-192", "aes-256"])]
    pub encryption: Option<String>,

    #[arg(long, value_parser = ["md5", "sha"])]
    pub hash: Option<String>,

    /// Diffie-Hellman group (1, 2 or 5)
    #[arg(long)]
    pub group: Option<String>,

    /// SA lifetime in seconds (120-2147483647)
    #[arg(long)]
    pub lifetime: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (passwords redacted)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a profile's password in the system keyring
    SetPassword {
        /// Profile name (defaults to the active profile)
        #[arg(long)]
        profile: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
