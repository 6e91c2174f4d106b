//! Command-line interface for inspecting info trees.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::{BuildConfig, DuplicateNamePolicy, DEFAULT_MAX_FILE_SIZE};
use crate::error::Result;
use crate::info::InfoTree;
use crate::mirror::{MirrorInfo, MirrorRules};
use crate::snapshot::TreeSnapshot;
use crate::xml::{parse_document, read_document};

/// xmlinfo - Build info trees from XML documents.
#[derive(Parser)]
#[command(name = "xmlinfo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the info tree of an XML file.
    Tree {
        /// XML file to read
        file: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Paths)]
        format: OutputFormat,
    },

    /// Exit with an error if any content would be skipped.
    Check {
        /// XML file to read
        file: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,
    },
}

/// Options shared by all subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct RuleArgs {
    /// Only wrap these tags; others are reported (repeatable)
    #[arg(long = "only", value_name = "TAG")]
    pub only: Vec<String>,

    /// Leave these tags out of the tree silently (repeatable)
    #[arg(long = "ignore", value_name = "TAG")]
    pub ignore: Vec<String>,

    /// Drop whitespace-only text
    #[arg(long)]
    pub skip_blank: bool,

    /// Attribute whose value names each element
    #[arg(long, value_name = "ATTR")]
    pub name_attr: Option<String>,

    /// Accept siblings that share a name
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Maximum input size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,
}

impl RuleArgs {
    fn mirror_rules(&self) -> MirrorRules {
        let mut rules = MirrorRules::new()
            .ignore(self.ignore.iter().cloned())
            .ignore_blank_text(self.skip_blank);
        if !self.only.is_empty() {
            rules = rules.recognize(self.only.iter().cloned());
        }
        if let Some(attr) = &self.name_attr {
            rules = rules.name_attribute(attr.clone());
        }
        rules
    }

    fn build_config(&self) -> BuildConfig {
        let policy = if self.allow_duplicates {
            DuplicateNamePolicy::FirstWins
        } else {
            DuplicateNamePolicy::Reject
        };
        BuildConfig::new()
            .with_duplicate_names(policy)
            .with_skip_blank_text(self.skip_blank)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One string path per node
    Paths,
    /// Nested YAML snapshot
    Yaml,
}

/// Run the CLI. Returns whether the document was processed without diagnostics.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tree {
            file,
            rules,
            format,
        } => tree_command(&file, &rules, format).map(|_| true),
        Commands::Check { file, rules } => check_command(&file, &rules),
    }
}

fn tree_command(file: &Path, args: &RuleArgs, format: OutputFormat) -> Result<()> {
    let xml = read_document(file, args.max_size)?;
    let doc = parse_document(&xml)?;
    let rules = args.mirror_rules();
    let tree = InfoTree::from_document(MirrorInfo::root(&rules), &doc, args.build_config())?;

    match format {
        OutputFormat::Paths => {
            for node in tree.iter() {
                match node.name() {
                    Some(name) => println!("{} {}", node.str_path(), style(name).cyan()),
                    None => println!("{}", node.str_path()),
                }
            }
        }
        OutputFormat::Yaml => print!("{}", TreeSnapshot::capture(&tree).to_yaml()?),
    }

    if !tree.diagnostics().is_empty() {
        eprintln!();
        eprintln!(
            "{} {}",
            style("Warnings:").yellow().bold(),
            tree.diagnostics().len()
        );
    }
    Ok(())
}

fn check_command(file: &Path, args: &RuleArgs) -> Result<bool> {
    let xml = read_document(file, args.max_size)?;
    let doc = parse_document(&xml)?;
    let rules = args.mirror_rules();
    let tree = InfoTree::from_document(MirrorInfo::root(&rules), &doc, args.build_config())?;

    for diagnostic in tree.diagnostics() {
        println!("{} {diagnostic}", style("warning:").yellow().bold());
    }

    let clean = tree.diagnostics().is_empty();
    if clean {
        println!(
            "{} {} nodes",
            style("OK").green().bold(),
            tree.node_count()
        );
    }
    Ok(clean)
}
