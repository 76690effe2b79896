//! fontlink CLI

use std::io;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use serde_json::Value;

use fontlink_core::args::{classify, FontArg, FontMap, Weight};
use fontlink_core::link::{build, build_from_values, LinkTag};
use fontlink_core::output::{write_html, write_json_pretty};

/// CLI entrypoint for fontlink.
#[derive(Debug, Parser)]
#[command(
    name = "fontlink",
    about = "Build Google Webfonts stylesheet <link> tags"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a stylesheet <link> tag from font specs
    Tag(TagArgs),
}

#[derive(Debug, Args)]
struct TagArgs {
    /// Font specs: `droid_sans`, `"Droid Sans"`, or `droid_sans:400,700`
    #[arg(value_hint = ValueHint::Other, required_unless_present = "args_json")]
    specs: Vec<String>,

    /// Character subsets to request (e.g. latin,cyrillic)
    #[arg(short = 's', long = "subset", value_delimiter = ',', value_hint = ValueHint::Other)]
    subset: Vec<String>,

    /// Read a JSON array of font arguments instead of positional specs
    #[arg(
        long = "args-json",
        value_hint = ValueHint::Other,
        conflicts_with_all = ["specs", "subset"]
    )]
    args_json: Option<String>,

    /// Emit an https:// href
    #[arg(long = "secure", action = ArgAction::SetTrue)]
    secure: bool,

    /// Print the attribute map as JSON instead of markup
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tag(args) => run_tag(args),
    }
}

fn run_tag(args: TagArgs) -> Result<()> {
    let tag = build_tag(&args)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        write_json_pretty(&tag, &mut handle)?;
    } else {
        write_html(&tag, &mut handle)?;
    }

    Ok(())
}

fn build_tag(args: &TagArgs) -> Result<LinkTag> {
    if let Some(doc) = &args.args_json {
        let values: Vec<Value> =
            serde_json::from_str(doc).context("invalid JSON argument document")?;
        return build_from_values(&values, args.secure);
    }

    let mut font_args = args
        .specs
        .iter()
        .map(|spec| parse_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    if !args.subset.is_empty() {
        font_args.push(FontArg::Map(
            FontMap::new().with_subset(args.subset.clone()),
        ));
    }

    build(&font_args, args.secure)
}

/// Parse one positional spec: `name` or `name:w1,w2,...`.
///
/// Identifier-shaped names (lowercase, digits, underscores) behave like
/// symbols and get title-cased; anything else is taken as a display
/// name.
fn parse_spec(spec: &str) -> Result<FontArg> {
    match spec.split_once(':') {
        None => Ok(FontArg::Name(classify(spec))),
        Some((name, weights_raw)) => {
            if name.is_empty() {
                bail!("empty font name in spec: {spec}");
            }

            let weights = weights_raw
                .split(',')
                .filter(|chunk| !chunk.is_empty())
                .map(parse_weight)
                .collect::<Result<Vec<_>>>()?;

            Ok(FontArg::Map(FontMap::new().entry(classify(name), weights)))
        }
    }
}

fn parse_weight(raw: &str) -> Result<Weight> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        let value = raw
            .parse::<u64>()
            .with_context(|| format!("weight out of range: {raw}"))?;
        Ok(Weight::Value(value))
    } else {
        Ok(Weight::Style(raw.to_string()))
    }
}
