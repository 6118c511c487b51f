use std::error::Error;
use std::fs;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use genjson::{Indent, Node, ParseOptions, SerializeOptions};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "genjson", version, about = "Query JSON documents without a schema")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Dot/bracket path to resolve, e.g. `items[0].name`.
    #[arg(short, long, value_name = "path")]
    query: Option<String>,

    /// Read the resolved node as this type instead of printing it verbatim.
    #[arg(short = 't', long = "type", value_enum, value_name = "type")]
    as_type: Option<TypeArg>,

    /// Spread output over multiple lines.
    #[arg(long)]
    pretty: bool,

    /// Indentation size for --pretty (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Classify literals with a leading '-' as numbers.
    #[arg(long = "signed-numbers")]
    signed_numbers: bool,

    /// Maximum container nesting depth.
    #[arg(long = "max-depth", value_name = "number")]
    max_depth: Option<usize>,

    /// Log parse and query activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    String,
    Integer,
    Float,
    Boolean,
    Object,
    Array,
    Value,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    fn label(&self) -> &str {
        match self {
            InputSource::Stdin => "stdin",
            InputSource::File(path) => path,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (root, input_source) = read_input(args.input.as_deref(), &parse_options(&args))?;
    debug!(source = input_source.label(), kind = %root.kind(), "document loaded");

    let node = match args.query.as_deref() {
        Some(path) => root.query(path)?,
        None => &root,
    };

    let output_target = OutputTarget::from_arg(args.output.as_deref());
    with_output_writer(output_target.path(), |writer| {
        write_node(writer, node, &args)
    })
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn parse_options(args: &Args) -> ParseOptions {
    let mut options = ParseOptions::new().with_signed_numbers(args.signed_numbers);
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }
    options
}

fn read_input(
    input: Option<&str>,
    options: &ParseOptions,
) -> Result<(Node, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let root = genjson::parse_reader_with_options(io::stdin().lock(), options)?;
            Ok((root, InputSource::Stdin))
        }
        Some(path) => {
            let bytes = fs::read(path)?;
            let root = genjson::parse_slice_with_options(&bytes, options)?;
            Ok((root, InputSource::File(path.to_string())))
        }
    }
}

fn write_node(writer: &mut dyn Write, node: &Node, args: &Args) -> Result<(), Box<dyn Error>> {
    let indent = if args.pretty { args.indent } else { 0 };
    match args.as_type {
        None => {
            let text = if args.pretty {
                let options = SerializeOptions::new().with_indent(Indent::spaces(args.indent));
                genjson::serialize_pretty(node, &options)
            } else {
                genjson::serialize(node)
            };
            writer.write_all(text.as_bytes())?;
        }
        Some(TypeArg::String) => writer.write_all(node.get_string()?.as_bytes())?,
        Some(TypeArg::Integer) => write!(writer, "{}", node.get_integer()?)?,
        Some(TypeArg::Float) => write!(writer, "{}", node.get_float()?)?,
        Some(TypeArg::Boolean) => write!(writer, "{}", node.get_boolean()?)?,
        Some(TypeArg::Object) => {
            let value = genjson::Value::Object(node.get_object()?);
            write_json(writer, &Value::from(value), indent)?;
        }
        Some(TypeArg::Array) => {
            let value = genjson::Value::Array(node.get_array()?);
            write_json(writer, &Value::from(value), indent)?;
        }
        Some(TypeArg::Value) => write_json(writer, &Value::from(node.to_value()?), indent)?,
    }
    Ok(())
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.as_str()),
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
