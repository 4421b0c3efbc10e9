use clap::{Parser, Subcommand};
use flowcraft::prelude::*;
use serde_json::Value;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Validates and compiles authored flow definitions into platform-ready flow JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and compile a flow, printing or saving the submission document
    Compile {
        /// Path to the flow JSON (screen array, `{version, screens}`, or a stored flow record)
        input: String,
        /// Write the compiled document here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Schema version for the document; defaults to the input's `version`
        #[arg(long)]
        version_tag: Option<String>,
        /// Reject field names that collide or vanish after sanitization
        #[arg(long)]
        strict: bool,
        /// Additional component type tags that must not carry an `id`
        #[arg(long = "no-id-type", value_name = "TAG")]
        no_id_types: Vec<String>,
    },
    /// Report every structural problem in a flow without compiling it
    Validate {
        /// Path to the flow JSON
        input: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compile {
            input,
            output,
            version_tag,
            strict,
            no_id_types,
        } => run_compile(&input, output, version_tag, strict, &no_id_types),
        Command::Validate { input } => run_validate(&input),
    }
}

fn run_compile(
    input: &str,
    output: Option<String>,
    version_tag: Option<String>,
    strict: bool,
    no_id_types: &[String],
) {
    let start = Instant::now();
    let raw = load_json(input);

    let version = version_tag
        .or_else(|| stored_version(&raw))
        .unwrap_or_else(|| {
            exit_with_error("No schema version found in the input; pass --version-tag")
        });

    let screens = raw
        .into_screens()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read screens: {}", e)));

    let mut builder = Compiler::builder(screens).strict_field_names(strict);
    for tag in no_id_types {
        builder = builder.with_no_id_type(tag);
    }

    let compiled = builder
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    eprintln!(
        "Compiled {} screens with {} fields in {:?}",
        compiled.screens.len(),
        compiled.fields.len(),
        start.elapsed()
    );

    let document = compiled.into_document(version);
    match output {
        Some(path) => {
            document
                .save(&path)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            eprintln!("  -> Wrote compiled flow to '{}'", path);
        }
        None => {
            let json = document
                .to_json_string()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", json);
        }
    }
}

fn run_validate(input: &str) {
    let screens = load_json(input)
        .into_screens()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read screens: {}", e)));

    let problems = diagnose(&screens);
    if problems.is_empty() {
        println!("Flow is valid ({} screens).", screens.len());
        return;
    }
    for problem in &problems {
        eprintln!("  -> {}", problem);
    }
    exit_with_error(&format!("{} structural problem(s) found", problems.len()));
}

fn load_json(path: &str) -> Value {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read flow file '{}': {}", path, e))
    });
    serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)))
}

fn stored_version(raw: &Value) -> Option<String> {
    raw.get("version")
        .or_else(|| raw.get("schema_version"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
