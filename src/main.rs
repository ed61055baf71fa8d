//! Purpose: `sagemaker-json` CLI entry point.
//! Role: Binary crate root; parses args, runs one command, emits JSON on stdout.
//! Invariants: Successful commands print exactly one JSON value on stdout.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
#![allow(clippy::result_large_err)]
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueHint, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

mod command_dispatch;

use sagemaker_json::api::{
    ClientConfig, Error, ErrorKind, HttpRequest, OPERATIONS, OperationDescriptor, SageMakerClient,
    find_operation, parse_timeout_ms, to_exit_code,
};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint(clap_error_hint(&err)));
            }
        },
    };

    command_dispatch::dispatch_command(cli.command, cli.pretty)
        .map_err(add_io_hint)
        .map_err(add_internal_hint)
}

#[derive(Parser)]
#[command(
    name = "sagemaker-json",
    version,
    about = "Marshal, unmarshal and send SageMaker JSON-RPC requests",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

COMMANDS
{subcommands}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"Requests and responses are JSON. Unknown fields are dropped, unset fields are omitted.

Mental model:
  - `marshal` shows the HTTP envelope a request becomes
  - `unmarshal` reads a response body the way the client does
  - `invoke` sends the request to an endpoint
"#,
    after_help = r#"EXAMPLES
  $ sagemaker-json operations
  $ sagemaker-json marshal CreateModel '{"ModelName":"m1","ExecutionRoleArn":"arn:aws:iam::123:role/x"}'
  $ sagemaker-json unmarshal DescribeModel -f response.json
  $ sagemaker-json invoke ListModels '{}' --endpoint http://127.0.0.1:8080

ENVIRONMENT
  SAGEMAKER_ENDPOINT       default endpoint for `invoke`
  SAGEMAKER_TIMEOUT_MS     default request timeout for `invoke`
  SAGEMAKER_TARGET_PREFIX  X-Amz-Target prefix (default: SageMaker)
  RUST_LOG                 log filter for stderr diagnostics (default: warn)"#,
    arg_required_else_help = true,
    disable_help_subcommand = false
)]
struct Cli {
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "List supported operation names")]
    Operations,
    #[command(
        about = "Build the HTTP envelope for a request",
        long_about = r#"Build the HTTP envelope for a request.

Reads the request JSON (inline, -f FILE, -f - or piped stdin), keeps only fields the
operation knows, and prints {"method","path","headers","body"}."#
    )]
    Marshal {
        #[arg(help = "Operation name, e.g. CreateModel")]
        operation: String,
        #[command(flatten)]
        input: InputArgs,
        #[arg(
            long = "header",
            value_name = "NAME:VALUE",
            help = "Extra request header (repeatable)"
        )]
        headers: Vec<String>,
        #[arg(long, help = "X-Amz-Target prefix (default: SageMaker)")]
        target_prefix: Option<String>,
    },
    #[command(about = "Decode a response body into the operation's result")]
    Unmarshal {
        #[arg(help = "Operation name, e.g. DescribeModel")]
        operation: String,
        #[command(flatten)]
        input: InputArgs,
    },
    #[command(about = "Send a request and print the decoded result")]
    Invoke {
        #[arg(help = "Operation name, e.g. ListModels")]
        operation: String,
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, help = "Service origin, e.g. https://api.sagemaker.us-east-1.amazonaws.com")]
        endpoint: Option<String>,
        #[arg(long, help = "Request timeout in milliseconds")]
        timeout_ms: Option<String>,
        #[arg(long, help = "X-Amz-Target prefix (default: SageMaker)")]
        target_prefix: Option<String>,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    #[arg(help = "Inline JSON")]
    json: Option<String>,
    #[arg(
        short = 'f',
        long = "file",
        help = "Input file path (use - for stdin)",
        value_hint = ValueHint::FilePath
    )]
    file: Option<PathBuf>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn lookup_operation(name: &str) -> Result<&'static OperationDescriptor, Error> {
    find_operation(name).ok_or_else(|| {
        Error::new(ErrorKind::Usage)
            .with_message(format!("unknown operation: {name}"))
            .with_hint("Run `sagemaker-json operations` to list supported names.")
    })
}

fn read_input(input: InputArgs) -> Result<Vec<u8>, Error> {
    match (input.json, input.file) {
        (Some(_), Some(_)) => Err(Error::new(ErrorKind::Usage)
            .with_message("inline JSON cannot be combined with --file")
            .with_hint("Pass JSON inline or with --file, not both.")),
        (Some(json), None) => Ok(json.into_bytes()),
        (None, Some(path)) if path.as_os_str() == "-" => read_stdin(),
        (None, Some(path)) => read_file(&path),
        (None, None) => {
            if io::stdin().is_terminal() {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message("missing JSON input")
                    .with_hint("Provide JSON inline, via --file, or pipe JSON to stdin."));
            }
            read_stdin()
        }
    }
}

fn read_stdin() -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_source(err)
    })?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("failed to read input file: {}", path.display()))
            .with_source(err)
    })
}

fn parse_header_arg(raw: &str) -> Result<(String, String), Error> {
    let parsed = raw
        .split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty());
    match parsed {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(Error::new(ErrorKind::Usage)
            .with_message(format!("invalid header: {raw}"))
            .with_hint("Use --header NAME:VALUE.")),
    }
}

fn envelope_json(request: &HttpRequest) -> Result<Value, Error> {
    let mut headers = Map::new();
    for (name, value) in request.headers() {
        headers.insert(name.clone(), json!(value));
    }
    let body: Value = serde_json::from_slice(request.body()).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("marshalled body is not valid json")
            .with_operation(request.operation())
            .with_source(err)
    })?;
    Ok(json!({
        "method": request.method(),
        "path": request.path(),
        "headers": Value::Object(headers),
        "body": body,
    }))
}

fn emit_json(value: &Value, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn add_io_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Io || err.hint().is_some() {
        return err;
    }
    err.with_hint("I/O error. Check the path, endpoint reachability, and timeout.")
}

fn add_internal_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Internal || err.hint().is_some() {
        return err;
    }
    err.with_hint(
        "Unexpected internal failure. Retry with RUST_LOG=debug and share command/context if it persists.",
    )
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_text(err));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::InvalidArgument => "invalid argument".to_string(),
        ErrorKind::Marshal => "unable to marshall request".to_string(),
        ErrorKind::Unmarshal => "unable to unmarshall response".to_string(),
        ErrorKind::Service => "service error".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(operation) = err.operation() {
        inner.insert("operation".to_string(), json!(operation));
    }
    if let Some(status) = err.status() {
        inner.insert("status".to_string(), json!(status));
    }
    if let Some(code) = err.code() {
        inner.insert("code".to_string(), json!(code));
    }
    if let Some(request_id) = err.request_id() {
        inner.insert("request_id".to_string(), json!(request_id));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error) -> String {
    let mut lines = vec![format!("error: {}", error_message(err))];
    if let Some(hint) = err.hint() {
        lines.push(format!("hint: {hint}"));
    }
    if let Some(operation) = err.operation() {
        lines.push(format!("operation: {operation}"));
    }
    if let Some(code) = err.code() {
        let status = err.status().map(|s| format!(" (status {s})")).unwrap_or_default();
        lines.push(format!("code: {code}{status}"));
    }
    if let Some(cause) = error_causes(err).first() {
        lines.push(format!("caused by: {cause}"));
    }
    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

fn clap_error_hint(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let subcommand = rendered
        .lines()
        .find_map(|line| line.trim().strip_prefix("Usage: "))
        .and_then(|usage| {
            let mut tokens = usage.split_whitespace();
            tokens.find(|token| *token == "sagemaker-json")?;
            tokens.next().filter(|token| {
                !token.starts_with('-') && !token.starts_with('<') && !token.starts_with('[')
            })
        });
    match subcommand {
        Some(name) => format!("Try `sagemaker-json {name} --help`."),
        None => "Try `sagemaker-json --help`.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{error_json, parse_header_arg};
    use sagemaker_json::api::{Error, ErrorKind};
    use serde_json::json;

    #[test]
    fn header_arg_splits_on_first_colon() {
        assert_eq!(
            parse_header_arg("X-Trace: a:b").expect("header"),
            ("X-Trace".to_string(), "a:b".to_string())
        );
        assert_eq!(
            parse_header_arg(":value").expect_err("empty name").kind(),
            ErrorKind::Usage
        );
        assert_eq!(
            parse_header_arg("novalue").expect_err("no colon").kind(),
            ErrorKind::Usage
        );
    }

    #[test]
    fn error_json_includes_service_context() {
        let err = Error::new(ErrorKind::Service)
            .with_message("no such model")
            .with_operation("DescribeModel")
            .with_status(400)
            .with_code("ResourceNotFound");
        assert_eq!(
            error_json(&err),
            json!({"error": {
                "kind": "Service",
                "message": "no such model",
                "operation": "DescribeModel",
                "status": 400,
                "code": "ResourceNotFound"
            }})
        );
    }
}
