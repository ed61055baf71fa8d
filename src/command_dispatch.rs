//! Purpose: Hold top-level CLI command dispatch for `sagemaker-json`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Flags override environment configuration, never the other way round.
//! Invariants: `marshal` reads only the target prefix from the environment.

use super::*;

pub(super) fn dispatch_command(command: Command, pretty: bool) -> Result<RunOutcome, Error> {
    match command {
        Command::Operations => {
            let names: Vec<&str> = OPERATIONS.iter().map(OperationDescriptor::name).collect();
            emit_json(&json!({ "operations": names }), pretty);
            Ok(RunOutcome::ok())
        }
        Command::Marshal {
            operation,
            input,
            headers,
            target_prefix,
        } => {
            let descriptor = lookup_operation(&operation)?;
            let input = read_input(input)?;
            let mut marshaller = ClientConfig::marshaller_from_env();
            if let Some(prefix) = target_prefix {
                marshaller = marshaller.with_target_prefix(prefix);
            }
            for raw in &headers {
                let (name, value) = parse_header_arg(raw)?;
                marshaller = marshaller.with_header(name, value);
            }
            let request = descriptor.marshall_json(&marshaller, &input)?;
            emit_json(&envelope_json(&request)?, pretty);
            Ok(RunOutcome::ok())
        }
        Command::Unmarshal { operation, input } => {
            let descriptor = lookup_operation(&operation)?;
            let input = read_input(input)?;
            let value = descriptor.unmarshall_json(&input)?;
            emit_json(&value, pretty);
            Ok(RunOutcome::ok())
        }
        Command::Invoke {
            operation,
            input,
            endpoint,
            timeout_ms,
            target_prefix,
        } => {
            let descriptor = lookup_operation(&operation)?;
            let mut config = ClientConfig::from_env()?;
            if let Some(endpoint) = endpoint {
                config = config.with_endpoint(&endpoint)?;
            }
            if let Some(raw) = timeout_ms {
                config = config.with_timeout(parse_timeout_ms(&raw)?);
            }
            if let Some(prefix) = target_prefix {
                config = config.with_target_prefix(prefix);
            }
            let client = SageMakerClient::new(&config)?;
            let input = read_input(input)?;
            let value = client.invoke_descriptor(descriptor, &input)?;
            emit_json(&value, pretty);
            Ok(RunOutcome::ok())
        }
    }
}

