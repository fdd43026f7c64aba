//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one `FigureEncoder` through `init -> encode -> destroy` outside
//!   any transport, to check what a figure looks like on the wire.
//! - Keep output deterministic: only the encoded text goes to stdout.

use clap::Parser;
use figcast_core::{
    default_log_level, init_logging, EndpointConfig, Figure, FigureEncoder, JsonFormat,
    TextEncoder,
};
use log::info;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_ENDPOINT: &str = "/figures";

/// Encodes one JSON figure the way a `FigureEncoder` puts it on the wire.
#[derive(Debug, Default, Parser)]
#[command(name = "figcast_cli", version)]
struct Args {
    /// Absolute directory for rolling log files; logging stays off without it.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Endpoint path handed to the encoder's `init`.
    #[arg(long)]
    endpoint: Option<String>,
    /// Indent output with two spaces instead of the compact wire form.
    #[arg(long)]
    pretty: bool,
    /// JSON file to encode; stdin when omitted.
    input: Option<PathBuf>,
}

fn read_figure(input: Option<&PathBuf>) -> Result<Figure, String> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            buf
        }
    };
    text.parse::<Figure>()
        .map_err(|err| format!("input is not valid json: {err}"))
}

fn run(args: Args) -> Result<String, String> {
    if let Some(dir) = &args.log_dir {
        init_logging(default_log_level(), dir).map_err(|err| err.to_string())?;
    }

    let figure = read_figure(args.input.as_ref())?;
    let format = if args.pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };
    let config = EndpointConfig::new(args.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
        .with_format(format);

    let mut encoder = FigureEncoder::new();
    encoder.init(&config).map_err(|err| err.to_string())?;
    let encoded = encoder.encode(&figure);
    encoder.destroy().map_err(|err| err.to_string())?;
    let text = encoded.map_err(|err| err.to_string())?;

    info!(
        "event=cli_encode module=cli status=ok kind={} bytes={}",
        figure.kind().unwrap_or("-"),
        text.len()
    );
    Ok(text)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("figcast_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Args};
    use clap::{CommandFactory, Parser};
    use std::io::Write;

    #[test]
    fn args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_input_path() {
        let args = Args::try_parse_from([
            "figcast_cli",
            "--pretty",
            "--endpoint",
            "/x/{id}",
            "fig.json",
        ])
        .expect("valid args");
        assert!(args.pretty);
        assert_eq!(args.endpoint.as_deref(), Some("/x/{id}"));
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("fig.json")));
    }

    #[test]
    fn rejects_unknown_flag_and_missing_values() {
        assert!(Args::try_parse_from(["figcast_cli", "--loud"]).is_err());
        assert!(Args::try_parse_from(["figcast_cli", "--endpoint"]).is_err());
        assert!(Args::try_parse_from(["figcast_cli", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn version_flag_is_handled_by_clap() {
        let err = Args::try_parse_from(["figcast_cli", "--version"])
            .expect_err("version short-circuits parsing");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn run_encodes_file_contents_compactly() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ \"type\": \"circle\", \"radius\": 5 }}").expect("write fixture");

        let text = run(Args {
            input: Some(file.path().to_path_buf()),
            ..Args::default()
        })
        .expect("run succeeds");
        assert_eq!(text, r#"{"type":"circle","radius":5}"#);
    }

    #[test]
    fn run_reports_invalid_endpoint() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{}}").expect("write fixture");

        let err = run(Args {
            input: Some(file.path().to_path_buf()),
            endpoint: Some("figures".to_string()),
            ..Args::default()
        })
        .expect_err("relative endpoint must fail");
        assert!(err.contains("endpoint path is invalid"), "unexpected: {err}");
    }
}
