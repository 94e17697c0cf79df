use clap::{Parser, Subcommand};
use ectime_cli::backend::{Backend, Clock};
use ectime_cli::sign::{OutputFormat, SignOptions};
use ectime_cli::{der, list, sign};
use ectime_types::HarnessError;
use tracing_subscriber::EnvFilter;

/// ECDSA signing timing harness.
#[derive(Parser)]
#[command(name = "ectime")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a key, then sign a random message repeatedly and time each signature.
    Sign {
        /// Named curve (secp256r1, secp384r1, secp256k1).
        curve: String,
        /// Hash applied to the message (sha1, sha224, sha256, sha384, sha512, none).
        hash: String,
        /// Number of signatures to collect.
        count: usize,
        /// Shape in which the backend reports signatures.
        #[arg(short, long, value_enum, default_value = "fixed")]
        backend: Backend,
        /// Per-signature output format.
        #[arg(short, long, value_enum, default_value = "rs")]
        output: OutputFormat,
        /// Length of the random message in bytes.
        #[arg(short, long, default_value = "64")]
        message_len: usize,
        /// Clock used to time each signing call.
        #[arg(long, value_enum, default_value = "cpu")]
        clock: Clock,
        /// Print the private scalar as a third header field.
        #[arg(long)]
        debug_key: bool,
    },
    /// DER signature conversion.
    Der {
        #[command(subcommand)]
        action: DerAction,
    },
    /// List supported curves and hashes.
    List,
}

#[derive(Subcommand)]
enum DerAction {
    /// Encode unsigned hex r and s into a DER signature.
    Encode { r: String, s: String },
    /// Decode a hex DER signature into r and s.
    Decode { signature: String },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Sign {
            curve,
            hash,
            count,
            backend,
            output,
            message_len,
            clock,
            debug_key,
        } => sign::run(
            curve,
            hash,
            *count,
            SignOptions {
                backend: *backend,
                output: *output,
                message_len: *message_len,
                clock: *clock,
                debug_key: *debug_key,
            },
        ),
        Commands::Der { action } => {
            let mut stdout = std::io::stdout().lock();
            match action {
                DerAction::Encode { r, s } => der::encode(r, s, &mut stdout),
                DerAction::Decode { signature } => der::decode(signature, &mut stdout),
            }
        }
        Commands::List => list::run(&mut std::io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        let code = e
            .downcast_ref::<HarnessError>()
            .map_or(1, HarnessError::exit_code);
        std::process::exit(code);
    }
}
