use clap::{Args, Parser, Subcommand};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Surprises JWT tools.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new JWT token.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Secret key used to sign JWT token.
    #[arg(short, long)]
    secret: String,
    /// JWT `sub` claim, identifier of the user.
    #[arg(long)]
    sub: Uuid,
    /// JWT `iss` claim.
    #[arg(long, default_value = "surprise-platform")]
    iss: String,
    /// JWT `aud` claim.
    #[arg(long, default_value = "surprise-users")]
    aud: String,
    /// JWT `exp` claim.
    #[arg(long)]
    exp: humantime::Duration,
}

impl GenerateArgs {
    fn claims(&self, now: OffsetDateTime) -> Value {
        json!({
            "sub": self.sub,
            "iss": self.iss,
            "aud": self.aud,
            "exp": (now + *self.exp.as_ref()).unix_timestamp(),
        })
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let args = Cli::parse();
    match &args.command {
        Commands::Generate(generate_args) => {
            let jwt = encode(
                &Header::default(),
                &generate_args.claims(OffsetDateTime::now_utc()),
                &EncodingKey::from_secret(generate_args.secret.as_bytes()),
            )?;
            println!("{jwt}");
        }
    }

    Ok(())
}
