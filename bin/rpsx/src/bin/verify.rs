//! Verify Binary
//!
//! Checks a finished game: recomputes HMAC-SHA256 of the revealed computer
//! move under the revealed key and compares it with the HMAC shown before
//! the user moved.
//!
//! ```text
//! rpsx-verify --key <HEX> --move scissors --hmac <HEX>
//! ```
//!
//! Prints `valid` and exits 0, or prints `invalid` and exits 1.
use clap::Parser;
use rpsx_commit::Commitment;
use rpsx_commit::SecretKey;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Key revealed at the end of the game (hex)
    #[arg(long)]
    key: String,
    /// Computer move revealed at the end of the game
    #[arg(long = "move")]
    name: String,
    /// HMAC shown before the user moved (hex)
    #[arg(long)]
    hmac: String,
}

impl Args {
    fn check(&self) -> anyhow::Result<bool> {
        let key = self.key.parse::<SecretKey>()?;
        let commitment = self.hmac.parse::<Commitment>()?;
        Ok(commitment.verify(&key, &self.name))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.check()? {
        true => {
            println!("valid");
            Ok(())
        }
        false => {
            println!("invalid");
            std::process::exit(1)
        }
    }
}
