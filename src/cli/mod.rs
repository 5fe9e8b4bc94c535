use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modelpull")]
#[command(version, about = "Fetch Base64-encoded league model blobs", long_about = None)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Fetch and decode the model for one or more league codes
	Fetch {
		/// League codes to fetch (e.g., "E0"); duplicates are served from cache
		#[arg(required = true)]
		league: Vec<String>,

		/// Directory to write decoded models to (as model_<LEAGUE>.bin)
		#[arg(long)]
		output: Option<PathBuf>,

		/// Base URL of the static host serving the model files
		#[arg(long, env = "MODELPULL_BASE_URL", default_value = modelpull::DEFAULT_BASE_URL)]
		base_url: String,
	},
}
