//! Access Key Commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::client::DaemonClient;
use crate::generated::AccessKey;
use crate::output::{format_timestamp, print_item, print_success, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Issue a registration key
    Create {
        /// Network name
        network: String,

        /// Key name
        name: String,

        /// Number of registrations the key admits
        #[arg(short, long, default_value = "1")]
        uses: u32,

        /// Lifetime in seconds; never expires when omitted
        #[arg(long)]
        ttl: Option<i64>,
    },
}

#[derive(Serialize)]
pub struct AccessKeyDisplay {
    pub network: String,
    pub name: String,
    pub value: String,
    pub uses_remaining: u32,
    pub expires: String,
}

impl From<AccessKey> for AccessKeyDisplay {
    fn from(key: AccessKey) -> Self {
        Self {
            network: key.network,
            name: key.name,
            value: key.value,
            uses_remaining: key.uses_remaining,
            expires: format_timestamp(key.expires_at),
        }
    }
}

impl TableDisplay for AccessKeyDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Network", "Name", "Value", "Uses Left", "Expires"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.network.clone(),
            self.name.clone(),
            self.value.clone(),
            self.uses_remaining.to_string(),
            self.expires.clone(),
        ]
    }
}

pub async fn execute(cmd: KeyCommands, mut client: DaemonClient, format: OutputFormat) -> Result<()> {
    match cmd {
        KeyCommands::Create {
            network,
            name,
            uses,
            ttl,
        } => {
            let key = client
                .create_access_key(&network, &name, uses, ttl.unwrap_or(0))
                .await?;
            print_success(&format!("Access key '{}' created for network '{}'", name, network));
            print_item(&AccessKeyDisplay::from(key), format);
        }
    }

    Ok(())
}
