//! Process-backed gateway implementation.

use super::{SfCliConfig, decode_create_output, decode_query_output, values_argument};
use crate::extension::{
    domain::{ActingIdentity, RecordFields, RecordId, SoqlQuery},
    ports::{GatewayError, GatewayResult, QueryResult, RemoteDataGateway},
};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Gateway running each call as one `sf` CLI invocation.
///
/// The acting identity is passed as `--target-org`; authentication is the
/// CLI's concern.
#[derive(Debug, Clone)]
pub struct SfCliGateway {
    config: SfCliConfig,
}

impl SfCliGateway {
    /// Creates a gateway with the given configuration.
    #[must_use]
    pub const fn new(config: SfCliConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SfCliConfig {
        &self.config
    }

    fn command(&self, subcommand: &[&str], identity: &ActingIdentity) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .args(subcommand)
            .args(["--target-org", identity.as_str(), "--json"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(version) = &self.config.api_version {
            command.args(["--api-version", version.as_str()]);
        }
        command
    }

    async fn run(&self, mut command: Command) -> GatewayResult<Vec<u8>> {
        let output = command.output().await.map_err(GatewayError::transport)?;
        debug!(
            program = %self.config.program,
            status = ?output.status.code(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "sf CLI call finished"
        );
        // The CLI prints its JSON envelope to stdout for both outcomes.
        Ok(output.stdout)
    }
}

#[async_trait]
impl RemoteDataGateway for SfCliGateway {
    async fn query(
        &self,
        statement: &SoqlQuery,
        identity: &ActingIdentity,
    ) -> GatewayResult<QueryResult> {
        let soql = statement.to_string();
        debug!(%soql, %identity, "running query");
        let mut command = self.command(&["data", "query"], identity);
        command.args(["--query", soql.as_str()]);
        let stdout = self.run(command).await?;
        decode_query_output(&stdout)
    }

    async fn create(
        &self,
        object_type: &str,
        fields: &RecordFields,
        identity: &ActingIdentity,
    ) -> GatewayResult<RecordId> {
        let values = values_argument(fields)?;
        debug!(object_type, %identity, "creating record");
        let mut command = self.command(&["data", "create", "record"], identity);
        command.args(["--sobject", object_type, "--values", values.as_str()]);
        let stdout = self.run(command).await?;
        decode_create_output(&stdout)
    }
}
