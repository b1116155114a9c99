// src/domain/provision/payload.rs
//
// Wire shapes of the request bodies. Field names follow the control plane's
// camelCase JSON; empty structs serialize to `{}` markers.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceProfileBody<'a> {
    pub display_name: &'a str,
    pub mysql_profile: MysqlProfile<'a>,
    pub static_service_ip_connectivity: Empty,
}

#[derive(Debug, Serialize)]
pub struct MysqlProfile<'a> {
    pub hostname: &'a str,
    pub port: u16,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationProfileBody<'a> {
    pub display_name: &'a str,
    pub gcs_profile: GcsProfile<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsProfile<'a> {
    pub bucket_name: &'a str,
    pub root_path: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamBody<'a> {
    pub display_name: &'a str,
    pub source_config: SourceConfig,
    pub destination_config: DestinationConfig,
    pub backfill_all: BackfillAll,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    pub source_connection_profile_name: String,
    pub mysql_source_config: MysqlSourceConfig,
}

/// Empty allow and reject lists: replicate every database.
#[derive(Debug, Serialize, Default)]
pub struct MysqlSourceConfig {
    pub allowlist: MysqlDatabases,
    pub rejectlist: MysqlDatabases,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MysqlDatabases {
    pub mysql_databases: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationConfig {
    pub destination_connection_profile_name: String,
    pub gcs_destination_config: GcsDestinationConfig,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GcsDestinationConfig {
    pub path: String,
    pub avro_file_format: Empty,
}

/// Backfill everything, no excluded objects.
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BackfillAll {
    pub mysql_excluded_objects: Empty,
}

#[derive(Debug, Serialize)]
pub struct StateUpdate<'a> {
    pub state: &'a str,
}

#[derive(Debug, Serialize, Default, Clone, Copy)]
pub struct Empty {}

pub const STATE_RUNNING: &str = "RUNNING";
