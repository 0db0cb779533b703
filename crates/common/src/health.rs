use serde::Serialize;

/// Version string reported by the health endpoint.
pub const DEPLOY_VERSION: &str = "PulseCheck v1.1 – deployed via CI/CD";

/// The only status value a running instance reports.
pub const STATUS_OK: &str = "ok";

/// Payload returned by `GET /health`.
///
/// Built per request and serialized immediately. `status` is always
/// [`STATUS_OK`]; there is no constructor for any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'static str>,
}

impl HealthStatus {
    /// Status with the deployed version attached.
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK,
            version: Some(DEPLOY_VERSION),
        }
    }

    /// Status without version information.
    pub fn minimal() -> Self {
        Self {
            status: STATUS_OK,
            version: None,
        }
    }

    pub fn version(&self) -> Option<&'static str> {
        self.version
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::ok()
    }
}
