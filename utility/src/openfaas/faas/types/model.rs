use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FunctionResources Memory and CPU
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionResources {
    #[serde(default)]
    pub memory: String,
    #[serde(default)]
    pub cpu: String,
}

/// FunctionUsage CPU and memory reported by the provider when `usage=1` is requested
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionUsage {
    /// CPU usage in millicores, averaged across replicas
    #[serde(default)]
    pub cpu: f64,

    /// TotalMemoryBytes memory used by all replicas
    #[serde(rename = "totalMemoryBytes")]
    #[serde(default)]
    pub total_memory_bytes: f64,
}

/// FunctionStatus as returned by the gateway for a single function
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct FunctionStatus {
    /// Name is the name of the function deployment
    #[serde(default)]
    pub name: String,

    /// Image is a fully-qualified container image
    #[serde(default)]
    pub image: String,

    /// Namespace for the function, if supported by the faas_provider
    #[serde(default)]
    pub namespace: String,

    /// EnvProcess overrides the fprocess environment variable and can be used
    /// with the watchdog
    #[serde(rename = "envProcess")]
    #[serde(default)]
    pub env_process: String,

    #[serde(rename = "envVars")]
    #[serde(default)]
    pub env_vars: HashMap<String, String>,

    /// Constraints are specific to the faas_provider
    #[serde(default)]
    pub constraints: Vec<String>,

    #[serde(default)]
    pub secrets: Vec<String>,

    /// Labels are metadata for functions which may be used by the
    /// faas_provider or the gateway
    #[serde(default)]
    pub labels: HashMap<String, String>,

    #[serde(default)]
    pub annotations: HashMap<String, String>,

    #[serde(default)]
    pub limits: FunctionResources,

    #[serde(default)]
    pub requests: FunctionResources,

    /// ReadOnlyRootFilesystem removes write-access from the root filesystem
    /// mount-point.
    #[serde(rename = "readOnlyRootFilesystem")]
    #[serde(default)]
    pub read_only_root_filesystem: bool,

    // ================
    // Fields for status
    // ================
    /// InvocationCount count of invocations
    #[serde(rename = "invocationCount")]
    #[serde(default)]
    pub invocation_count: f64,

    /// Replicas desired within the cluster
    #[serde(default)]
    pub replicas: u64,

    /// AvailableReplicas is the count of replicas ready to receive
    /// invocations as reported by the faas_provider
    #[serde(rename = "availableReplicas")]
    #[serde(default)]
    pub available_replicas: u64,

    /// CreatedAt is the creation time reported by the provider, rfc3339
    #[serde(rename = "createdAt")]
    #[serde(default)]
    pub created_at: String,

    /// Usage is only present when the provider collects metrics
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<FunctionUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_status_defaults_missing_fields() {
        let status: FunctionStatus =
            serde_json::from_str(r#"{"name":"hello","replicas":2}"#).unwrap();
        assert_eq!(
            status,
            FunctionStatus {
                name: "hello".into(),
                replicas: 2,
                ..Default::default()
            }
        );
        assert!(status.usage.is_none());
    }

    #[test]
    fn test_usage_wire_names() {
        let data = r#"{
            "name":"figlet",
            "invocationCount":12,
            "availableReplicas":1,
            "usage":{"cpu":3.5,"totalMemoryBytes":1048576}
        }"#;
        let status: FunctionStatus = serde_json::from_str(data).unwrap();
        assert_eq!(status.invocation_count, 12.0);
        assert_eq!(status.available_replicas, 1);
        assert_eq!(
            status.usage,
            Some(FunctionUsage {
                cpu: 3.5,
                total_memory_bytes: 1048576.0
            })
        );
    }

    #[test]
    fn test_usage_is_omitted_when_absent() {
        let out = serde_json::to_string(&FunctionStatus::default()).unwrap();
        assert!(!out.contains("usage"));
    }
}
