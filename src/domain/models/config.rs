//! Configuration file shape

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;

/// Root of the configuration file
///
/// Every section defaults to empty when absent, and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Virtualization infrastructure settings (`ecs` section)
    #[serde(default)]
    pub ecs: VirtualizationConfig,

    /// Process logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// Connection settings for the hypervisor manager and the network
/// virtualization controller, plus the controller/VM bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualizationConfig {
    /// vCenter credentials
    #[serde(rename = "vcenter", default)]
    pub hypervisor: EndpointCredentials,

    /// NSX-T manager credentials
    #[serde(rename = "nsxt", default)]
    pub network_controller: EndpointCredentials,

    /// Controller to VM bindings, in file order
    #[serde(default)]
    pub controllers: Vec<ControllerMapping>,
}

impl VirtualizationConfig {
    /// First controller mapping with the given name, if any.
    pub fn controller(&self, name: &str) -> Option<&ControllerMapping> {
        self.controllers.iter().find(|c| c.name == name)
    }
}

/// Hostname and login for a management endpoint.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointCredentials {
    /// Management endpoint host name or address
    #[serde(default, deserialize_with = "lenient_string")]
    pub hostname: String,

    /// Login user
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,

    /// Login password
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
}

// Passwords stay out of debug output.
impl fmt::Debug for EndpointCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointCredentials")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Binding between a logical controller and the VM that runs it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerMapping {
    /// Logical controller name
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Address the controller's task definition is expected at
    #[serde(
        rename = "desiredAddress",
        alias = "taskDefinitionAddress",
        default,
        deserialize_with = "lenient_string"
    )]
    pub task_definition_address: String,

    /// Name of the VM running the controller
    #[serde(rename = "vmName", default, deserialize_with = "lenient_string")]
    pub vm_name: String,
}

/// Reads any scalar as text.
///
/// YAML and environment values such as `12345` or `true` arrive typed; they
/// are kept as their textual form. Null reads as an empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl Visitor<'_> for LenientString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientString)
}
