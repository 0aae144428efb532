use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::{self, Environment, Variable};
use crate::error::MakeRuntimeConfigurationError;

/// A value that is either written into the configuration or read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    FromEnvironment { variable: Variable },
}

impl Secret {
    pub fn from_environment(variable: impl Into<Variable>) -> Self {
        Secret::FromEnvironment {
            variable: variable.into(),
        }
    }

    /// The value of the secret. `node` names where it appears in the configuration.
    pub fn resolve(
        &self,
        environment: &impl Environment,
        node: &str,
    ) -> Result<String, MakeRuntimeConfigurationError> {
        match self {
            Secret::Plain(value) => Ok(value.clone()),
            Secret::FromEnvironment { variable } => {
                environment.read(variable).map_err(|err| match err {
                    environment::Error::VariableNotPresent(variable) => {
                        MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                            variable,
                            node: node.to_string(),
                        }
                    }
                    environment::Error::VariableIsNotUnicode(variable) => {
                        MakeRuntimeConfigurationError::InvalidEnvironmentVariable {
                            variable,
                            node: node.to_string(),
                        }
                    }
                })
            }
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
