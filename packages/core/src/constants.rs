//! Key names, file names, and the placeholder sentinel.

/// Sentinel value marking a template key whose secret must be generated.
pub const PLACEHOLDER: &str = "CHANGE_ME";

pub const LIGHTRAG_API_KEY: &str = "LIGHTRAG_API_KEY";
pub const TOKEN_SECRET: &str = "TOKEN_SECRET";
pub const NEO4J_PASSWORD: &str = "NEO4J_PASSWORD";

/// Key overwritten by a user-supplied value, placeholder or not.
pub const LLM_BINDING_API_KEY: &str = "LLM_BINDING_API_KEY";

/// Template file checked into the deployment directory.
pub const TEMPLATE_FILE_NAME: &str = ".prod.env";

/// Generated secrets file, written next to the template by default.
pub const OUTPUT_FILE_NAME: &str = ".prod.secrets.env";

/// Overrides the directory that holds the template.
pub const DEPLOY_DIR_ENV: &str = "PROD_ENV_DIR";
