use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "input.json";
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// How an entry is assigned to one of the twelve month slots of its series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum SlotMatching {
    #[schemars(
        description = "Slots carry the day and time of the first entry. An entry lands in a slot only when its timestamp is identical to the slot's."
    )]
    #[default]
    Exact,

    #[schemars(
        description = "Slots are midnight UTC on the 1st of each month. An entry lands in the slot for its (year, month), whatever its day and time."
    )]
    CalendarMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BuilderConfig {
    pub slot_matching: SlotMatching,

    #[schemars(description = "Indent the output document with two spaces. Compact JSON when false.")]
    pub pretty_output: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            slot_matching: SlotMatching::Exact,
            pretty_output: true,
        }
    }
}

impl BuilderConfig {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(BuilderConfig)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// Everything the command line wrapper needs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub builder: BuilderConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            builder: BuilderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.input_path, PathBuf::from("input.json"));
        assert_eq!(config.output_path, PathBuf::from("output.json"));
        assert_eq!(config.builder.slot_matching, SlotMatching::Exact);
        assert!(config.builder.pretty_output);
    }

    #[test]
    fn test_builder_schema_generation() {
        let schema_json = BuilderConfig::schema_as_json().unwrap();
        assert!(schema_json.contains("slot_matching"));
        assert!(schema_json.contains("CalendarMonth"));
        assert!(schema_json.contains("Indent the output document"));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: BuilderConfig =
            serde_json::from_str(r#"{"slot_matching": "CalendarMonth"}"#).unwrap();
        assert_eq!(config.slot_matching, SlotMatching::CalendarMonth);
        assert!(config.pretty_output);
    }
}
