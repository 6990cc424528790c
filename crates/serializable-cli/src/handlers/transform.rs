//! Fetch, save and aliases command handlers

use super::utils::{load_document, save_document, Harness};
use crate::cli::{AliasesArgs, FetchArgs, SaveArgs};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use serde_json::Value;
use serializable_core::RecordType;
use std::path::Path;

/// Handle the fetch command
pub fn handle_fetch(args: FetchArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("fetch");
    output.info(&format!("Decoding fields in {}", args.document.display()))?;

    let harness = Harness::load(&args.model, config)?;
    let model = harness.model(&args.model.model)?;
    let mut results = load_document(&args.document)?;

    harness.behavior.after_fetch(model, &mut results)?;

    emit(&results, args.output_file.as_deref(), output)
}

/// Handle the save command
pub fn handle_save(args: SaveArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("save");
    output.info(&format!("Encoding fields in {}", args.document.display()))?;

    let harness = Harness::load(&args.model, config)?;
    let model = harness.model(&args.model.model)?;
    let mut data = load_document(&args.document)?;

    if !harness.behavior.before_save(model, &mut data)? {
        tracing::warn!(model = model.alias(), "Save aborted by before_save");
        return Ok(());
    }

    if args.restore {
        harness.behavior.after_save(model, args.created, &mut data)?;
    }

    emit(&data, args.output_file.as_deref(), output)
}

/// Handle the aliases command
pub fn handle_aliases(args: AliasesArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let harness = Harness::load(&args.model, config)?;
    let model = harness.model(&args.model.model)?;
    let aliases = harness.behavior.aliases(model)?;
    let settings = harness.behavior.settings(model.alias())?;

    tracing::info!(
        model = model.alias(),
        fields = ?settings.fields(),
        encoder = settings.encoder_label(),
        decoder = settings.decoder_label(),
        "Resolved settings"
    );

    output.list(&format!("Aliases searched for '{}'", model.alias()), &aliases)
}

fn emit(value: &Value, output_file: Option<&Path>, output: &mut OutputWriter) -> Result<()> {
    match output_file {
        Some(path) => {
            save_document(path, value)?;
            output.success(&format!("Wrote {}", path.display()))
        }
        None => output.data(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ModelArgs, OutputFormat};
    use crate::error::Error;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SCHEMA: &str = r#"
models:
  - name: Category
    associations:
      hasMany:
        - alias: Children
          className: Category
    serializable:
      fields: [data]
"#;

    struct Fixture {
        dir: TempDir,
        schema: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let schema = dir.path().join("schema.yaml");
            fs::write(&schema, SCHEMA).unwrap();
            Self { dir, schema }
        }

        fn document(&self, name: &str, value: &Value) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
            path
        }

        fn model_args(&self, model: &str) -> ModelArgs {
            ModelArgs {
                schema: self.schema.clone(),
                model: model.to_string(),
            }
        }

        fn out(&self) -> PathBuf {
            self.dir.path().join("out.json")
        }
    }

    fn silent() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Json, false, true, Box::new(std::io::sink()))
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_fetch_decodes_tree() {
        let fixture = Fixture::new();
        let document = fixture.document(
            "results.json",
            &json!([{"Category": {"data": "[1]"}, "Children": [{"data": "{\"a\":2}"}]}]),
        );

        let args = FetchArgs {
            document,
            model: fixture.model_args("Category"),
            output_file: Some(fixture.out()),
        };
        handle_fetch(args, &Config::default(), &mut silent()).unwrap();

        assert_eq!(
            read(&fixture.out()),
            json!([{"Category": {"data": [1]}, "Children": [{"data": {"a": 2}}]}])
        );
    }

    #[test]
    fn test_save_encodes_and_restores() {
        let fixture = Fixture::new();
        let data = json!({"Category": {"data": {"x": [1, 2]}}});
        let document = fixture.document("data.json", &data);

        let args = SaveArgs {
            document: document.clone(),
            model: fixture.model_args("Category"),
            restore: false,
            created: false,
            output_file: Some(fixture.out()),
        };
        handle_save(args, &Config::default(), &mut silent()).unwrap();
        assert_eq!(
            read(&fixture.out()),
            json!({"Category": {"data": "{\"x\":[1,2]}"}})
        );

        let args = SaveArgs {
            document,
            model: fixture.model_args("Category"),
            restore: true,
            created: true,
            output_file: Some(fixture.out()),
        };
        handle_save(args, &Config::default(), &mut silent()).unwrap();
        assert_eq!(read(&fixture.out()), data);
    }

    #[test]
    fn test_unknown_model() {
        let fixture = Fixture::new();
        let args = AliasesArgs {
            model: fixture.model_args("Ghost"),
        };

        let result = handle_aliases(args, &Config::default(), &mut silent());
        assert!(matches!(result, Err(Error::Core(_))));
    }

    #[test]
    fn test_aliases() {
        let fixture = Fixture::new();
        let args = AliasesArgs {
            model: fixture.model_args("Category"),
        };

        handle_aliases(args, &Config::default(), &mut silent()).unwrap();
    }
}
