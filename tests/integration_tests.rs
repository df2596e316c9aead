use anyhow::Result;
use json_records::core::ConfigProvider;
use json_records::{
    CliConfig, DocumentExporter, DocumentLoader, Engine, LocalStorage, Record, RecordError,
    RecordPipeline, RecordStore, TomlConfig,
};
use tempfile::TempDir;

const SAMPLE: &str = r#"{
  "data": [
    {"id": 1, "name": "widget", "value": 12},
    {"id": 2, "name": "gadget", "value": 4.5},
    {"id": 3, "name": "Widget", "value": 30},
    {"id": 4, "name": "gadget", "value": 10},
    {"id": 5, "name": "bolt", "value": -1}
  ]
}"#;

fn temp_storage() -> Result<(TempDir, LocalStorage)> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    Ok((temp_dir, storage))
}

fn cli_config(output_dir: &str, min_value: f64) -> CliConfig {
    CliConfig {
        input: "data.json".to_string(),
        output_dir: output_dir.to_string(),
        min_value,
        filtered_file: "filteredData.json".to_string(),
        sorted_file: "sortedData.json".to_string(),
        grouped_file: "groupedData.json".to_string(),
        pretty: false,
        verbose: false,
        json_logs: false,
    }
}

#[tokio::test]
async fn test_end_to_end_with_local_storage() -> Result<()> {
    let (temp_dir, storage) = temp_storage()?;
    std::fs::write(temp_dir.path().join("data.json"), SAMPLE)?;

    let pipeline = RecordPipeline::new(storage, cli_config("out", 10.0));
    let report = Engine::new(pipeline).run().await?;

    assert_eq!(report.loaded_records, 5);
    assert_eq!(report.filtered_records, 3);
    assert_eq!(report.group_count, 4);
    assert_eq!(report.statistics.min, Some(-1.0));
    assert_eq!(report.statistics.max, Some(30.0));
    assert_eq!(report.output_paths.len(), 3);

    let out_dir = temp_dir.path().join("out");
    let filtered = std::fs::read_to_string(out_dir.join("filteredData.json"))?;
    assert_eq!(
        filtered,
        r#"{"data":[{"id":1,"name":"widget","value":12.0},{"id":3,"name":"Widget","value":30.0},{"id":4,"name":"gadget","value":10.0}]}"#
    );

    let sorted = std::fs::read_to_string(out_dir.join("sortedData.json"))?;
    let sorted: serde_json::Value = serde_json::from_str(&sorted)?;
    let names: Vec<&str> = sorted["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["bolt", "gadget", "gadget", "widget", "Widget"]);

    // 分組鍵依排序後首次出現的順序寫出
    let grouped = std::fs::read_to_string(out_dir.join("groupedData.json"))?;
    let bolt = grouped.find("\"bolt\"").unwrap();
    let gadget = grouped.find("\"gadget\":").unwrap();
    let widget = grouped.find("\"widget\":").unwrap();
    let upper_widget = grouped.find("\"Widget\":").unwrap();
    assert!(bolt < gadget && gadget < widget && widget < upper_widget);

    Ok(())
}

#[tokio::test]
async fn test_export_overwrites_existing_file() -> Result<()> {
    let (temp_dir, storage) = temp_storage()?;
    std::fs::write(temp_dir.path().join("out.json"), "stale content that is longer")?;

    let exporter = DocumentExporter::new(storage, false);
    exporter
        .export("out.json", [Record::new(1, "a", 1.0)].as_slice())
        .await?;

    let written = std::fs::read_to_string(temp_dir.path().join("out.json"))?;
    assert_eq!(written, r#"{"data":[{"id":1,"name":"a","value":1.0}]}"#);
    Ok(())
}

#[tokio::test]
async fn test_round_trip_of_filtered_records() -> Result<()> {
    let (temp_dir, storage) = temp_storage()?;
    std::fs::write(temp_dir.path().join("data.json"), SAMPLE)?;

    let loader = DocumentLoader::new(storage.clone());
    let exporter = DocumentExporter::new(storage, true);

    let mut store = RecordStore::new();
    loader.load_into(&mut store, "data.json").await?;
    let filtered = store.filter_by_value(0.0);
    exporter.export("filtered.json", filtered.as_slice()).await?;

    let mut reloaded = RecordStore::new();
    let count = loader.load_into(&mut reloaded, "filtered.json").await?;

    assert_eq!(count, 4);
    assert_eq!(reloaded.records(), filtered.as_slice());
    Ok(())
}

#[tokio::test]
async fn test_malformed_inputs_are_rejected() -> Result<()> {
    let (temp_dir, storage) = temp_storage()?;
    let cases = [
        ("not_json.json", "{ data: oops"),
        ("no_data.json", r#"{"records": []}"#),
        ("bad_type.json", r#"{"data": [{"id": 1, "name": "a", "value": "high"}]}"#),
        ("missing_field.json", r#"{"data": [{"id": 1, "value": 3}]}"#),
    ];
    for (file, content) in cases {
        std::fs::write(temp_dir.path().join(file), content)?;
    }

    let loader = DocumentLoader::new(storage);
    let mut store = RecordStore::from_records(vec![Record::new(42, "keep", 1.0)]);

    for (file, _) in cases {
        let err = loader.load_into(&mut store, file).await.unwrap_err();
        assert!(
            matches!(err, RecordError::MalformedInput { .. }),
            "{} produced {:?}",
            file,
            err
        );
    }
    let missing = loader.load_into(&mut store, "absent.json").await.unwrap_err();
    assert!(matches!(missing, RecordError::MalformedInput { .. }));

    assert_eq!(store.records(), &[Record::new(42, "keep", 1.0)]);
    Ok(())
}

#[tokio::test]
async fn test_empty_input_still_exports() -> Result<()> {
    let (temp_dir, storage) = temp_storage()?;
    std::fs::write(temp_dir.path().join("data.json"), r#"{"data": []}"#)?;

    let pipeline = RecordPipeline::new(storage, cli_config(".", 10.0));
    let report = Engine::new(pipeline).run().await?;

    assert_eq!(report.loaded_records, 0);
    assert_eq!(report.statistics.average, 0.0);
    assert_eq!(report.statistics.min, None);

    let grouped = std::fs::read_to_string(temp_dir.path().join("groupedData.json"))?;
    assert_eq!(grouped, r#"{"data":{}}"#);
    Ok(())
}

#[tokio::test]
async fn test_toml_config_drives_pipeline() -> Result<()> {
    let (temp_dir, storage) = temp_storage()?;
    std::fs::write(temp_dir.path().join("data.json"), SAMPLE)?;

    let config = TomlConfig::from_toml_str(
        r#"
[job]
name = "toml-driven"

[input]
path = "data.json"

[query]
min_value = 20

[output]
directory = "reports"

[output.filenames]
filtered = "high.json"
"#,
    )?;
    assert_eq!(config.min_value(), 20.0);

    let report = Engine::new(RecordPipeline::new(storage, config)).run().await?;
    assert_eq!(report.filtered_records, 1);

    let high = std::fs::read_to_string(temp_dir.path().join("reports").join("high.json"))?;
    assert!(high.contains("\"id\":3"));
    assert!(temp_dir.path().join("reports").join("sortedData.json").exists());
    Ok(())
}
