use recipe_query::{load_config, run_report, AppConfig, Criterion, RecipeQueryError, ReportQuery};
use std::fs;
use std::path::Path;

const RECIPES: &str = r#"{
    "https://www.eatingwell.com/recipe/kale-pear": {
        "Title": "Kale-Pear Smoothie",
        "Total_Time_Raw": "PT5M",
        "Ingredients": ["1 cup kale", "1 pear", "1 cup milk"]
    },
    "https://www.eatingwell.com/recipe/salmon": {
        "Title": "Lemon-Garlic Salmon",
        "Total_Time_Raw": "PT20M",
        "Ingredients": ["4 salmon fillets", "1 lemon"]
    },
    "https://www.eatingwell.com/recipe/chickpea": {
        "Title": "Crispy Chickpea Wrap",
        "Total_Time_Raw": "PT10M",
        "Ingredients": ["1 can chickpeas", "2 whole-wheat wraps"]
    }
}"#;

#[test]
fn test_default_report_sections() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("recipes.json");
    fs::write(&data_path, RECIPES).unwrap();

    let config = AppConfig {
        data_path,
        ..AppConfig::default()
    };
    let report = run_report(&config).unwrap();

    assert!(report.starts_with("--- Loaded 3 recipes ---"));
    assert!(report.contains("[Total time distribution (raw)]"));
    assert!(report.contains("[Recipes containing 'salmon'] 1 recipes"));
    assert!(report.contains("[Recipes containing both 'kale' and 'pear'] 1 recipes"));
    assert!(report.contains("[Quick smoothies (5 or 10 minutes)] 1 recipes"));
    assert!(report.contains("[Recipes containing 'chickpea'] 1 recipes"));

    // The chickpea preview shows the cleaned time
    let chickpea = report.split("[Recipes containing 'chickpea']").nth(1).unwrap();
    assert!(chickpea.contains("TotalTimeClean"));
    assert!(chickpea.contains("10M"));
}

#[test]
fn test_report_respects_limit() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("recipes.json");
    fs::write(&data_path, RECIPES).unwrap();

    let config = AppConfig {
        data_path,
        preview_rows: 1,
        queries: vec![ReportQuery::Filter {
            label: "Single units".to_string(),
            criteria: vec![Criterion::IngredientContains {
                keyword: "1".to_string(),
            }],
            columns: vec!["OriginalURL".to_string()],
            limit: None,
            show_all: false,
        }],
    };

    let report = run_report(&config).unwrap();
    assert!(report.contains("[Single units] 3 recipes"));
    assert!(report.contains("... 2 more"));
}

#[test]
fn test_report_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        data_path: dir.path().join("missing.json"),
        ..AppConfig::default()
    };

    assert!(matches!(
        run_report(&config),
        Err(RecipeQueryError::NotFoundError { .. })
    ));
}

#[test]
fn test_example_config_runs_on_bundled_data() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut config = load_config(Some(root.join("recipe-query.example.toml").as_path())).unwrap();
    config.data_path = root.join(&config.data_path);

    assert_eq!(config.queries.len(), 4);
    let report = run_report(&config).unwrap();
    assert!(report.contains("[Total time distribution (clean)]"));
    assert!(report.contains("[Quick salmon dinners] 1 recipes"));
    assert!(report.contains("[Kale and pear] 2 recipes"));
    assert!(report.contains("[Every smoothie] 3 recipes"));
}

#[test]
fn test_default_report_prints_every_kale_pear_match() {
    let records: Vec<String> = (0..7)
        .map(|i| {
            format!(
                r#""http://r/{i}": {{"Title": "R{i}", "Total_Time_Raw": "PT5M", "Ingredients": ["kale", "pear"]}}"#
            )
        })
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("recipes.json");
    fs::write(&data_path, format!("{{{}}}", records.join(","))).unwrap();

    let config = AppConfig {
        data_path,
        ..AppConfig::default()
    };
    let report = run_report(&config).unwrap();

    let kale = report
        .split("[Recipes containing both 'kale' and 'pear']")
        .nth(1)
        .unwrap()
        .split("\n[")
        .next()
        .unwrap();
    assert!(kale.starts_with(" 7 recipes"));
    for i in 0..7 {
        assert!(kale.contains(&format!("http://r/{i}")), "row {i} missing");
    }
    assert!(!kale.contains("more"));

    // The load summary still stops at preview_rows
    let summary = report.split("\n[").next().unwrap();
    assert!(summary.contains("... 2 more"));
}
