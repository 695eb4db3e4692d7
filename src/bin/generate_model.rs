use serde_json::json;

/// Writes a deterministic sample model artifact plus a small batch CSV so the
/// app can be exercised without external files.
fn main() {
    let model = json!({
        "classes": ["<=50K", ">50K"],
        "intercept": -4.2,
        "age_weight": 0.035,
        "hours_weight": 0.04,
        "education_weights": {
            "Bachelors": 0.9,
            "Masters": 1.3,
            "PhD": 1.7,
            "HS-grad": 0.1,
            "Assoc": 0.4,
            "Some-college": 0.3
        },
        "occupation_weights": {
            "Tech-support": 0.5,
            "Craft-repair": 0.2,
            "Other-service": -0.4,
            "Sales": 0.4,
            "Exec-managerial": 1.1,
            "Prof-specialty": 1.0,
            "Handlers-cleaners": -0.3,
            "Machine-op-inspct": 0.0,
            "Adm-clerical": 0.1,
            "Farming-fishing": -0.2,
            "Transport-moving": 0.1,
            "Priv-house-serv": -0.6,
            "Protective-serv": 0.3,
            "Armed-Forces": 0.0
        }
    });

    let model_path = "salary_model.json";
    let text = serde_json::to_string_pretty(&model).expect("Failed to serialize model");
    std::fs::write(model_path, text).expect("Failed to write model artifact");
    println!("Wrote model artifact to {model_path}");

    // A batch file with an extra column, a sentinel row, and an empty cell,
    // so the cleaning path is visible in the UI.
    let batch_path = "sample_batch.csv";
    let mut writer = csv::Writer::from_path(batch_path).expect("Failed to create batch CSV");
    writer
        .write_record(["employee", "age", "education", "occupation", "hours-per-week"])
        .expect("Failed to write header");
    let rows = [
        ["E-001", "30", "Bachelors", "Sales", "40"],
        ["E-002", "?", "PhD", "Prof-specialty", "45"],
        ["E-003", "52", "Masters", "Exec-managerial", "60"],
        ["E-004", "24", "", "Adm-clerical", "35"],
        ["E-005", "41", "HS-grad", "Craft-repair", "48"],
    ];
    for row in rows {
        writer.write_record(row).expect("Failed to write batch row");
    }
    writer.flush().expect("Failed to flush batch CSV");
    println!("Wrote {} sample rows to {batch_path}", rows.len());
}
