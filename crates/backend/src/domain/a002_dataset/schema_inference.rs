use contracts::domain::a002_dataset::aggregate::ColumnSchema;

/// Header substrings that flag a column as sensitive. A heuristic, not a
/// real classifier.
const SENSITIVE_MARKERS: &[&str] = &["id", "name", "phone"];

/// Schema derived from the header row of an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct InferredSchema {
    pub columns: Vec<ColumnSchema>,
    pub row_count: i64,
}

/// Derive a naive schema from delimited text.
///
/// Line 0 is the header row, comma-split and trimmed; every column gets
/// type "string". Row count is the number of non-blank lines minus the
/// header. Column-count consistency, quoting and embedded delimiters are
/// deliberately not validated.
pub fn infer_schema(text: &str) -> Result<InferredSchema, String> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or_else(|| "File is empty".to_string())?;

    let columns: Vec<ColumnSchema> = header
        .split(',')
        .map(|h| {
            let name = h.trim().to_string();
            let sensitive = is_sensitive(&name);
            ColumnSchema {
                name,
                column_type: "string".to_string(),
                sensitive,
            }
        })
        .collect();

    if columns.iter().all(|c| c.name.is_empty()) {
        return Err("Header row contains no column names".to_string());
    }

    let row_count = lines.count() as i64;

    Ok(InferredSchema { columns, row_count })
}

fn is_sensitive(header: &str) -> bool {
    let lower = header.to_lowercase();
    SENSITIVE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Predefined template schemas (no file is read for these).
pub const TEMPLATE_ROW_COUNT: i64 = 1000;

pub fn template_schema(template: &str) -> Option<Vec<ColumnSchema>> {
    let columns: &[(&str, bool)] = match template {
        "customer" => &[
            ("customer_id", true),
            ("full_name", true),
            ("email", false),
            ("phone", true),
            ("age", false),
            ("account_balance", false),
        ],
        "transactions" => &[
            ("transaction_id", true),
            ("customer_id", true),
            ("amount", false),
            ("currency", false),
            ("timestamp", false),
        ],
        _ => return None,
    };

    Some(
        columns
            .iter()
            .map(|(name, sensitive)| ColumnSchema {
                name: (*name).to_string(),
                column_type: "string".to_string(),
                sensitive: *sensitive,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_column_flagged_sensitive() {
        let schema = infer_schema("a,b,id\n1,2,3\n").unwrap();
        let flags: Vec<bool> = schema.columns.iter().map(|c| c.sensitive).collect();
        assert_eq!(flags, vec![false, false, true]);
        assert_eq!(schema.columns[2].name, "id");
        assert_eq!(schema.columns[0].column_type, "string");
    }

    #[test]
    fn test_row_count_excludes_header_and_blanks() {
        let text = "a,b\n1,2\n\n3,4\n   \n5,6\n";
        let schema = infer_schema(text).unwrap();
        assert_eq!(schema.row_count, 3);
    }

    #[test]
    fn test_headers_are_trimmed() {
        let schema = infer_schema(" customer_id , amount , phone \nx,y,z\n").unwrap();
        let names: Vec<&str> = schema.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["customer_id", "amount", "phone"]);
        let flags: Vec<bool> = schema.columns.iter().map(|c| c.sensitive).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(infer_schema("").is_err());
        assert!(infer_schema("\n  \n").is_err());
    }

    #[test]
    fn test_scenario_101_data_lines() {
        let mut text = String::from("customer_id,amount,phone\n");
        for i in 0..101 {
            text.push_str(&format!("{},100,555-000{}\n", i, i));
        }
        let schema = infer_schema(&text).unwrap();
        assert_eq!(schema.row_count, 101);
        let flags: Vec<bool> = schema.columns.iter().map(|c| c.sensitive).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_template_customer() {
        let columns = template_schema("customer").unwrap();
        assert_eq!(columns.len(), 6);
        assert!(columns.iter().any(|c| c.name == "phone" && c.sensitive));
        assert!(template_schema("nope").is_none());
    }
}
