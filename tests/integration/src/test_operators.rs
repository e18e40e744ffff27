//! Per-operator rendering over whole documents.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::compile;

    const COMPARATORS: [(&str, &str); 6] = [
        ("$eq", "="),
        ("$ne", "<>"),
        ("$gt", ">"),
        ("$gte", ">="),
        ("$lt", "<"),
        ("$lte", "<="),
    ];

    #[test]
    fn test_should_compile_single_key_for_every_comparator() {
        for (token, symbol) in COMPARATORS {
            let compiled = compile(&json!({ "field": { token: 1 } }));

            assert_eq!(compiled.names.len(), 1);
            assert_eq!(compiled.values.len(), 1);
            assert_eq!(compiled.names.get("#field").map(String::as_str), Some("field"));
            assert_eq!(compiled.values.get(":field_0"), Some(&json!(1)));
            assert_eq!(
                compiled.condition,
                format!("#field {symbol} :field_0"),
                "failed for token: {token}"
            );
        }
    }

    #[test]
    fn test_should_compile_multiple_keys_without_operators() {
        let compiled = compile(&json!({
            "string": "string",
            "number": 1,
            "date": "2024-06-01T12:00:00.000Z",
            "double": 1.5,
            "array": [1, 2, 3],
            "object": { "key1": "value1", "key2": "value2" }
        }));

        assert_eq!(compiled.names.len(), 6);
        assert_eq!(compiled.values.len(), 6);
        let mut names: Vec<&str> = compiled.names.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            ["#array", "#date", "#double", "#number", "#object", "#string"]
        );
        let mut values: Vec<&str> = compiled.values.keys().map(String::as_str).collect();
        values.sort_unstable();
        assert_eq!(
            values,
            [":array_0", ":date_0", ":double_0", ":number_0", ":object_0", ":string_0"]
        );
        assert_eq!(
            compiled.condition,
            "#string = :string_0 AND #number = :number_0 AND #date = :date_0 \
             AND #double = :double_0 AND #array = :array_0 AND #object = :object_0"
        );
    }

    #[test]
    fn test_should_compile_multiple_keys_for_every_comparator() {
        for (token, symbol) in COMPARATORS {
            let compiled = compile(&json!({
                "string": { token: "string" },
                "number": { token: 1 },
                "date": { token: "2024-06-01T12:00:00.000Z" },
                "double": { token: 1.5 },
                "array": { "$eq": [1, 2, 3] },
                "object": { "$eq": { "key1": "value2", "key2": "value2" } }
            }));

            assert_eq!(compiled.names.len(), 6);
            assert_eq!(compiled.values.len(), 6);
            assert_eq!(
                compiled.condition,
                format!(
                    "#string {symbol} :string_0 AND #number {symbol} :number_0 \
                     AND #date {symbol} :date_0 AND #double {symbol} :double_0 \
                     AND #array = :array_0 AND #object = :object_0"
                ),
                "failed for token: {token}"
            );
        }
    }

    #[test]
    fn test_should_bind_array_and_object_operands_whole() {
        let compiled = compile(&json!({
            "array": { "$eq": [1, 2, 3] },
            "object": { "$eq": { "key1": "value1" } }
        }));

        assert_eq!(compiled.values.get(":array_0"), Some(&json!([1, 2, 3])));
        assert_eq!(
            compiled.values.get(":object_0"),
            Some(&json!({ "key1": "value1" }))
        );
    }
}
