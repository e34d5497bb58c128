#[macro_export]
macro_rules! jval {
    // Handle null
    (null) => {
        $crate::JsonValue::Null
    };

    // Handle true
    (true) => {
        $crate::JsonValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsonValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsonValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonValue::Array(vec![$($crate::jval!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::JsonValue::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::jval!($value));
        )*
        $crate::JsonValue::Object(object)
    }};

    // Fallback for any other expression, via serde
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::JsonValue::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonMap, JsonValue, Number};

    #[test]
    fn jval_macro_primitives() {
        assert_eq!(jval!(null), JsonValue::Null);
        assert_eq!(jval!(true), JsonValue::Bool(true));
        assert_eq!(jval!(false), JsonValue::Bool(false));
        assert_eq!(jval!(42), JsonValue::Number(Number::Integer(42)));
        assert_eq!(jval!(3.5), JsonValue::Number(Number::Float(3.5)));
        assert_eq!(jval!("hello"), JsonValue::String("hello".to_string()));
    }

    #[test]
    fn jval_macro_arrays() {
        assert_eq!(jval!([]), JsonValue::Array(vec![]));

        let arr = jval!([1, "two", null]);
        match arr {
            JsonValue::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], JsonValue::Number(Number::Integer(1)));
                assert_eq!(vec[1], JsonValue::String("two".to_string()));
                assert_eq!(vec[2], JsonValue::Null);
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn jval_macro_objects() {
        assert_eq!(jval!({}), JsonValue::Object(JsonMap::new()));

        let obj = jval!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            JsonValue::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&JsonValue::String("Alice".to_string()))
                );
                assert_eq!(map.get("age"), Some(&JsonValue::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn jval_macro_nests() {
        let value = jval!({
            "items": [1, {"inner": true}],
            "empty": {}
        });
        assert_eq!(value.depth(), 3);
        assert_eq!(value.key_count(), 3);
    }
}
