use super::EnumCodec;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: EnumCodec,
    S: Serializer,
{
    serializer.serialize_str(value.description())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: EnumCodec,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    T::find_by_description(&text)
        .or_else(|| T::try_from_name(&text, None))
        .ok_or_else(|| {
            de::Error::custom(format!(
                "'{}' matches no description or name of {}",
                text,
                T::TYPE_NAME
            ))
        })
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    crate::described_enum! {
        enum Level {
            Low => "low priority",
            High => "high priority",
        }
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Task {
        #[serde(with = "crate::codec::serde_description")]
        level: Level,
    }

    #[test]
    fn test_serializes_description() {
        let json = serde_json::to_string(&Task { level: Level::High }).unwrap();
        assert_eq!(json, r#"{"level":"high priority"}"#);
    }

    #[test]
    fn test_deserializes_description_or_name() {
        let task: Task = serde_json::from_str(r#"{"level":"low priority"}"#).unwrap();
        assert_eq!(task.level, Level::Low);

        let task: Task = serde_json::from_str(r#"{"level":"HIGH"}"#).unwrap();
        assert_eq!(task.level, Level::High);
    }

    #[test]
    fn test_rejects_unknown_text() {
        let result: Result<Task, _> = serde_json::from_str(r#"{"level":"urgent"}"#);
        assert!(result.is_err());
    }
}
