//! 構造化出力の応答スキーマ
//!
//! `response_format: { type: "json_schema", json_schema: {...} }` に載せる値。

use serde_json::{json, Value};

/// 応答を制約する JSON Schema（名前付き）
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: Value,
    /// strict: true のとき、スキーマ外のキーや欠落をプロバイダ側で拒否させる
    pub strict: bool,
}

impl ResponseSchema {
    pub fn strict(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
            strict: true,
        }
    }

    /// Chat Completions の response_format 値
    pub fn to_response_format(&self) -> Value {
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": self.name,
                "strict": self.strict,
                "schema": self.schema
            }
        })
    }
}
