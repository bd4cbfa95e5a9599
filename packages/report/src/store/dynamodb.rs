use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::{Client, types::AttributeValue};

use super::OrderTable;
use crate::error::{ReportError, Result};
use crate::record::{OrderRecord, RawAmount};

const AMOUNT_ATTRIBUTE: &str = "amount";

pub struct DynamoDbOrderTable {
    client: Client,
}

impl std::fmt::Debug for DynamoDbOrderTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamoDbOrderTable").finish()
    }
}

impl DynamoDbOrderTable {
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(aws_config),
        }
    }
}

#[async_trait]
impl OrderTable for DynamoDbOrderTable {
    async fn scan_orders(&self, table: &str) -> Result<Vec<OrderRecord>> {
        let output = self
            .client
            .scan()
            .table_name(table)
            .send()
            .await
            .map_err(|e| ReportError::Table(format!("Scan of {table} failed: {e}")))?;

        if output.last_evaluated_key().is_some() {
            tracing::warn!(
                table,
                "Scan returned a partial result set; only the first page is reported"
            );
        }

        Ok(output.items().iter().map(item_to_record).collect())
    }
}

fn item_to_record(item: &HashMap<String, AttributeValue>) -> OrderRecord {
    OrderRecord::new(item.get(AMOUNT_ATTRIBUTE).map(attribute_to_amount))
}

fn attribute_to_amount(value: &AttributeValue) -> RawAmount {
    match value {
        AttributeValue::N(n) => RawAmount::Number(n.clone()),
        AttributeValue::S(s) => RawAmount::Text(s.clone()),
        AttributeValue::Bool(_) => RawAmount::Unsupported("BOOL".into()),
        AttributeValue::Null(_) => RawAmount::Unsupported("NULL".into()),
        AttributeValue::B(_) => RawAmount::Unsupported("B".into()),
        AttributeValue::L(_) => RawAmount::Unsupported("L".into()),
        AttributeValue::M(_) => RawAmount::Unsupported("M".into()),
        AttributeValue::Ns(_) => RawAmount::Unsupported("NS".into()),
        AttributeValue::Ss(_) => RawAmount::Unsupported("SS".into()),
        AttributeValue::Bs(_) => RawAmount::Unsupported("BS".into()),
        _ => RawAmount::Unsupported("UNKNOWN".into()),
    }
}
