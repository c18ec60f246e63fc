use serde::{Deserialize, Serialize};

/// 通過驗證的出貨請求，同時也是送往 ShipIt 的 body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    pub product_id: u64,
    pub name: String,
    pub addr: String,
    pub zip: String,
}

/// ShipIt 回傳的收據；只有 `shipId` 是必要欄位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentReceipt {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(rename = "shipId")]
    pub ship_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShipItResponse {
    pub receipt: ShipmentReceipt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentResult {
    pub shipped: u64,
}
