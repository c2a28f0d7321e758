use garde::Validate;
use serde::Deserialize;

// POST /events/{id}/register のボディ。イベント ID はパスから取る
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[garde(length(min = 1))]
    pub username: String,
}
