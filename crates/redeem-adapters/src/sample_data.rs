//! Built-in sample catalog and inventory.
//!
//! Used when no data path is configured, so the CLI works out of the box.
//! Only user 1 holds tokens.

use redeem_core::{
    domain::{Course, Token, UserId},
    error::{RedeemError, RedeemResult},
};

use crate::data_loader::Dataset;

/// The sample dataset, in the same record format the loader reads.
pub const SAMPLE_TOML: &str = r#"
[[courses]]
id = 1
category = "programming"
cost = 75

[[courses]]
id = 2
category = "programming"
cost = 100

[[courses]]
id = 3
category = "design"
cost = 150

[[courses]]
id = 4
category = "business"
cost = 200

[[courses]]
id = 5
category = "marketing"
cost = 125

[[tokens]]
id = 1
user = 1
value = 100
category = "PREMIUM"
courses = [1, 2, 3]

[[tokens]]
id = 2
user = 1
value = 50
category = "BASIC"
categories = ["programming", "design"]

[[tokens]]
id = 3
user = 1
value = 200
category = "VIP"
universal = true

[[tokens]]
id = 4
user = 1
value = 75
category = "STANDARD"
courses = [4, 5]

[[tokens]]
id = 5
user = 1
value = 150
category = "PREMIUM"
categories = ["business", "marketing"]
"#;

/// Parse the sample dataset.
pub fn dataset() -> RedeemResult<Dataset> {
    Dataset::from_toml_str(SAMPLE_TOML).map_err(|e| RedeemError::Internal {
        message: format!("built-in sample data is invalid: {e}"),
    })
}

/// Sample courses, in id order.
pub fn courses() -> RedeemResult<Vec<Course>> {
    Ok(dataset()?.courses)
}

/// Sample `(owner, token)` holdings, in grant order.
pub fn holdings() -> RedeemResult<Vec<(UserId, Token)>> {
    Ok(dataset()?.holdings)
}
