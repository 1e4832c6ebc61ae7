use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn hello_world() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}
