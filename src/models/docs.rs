use serde::Deserialize;

/// Which backend's documentation to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTarget {
    Service,
    Factory,
}

/// One documented endpoint from `GET /api/docs`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDoc {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}

/// API self-documentation payload
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoints {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<EndpointDoc>,
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoints_deserialization() {
        let docs: Endpoints = serde_json::from_value(json!({
            "version": "20240518.154317",
            "endpoints": [
                {
                    "method": "PUT",
                    "path": "/api/auth",
                    "description": "Login existing user",
                    "requiresAuth": false,
                    "example": "curl -X PUT localhost:3000/api/auth",
                    "response": { "user": {}, "token": "tttttt" }
                },
                { "method": "GET", "path": "/api/order/menu" }
            ],
            "config": { "factory": "https://pizza-factory.cs329.click" }
        }))
        .unwrap();

        assert_eq!(docs.endpoints.len(), 2);
        assert_eq!(docs.endpoints[0].method, "PUT");
        assert!(!docs.endpoints[1].requires_auth);
    }
}
