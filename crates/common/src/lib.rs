//! Shared pieces used by every crate in the workspace: logging setup and
//! small response types that are not tied to a domain entity.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_response_serializes_single_field() {
        let m = types::MessageResponse::new("Deletion of city with ID=4 was successful.");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Deletion of city with ID=4 was successful."}));
    }
}
