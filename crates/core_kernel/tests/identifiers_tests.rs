//! Unit tests for the Identifiers module

use core_kernel::OrderId;
use uuid::Uuid;

mod order_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = OrderId::new();
        let id2 = OrderId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_ids_are_time_ordered() {
        let id1 = OrderId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = OrderId::new();
        assert!(id1 < id2);
        assert_eq!(id1.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = OrderId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(OrderId::from(uuid), id);
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = OrderId::new();
        let parsed: OrderId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("ORD-not-a-uuid".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = OrderId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
